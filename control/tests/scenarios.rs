use proptest::prelude::*;
use serial_test::serial;

use radio_music_control::reset;
use radio_music_control::{
    Board, ButtonTimings, Changes, Interface, PinDirection, PlayState, Settings, Snapshot,
};

#[derive(Default)]
struct Board13Bit {
    reset_handler: Option<fn()>,
}

impl Board for Board13Bit {
    fn set_adc_resolution(&mut self, bits: u8) {
        assert_eq!(bits, 13);
    }

    fn set_reset_cv_direction(&mut self, _direction: PinDirection) {}

    fn attach_reset_cv_interrupt(&mut self, handler: fn()) {
        self.reset_handler = Some(handler);
    }

    fn configure_reset_button(&mut self) {}
}

struct Rig<'a> {
    board: Board13Bit,
    interface: Interface<'a>,
    snapshot: Snapshot,
}

impl<'a> Rig<'a> {
    fn new(settings: &Settings, play_state: &'a PlayState) -> Self {
        reset::reset_cv().take();
        let mut board = Board13Bit::default();
        let timings = ButtonTimings::default();
        let interface = Interface::init(&mut board, 8, settings, timings, play_state);
        Self {
            board,
            interface,
            snapshot: Snapshot::default(),
        }
    }

    fn tick(&mut self) -> Changes {
        let changes = self.interface.update(self.snapshot);
        self.snapshot.now += 1;
        changes
    }

    // Run ticks for `duration` ms, returning time and changes of each.
    fn run(&mut self, duration: u32) -> Vec<(u32, Changes)> {
        (0..duration)
            .map(|_| {
                let now = self.snapshot.now;
                (now, self.tick())
            })
            .collect()
    }

    fn trigger_reset_cv(&self) {
        let handler = self.board.reset_handler.expect("reset interrupt not attached");
        handler();
    }
}

fn ticks_with(log: &[(u32, Changes)], flag: Changes) -> Vec<u32> {
    log.iter()
        .filter(|(_, changes)| changes.contains(flag))
        .map(|(now, _)| *now)
        .collect()
}

#[test]
#[serial]
fn channel_step_with_immediate_switching() {
    let play_state = PlayState::new(0);
    let settings = Settings {
        chan_cv_immediate: true,
        ..Settings::default()
    };
    let mut rig = Rig::new(&settings, &play_state);

    rig.snapshot.channel_cv = 4096;
    let changes = rig.tick();

    assert!(changes.contains(Changes::CHANNEL_CHANGED));
    assert_eq!(play_state.next_channel(), 4);
    assert!(play_state.channel_changed());
}

#[test]
#[serial]
fn channel_step_waits_for_loop_point_unless_immediate() {
    let play_state = PlayState::new(0);
    let settings = Settings {
        chan_cv_immediate: false,
        ..Settings::default()
    };
    let mut rig = Rig::new(&settings, &play_state);

    rig.snapshot.channel_cv = 4096;
    assert!(rig.tick().contains(Changes::CHANNEL_CHANGED));
    assert_eq!(play_state.next_channel(), 4);
    assert!(!play_state.channel_changed());

    // Audio engine switched on its own, the CV now matches.
    play_state.set_current_channel(4);
    rig.snapshot.channel_cv = 4200;
    assert!(!rig.tick().contains(Changes::CHANNEL_CHANGED));
}

#[test]
#[serial]
fn free_start_at_full_scale() {
    let play_state = PlayState::new(0);
    let settings = Settings {
        pitch_mode: false,
        start_cv_divider: 8,
        start_cv_immediate: true,
        ..Settings::default()
    };
    let mut rig = Rig::new(&settings, &play_state);

    rig.snapshot.start_cv = 8191;
    let changes = rig.tick();

    assert!(changes.contains(Changes::TIME_CV_CHANGED | Changes::CHANGE_START_NOW));
    assert_eq!(rig.interface.start(), Some(8191));
}

#[test]
#[serial]
fn quantised_pitch_sweep_visits_all_notes() {
    let play_state = PlayState::new(0);
    let settings = Settings {
        pitch_mode: true,
        quantise_root_cv: true,
        low_note: 36.0,
        note_range: 24.0,
        ..Settings::default()
    };
    let mut rig = Rig::new(&settings, &play_state);

    let mut notes = Vec::new();
    for raw in 0..=8191 {
        rig.snapshot.start_cv = raw;
        let changes = rig.tick();
        if changes.intersects(Changes::ROOT_CV_CHANGED | Changes::ROOT_NOTE_CHANGED) {
            assert!(changes.contains(Changes::ROOT_CV_CHANGED | Changes::ROOT_NOTE_CHANGED));
            notes.push(rig.interface.root_note_cv().unwrap() as i32);
        }
    }

    assert_eq!(notes, (36..=60).collect::<Vec<_>>());
}

#[test]
#[serial]
fn short_press_triggers_reset() {
    let play_state = PlayState::new(0);
    let mut rig = Rig::new(&Settings::default(), &play_state);
    rig.run(10);

    rig.snapshot.button = true;
    let held = rig.run(100);
    rig.snapshot.button = false;
    let released = rig.run(20);

    assert!(held
        .iter()
        .all(|(_, changes)| !changes.intersects(Changes::BUTTON_SHORT_PRESS)));
    let release: Vec<_> = released
        .iter()
        .filter(|(_, changes)| changes.contains(Changes::BUTTON_SHORT_PRESS))
        .collect();
    assert_eq!(release.len(), 1);
    assert!(release[0].1.contains(Changes::RESET_TRIGGERED));
}

#[test]
#[serial]
fn long_hold_pulses_and_releases_without_reset() {
    let play_state = PlayState::new(0);
    let mut rig = Rig::new(&Settings::default(), &play_state);
    rig.run(10);

    let pressed_at = rig.snapshot.now;
    rig.snapshot.button = true;
    let mut log = rig.run(850);
    rig.snapshot.button = false;
    log.extend(rig.run(20));

    let since_press = |ticks: Vec<u32>| -> Vec<u32> {
        ticks.into_iter().map(|now| now - pressed_at).collect()
    };

    let long = since_press(ticks_with(&log, Changes::BUTTON_LONG_PRESS));
    assert_eq!(long.first(), Some(&505));
    assert_eq!(long.last(), Some(&854));
    assert_eq!(long.len(), 350);

    let pulses = since_press(ticks_with(&log, Changes::BUTTON_PULSE));
    assert_eq!(pulses, [605, 705, 805]);

    let release = since_press(ticks_with(&log, Changes::BUTTON_LONG_RELEASE));
    assert_eq!(release, [855]);

    assert!(ticks_with(&log, Changes::BUTTON_SHORT_PRESS).is_empty());
    assert!(ticks_with(&log, Changes::RESET_TRIGGERED).is_empty());
}

#[test]
#[serial]
fn pulse_cadence_follows_configured_delay() {
    let play_state = PlayState::new(0);
    let mut board = Board13Bit::default();
    reset::reset_cv().take();
    let timings = ButtonTimings::try_new(10, 200, 50).unwrap();
    let mut interface = Interface::init(&mut board, 8, &Settings::default(), timings, &play_state);

    let mut pulses = Vec::new();
    for now in 0..1000 {
        let changes = interface.update(Snapshot {
            button: true,
            now,
            ..Snapshot::default()
        });
        if changes.contains(Changes::BUTTON_PULSE) {
            pulses.push(now);
        }
    }

    assert!(pulses.len() > 2);
    for pair in pulses.windows(2) {
        assert_eq!(pair[1] - pair[0], 50);
    }
}

#[test]
#[serial]
fn reset_cv_pulse_triggers_reset() {
    let play_state = PlayState::new(0);
    let mut rig = Rig::new(&Settings::default(), &play_state);
    rig.run(10);

    rig.trigger_reset_cv();
    let changes = rig.tick();

    assert_eq!(changes, Changes::RESET_TRIGGERED);
    assert!(rig.tick().is_empty());
}

#[test]
#[serial]
fn two_reset_edges_within_a_tick_act_as_one() {
    let play_state = PlayState::new(0);
    let mut rig = Rig::new(&Settings::default(), &play_state);
    rig.run(10);

    rig.trigger_reset_cv();
    rig.trigger_reset_cv();

    assert_eq!(rig.tick(), Changes::RESET_TRIGGERED);
    assert!(rig.tick().is_empty());
}

proptest! {
    #[test]
    #[serial]
    fn reported_bits_are_always_defined(
        pitch_mode in any::<bool>(),
        quantise_root_cv in any::<bool>(),
        snapshots in prop::collection::vec(
            (any::<u16>(), any::<u16>(), any::<bool>(), 1u32..50),
            1..200,
        ),
    ) {
        let play_state = PlayState::new(0);
        let settings = Settings {
            pitch_mode,
            quantise_root_cv,
            ..Settings::default()
        };
        let mut rig = Rig::new(&settings, &play_state);
        for (channel_cv, start_cv, button, step) in snapshots {
            rig.snapshot.channel_cv = channel_cv;
            rig.snapshot.start_cv = start_cv;
            rig.snapshot.button = button;
            rig.snapshot.now += step;
            let changes = rig.interface.update(rig.snapshot);
            prop_assert_eq!(changes.bits() & !Changes::ALL.bits(), 0);
            prop_assert!(play_state.next_channel() < 8);
            if let Some(start) = rig.interface.start() {
                prop_assert!(start <= 8191);
            }
        }
    }
}
