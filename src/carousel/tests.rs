use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{CarouselOptions, Intent, RotationController};
use crate::error::CarouselError;
use crate::items::ItemSequence;
use crate::presenter::View;
use crate::state::RotationMode;
use crate::timer::{FrameClock, Scheduler, TimerId};

const T: Duration = Duration::from_millis(250);

fn carousel(len: usize) -> RotationController<usize> {
    RotationController::from_vec((0..len).collect(), CarouselOptions::with_autoplay_speed(T))
        .expect("non-empty items")
}

fn record_views(controller: &mut RotationController<usize>) -> Rc<RefCell<Vec<(usize, bool)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    controller.set_presenter(move |view: &View<'_, usize>| {
        sink.borrow_mut().push((view.index, view.autoplay()));
    });
    log
}

/// Forwards to a [`FrameClock`] but never cancels anything, like a host that
/// leaks timers.
struct LeakyClock(FrameClock);

impl Scheduler for LeakyClock {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        self.0.schedule_repeating(period)
    }

    fn cancel(&mut self, _id: TimerId) -> bool {
        false
    }

    fn pending(&self) -> usize {
        self.0.pending()
    }

    fn poll(&mut self, elapsed: Duration) -> Vec<TimerId> {
        self.0.poll(elapsed)
    }
}

#[test]
fn mounts_on_first_item_and_autoplays() {
    let controller = carousel(3);

    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.mode(), RotationMode::Autoplaying);
    assert!(controller.autoplay_enabled());
    assert!(controller.is_mounted());
    assert_eq!(controller.scheduler().pending(), 1);
}

#[test]
fn default_autoplay_speed_is_five_seconds() {
    let controller =
        RotationController::from_vec(vec!['a', 'b'], CarouselOptions::default()).expect("items");
    assert_eq!(controller.autoplay_speed(), Duration::from_secs(5));
}

#[test]
fn zero_autoplay_speed_is_raised_to_the_floor() {
    let controller = RotationController::from_vec(
        vec!['a', 'b'],
        CarouselOptions::with_autoplay_speed(Duration::ZERO),
    )
    .expect("items");
    assert_eq!(controller.autoplay_speed(), crate::constants::MIN_AUTOPLAY_SPEED);
}

#[test]
fn autoplay_advances_once_per_interval() {
    // Scenario A
    let mut controller = carousel(3);

    assert_eq!(controller.elapse(T * 2), 2);
    assert_eq!(controller.current_index(), 2);
    assert!(controller.autoplay_enabled());

    controller.elapse(T);
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn autoplay_does_not_fire_early() {
    let mut controller = carousel(3);

    assert_eq!(controller.elapse(T - Duration::from_millis(1)), 0);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.elapse(Duration::from_millis(1)), 1);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn frame_by_frame_autoplay_matches_interval() {
    let mut controller = RotationController::from_vec(
        vec![0, 1, 2],
        CarouselOptions::with_autoplay_speed(Duration::from_secs(1)),
    )
    .expect("items");

    for _ in 0..crate::constants::FPS * 2 {
        controller.elapse(crate::constants::FRAME_TIME);
    }
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn manual_next_stops_autoplay() {
    // Scenario B
    let mut controller = carousel(3);

    controller.next();
    assert_eq!(controller.current_index(), 1);
    assert!(!controller.autoplay_enabled());
    assert_eq!(controller.scheduler().pending(), 0);

    assert_eq!(controller.elapse(T * 5), 0);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn retreat_wraps_backwards() {
    // Scenario C
    let mut controller = carousel(3);

    controller.retreat();
    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.mode(), RotationMode::Manual);
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn single_item_never_moves() {
    // Scenario D
    let mut controller = carousel(1);

    controller.elapse(T * 3);
    assert_eq!(controller.current_index(), 0);
    controller.next();
    assert_eq!(controller.current_index(), 0);
    controller.retreat();
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.autoplay_enabled());
}

#[test]
fn empty_items_are_rejected() {
    // Scenario E
    let result = RotationController::<u8>::from_vec(Vec::new(), CarouselOptions::default());
    assert_eq!(result.err(), Some(CarouselError::EmptySequence));
}

#[test]
fn out_of_range_jump_changes_nothing() {
    // Scenario F
    let mut controller = carousel(3);
    controller.elapse(T);

    assert_eq!(
        controller.jump_to(5),
        Err(CarouselError::OutOfRange { index: 5, len: 3 })
    );
    assert_eq!(controller.current_index(), 1);
    assert!(controller.autoplay_enabled());
    assert_eq!(controller.scheduler().pending(), 1);
}

#[test]
fn jump_selects_and_stops_autoplay() {
    let mut controller = carousel(4);

    controller.jump_to(3).expect("in range");
    assert_eq!(controller.current_index(), 3);
    assert!(!controller.autoplay_enabled());

    controller.elapse(T * 10);
    assert_eq!(controller.current_index(), 3);
}

#[test]
fn clamped_jump_lands_on_last_item() {
    let mut controller = carousel(3);

    controller.jump_to_clamped(42);
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.autoplay_enabled());
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn dispatch_routes_intents() {
    let mut controller = carousel(3);

    controller.dispatch(Intent::Previous).expect("previous");
    assert_eq!(controller.current_index(), 2);
    controller.dispatch(Intent::Next).expect("next");
    assert_eq!(controller.current_index(), 0);
    controller.dispatch(Intent::JumpTo(1)).expect("jump");
    assert_eq!(controller.current_index(), 1);
    assert!(controller.dispatch(Intent::JumpTo(3)).is_err());
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn advancing_len_times_returns_to_start() {
    for len in 1..=5 {
        for start in 0..len {
            let mut controller = carousel(len);
            controller.jump_to(start).expect("in range");

            for _ in 0..len {
                controller.next();
            }
            assert_eq!(controller.current_index(), start);

            for _ in 0..len {
                controller.retreat();
            }
            assert_eq!(controller.current_index(), start);
        }
    }
}

#[test]
fn next_then_retreat_is_identity() {
    for len in 1..=5 {
        for start in 0..len {
            let mut controller = carousel(len);
            controller.jump_to(start).expect("in range");

            controller.next();
            controller.retreat();
            assert_eq!(controller.current_index(), start);

            controller.retreat();
            controller.next();
            assert_eq!(controller.current_index(), start);
        }
    }
}

#[test]
fn index_and_timer_invariants_hold_under_mixed_input() {
    let mut controller = carousel(4);
    let script = [
        Intent::Next,
        Intent::JumpTo(3),
        Intent::Previous,
        Intent::JumpTo(9),
        Intent::Next,
        Intent::Next,
        Intent::Previous,
    ];

    controller.elapse(T * 3);
    for (step, intent) in script.into_iter().enumerate() {
        let _ = controller.dispatch(intent);
        controller.elapse(T / 2 * step as u32);

        assert!(controller.current_index() < controller.len());
        assert!(controller.scheduler().pending() <= 1);
        assert!(!controller.autoplay_enabled());
    }
    assert_eq!(controller.scheduler().peak_pending(), 1);
}

#[test]
fn teardown_cancels_the_live_timer() {
    let mut controller = carousel(3);

    controller.teardown();
    assert!(!controller.is_mounted());
    assert_eq!(controller.scheduler().pending(), 0);

    controller.elapse(T * 4);
    assert_eq!(controller.current_index(), 0);

    controller.teardown();
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn teardown_in_manual_mode_leaves_nothing_pending() {
    let mut controller = carousel(3);
    controller.retreat();

    controller.teardown();
    assert_eq!(controller.scheduler().pending(), 0);
    assert_eq!(controller.mode(), RotationMode::Manual);
}

#[test]
fn leaked_timer_cannot_move_a_manual_carousel() {
    let items = ItemSequence::new(vec![0, 1, 2]).expect("items");
    let mut controller = RotationController::mount(
        items,
        CarouselOptions::with_autoplay_speed(T),
        LeakyClock(FrameClock::new()),
    );

    controller.next();
    assert_eq!(controller.scheduler().pending(), 1);

    assert_eq!(controller.elapse(T * 6), 0);
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn presenter_sees_every_change() {
    let mut controller = carousel(3);
    let log = record_views(&mut controller);

    controller.elapse(T);
    controller.retreat();
    controller.retreat();
    controller.jump_to(2).expect("in range");
    let _ = controller.jump_to(7);

    assert_eq!(
        *log.borrow(),
        vec![(0, true), (1, true), (0, false), (2, false)]
    );
}

#[test]
fn presenter_hears_mode_change_without_index_change() {
    let mut controller = carousel(1);
    let log = record_views(&mut controller);

    controller.next();
    controller.next();

    assert_eq!(*log.borrow(), vec![(0, true), (0, false)]);
}

#[test]
fn view_marks_the_current_indicator() {
    let mut controller = carousel(3);
    controller.elapse(T * 2);

    let view = controller.view();
    assert_eq!(view.index, 2);
    assert_eq!(*view.item, 2);
    let active: Vec<_> = view
        .indicators()
        .filter(|i| i.active)
        .map(|i| i.position)
        .collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn teardown_freezes_navigation() {
    let mut controller = carousel(3);
    let log = record_views(&mut controller);
    controller.next();

    controller.teardown();
    controller.next();
    controller.retreat();
    controller.jump_to(2).expect("in range");
    controller.jump_to_clamped(9);
    controller.dispatch(Intent::Previous).expect("previous");

    assert_eq!(controller.current_index(), 1);
    assert_eq!(*log.borrow(), vec![(0, true), (1, false)]);
}

#[test]
fn teardown_while_autoplaying_keeps_the_shown_item() {
    let mut controller = carousel(3);
    controller.elapse(T);
    controller.teardown();

    controller.jump_to(0).expect("in range");
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.mode(), RotationMode::Autoplaying);
    assert_eq!(controller.scheduler().pending(), 0);
}

#[test]
fn current_item_follows_the_index() {
    let mut controller = carousel(3);
    assert_eq!(controller.items().iter().copied().collect::<Vec<_>>(), [0, 1, 2]);

    controller.retreat();
    assert_eq!(*controller.current_item(), 2);
    assert_eq!(controller.items().get(controller.current_index()), Some(&2));
}
