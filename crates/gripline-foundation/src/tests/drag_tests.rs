use crate::gestures::DragBinder;
use crate::input::WindowInput;
use gripline_core::{Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind};
use std::cell::RefCell;
use std::rc::Rc;

// In-test recorder: (callback name, global position) per invocation.
type CallLog = Rc<RefCell<Vec<(&'static str, Point)>>>;

fn recorded_binder(input: &WindowInput) -> (DragBinder, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let start_log = log.clone();
    let move_log = log.clone();
    let stop_log = log.clone();
    let binder = DragBinder::new(
        input.clone(),
        move |e| start_log.borrow_mut().push(("start", e.global_position)),
        move |e| move_log.borrow_mut().push(("move", e.global_position)),
        move |e| stop_log.borrow_mut().push(("stop", e.global_position)),
    );
    (binder, log)
}

fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(x, y), Point::new(x, y))
        .with_buttons(PointerButtons::new().with(PointerButton::Primary))
}

fn press_with(x: f32, y: f32, buttons: PointerButtons) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(x, y), Point::new(x, y))
        .with_buttons(buttons)
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, Point::new(x, y), Point::new(x, y))
}

fn released(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, Point::new(x, y), Point::new(x, y))
}

#[test]
fn press_starts_session_and_subscribes_both_sources() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);

    binder.on_press(&press(10.0, 10.0));

    assert!(binder.is_active());
    assert_eq!(*log.borrow(), vec![("start", Point::new(10.0, 10.0))]);
    assert_eq!(input.move_listener_count(), 1);
    assert_eq!(input.release_listener_count(), 1);
}

#[test]
fn full_session_relays_moves_in_order_then_stops_once() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);

    binder.on_press(&press(10.0, 10.0));
    input.dispatch_move(&moved(12.0, 10.0));
    input.dispatch_move(&moved(15.0, 11.0));
    input.dispatch_release(&released(15.0, 11.0));

    assert_eq!(
        *log.borrow(),
        vec![
            ("start", Point::new(10.0, 10.0)),
            ("move", Point::new(12.0, 10.0)),
            ("move", Point::new(15.0, 11.0)),
            ("stop", Point::new(15.0, 11.0)),
        ]
    );
    assert!(!binder.is_active());

    // Both subscriptions are gone: later notifications reach nothing.
    assert_eq!(input.move_listener_count(), 0);
    assert_eq!(input.release_listener_count(), 0);
    input.dispatch_move(&moved(20.0, 20.0));
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn failing_condition_starts_nothing() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);
    let binder = binder.with_condition(|e| e.buttons.contains(PointerButton::Primary));

    let secondary = PointerButtons::new().with(PointerButton::Secondary);
    binder.on_press(&press_with(10.0, 10.0, secondary));

    assert!(!binder.is_active());
    assert!(log.borrow().is_empty());
    assert_eq!(input.move_listener_count(), 0);
    assert_eq!(input.release_listener_count(), 0);
}

#[test]
fn passing_condition_starts_a_session() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);
    let binder = binder.with_condition(|e| e.buttons.contains(PointerButton::Primary));

    binder.on_press(&press(4.0, 5.0));

    assert!(binder.is_active());
    assert_eq!(*log.borrow(), vec![("start", Point::new(4.0, 5.0))]);
}

#[test]
fn duplicate_release_does_not_stop_twice() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);

    binder.on_press(&press(0.0, 0.0));
    input.dispatch_release(&released(1.0, 1.0));
    input.dispatch_release(&released(2.0, 2.0));

    let stops = log
        .borrow()
        .iter()
        .filter(|(name, _)| *name == "stop")
        .count();
    assert_eq!(stops, 1);
    assert_eq!(input.release_listener_count(), 0);
}

#[test]
fn moves_before_press_are_ignored() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);

    input.dispatch_move(&moved(1.0, 1.0));
    assert!(log.borrow().is_empty());
    assert!(!binder.is_active());
}

#[test]
fn press_while_active_is_ignored() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);

    binder.on_press(&press(10.0, 10.0));
    binder.on_press(&press(50.0, 50.0));

    // Still one session: one start, one listener pair.
    assert_eq!(*log.borrow(), vec![("start", Point::new(10.0, 10.0))]);
    assert_eq!(input.move_listener_count(), 1);
    assert_eq!(input.release_listener_count(), 1);

    input.dispatch_release(&released(10.0, 10.0));
    assert_eq!(input.move_listener_count(), 0);
    assert_eq!(input.release_listener_count(), 0);

    // The binder is reusable for a fresh session afterwards.
    binder.on_press(&press(50.0, 50.0));
    assert!(binder.is_active());
    assert_eq!(log.borrow().last(), Some(&("start", Point::new(50.0, 50.0))));
}

#[test]
fn press_handler_value_drives_the_same_binder() {
    let input = WindowInput::new();
    let (binder, log) = recorded_binder(&input);
    let handler = binder.press_handler();

    handler(&press(7.0, 8.0));

    assert!(binder.is_active());
    assert_eq!(*log.borrow(), vec![("start", Point::new(7.0, 8.0))]);
}

#[test]
fn two_binders_on_one_window_track_independent_sessions() {
    let input = WindowInput::new();
    let (first, first_log) = recorded_binder(&input);
    let (second, second_log) = recorded_binder(&input);

    first.on_press(&press(1.0, 1.0));
    second.on_press(&press(2.0, 2.0));
    assert_eq!(input.move_listener_count(), 2);

    input.dispatch_move(&moved(3.0, 3.0));
    input.dispatch_release(&released(4.0, 4.0));

    for log in [&first_log, &second_log] {
        let names: Vec<_> = log.borrow().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["start", "move", "stop"]);
    }
    assert_eq!(input.move_listener_count(), 0);
    assert_eq!(input.release_listener_count(), 0);
}

#[test]
fn listeners_are_removed_even_when_on_stop_panics() {
    let input = WindowInput::new();
    let binder = DragBinder::new(input.clone(), |_| {}, |_| {}, |_| panic!("stop blew up"));

    binder.on_press(&press(0.0, 0.0));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        input.dispatch_release(&released(1.0, 1.0));
    }));
    assert!(result.is_err());

    // Cleanup happened before on_stop ran, so nothing is left registered.
    assert_eq!(input.move_listener_count(), 0);
    assert_eq!(input.release_listener_count(), 0);
    assert!(!binder.is_active());
}
