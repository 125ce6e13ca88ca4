//! Drag session binder.
//!
//! A [`DragBinder`] turns a single press event into a bounded sequence of
//! move notifications terminated by exactly one release notification. The
//! caller attaches the binder's press handler to an element's press event;
//! the binder does the rest through the window-level sources:
//!
//! - on a qualifying press it calls `on_start` and subscribes one move
//!   listener and one release listener on the [`WindowInput`],
//! - each move notification while the session is active reaches `on_move`,
//! - the release notification reaches `on_stop` once, and both listeners
//!   are deregistered via the handles the session held.
//!
//! A press while a session is already active is ignored: one binder owns at
//! most one session at a time.

use crate::input::{ListenerHandle, WindowInput};
use gripline_core::PointerEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handler attachable to a press event source. Calling it is the only way to
/// begin a drag session.
pub type PressHandler = Rc<dyn Fn(&PointerEvent)>;

type Callback = Rc<dyn Fn(&PointerEvent)>;
type Condition = Rc<dyn Fn(&PointerEvent) -> bool>;

/// The two listener registrations belonging to one in-progress session.
struct DragSession {
    move_handle: ListenerHandle,
    release_handle: ListenerHandle,
}

impl DragSession {
    fn unsubscribe(self) {
        self.move_handle.unsubscribe();
        self.release_handle.unsubscribe();
    }
}

struct BinderState {
    input: WindowInput,
    condition: RefCell<Option<Condition>>,
    on_start: Callback,
    on_move: Callback,
    on_stop: Callback,
    active: Rc<Cell<bool>>,
    session: Rc<RefCell<Option<DragSession>>>,
}

/// Binds a press/drag/release gesture to caller-supplied callbacks.
pub struct DragBinder {
    state: Rc<BinderState>,
}

impl DragBinder {
    pub fn new(
        input: WindowInput,
        on_start: impl Fn(&PointerEvent) + 'static,
        on_move: impl Fn(&PointerEvent) + 'static,
        on_stop: impl Fn(&PointerEvent) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(BinderState {
                input,
                condition: RefCell::new(None),
                on_start: Rc::new(on_start),
                on_move: Rc::new(on_move),
                on_stop: Rc::new(on_stop),
                active: Rc::new(Cell::new(false)),
                session: Rc::new(RefCell::new(None)),
            }),
        }
    }

    /// Gate session starts on a predicate over the press event.
    ///
    /// Absent condition means every press starts a session; a press for which
    /// the condition returns false starts nothing and registers nothing.
    pub fn with_condition(self, condition: impl Fn(&PointerEvent) -> bool + 'static) -> Self {
        *self.state.condition.borrow_mut() = Some(Rc::new(condition));
        self
    }

    /// The handler to attach to the host element's press event.
    pub fn press_handler(&self) -> PressHandler {
        let state = Rc::clone(&self.state);
        Rc::new(move |event| handle_press(&state, event))
    }

    /// Feed a press event directly, without going through a handler value.
    pub fn on_press(&self, event: &PointerEvent) {
        handle_press(&self.state, event);
    }

    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }
}

fn handle_press(state: &Rc<BinderState>, event: &PointerEvent) {
    let rejected = match state.condition.borrow().as_ref() {
        Some(condition) => !condition(event),
        None => false,
    };
    if rejected {
        return;
    }

    if state.active.get() {
        log::debug!("press ignored, drag session already active");
        return;
    }

    state.active.set(true);
    log::debug!(
        "drag session started at ({:.1}, {:.1})",
        event.global_position.x,
        event.global_position.y
    );
    (state.on_start)(event);

    let move_handle = {
        let active = Rc::clone(&state.active);
        let on_move = Rc::clone(&state.on_move);
        state.input.add_move_listener(move |move_event| {
            if active.get() {
                log::trace!(
                    "drag move to ({:.1}, {:.1})",
                    move_event.global_position.x,
                    move_event.global_position.y
                );
                on_move(move_event);
            }
        })
    };

    let release_handle = {
        let active = Rc::clone(&state.active);
        let on_stop = Rc::clone(&state.on_stop);
        let session = Rc::clone(&state.session);
        state.input.add_release_listener(move |release_event| {
            // Deregister first, via the handles the session holds, so the
            // listeners are gone even when the flag was already clear or
            // `on_stop` unwinds.
            let taken = session.borrow_mut().take();
            if let Some(taken) = taken {
                taken.unsubscribe();
            }
            let was_active = active.replace(false);
            if was_active {
                log::debug!(
                    "drag session ended at ({:.1}, {:.1})",
                    release_event.global_position.x,
                    release_event.global_position.y
                );
                on_stop(release_event);
            }
        })
    };

    *state.session.borrow_mut() = Some(DragSession {
        move_handle,
        release_handle,
    });
}
