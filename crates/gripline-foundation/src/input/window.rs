//! Window-level pointer notification sources.
//!
//! Platform integrations push move and release events into a [`WindowInput`]
//! and gesture code subscribes to them for the lifetime of a session. The
//! sources are window-scoped on purpose: a drag keeps tracking even when the
//! pointer leaves the bounds of the element that started it.

use gripline_core::PointerEvent;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type ListenerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListenerKind {
    Move,
    Release,
}

type Listener = Rc<dyn Fn(&PointerEvent)>;

struct WindowInputState {
    move_listeners: RefCell<Vec<(ListenerId, Listener)>>,
    release_listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<ListenerId>,
}

impl WindowInputState {
    fn new() -> Self {
        Self {
            move_listeners: RefCell::new(Vec::new()),
            release_listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    fn list(&self, kind: ListenerKind) -> &RefCell<Vec<(ListenerId, Listener)>> {
        match kind {
            ListenerKind::Move => &self.move_listeners,
            ListenerKind::Release => &self.release_listeners,
        }
    }

    fn add(&self, kind: ListenerKind, listener: Listener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.list(kind).borrow_mut().push((id, listener));
        log::trace!("listener {id} added ({kind:?})");
        id
    }

    /// Removal is idempotent: removing an id that is already gone is a no-op.
    fn remove(&self, kind: ListenerKind, id: ListenerId) {
        let mut listeners = self.list(kind).borrow_mut();
        if let Some(index) = listeners.iter().position(|(entry_id, _)| *entry_id == id) {
            listeners.remove(index);
            log::trace!("listener {id} removed ({kind:?})");
        }
    }

    fn dispatch(&self, kind: ListenerKind, event: &PointerEvent) {
        // Snapshot before invoking so a listener that unsubscribes itself (or
        // registers new listeners) mid-dispatch cannot corrupt the iteration.
        // A listener removed during this dispatch still sees this delivery,
        // but none after it.
        let snapshot: SmallVec<[Listener; 4]> = self
            .list(kind)
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}

/// The window's move and release notification sources.
///
/// Cheap to clone; clones share the same listener registry. Everything is
/// single-threaded: dispatch invokes listeners synchronously on the calling
/// (UI) thread, in registration order.
#[derive(Clone)]
pub struct WindowInput {
    state: Rc<WindowInputState>,
}

impl WindowInput {
    pub fn new() -> Self {
        Self {
            state: Rc::new(WindowInputState::new()),
        }
    }

    pub fn add_move_listener(&self, listener: impl Fn(&PointerEvent) + 'static) -> ListenerHandle {
        let id = self.state.add(ListenerKind::Move, Rc::new(listener));
        ListenerHandle {
            id,
            kind: ListenerKind::Move,
            state: Rc::clone(&self.state),
        }
    }

    pub fn add_release_listener(
        &self,
        listener: impl Fn(&PointerEvent) + 'static,
    ) -> ListenerHandle {
        let id = self.state.add(ListenerKind::Release, Rc::new(listener));
        ListenerHandle {
            id,
            kind: ListenerKind::Release,
            state: Rc::clone(&self.state),
        }
    }

    /// Deliver a pointer-moved notification to every registered move listener.
    pub fn dispatch_move(&self, event: &PointerEvent) {
        self.state.dispatch(ListenerKind::Move, event);
    }

    /// Deliver a pointer-released notification to every registered release listener.
    pub fn dispatch_release(&self, event: &PointerEvent) {
        self.state.dispatch(ListenerKind::Release, event);
    }

    pub fn move_listener_count(&self) -> usize {
        self.state.move_listeners.borrow().len()
    }

    pub fn release_listener_count(&self) -> usize {
        self.state.release_listeners.borrow().len()
    }
}

impl Default for WindowInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered listener.
///
/// The listener stays registered until the handle is explicitly consumed by
/// [`ListenerHandle::unsubscribe`]; dropping the handle does not deregister.
/// Sessions hold their two handles and unsubscribe on the terminal event.
pub struct ListenerHandle {
    id: ListenerId,
    kind: ListenerKind,
    state: Rc<WindowInputState>,
}

impl ListenerHandle {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unsubscribe(self) {
        self.state.remove(self.kind, self.id);
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}
