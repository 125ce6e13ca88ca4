//! Callback recording for drag binder assertions.

use gripline_core::{Point, PointerEvent};
use gripline_foundation::{DragBinder, WindowInput};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackKind {
    Start,
    Move,
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedCall {
    pub kind: CallbackKind,
    pub position: Point,
}

/// Shared log of drag callback invocations.
///
/// Clones share the same log, so a recorder can hand out its three callbacks
/// and still be inspected afterwards.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A binder whose three callbacks all record into this recorder.
    pub fn bind(&self, input: WindowInput) -> DragBinder {
        let start = self.clone();
        let moved = self.clone();
        let stop = self.clone();
        DragBinder::new(
            input,
            move |e| start.record(CallbackKind::Start, e),
            move |e| moved.record(CallbackKind::Move, e),
            move |e| stop.record(CallbackKind::Stop, e),
        )
    }

    pub fn record(&self, kind: CallbackKind, event: &PointerEvent) {
        self.calls.borrow_mut().push(RecordedCall {
            kind,
            position: event.global_position,
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<CallbackKind> {
        self.calls.borrow().iter().map(|call| call.kind).collect()
    }

    pub fn count(&self, kind: CallbackKind) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.kind == kind)
            .count()
    }

    pub fn positions(&self, kind: CallbackKind) -> Vec<Point> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.kind == kind)
            .map(|call| call.position)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}
