//! Foundation elements for Gripline: window-level input sources and gestures

pub mod gestures;
pub mod input;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use gestures::{DragBinder, PressHandler};
pub use input::{ListenerHandle, ListenerId, WindowInput};
pub use gripline_core::{
    Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId,
};

pub mod prelude {
    pub use crate::gestures::{DragBinder, PressHandler};
    pub use crate::input::{ListenerHandle, ListenerId, WindowInput};
    pub use gripline_core::prelude::*;
}
