//! Pure data for pointer input in Gripline
//!
//! This crate contains the geometry primitives and the pointer event model
//! shared by the gesture layer, the platform adapters, and the test harness.

mod geometry;
mod pointer;

pub use geometry::*;
pub use pointer::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::pointer::{
        PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId,
    };
}
