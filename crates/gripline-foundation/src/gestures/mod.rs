pub mod drag;

pub use drag::{DragBinder, PressHandler};
