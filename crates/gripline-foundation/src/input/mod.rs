pub mod window;

pub use window::{ListenerHandle, ListenerId, WindowInput};
