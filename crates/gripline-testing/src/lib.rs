//! Test harness for Gripline
//!
//! Provides a robot-style API for driving pointer input through a
//! [`WindowInput`](gripline_foundation::WindowInput) the way a platform
//! adapter would, plus a [`Recorder`](recorder::Recorder) that captures
//! callback invocations for assertions.

pub mod recorder;
pub mod robot;

pub use recorder::{CallbackKind, RecordedCall, Recorder};
pub use robot::PointerRobot;
