//! Robot-style pointer input simulation.
//!
//! A [`PointerRobot`] plays the role of the platform: it owns a
//! [`WindowInput`], tracks a cursor, and synthesizes press / move / release
//! events exactly as a desktop adapter would feed them.
//!
//! # Example
//!
//! ```
//! use gripline_foundation::{DragBinder, WindowInput};
//! use gripline_testing::PointerRobot;
//!
//! let mut robot = PointerRobot::new();
//! let binder = DragBinder::new(robot.input(), |_| {}, |_| {}, |_| {});
//! robot.attach_press_handler(binder.press_handler());
//!
//! robot.drag((10.0, 10.0), (50.0, 40.0), 4);
//! ```

use gripline_core::{Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind};
use gripline_foundation::{PressHandler, WindowInput};

pub struct PointerRobot {
    input: WindowInput,
    press_handler: Option<PressHandler>,
    cursor: Point,
}

impl PointerRobot {
    pub fn new() -> Self {
        Self {
            input: WindowInput::new(),
            press_handler: None,
            cursor: Point::ZERO,
        }
    }

    /// The window sources the robot dispatches into. Cheap clone.
    pub fn input(&self) -> WindowInput {
        self.input.clone()
    }

    /// Attach a binder's press handler, as the host element would.
    pub fn attach_press_handler(&mut self, handler: PressHandler) {
        self.press_handler = Some(handler);
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Press the primary button at the given coordinates.
    pub fn press_at(&mut self, x: f32, y: f32) {
        self.press_with_buttons(x, y, PointerButtons::new().with(PointerButton::Primary));
    }

    /// Press with an explicit buttons state, for condition-gating tests.
    pub fn press_with_buttons(&mut self, x: f32, y: f32, buttons: PointerButtons) {
        self.cursor = Point::new(x, y);
        let event =
            PointerEvent::new(PointerEventKind::Down, self.cursor, self.cursor).with_buttons(buttons);
        log::trace!("robot press at ({x:.1}, {y:.1})");
        if let Some(handler) = &self.press_handler {
            handler(&event);
        }
    }

    /// Move the cursor, raising a window-level move notification.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        let event = PointerEvent::new(PointerEventKind::Move, self.cursor, self.cursor)
            .with_buttons(PointerButtons::new().with(PointerButton::Primary));
        self.input.dispatch_move(&event);
    }

    /// Release at the current cursor position.
    pub fn release(&mut self) {
        let cursor = self.cursor;
        self.release_at(cursor.x, cursor.y);
    }

    pub fn release_at(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        let event = PointerEvent::new(PointerEventKind::Up, self.cursor, self.cursor);
        log::trace!("robot release at ({x:.1}, {y:.1})");
        self.input.dispatch_release(&event);
    }

    /// Press at `from`, move in `steps` interpolated increments to `to`,
    /// then release there.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.press_at(from.0, from.1);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.move_to(x, y);
        }
        self.release_at(to.0, to.1);
    }
}

impl Default for PointerRobot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn drag_interpolates_moves_between_endpoints() {
        let mut robot = PointerRobot::new();
        let positions: Rc<RefCell<Vec<Point>>> = Rc::new(RefCell::new(Vec::new()));

        let recorded = positions.clone();
        let handle = robot
            .input()
            .add_move_listener(move |e| recorded.borrow_mut().push(e.global_position));

        robot.drag((0.0, 0.0), (10.0, 0.0), 2);

        assert_eq!(
            *positions.borrow(),
            vec![Point::new(5.0, 0.0), Point::new(10.0, 0.0)]
        );
        assert_eq!(robot.cursor(), Point::new(10.0, 0.0));
        handle.unsubscribe();
    }

    #[test]
    fn press_without_attached_handler_is_harmless() {
        let mut robot = PointerRobot::new();
        robot.press_at(3.0, 3.0);
        robot.release();
        assert_eq!(robot.cursor(), Point::new(3.0, 3.0));
    }
}
