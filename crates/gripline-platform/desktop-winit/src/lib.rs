use gripline_core::{Point, PointerButton, PointerEvent, PointerEventKind};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

pub struct DesktopWinitPlatform {
    scale_factor: f64,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        let logical = self.pointer_position(position);
        PointerEvent::new(kind, logical, logical)
    }

    /// Map a winit mouse button; auxiliary buttons beyond the known set are dropped.
    pub fn pointer_button(&self, button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            MouseButton::Middle => Some(PointerButton::Middle),
            MouseButton::Back => Some(PointerButton::Back),
            MouseButton::Forward => Some(PointerButton::Forward),
            _ => None,
        }
    }

    pub fn element_state_kind(&self, state: ElementState) -> PointerEventKind {
        match state {
            ElementState::Pressed => PointerEventKind::Down,
            ElementState::Released => PointerEventKind::Up,
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
