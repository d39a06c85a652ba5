//! Keyboard and pointer input handling

use game_core::{Command, NudgeDirection};
use glam::Vec2;
use web_sys::{KeyboardEvent, MouseEvent};

/// Pointer gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Command::Nudge(NudgeDirection::Left)),
        "ArrowRight" | "d" | "D" => Some(Command::Nudge(NudgeDirection::Right)),
        _ => None,
    }
}

/// Handle pointer event already converted to board units
pub fn handle_pointer(phase: PointerPhase, point: Vec2) -> Command {
    match phase {
        PointerPhase::Down => Command::BeginAim(point),
        PointerPhase::Move => Command::UpdateAim(point),
        PointerPhase::Up => Command::ReleaseAim(point),
    }
}

/// Scale a pointer offset on a canvas displayed at `css_size` to board units.
/// A canvas with no usable layout size is treated as 1:1.
pub fn canvas_to_board(offset: Vec2, css_size: Vec2, board_size: f32) -> Vec2 {
    if !(css_size.x > 0.0 && css_size.y > 0.0 && css_size.is_finite()) {
        return offset;
    }
    offset * (board_size / css_size)
}

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Extract the pointer offset relative to the canvas
pub fn get_offset_from_event(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_nudge() {
        assert_eq!(
            handle_key_down("ArrowLeft"),
            Some(Command::Nudge(NudgeDirection::Left))
        );
        assert_eq!(
            handle_key_down("d"),
            Some(Command::Nudge(NudgeDirection::Right))
        );
        assert_eq!(handle_key_down("ArrowUp"), None);
        assert_eq!(handle_key_down(" "), None);
    }

    #[test]
    fn test_pointer_phases_map_to_aim_commands() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(handle_pointer(PointerPhase::Down, p), Command::BeginAim(p));
        assert_eq!(handle_pointer(PointerPhase::Move, p), Command::UpdateAim(p));
        assert_eq!(handle_pointer(PointerPhase::Up, p), Command::ReleaseAim(p));
    }

    #[test]
    fn test_canvas_to_board_scales() {
        let board = canvas_to_board(Vec2::new(150.0, 75.0), Vec2::new(300.0, 300.0), 600.0);
        assert_eq!(board, Vec2::new(300.0, 150.0));
    }

    #[test]
    fn test_canvas_to_board_without_layout() {
        let p = Vec2::new(42.0, 7.0);
        assert_eq!(canvas_to_board(p, Vec2::ZERO, 600.0), p);
        assert_eq!(canvas_to_board(p, Vec2::new(f32::NAN, 300.0), 600.0), p);
        assert_eq!(canvas_to_board(p, Vec2::new(300.0, f32::INFINITY), 600.0), p);
    }
}
