//! WebAssembly host for the carrom engine
//!
//! The page owns the canvas and the scoreboard markup. This crate forwards
//! pointer and keyboard events into the engine, steps it once per animation
//! frame, and hands back flat buffers the page draws from.

pub mod input;
pub mod simulation;

use glam::Vec2;
use input::{canvas_to_board, get_key_from_event, get_offset_from_event, PointerPhase};
use simulation::LocalGame;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

/// Install the panic hook and console logger
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("carrom client loaded");
}

/// Game handle exported to JavaScript
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct CarromClient {
    game: LocalGame,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl CarromClient {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            game: LocalGame::new(),
        }
    }

    /// Build a client from a JSON config override
    pub fn with_config(json: &str) -> Result<CarromClient, JsValue> {
        LocalGame::from_config_json(json)
            .map(|game| Self { game })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Step the simulation; call from `requestAnimationFrame` with its timestamp
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.game.frame(timestamp_ms);
    }

    pub fn pointer_down(&mut self, event: &MouseEvent, css_width: f32, css_height: f32) {
        self.pointer(PointerPhase::Down, event, css_width, css_height);
    }

    pub fn pointer_move(&mut self, event: &MouseEvent, css_width: f32, css_height: f32) {
        self.pointer(PointerPhase::Move, event, css_width, css_height);
    }

    pub fn pointer_up(&mut self, event: &MouseEvent, css_width: f32, css_height: f32) {
        self.pointer(PointerPhase::Up, event, css_width, css_height);
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        let key = get_key_from_event(event);
        if let Some(command) = input::handle_key_down(&key) {
            self.game.push(command);
        }
    }

    /// x, y, radius, kind, active for every disc (pieces first, striker last)
    pub fn discs(&self) -> Vec<f32> {
        self.game.disc_buffer()
    }

    /// Aim guide endpoints, empty when not aiming
    pub fn aim_line(&self) -> Vec<f32> {
        self.game.aim_buffer()
    }

    /// Scores for players 1 to 4
    pub fn scores(&self) -> Vec<u32> {
        self.game.scores()
    }

    pub fn current_player(&self) -> u8 {
        self.game.state.current_player()
    }

    pub fn is_settling(&self) -> bool {
        self.game.state.turn.is_settling()
    }

    /// Scores changed during the last frame
    pub fn scores_changed(&self) -> bool {
        self.game.state.events.scores_changed
    }

    /// Turn passed to the next player during the last frame
    pub fn turn_changed(&self) -> bool {
        self.game.state.events.turn_changed
    }

    pub fn board_size(&self) -> f32 {
        self.game.state.board.size
    }

    pub fn pocket_radius(&self) -> f32 {
        self.game.state.board.pocket_radius
    }
}

impl CarromClient {
    fn pointer(&mut self, phase: PointerPhase, event: &MouseEvent, css_width: f32, css_height: f32) {
        let point = canvas_to_board(
            get_offset_from_event(event),
            Vec2::new(css_width, css_height),
            self.game.state.board.size,
        );
        self.game.push(input::handle_pointer(phase, point));
    }
}

impl Default for CarromClient {
    fn default() -> Self {
        Self::new()
    }
}
