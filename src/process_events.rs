//! Input handling: drain the key queue and move the player.

use raylib::prelude::*;
use tracing::debug;

use crate::direction::Direction;
use crate::player::Player;
use crate::tiles::TileGrid;

/// One `step` per queued key-down event; holding a key does not repeat
/// per frame, only per generated event.
pub fn process_events(window: &mut RaylibHandle, player: &mut Player, grid: &TileGrid) {
    while let Some(key) = window.get_key_pressed() {
        let direction = match key {
            KeyboardKey::KEY_W => Some(Direction::Up),
            KeyboardKey::KEY_A => Some(Direction::Left),
            KeyboardKey::KEY_S => Some(Direction::Down),
            KeyboardKey::KEY_D => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = direction {
            player.step(direction, grid.width() as i32, grid.height() as i32);
            if let Some(tile) = grid.tile(player.pos.0, player.pos.1) {
                debug!("player moved {} onto {}", direction.symbol(), tile);
            }
        }
    }
}
