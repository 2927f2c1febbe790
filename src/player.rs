//! Player entity: grid position, facing, and the debug coordinate label.

use raylib::prelude::*;

use crate::direction::Direction;
use crate::textures::Rotations;

pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const LABEL_SPACING: f32 = 1.0;

pub struct Player {
    /// Current grid cell.
    pub pos: (i32, i32),
    /// Cell before the last accepted move. Kept for debugging; nothing
    /// consumes it yet.
    pub last_pos: (i32, i32),
    pub facing: Direction,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: (x, y),
            last_pos: (x, y),
            facing: Direction::Down,
        }
    }

    /// Apply one movement event: remember the old cell, turn to face the
    /// direction, displace by one cell, clamped to the grid extents.
    pub fn step(&mut self, direction: Direction, width: i32, height: i32) {
        self.last_pos = self.pos;
        self.facing = direction;
        let (dx, dy) = direction.displacement();
        self.pos.0 = (self.pos.0 + dx).clamp(0, width - 1);
        self.pos.1 = (self.pos.1 + dy).clamp(0, height - 1);
    }

    /// Coordinate label first, sprite over it, both anchored at the
    /// cell's pixel origin.
    pub fn draw(&self, d: &mut RaylibDrawHandle, sprites: &Rotations, font: &Font) {
        let render_x = self.pos.0 * crate::TILE_SIZE;
        let render_y = self.pos.1 * crate::TILE_SIZE;

        let label = format!("{},{}", self.pos.0, self.pos.1);
        let extent = font.measure_text(&label, LABEL_FONT_SIZE, LABEL_SPACING);
        d.draw_rectangle(
            render_x,
            render_y,
            extent.x as i32,
            extent.y as i32,
            Color::WHITE,
        );
        d.draw_text_ex(
            font,
            &label,
            Vector2::new(render_x as f32, render_y as f32),
            LABEL_FONT_SIZE,
            LABEL_SPACING,
            Color::BLACK,
        );

        d.draw_texture(sprites.facing(self.facing), render_x, render_y, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: i32 = 10;
    const H: i32 = 8;

    #[test]
    fn test_step_sequence() {
        let mut player = Player::new(2, 2);

        player.step(Direction::Right, W, H);
        assert_eq!(player.pos, (3, 2));
        assert_eq!(player.facing, Direction::Right);

        player.step(Direction::Up, W, H);
        assert_eq!(player.pos, (3, 1));
        assert_eq!(player.facing, Direction::Up);
    }

    #[test]
    fn test_last_pos_tracks_previous_cell() {
        let mut player = Player::new(0, 0);
        assert_eq!(player.last_pos, (0, 0));

        player.step(Direction::Down, W, H);
        assert_eq!(player.last_pos, (0, 0));
        assert_eq!(player.pos, (0, 1));

        player.step(Direction::Right, W, H);
        assert_eq!(player.last_pos, (0, 1));
    }

    #[test]
    fn test_steps_clamp_at_grid_edges() {
        let mut player = Player::new(0, 0);

        player.step(Direction::Left, W, H);
        assert_eq!(player.pos, (0, 0));
        // Facing still turns even when the walk is blocked.
        assert_eq!(player.facing, Direction::Left);

        player.step(Direction::Up, W, H);
        assert_eq!(player.pos, (0, 0));

        let mut player = Player::new(W - 1, H - 1);
        player.step(Direction::Right, W, H);
        assert_eq!(player.pos, (W - 1, H - 1));
        player.step(Direction::Down, W, H);
        assert_eq!(player.pos, (W - 1, H - 1));
    }

    #[test]
    fn test_starts_facing_down() {
        assert_eq!(Player::new(0, 0).facing, Direction::Down);
    }
}
