// main.rs
#![allow(dead_code)]

mod codes;
mod direction;
mod error;
mod level;
mod player;
mod process_events;
mod textures;
mod tiles;

use std::path::Path;

use anyhow::Result;
use raylib::prelude::*;
use tracing::{debug, info};

use codes::TileCodeRegistry;
use error::GameError;
use level::CodeMatrix;
use player::Player;
use process_events::process_events;
use textures::{Rotations, TextureAtlas, load_image};
use tiles::TileGrid;

/// Tile edge in pixels; grid coordinates scale by this for rendering.
pub const TILE_SIZE: i32 = 40;

pub const IMG_DIR: &str = "img";
pub const PLAYER_SPRITE: &str = "character.png";
pub const FONT_FILE: &str = "fonts/DejaVuSansMono-Bold.ttf";
pub const DEFAULT_LEVEL: &str = "levels/0.csv";

/// Everything the render loop borrows, built once at startup.
struct GameContext {
    atlas: TextureAtlas,
    grid: TileGrid,
    player_sprites: Rotations,
    font: Font,
}

fn init_game(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    matrix: &CodeMatrix,
) -> Result<GameContext, GameError> {
    let atlas = TextureAtlas::load(rl, thread, Path::new(IMG_DIR))?;

    let mut registry = TileCodeRegistry::from_names(atlas.names());
    // Bare floor is so common the level files write it as a single x.
    registry.register_alias("x", "fld")?;

    let grid = TileGrid::to_grid_space(matrix, &registry)?;

    let sprite_path = Path::new(IMG_DIR).join(PLAYER_SPRITE);
    let base = load_image(&sprite_path)?;
    let player_sprites =
        Rotations::from_image(rl, thread, &base, &sprite_path.display().to_string())?;

    let font = rl
        .load_font(thread, FONT_FILE)
        .map_err(|e| GameError::AssetLoad {
            path: FONT_FILE.to_string(),
            reason: e.to_string(),
        })?;

    Ok(GameContext {
        atlas,
        grid,
        player_sprites,
        font,
    })
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let level_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    let matrix = level::load_level(Path::new(&level_path))?;

    let ncols = matrix.first().map_or(0, Vec::len);
    let nrows = matrix.len();
    let window_width = TILE_SIZE * ncols as i32;
    let window_height = TILE_SIZE * nrows as i32;

    let (mut window, thread) = raylib::init()
        .size(window_width, window_height)
        .title("minimart")
        .build();

    let ctx = init_game(&mut window, &thread, &matrix)?;
    info!(
        "loaded level `{}` ({}x{} tiles)",
        level_path,
        ctx.grid.width(),
        ctx.grid.height()
    );
    debug!("level layout:\n{}", ctx.grid);

    let mut player = Player::new(0, 0);

    while !window.window_should_close() {
        process_events(&mut window, &mut player, &ctx.grid);

        let mut d = window.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        ctx.grid.draw(&mut d, &ctx.atlas);
        player.draw(&mut d, &ctx.player_sprites, &ctx.font);
    }

    Ok(())
}
