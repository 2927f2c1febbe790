//! Texture atlas: base images loaded from disk, rotated into the four
//! facings and uploaded to the GPU once at startup.

use std::collections::HashMap;
use std::path::Path;

use raylib::prelude::*;
use tracing::debug;

use crate::direction::Direction;
use crate::error::GameError;

/// Semantic texture names and their base image files. Every base image
/// faces down.
pub const BASE_TEXTURES: &[(&str, &str)] = &[
    ("floor", "floor.bmp"),
    ("counter", "counter.bmp"),
    ("shelf", "shelf1.bmp"),
    ("frozen", "frozen.bmp"),
    ("produce", "produce1.bmp"),
];

/// The four direction-rotated GPU variants of one base image.
pub struct Rotations {
    up: Texture2D,
    left: Texture2D,
    down: Texture2D,
    right: Texture2D,
}

impl Rotations {
    pub fn from_image(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        base: &Image,
        path: &str,
    ) -> Result<Self, GameError> {
        let mut upload = |direction: Direction| {
            let image = rotated(base, direction);
            rl.load_texture_from_image(thread, &image)
                .map_err(|e| GameError::AssetLoad {
                    path: path.to_string(),
                    reason: e.to_string(),
                })
        };
        Ok(Self {
            up: upload(Direction::Up)?,
            left: upload(Direction::Left)?,
            down: upload(Direction::Down)?,
            right: upload(Direction::Right)?,
        })
    }

    pub fn facing(&self, direction: Direction) -> &Texture2D {
        match direction {
            Direction::Up => &self.up,
            Direction::Left => &self.left,
            Direction::Down => &self.down,
            Direction::Right => &self.right,
        }
    }
}

/// Copy of `base` rotated to face `direction`.
fn rotated(base: &Image, direction: Direction) -> Image {
    let mut image = base.clone();
    for _ in 0..direction.quarter_turns_cw() {
        image.rotate_cw();
    }
    image
}

pub struct TextureAtlas {
    textures: HashMap<String, Rotations>,
}

impl TextureAtlas {
    /// Load every base texture from `img_dir` and build its rotations.
    /// Any missing or undecodable file aborts the load.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        img_dir: &Path,
    ) -> Result<Self, GameError> {
        let mut textures = HashMap::new();
        for (name, file) in BASE_TEXTURES {
            let path = img_dir.join(file);
            let base = load_image(&path)?;
            let rotations = Rotations::from_image(rl, thread, &base, &path.display().to_string())?;
            textures.insert((*name).to_string(), rotations);
            debug!("loaded texture `{}` from {}", name, path.display());
        }
        Ok(Self { textures })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.textures.keys().map(String::as_str)
    }

    pub fn variant(&self, name: &str, direction: Direction) -> Option<&Texture2D> {
        self.textures
            .get(name)
            .map(|rotations| rotations.facing(direction))
    }
}

pub fn load_image(path: &Path) -> Result<Image, GameError> {
    Image::load_image(&path.to_string_lossy()).map_err(|e| GameError::AssetLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
