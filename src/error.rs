//! Startup error taxonomy. Everything here is fatal: the prototype has no
//! retry or degraded-mode path, so `main` aborts with the diagnostic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Missing or undecodable image/font file, or an unreadable level file.
    #[error("failed to load `{path}`: {reason}")]
    AssetLoad { path: String, reason: String },

    /// The level file is not a rectangular grid of codes.
    #[error("malformed level `{path}`: {reason}")]
    MalformedLevel { path: String, reason: String },

    /// A code (after alias resolution) is absent from the registry.
    #[error("unknown tile code `{code}` ({context})")]
    UnknownTileCode { code: String, context: String },

    /// A direction symbol outside the `uldr` set.
    #[error("`{0}` is not one of the directions u, l, d or r")]
    InvalidDirection(char),
}
