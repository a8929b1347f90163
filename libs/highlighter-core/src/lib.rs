//! Core library for the code syntax highlighter add-on.
//!
//! Provides:
//! - Add-on configuration (supported languages, default language)
//! - Fenced code block detection
//! - Card render filter (fenced blocks to highlighter-ready markup)
//! - Asset path layout and browser-side loader snippets

pub mod assets;
pub mod config;
pub mod error;
pub mod fence;
pub mod render;

pub use assets::AssetRoot;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use fence::{escape_angle_brackets, scan, FencedBlock, FENCE_DELIMITER};
pub use render::render_card;
