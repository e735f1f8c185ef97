use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One glyph: advance width plus stroke polylines in em units
/// (x right, y up, roughly 0..1).
#[derive(Debug, Clone, Deserialize)]
pub struct Glyph {
    pub width: f32,
    pub strokes: Vec<Vec<[f32; 2]>>,
}

/// A stroke (line) font for city labels, loaded from a JSON file mapping
/// single-character keys to glyphs.
#[derive(Debug, Clone, Deserialize)]
pub struct StrokeFont {
    pub name: String,
    pub glyphs: HashMap<char, Glyph>,
}

impl StrokeFont {
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }
}

/// Loads the label font. Failure is non-fatal to the caller: the scene is
/// assembled without labels.
pub async fn load_font(path: impl AsRef<Path>) -> Result<StrokeFont> {
    let path = path.as_ref();

    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read font: {:?}", path))?;

    let font: StrokeFont = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse font: {:?}", path))?;

    log::info!("Loaded font {:?} ({} glyphs)", font.name, font.glyphs.len());

    Ok(font)
}
