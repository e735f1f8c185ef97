use std::path::Path;

use anyhow::{Context, Result};

/// Decoded RGBA8 image ready for GPU upload.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// 1x1 opaque white placeholder for untextured materials.
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![255, 255, 255, 255],
        }
    }
}

/// Loads and decodes an image file (png or jpeg) into RGBA8.
pub async fn load_texture(path: impl AsRef<Path>) -> Result<TextureData> {
    let path = path.as_ref();

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read texture: {:?}", path))?;

    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode texture: {:?}", path))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("Loaded texture {:?} ({}x{})", path, width, height);

    Ok(TextureData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_placeholder_is_single_opaque_pixel() {
        let tex = TextureData::white();
        assert_eq!(tex.width, 1);
        assert_eq!(tex.height, 1);
        assert_eq!(tex.pixels, vec![255, 255, 255, 255]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = pollster::block_on(load_texture("no/such/texture.jpg")).unwrap_err();
        assert!(format!("{:#}", err).contains("no/such/texture.jpg"));
    }
}
