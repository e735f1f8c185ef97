pub mod font;
pub mod model;
pub mod texture;

pub use font::{load_font, Glyph, StrokeFont};
pub use model::load_model;
pub use texture::{load_texture, TextureData};

use std::path::Path;

use anyhow::Result;
use futures::future;

use crate::cities::City;
use crate::mesh::MeshData;

/// Asset locations relative to the assets root.
pub const EARTH_TEXTURE: &str = "images/earth-2k.jpg";
pub const AIRPLANE_MODEL: &str = "model/airplane.glb";
pub const LABEL_FONT: &str = "font/stroke.json";
pub const CITY_IMAGE_DIR: &str = "images";

/// Everything the scene assembler needs, resolved before the render loop
/// starts. `font` and each city image are None when their load failed.
pub struct LoadedAssets {
    pub earth_texture: TextureData,
    pub airplane: MeshData,
    pub font: Option<StrokeFont>,
    pub city_images: Vec<Option<TextureData>>,
}

/// Loads every startup asset and joins the futures before returning.
///
/// The globe texture and airplane model are required: the first failure
/// aborts startup with a diagnostic naming the path. The font and the city
/// images degrade gracefully (no labels / untextured marker).
pub async fn load_assets(root: &Path, cities: &[City]) -> Result<LoadedAssets> {
    let (earth_texture, airplane) = futures::try_join!(
        load_texture(root.join(EARTH_TEXTURE)),
        load_model(root.join(AIRPLANE_MODEL)),
    )?;

    let font = match load_font(root.join(LABEL_FONT)).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Font load failed, labels disabled: {:#}", err);
            None
        }
    };

    let city_images = future::join_all(cities.iter().map(|city| async move {
        match load_texture(root.join(CITY_IMAGE_DIR).join(&city.image)).await {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("City image load failed, marker untextured: {:#}", err);
                None
            }
        }
    }))
    .await;

    Ok(LoadedAssets {
        earth_texture,
        airplane,
        font,
        city_images,
    })
}
