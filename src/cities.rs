use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geo::GeoPoint;

/// Geodetic anchor for the startup camera view.
pub const START_CITY: GeoPoint = GeoPoint::new(41.0082, 28.9784); // Istanbul

/// A labeled location on the globe. An empty `name` places the image marker
/// without a text label.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f32,
    pub lon: f32,
    pub image: String,
}

impl City {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// The built-in city table. A JSON file with the same shape can replace it
/// via the `--cities` flag.
pub fn default_cities() -> Vec<City> {
    let entries: [(&str, f32, f32, &str); 13] = [
        ("Morocco", 31.6286, -7.9920, "morocco.jpg"),
        ("Czech", 50.0755, 14.4378, "prague.jpg"),
        ("France", 44.8378, -0.5792, "bordeaux.jpg"),
        ("Germany", 50.9351, 6.9531, "koln.jpg"),
        ("Portugal", 41.1579, -8.6291, "porto.jpg"),
        ("England", 51.5074, -0.1278, "london.jpg"),
        ("Greenland", 75.7069, -30.6043, "greenland.jpg"),
        ("Alaska", 60.5888, -160.4931, "alaska.jpg"),
        ("", 29.6777, -192.85574, "whale.jpg"),
        ("", 11.8419, -175.7864, "dragon.jpg"),
        ("", -21.0926, -185.1834, "shark.jpg"),
        ("", -43.5590, -175.8294, "fish.jpg"),
        ("Nigeria", 7.6991, 4.2390, "nigeria.jpg"),
    ];

    entries
        .into_iter()
        .map(|(name, lat, lon, image)| City {
            name: name.to_string(),
            lat,
            lon,
            image: image.to_string(),
        })
        .collect()
}

/// Loads a replacement city table from a JSON array.
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read city table: {:?}", path))?;

    let cities: Vec<City> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse city table: {:?}", path))?;

    Ok(cities)
}
