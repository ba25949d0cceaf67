use image::RgbaImage;
use std::collections::HashMap;

/// One entry of the image catalog. Created at load time, immutable after.
/// `bitmap` and `error` are mutually exclusive.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub identifier: String,
    pub bitmap: Option<RgbaImage>,
    pub error: Option<String>,
}

impl ImageAsset {
    pub fn loaded(identifier: String, bitmap: RgbaImage) -> Self {
        Self {
            identifier,
            bitmap: Some(bitmap),
            error: None,
        }
    }

    pub fn missing(identifier: String, reason: String) -> Self {
        Self {
            identifier,
            bitmap: None,
            error: Some(reason),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.bitmap.is_some()
    }
}

/// All images the application works with, keyed by identifier, plus the
/// slider frames already normalized to the configured frame size.
/// Failed identifiers keep their entry so every lookup is answerable.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: HashMap<String, ImageAsset>,
    failed: Vec<String>, // identifiers in load order
    slider_frames: Vec<RgbaImage>,
}

impl AssetCatalog {
    pub fn insert(&mut self, asset: ImageAsset) {
        if !asset.is_loaded() {
            self.failed.push(asset.identifier.clone());
        }
        self.assets.insert(asset.identifier.clone(), asset);
    }

    pub fn get(&self, identifier: &str) -> Option<&ImageAsset> {
        self.assets.get(identifier)
    }

    pub fn bitmap(&self, identifier: &str) -> Option<&RgbaImage> {
        self.assets.get(identifier).and_then(|asset| asset.bitmap.as_ref())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Assets that could not be loaded, in the order they were attempted.
    pub fn failures(&self) -> impl Iterator<Item = &ImageAsset> {
        self.failed.iter().filter_map(|identifier| self.assets.get(identifier))
    }

    pub fn set_slider_frames(&mut self, frames: Vec<RgbaImage>) {
        self.slider_frames = frames;
    }

    pub fn slider_frames(&self) -> &[RgbaImage] {
        &self.slider_frames
    }
}
