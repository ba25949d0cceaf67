use crate::log;
use crate::model::asset::{AssetCatalog, ImageAsset};
use crate::model::config::Config;
use crate::model::error::asset::AssetError;
use crate::model::log::asset::AssetLog;
use crate::model::screen::SocialLink;
use crate::utils::normalize::normalize_to_frame;
use image::RgbaImage;
use std::path::Path;

pub const LOGO_IMAGE: &str = "logo.png";
const SLIDER_IMAGE_COUNT: usize = 6;

pub struct AssetManager;

impl AssetManager {
    /// Loads the full image catalog from the configured asset directory
    /// and prepares the normalized slider frames. Load failures never
    /// abort the batch; every identifier ends up with a catalog entry.
    pub fn load(config: &Config) -> AssetCatalog {
        let identifiers = Self::image_identifiers();
        let mut catalog = Self::load_batch(Path::new(&config.asset_dir), &identifiers);

        let frame_size = (config.slider_frame_width, config.slider_frame_height);
        let frames: Vec<RgbaImage> = Self::slider_identifiers()
            .iter()
            .filter_map(|identifier| catalog.bitmap(identifier))
            .map(|bitmap| normalize_to_frame(bitmap, frame_size))
            .collect();
        if frames.is_empty() {
            AssetLog::SlideshowEmpty.log();
        }
        catalog.set_slider_frames(frames);

        AssetLog::CatalogLoaded {
            loaded: catalog.len() - catalog.failures().count(),
            missing: catalog.failures().count(),
        }
        .log();
        catalog
    }

    /// Attempts every identifier, recording an absent entry instead of
    /// failing when a file is unreadable or undecodable.
    pub fn load_batch(asset_dir: &Path, identifiers: &[String]) -> AssetCatalog {
        let mut catalog = AssetCatalog::default();
        for identifier in identifiers {
            match Self::load_bitmap(asset_dir, identifier) {
                Ok(bitmap) => catalog.insert(ImageAsset::loaded(identifier.clone(), bitmap)),
                Err(reason) => {
                    let error = AssetError::LoadFailed {
                        identifier: identifier.clone(),
                        reason: reason.clone(),
                    };
                    log!(error, asset_dir.display().to_string());
                    catalog.insert(ImageAsset::missing(identifier.clone(), reason));
                }
            }
        }
        catalog
    }

    fn load_bitmap(asset_dir: &Path, identifier: &str) -> Result<RgbaImage, String> {
        image::open(asset_dir.join(identifier))
            .map(|decoded| decoded.to_rgba8())
            .map_err(|err| err.to_string())
    }

    pub fn image_identifiers() -> Vec<String> {
        std::iter::once(LOGO_IMAGE.to_string())
            .chain(SocialLink::all().map(|link| link.identifier().to_string()))
            .chain(Self::slider_identifiers())
            .collect()
    }

    pub fn slider_identifiers() -> Vec<String> {
        (1..=SLIDER_IMAGE_COUNT)
            .map(|index| format!("slider{index}.png"))
            .collect()
    }
}
