use crate::model::error::misc::MiscError;
use crate::model::error::Error;
use eframe::egui::IconData;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    /// The window icon ships inside the binary; the catalog images on disk
    /// are allowed to be absent, this one is not.
    pub fn load_app_icon() -> Result<IconData, Error> {
        let icon_bytes = Assets::get("icon.ico").ok_or(MiscError::AssetFileNotFound)?;

        let image = image::load_from_memory(&icon_bytes.data)
            .map_err(|err| MiscError::DecodeError {
                reason: err.to_string(),
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Ok(IconData {
            rgba,
            width,
            height,
        })
    }
}
