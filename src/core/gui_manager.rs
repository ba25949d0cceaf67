use crate::core::app_config::AppConfig;
use crate::model::asset::AssetCatalog;
use crate::model::error::misc::MiscError;
use crate::model::error::Error;
use crate::ui::shell::AppShell;
use crate::utils::assets::Assets;
use crate::utils::font;
use eframe::egui;
use std::sync::Arc;

pub const APP_TITLE: &str = "Ghatak Sports Academy India";

pub struct GuiManager {
    app_config: Arc<AppConfig>,
    catalog: Arc<AssetCatalog>,
}

impl GuiManager {
    pub fn new(app_config: Arc<AppConfig>, catalog: Arc<AssetCatalog>) -> Self {
        Self { app_config, catalog }
    }

    /// Opens the single fixed-size window and blocks until it closes.
    pub fn start(&self) -> Result<(), Error> {
        let app_config = self.app_config.clone();
        let catalog = self.catalog.clone();

        let icon_data = Assets::load_app_icon()?;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    app_config.window_width as f32,
                    app_config.window_height as f32,
                ])
                .with_title(APP_TITLE)
                .with_resizable(false)
                .with_icon(icon_data),
            centered: true,
            ..Default::default()
        };

        eframe::run_native(
            "GsaiAdmin",
            options,
            Box::new(move |cc| {
                font::setup_system_fonts(&cc.egui_ctx);
                Ok(Box::new(AppShell::new(app_config, catalog, &cc.egui_ctx)))
            }),
        )
        .map_err(|err| MiscError::UIPlatformError {
            reason: err.to_string(),
        })?;

        Ok(())
    }
}
