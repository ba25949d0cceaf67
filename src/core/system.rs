use crate::core::app_config::AppConfig;
use crate::core::asset_manager::AssetManager;
use crate::core::gui_manager::GuiManager;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use std::sync::Arc;

pub struct System;

impl System {
    /// Startup sequence: configuration, image catalog, then the blocking
    /// GUI loop. Image loads happen here, synchronously, before the
    /// window opens.
    pub fn run() -> Result<(), Error> {
        SystemLog::Initializing.log();
        let app_config = Arc::new(AppConfig::new()?);
        let catalog = Arc::new(AssetManager::load(&app_config));
        SystemLog::InitializeComplete.log();

        GuiManager::new(app_config, catalog).start()
    }
}
