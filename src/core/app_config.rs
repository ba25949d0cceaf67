use crate::model::config::{Config, ConfigTable};
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::fs;
use std::ops::Deref;

const CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        let config = Self::load_config_file()?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    #[cfg(test)]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    fn load_config_file() -> Result<Config, Error> {
        let toml_string = fs::read_to_string(CONFIG_PATH).map_err(|err| {
            SystemError::ConfigNotFound {
                reason: err.to_string(),
            }
        })?;
        let config = toml::from_str::<ConfigTable>(&toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.to_string(),
            })?
            .config;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), Error> {
        let claims = [
            (config.window_width > 0, "window_width must be positive"),
            (config.window_height > 0, "window_height must be positive"),
            (
                config.slideshow_interval > 0,
                "slideshow_interval must be positive",
            ),
            (
                config.slider_frame_width > 0,
                "slider_frame_width must be positive",
            ),
            (
                config.slider_frame_height > 0,
                "slider_frame_height must be positive",
            ),
        ];
        for (holds, reason) in claims {
            if !holds {
                return Err(SystemError::InvalidConfig {
                    reason: reason.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}
