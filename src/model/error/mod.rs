pub mod asset;
pub mod misc;
pub mod system;

use crate::model::error::asset::AssetError;
use crate::model::error::misc::MiscError;
use crate::model::error::system::SystemError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Asset(AssetError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::Asset(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<AssetError> for Error {
    fn from(error: AssetError) -> Self {
        Self::Asset(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
