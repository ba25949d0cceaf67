use crate::r#macro::loggable::loggable;

loggable! {
    MiscError {
        #[error("Embedded asset not found")]
        AssetFileNotFound => tracing::Level::ERROR,

        #[error("Failed to decode embedded asset: {reason}")]
        DecodeError { reason: String } => tracing::Level::ERROR,

        #[error("UI platform error: {reason}")]
        UIPlatformError { reason: String } => tracing::Level::ERROR,
    }
}
