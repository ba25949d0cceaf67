use crate::r#macro::loggable::loggable;

loggable! {
    AssetError {
        #[error("Failed to load {identifier}: {reason}")]
        LoadFailed { identifier: String, reason: String } => tracing::Level::WARN,
    }
}
