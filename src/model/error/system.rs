use crate::r#macro::loggable::loggable;

loggable! {
    SystemError {
        #[error("Configuration file not found: {reason}")]
        ConfigNotFound { reason: String } => tracing::Level::ERROR,

        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,
    }
}
