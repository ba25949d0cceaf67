use crate::r#macro::loggable::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,

        #[error("Gui Exited")]
        GuiExited => tracing::Level::INFO,
    }
}
