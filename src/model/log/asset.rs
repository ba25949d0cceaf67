use crate::r#macro::loggable::loggable;

loggable! {
    AssetLog {
        #[error("Image catalog loaded ({loaded} loaded, {missing} missing)")]
        CatalogLoaded { loaded: usize, missing: usize } => tracing::Level::INFO,

        #[error("No slider images available, slideshow stays disabled")]
        SlideshowEmpty => tracing::Level::WARN,
    }
}
