use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub window_width: u32,         // pixel
    pub window_height: u32,        // pixel
    pub slideshow_interval: u64,   // milli second
    pub slider_frame_width: u32,   // pixel
    pub slider_frame_height: u32,  // pixel
    pub asset_dir: String,         // directory the image files are read from
}
