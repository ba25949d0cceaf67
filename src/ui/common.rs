use crate::model::asset::ImageAsset;
use eframe::egui;
use image::RgbaImage;

/// A modal acknowledgement. Queued notices are shown one at a time and
/// dismissed with their OK button.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn acknowledge(label: &str) -> Self {
        Self {
            title: "Action".to_string(),
            message: format!("{label} clicked"),
        }
    }

    pub fn asset_failure(asset: &ImageAsset) -> Self {
        let reason = asset.error.as_deref().unwrap_or("unknown error");
        Self {
            title: "Error".to_string(),
            message: format!("Failed to load {}: {}", asset.identifier, reason),
        }
    }
}

/// Draws `notice` as a centered dialog; returns whether OK was clicked.
pub fn draw_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;
    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(notice.message.as_str());
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}

/// Uploads a decoded bitmap as a GPU texture owned by the calling screen.
pub fn upload_bitmap(
    ctx: &egui::Context,
    name: &str,
    bitmap: &RgbaImage,
) -> egui::TextureHandle {
    let (width, height) = bitmap.dimensions();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        bitmap.as_raw(),
    );
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}
