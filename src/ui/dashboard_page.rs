use crate::core::gui_manager::APP_TITLE;
use crate::core::slideshow::Slideshow;
use crate::model::asset::AssetCatalog;
use crate::model::config::Config;
use crate::model::screen::{ScreenAction, SidebarAction, SocialLink};
use crate::ui::common::upload_bitmap;
use eframe::egui;
use std::time::{Duration, Instant};

const SIDEBAR_WIDTH: f32 = 310.0;
const INTRO_TEXT: &str = "Ghatak Sports Academy India (GSAI) is dedicated to excellence \
in martial arts and self-defense. We combine traditional techniques with modern training \
to help you achieve your full potential in a disciplined, respectful environment.";
const FOUNDER_TEXT: &str = "Founded by Nitesh Yadav in 2025";
const FOOTER_TEXT: &str = "Made with ❤ by EllowDigitals";

/// The admin dashboard: a sidebar of stub actions and the slideshow body.
pub struct DashboardPage {
    slideshow: Slideshow<egui::TextureHandle>,
    social_icons: Vec<(SocialLink, Option<egui::TextureHandle>)>,
}

impl DashboardPage {
    pub fn new(config: &Config, catalog: &AssetCatalog, ctx: &egui::Context) -> Self {
        let frames = catalog
            .slider_frames()
            .iter()
            .enumerate()
            .map(|(index, frame)| upload_bitmap(ctx, &format!("slider_frame_{index}"), frame))
            .collect();
        let mut slideshow = Slideshow::new(
            frames,
            Duration::from_millis(config.slideshow_interval),
        );
        slideshow.start(Instant::now());

        let social_icons = SocialLink::all()
            .into_iter()
            .map(|link| {
                let icon = catalog
                    .bitmap(link.identifier())
                    .map(|bitmap| upload_bitmap(ctx, link.identifier(), bitmap));
                (link, icon)
            })
            .collect();

        Self {
            slideshow,
            social_icons,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<ScreenAction> {
        let now = Instant::now();
        self.slideshow.tick(now);

        let action = self.draw_sidebar(ctx);
        self.draw_body(ctx);

        // Wake the event loop exactly when the next frame is due.
        if let Some(remaining) = self.slideshow.time_until_tick(now) {
            ctx.request_repaint_after(remaining);
        }

        action
    }

    fn draw_sidebar(&mut self, ctx: &egui::Context) -> Option<ScreenAction> {
        let mut action = None;

        egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    for sidebar_action in SidebarAction::all() {
                        let button = ui.add_sized(
                            [200.0, 40.0],
                            egui::Button::new(sidebar_action.label()),
                        );
                        if button.clicked() {
                            action = Some(ScreenAction::Sidebar(sidebar_action));
                        }
                        ui.add_space(12.0);
                    }

                    let close =
                        ui.add_sized([200.0, 40.0], egui::Button::new("Close Application"));
                    if close.clicked() {
                        action = Some(ScreenAction::ExitRequested);
                    }
                });

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new(FOOTER_TEXT)
                            .color(egui::Color32::from_rgb(0x00, 0x96, 0xFF))
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space((SIDEBAR_WIDTH - 3.0 * 48.0) / 2.0);
                        for (link, icon) in &self.social_icons {
                            let clicked = match icon {
                                Some(texture) => ui
                                    .add_sized(
                                        [40.0, 40.0],
                                        egui::ImageButton::new(texture),
                                    )
                                    .clicked(),
                                None => ui.small_button(link.label()).clicked(),
                            };
                            if clicked {
                                action = Some(ScreenAction::Social(*link));
                            }
                        }
                    });
                });
            });

        action
    }

    fn draw_body(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(50.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new(APP_TITLE)
                        .color(egui::Color32::RED)
                        .strong(),
                );
                ui.add_space(20.0);
                ui.add(egui::Label::new(INTRO_TEXT).wrap());
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(FOUNDER_TEXT)
                        .color(egui::Color32::BLUE)
                        .strong(),
                );
                ui.add_space(40.0);

                match self.slideshow.current() {
                    Some(frame) => {
                        ui.add(egui::Image::new(frame));
                    }
                    None => {
                        ui.label("No slider images available");
                    }
                }
            });
        });
    }

    /// Cancels the slideshow before the page's elements are released, so
    /// no tick can fire against a torn-down screen.
    pub fn deactivate(&mut self) {
        self.slideshow.cancel();
    }

    #[cfg(test)]
    pub fn slideshow_running(&self) -> bool {
        self.slideshow.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn test_config() -> Config {
        Config {
            window_width: 1200,
            window_height: 860,
            slideshow_interval: 2000,
            slider_frame_width: 700,
            slider_frame_height: 340,
            asset_dir: ".".to_string(),
        }
    }

    fn catalog_with_frames(count: usize) -> AssetCatalog {
        let mut catalog = AssetCatalog::default();
        catalog.set_slider_frames(
            (0..count)
                .map(|_| RgbaImage::from_pixel(700, 340, Rgba([0, 0, 0, 255])))
                .collect(),
        );
        catalog
    }

    #[test]
    fn slideshow_starts_with_the_page_when_frames_exist() {
        let ctx = eframe::egui::Context::default();
        let page = DashboardPage::new(&test_config(), &catalog_with_frames(3), &ctx);
        assert!(page.slideshow_running());
    }

    #[test]
    fn slideshow_stays_idle_without_frames() {
        let ctx = eframe::egui::Context::default();
        let page = DashboardPage::new(&test_config(), &catalog_with_frames(0), &ctx);
        assert!(!page.slideshow_running());
    }

    #[test]
    fn deactivate_cancels_the_pending_tick() {
        let ctx = eframe::egui::Context::default();
        let mut page = DashboardPage::new(&test_config(), &catalog_with_frames(3), &ctx);
        page.deactivate();
        assert!(!page.slideshow_running());
    }
}
