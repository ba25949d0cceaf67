use crate::core::asset_manager::LOGO_IMAGE;
use crate::core::gui_manager::APP_TITLE;
use crate::model::asset::AssetCatalog;
use crate::model::screen::ScreenAction;
use crate::ui::common::upload_bitmap;
use eframe::egui;

/// The login form. Credentials are read but never checked; submitting
/// always succeeds.
pub struct LoginPage {
    username: String,
    password: String,
    logo: Option<egui::TextureHandle>,
}

impl LoginPage {
    pub fn new(catalog: &AssetCatalog, ctx: &egui::Context) -> Self {
        let logo = catalog
            .bitmap(LOGO_IMAGE)
            .map(|bitmap| upload_bitmap(ctx, LOGO_IMAGE, bitmap));
        Self {
            username: String::new(),
            password: String::new(),
            logo,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<ScreenAction> {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(120.0);
            ui.vertical_centered(|ui| {
                if let Some(logo) = &self.logo {
                    ui.add(egui::Image::new(logo).max_height(160.0));
                    ui.add_space(16.0);
                }

                ui.heading(egui::RichText::new(APP_TITLE).color(egui::Color32::RED).strong());
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Admin Login").strong());
                ui.add_space(24.0);

                egui::Grid::new("login_grid")
                    .num_columns(2)
                    .spacing([10.0, 12.0])
                    .show(ui, |ui| {
                        ui.label("Username");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.username)
                                .desired_width(250.0),
                        );
                        ui.end_row();

                        ui.label("Password");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.password)
                                .password(true)
                                .desired_width(250.0),
                        );
                        ui.end_row();
                    });

                ui.add_space(24.0);
                let login = ui.add_sized([250.0, 40.0], egui::Button::new("Login"));
                if login.clicked() {
                    action = Some(ScreenAction::LoginSubmitted);
                }
            });
        });

        action
    }

    /// Releases the page's visual elements ahead of the screen switch.
    pub fn deactivate(&mut self) {
        self.logo = None;
    }
}
