use crate::core::app_config::AppConfig;
use crate::model::asset::AssetCatalog;
use crate::model::log::system::SystemLog;
use crate::model::screen::{ScreenAction, ScreenKind, ScreenStep};
use crate::ui::common::{draw_notice, Notice};
use crate::ui::dashboard_page::DashboardPage;
use crate::ui::login_page::LoginPage;
use eframe::egui;
use eframe::{App, Frame};
use std::collections::VecDeque;
use std::sync::Arc;

/// The screen that currently owns the window. Replacing the variant drops
/// every element of the old screen.
enum ActiveScreen {
    Login(LoginPage),
    Dashboard(DashboardPage),
}

impl ActiveScreen {
    fn kind(&self) -> ScreenKind {
        match self {
            Self::Login(_) => ScreenKind::Login,
            Self::Dashboard(_) => ScreenKind::AdminDashboard,
        }
    }

    fn ui(&mut self, ctx: &egui::Context) -> Option<ScreenAction> {
        match self {
            Self::Login(page) => page.ui(ctx),
            Self::Dashboard(page) => page.ui(ctx),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Login(page) => page.deactivate(),
            Self::Dashboard(page) => page.deactivate(),
        }
    }
}

/// Root of the interface: owns the live screen and the dialog queue, and
/// applies the screen state machine's verdicts.
pub struct AppShell {
    app_config: Arc<AppConfig>,
    catalog: Arc<AssetCatalog>,
    screen: ActiveScreen,
    notices: VecDeque<Notice>,
}

impl AppShell {
    pub fn new(
        app_config: Arc<AppConfig>,
        catalog: Arc<AssetCatalog>,
        ctx: &egui::Context,
    ) -> Self {
        // One dialog per failed image, shown before anything else.
        let notices = catalog.failures().map(Notice::asset_failure).collect();
        let screen = ActiveScreen::Login(LoginPage::new(&catalog, ctx));
        Self {
            app_config,
            catalog,
            screen,
            notices,
        }
    }

    fn build_screen(&self, kind: ScreenKind, ctx: &egui::Context) -> ActiveScreen {
        match kind {
            ScreenKind::Login => ActiveScreen::Login(LoginPage::new(&self.catalog, ctx)),
            ScreenKind::AdminDashboard => ActiveScreen::Dashboard(DashboardPage::new(
                &self.app_config,
                &self.catalog,
                ctx,
            )),
        }
    }

    fn apply_action(&mut self, action: ScreenAction, ctx: &egui::Context) {
        match self.screen.kind().apply(action) {
            ScreenStep::Stay => match action {
                ScreenAction::Sidebar(command) => {
                    self.notices.push_back(Notice::acknowledge(command.label()));
                }
                ScreenAction::Social(link) => {
                    self.notices.push_back(Notice::acknowledge(link.label()));
                }
                _ => {}
            },
            ScreenStep::Switch(kind) => {
                // Old elements go before new ones are built.
                self.screen.deactivate();
                self.screen = self.build_screen(kind, ctx);
            }
            ScreenStep::Quit => {
                self.screen.deactivate();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl App for AppShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let action = self.screen.ui(ctx);

        if let Some(front) = self.notices.front() {
            if draw_notice(ctx, front) {
                self.notices.pop_front();
            }
        }

        if let Some(action) = action {
            self.apply_action(action, ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.screen.deactivate();
        SystemLog::GuiExited.log();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::asset::ImageAsset;
    use crate::model::config::Config;
    use crate::model::screen::SidebarAction;

    fn test_shell(catalog: AssetCatalog) -> (AppShell, egui::Context) {
        let ctx = egui::Context::default();
        let app_config = Arc::new(AppConfig::from_config(Config {
            window_width: 1200,
            window_height: 860,
            slideshow_interval: 2000,
            slider_frame_width: 700,
            slider_frame_height: 340,
            asset_dir: ".".to_string(),
        }));
        let shell = AppShell::new(app_config, Arc::new(catalog), &ctx);
        (shell, ctx)
    }

    #[test]
    fn the_shell_starts_on_the_login_screen() {
        let (shell, _ctx) = test_shell(AssetCatalog::default());
        assert_eq!(shell.screen.kind(), ScreenKind::Login);
    }

    #[test]
    fn empty_credentials_still_reach_the_dashboard() {
        let (mut shell, ctx) = test_shell(AssetCatalog::default());
        // The login form starts blank and is never validated.
        shell.apply_action(ScreenAction::LoginSubmitted, &ctx);
        assert_eq!(shell.screen.kind(), ScreenKind::AdminDashboard);
    }

    #[test]
    fn sidebar_actions_queue_one_acknowledgement_each() {
        let (mut shell, ctx) = test_shell(AssetCatalog::default());
        shell.apply_action(ScreenAction::LoginSubmitted, &ctx);

        shell.apply_action(ScreenAction::Sidebar(SidebarAction::StudentPayment), &ctx);
        assert_eq!(shell.notices.len(), 1);
        assert!(shell.notices[0].message.contains("Student Payment"));
        assert_eq!(shell.screen.kind(), ScreenKind::AdminDashboard);
    }

    #[test]
    fn startup_failures_become_dialogs() {
        let mut catalog = AssetCatalog::default();
        catalog.insert(ImageAsset::missing(
            "logo.png".to_string(),
            "no such file".to_string(),
        ));
        let (shell, _ctx) = test_shell(catalog);

        assert_eq!(shell.notices.len(), 1);
        assert!(shell.notices[0].message.contains("logo.png"));
        assert!(shell.notices[0].message.contains("no such file"));
    }
}
