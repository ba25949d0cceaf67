/// The closed set of application screens. Exactly one is live at a time;
/// switching destroys the previous screen's elements before the next
/// screen's are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Login,
    AdminDashboard,
}

/// Sidebar stubs of the admin dashboard. Each one only pops an
/// acknowledgement dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    StudentManagement,
    StudentPayment,
    ViewAnalytics,
    Announcements,
    ChangePassword,
    UpdateApplication,
}

impl SidebarAction {
    pub fn all() -> [Self; 6] {
        [
            Self::StudentManagement,
            Self::StudentPayment,
            Self::ViewAnalytics,
            Self::Announcements,
            Self::ChangePassword,
            Self::UpdateApplication,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentManagement => "Student Management",
            Self::StudentPayment => "Student Payment",
            Self::ViewAnalytics => "View Analytics",
            Self::Announcements => "Announcements",
            Self::ChangePassword => "Change Password",
            Self::UpdateApplication => "Update Application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Instagram,
    Facebook,
    GoogleMaps,
}

impl SocialLink {
    pub fn all() -> [Self; 3] {
        [Self::Instagram, Self::Facebook, Self::GoogleMaps]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::GoogleMaps => "Google Maps",
        }
    }

    /// Image file the button is drawn with.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Instagram => "instagram.png",
            Self::Facebook => "facebook.png",
            Self::GoogleMaps => "google-maps.png",
        }
    }
}

/// Everything a screen can ask of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    LoginSubmitted,
    Sidebar(SidebarAction),
    Social(SocialLink),
    ExitRequested,
}

/// Controller verdict for an action received while a given screen is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStep {
    Stay,
    Switch(ScreenKind),
    Quit,
}

impl ScreenKind {
    /// The screen transition table. Login succeeds unconditionally: there
    /// is no credential check, the form is cosmetic.
    pub fn apply(self, action: ScreenAction) -> ScreenStep {
        match (self, action) {
            (Self::Login, ScreenAction::LoginSubmitted) => {
                ScreenStep::Switch(Self::AdminDashboard)
            }
            (Self::AdminDashboard, ScreenAction::ExitRequested) => ScreenStep::Quit,
            _ => ScreenStep::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_submit_always_reaches_dashboard() {
        // No credential validation: the action alone drives the switch,
        // whatever the form fields held.
        assert_eq!(
            ScreenKind::Login.apply(ScreenAction::LoginSubmitted),
            ScreenStep::Switch(ScreenKind::AdminDashboard)
        );
    }

    #[test]
    fn sidebar_actions_keep_the_dashboard_live() {
        for action in SidebarAction::all() {
            assert_eq!(
                ScreenKind::AdminDashboard.apply(ScreenAction::Sidebar(action)),
                ScreenStep::Stay
            );
        }
    }

    #[test]
    fn social_links_keep_the_dashboard_live() {
        for link in SocialLink::all() {
            assert_eq!(
                ScreenKind::AdminDashboard.apply(ScreenAction::Social(link)),
                ScreenStep::Stay
            );
        }
    }

    #[test]
    fn close_application_quits_from_the_dashboard() {
        assert_eq!(
            ScreenKind::AdminDashboard.apply(ScreenAction::ExitRequested),
            ScreenStep::Quit
        );
    }

    #[test]
    fn stray_actions_do_not_move_the_login_screen() {
        assert_eq!(
            ScreenKind::Login.apply(ScreenAction::Sidebar(SidebarAction::ViewAnalytics)),
            ScreenStep::Stay
        );
        assert_eq!(
            ScreenKind::Login.apply(ScreenAction::ExitRequested),
            ScreenStep::Stay
        );
    }

    #[test]
    fn repeated_login_submit_is_inert_on_the_dashboard() {
        assert_eq!(
            ScreenKind::AdminDashboard.apply(ScreenAction::LoginSubmitted),
            ScreenStep::Stay
        );
    }
}
