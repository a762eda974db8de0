use crate::{navigation::Section, router::View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub section: Section,
    pub icon: &'static str,
}

/// Dashboard shortcut. Actions without a target are shown but do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: Option<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredentials {
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug)]
pub struct RoleProfile {
    /// Sidebar heading
    pub portal_title: &'static str,
    /// Header on the dashboard screen
    pub dashboard_title: &'static str,
    /// Label in role pickers
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub nav_items: &'static [NavItem],
    /// Allow-list of sections this role may open, and the view each one shows.
    pub routes: &'static [(Section, View)],
    pub default_view: View,
    pub quick_actions: &'static [QuickAction],
    pub demo_credentials: DemoCredentials,
}

const DEMO_PASSWORD: &str = "demo123";

macro_rules! nav {
    ($title:expr, $section:expr, $icon:expr) => {
        NavItem { title: $title, section: $section, icon: $icon }
    };
}

macro_rules! with_common_items {
    ($($item:expr),* $(,)?) => {
        &[
            nav!("Dashboard", Section::Dashboard, "⌂"),
            nav!("Attendance", Section::Attendance, "▦"),
            nav!("AI Assistant", Section::Chatbot, "✉"),
            nav!("Notifications", Section::Notifications, "♪"),
            $($item),*
        ]
    };
}

pub(super) static STUDENT: RoleProfile = RoleProfile {
    portal_title: "Student Portal",
    dashboard_title: "Student Dashboard",
    display_name: "Student",
    description: "View attendance, syllabus tracking, chat with AI assistant",
    icon: "🎓",
    nav_items: with_common_items![
        nav!("My Syllabus", Section::Syllabus, "▤"),
        nav!("My Progress", Section::Progress, "↗"),
        nav!("Schemes & Scholarships", Section::Schemes, "★"),
    ],
    routes: &[
        (Section::Dashboard, View::Dashboard),
        (Section::Chatbot, View::Chat),
        (Section::Syllabus, View::Syllabus),
        (Section::Progress, View::Progress),
        (Section::Schemes, View::Schemes),
    ],
    default_view: View::Dashboard,
    quick_actions: &[
        QuickAction { label: "View My Syllabus", icon: "▤", target: Some(Section::Syllabus) },
        QuickAction { label: "My Progress", icon: "▦", target: Some(Section::Progress) },
        QuickAction { label: "Schemes & Scholarships", icon: "★", target: Some(Section::Schemes) },
    ],
    demo_credentials: DemoCredentials { email: "student@edutrack.demo", password: DEMO_PASSWORD },
};

pub(super) static TEACHER: RoleProfile = RoleProfile {
    portal_title: "Teacher Portal",
    dashboard_title: "Teacher Dashboard",
    display_name: "Teacher",
    description: "Manage classes, today's work, attendance & syllabus tracking",
    icon: "👥",
    nav_items: with_common_items![
        nav!("Today's Work", Section::TodaysWork, "☰"),
        nav!("Syllabus Tracking", Section::Syllabus, "▤"),
        nav!("Reports", Section::Reports, "≡"),
    ],
    routes: &[
        (Section::Dashboard, View::Dashboard),
        (Section::Chatbot, View::Chat),
        (Section::TodaysWork, View::TodaysWork),
        (Section::Syllabus, View::Syllabus),
    ],
    default_view: View::Dashboard,
    quick_actions: &[
        QuickAction { label: "Syllabus Tracking", icon: "👥", target: Some(Section::Syllabus) },
        QuickAction { label: "Today's Work", icon: "▤", target: Some(Section::TodaysWork) },
        // Reports has no view of its own and lands back on the dashboard
        QuickAction { label: "Reports", icon: "≡", target: Some(Section::Reports) },
    ],
    demo_credentials: DemoCredentials { email: "teacher@edutrack.demo", password: DEMO_PASSWORD },
};

pub(super) static SCHOOL_ADMIN: RoleProfile = RoleProfile {
    portal_title: "School Admin",
    dashboard_title: "School Administrator Dashboard",
    display_name: "Administrator",
    description: "School management, staff oversight, system administration",
    icon: "⚙",
    nav_items: with_common_items![
        nav!("Staff Management", Section::Staff, "👥"),
        nav!("School Analytics", Section::Analytics, "▥"),
        nav!("System Settings", Section::Settings, "⚙"),
        nav!("Compliance", Section::Compliance, "⛨"),
    ],
    routes: &[
        (Section::Dashboard, View::Dashboard),
        (Section::Chatbot, View::Chat),
    ],
    default_view: View::Dashboard,
    quick_actions: &[
        QuickAction { label: "Manage Staff", icon: "👥", target: None },
        QuickAction { label: "View Analytics", icon: "▥", target: None },
        QuickAction { label: "System Settings", icon: "⚙", target: None },
    ],
    demo_credentials: DemoCredentials { email: "admin@edutrack.demo", password: DEMO_PASSWORD },
};

pub(super) static GOVERNMENT: RoleProfile = RoleProfile {
    portal_title: "Government Portal",
    dashboard_title: "Government Portal Dashboard",
    display_name: "Government Official",
    description: "Policy oversight, district analytics, compliance monitoring",
    icon: "♥",
    nav_items: with_common_items![
        nav!("District Overview", Section::District, "◫"),
        nav!("School Networks", Section::Schools, "⌂"),
        nav!("Policy Management", Section::Policies, "≡"),
        nav!("Data Analytics", Section::Data, "⛁"),
    ],
    routes: &[
        (Section::Dashboard, View::Dashboard),
        (Section::Chatbot, View::Chat),
    ],
    default_view: View::Dashboard,
    quick_actions: &[
        QuickAction { label: "District Overview", icon: "◫", target: None },
        QuickAction { label: "Data Analytics", icon: "⛁", target: None },
        QuickAction { label: "Policy Management", icon: "≡", target: None },
    ],
    demo_credentials: DemoCredentials { email: "gov@edutrack.demo", password: DEMO_PASSWORD },
};

impl RoleProfile {
    /// View bound to `section` in this role's allow-list, if any.
    pub fn route(&self, section: &Section) -> Option<View> {
        self.routes
            .iter()
            .find(|(allowed, _)| allowed == section)
            .map(|(_, view)| *view)
    }

    pub fn allows(&self, section: &Section) -> bool {
        self.route(section).is_some()
    }

    pub fn nav_position(&self, section: &Section) -> Option<usize> {
        self.nav_items.iter().position(|item| &item.section == section)
    }
}

#[cfg(test)]
mod tests {
    use crate::role::Role;
    use super::*;

    #[test]
    fn test_every_role_starts_with_common_items() {
        for role in Role::ALL {
            let titles: Vec<&str> = role.profile().nav_items.iter().take(4).map(|i| i.title).collect();
            assert_eq!(titles, ["Dashboard", "Attendance", "AI Assistant", "Notifications"]);
        }
    }

    #[test]
    fn test_role_specific_items() {
        let items = |role: Role| -> Vec<&'static str> {
            role.profile().nav_items.iter().skip(4).map(|i| i.title).collect()
        };
        assert_eq!(items(Role::Student), ["My Syllabus", "My Progress", "Schemes & Scholarships"]);
        assert_eq!(items(Role::Teacher), ["Today's Work", "Syllabus Tracking", "Reports"]);
        assert_eq!(items(Role::SchoolAdmin).len(), 4);
        assert_eq!(items(Role::Government)[0], "District Overview");
    }

    #[test]
    fn test_every_role_routes_its_default_and_the_assistant() {
        for role in Role::ALL {
            let profile = role.profile();
            assert_eq!(profile.route(&Section::Dashboard), Some(profile.default_view));
            assert_eq!(profile.route(&Section::Chatbot), Some(View::Chat));
        }
    }

    #[test]
    fn test_demo_credentials() {
        assert_eq!(Role::SchoolAdmin.profile().demo_credentials.email, "admin@edutrack.demo");
        assert_eq!(Role::Government.profile().demo_credentials.email, "gov@edutrack.demo");
        for role in Role::ALL {
            assert_eq!(role.profile().demo_credentials.password, "demo123");
        }
    }

    #[test]
    fn test_only_student_and_teacher_actions_navigate() {
        for role in [Role::SchoolAdmin, Role::Government] {
            assert!(role.profile().quick_actions.iter().all(|a| a.target.is_none()));
        }
        for role in [Role::Student, Role::Teacher] {
            assert!(role.profile().quick_actions.iter().all(|a| a.target.is_some()));
        }
    }
}
