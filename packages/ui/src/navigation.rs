//! Sidebar navigation, built per render from the signed-in user's role.

use api::Role;
use dioxus::prelude::*;

use crate::icons::*;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Profile,
    Mentorship,
    Messages,
    Forum,
    Resources,
    Events,
    Chatbot,
    Notifications,
    Progress,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub requires_auth: bool,
}

const fn item(label: &'static str, path: &'static str, icon: NavIcon) -> NavigationItem {
    NavigationItem {
        label,
        path,
        icon,
        requires_auth: true,
    }
}

/// Items for the authenticated sidebar. `None` while the user is still loading.
pub fn navigation_for(role: Option<Role>) -> Vec<NavigationItem> {
    let mentorship = match role {
        Some(Role::Student) => "Find a Mentor",
        Some(Role::Alumni) => "My Mentees",
        Some(Role::Admin) => "Mentorships",
        None => "Mentorship",
    };
    let progress = match role {
        Some(Role::Admin) => "Platform Progress",
        _ => "My Progress",
    };

    vec![
        item("Dashboard", "/dashboard", NavIcon::Dashboard),
        item("Profile", "/profile", NavIcon::Profile),
        item(mentorship, "/mentorship", NavIcon::Mentorship),
        item("Messages", "/messages", NavIcon::Messages),
        item("Forum", "/forum", NavIcon::Forum),
        item("Resources", "/resources", NavIcon::Resources),
        item("Events", "/events", NavIcon::Events),
        item("AI Assistant", "/chatbot", NavIcon::Chatbot),
        item("Notifications", "/notification", NavIcon::Notifications),
        item(progress, "/progress", NavIcon::Progress),
        item("Contact Us", "/ContactUs", NavIcon::Contact),
    ]
}

/// Links shown on public pages.
pub fn public_navigation() -> Vec<NavigationItem> {
    vec![
        NavigationItem { requires_auth: false, ..item("Home", "/", NavIcon::Dashboard) },
        NavigationItem { requires_auth: false, ..item("Contact", "/contact", NavIcon::Contact) },
    ]
}

#[component]
pub fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        NavIcon::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        NavIcon::Mentorship => rsx! { Icon { icon: FaHandshake, width: 16, height: 16 } },
        NavIcon::Messages => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
        NavIcon::Forum => rsx! { Icon { icon: FaComments, width: 16, height: 16 } },
        NavIcon::Resources => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
        NavIcon::Events => rsx! { Icon { icon: FaCalendar, width: 16, height: 16 } },
        NavIcon::Chatbot => rsx! { Icon { icon: FaRobot, width: 16, height: 16 } },
        NavIcon::Notifications => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
        NavIcon::Progress => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        NavIcon::Contact => rsx! { Icon { icon: FaAddressBook, width: 16, height: 16 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        let student = navigation_for(Some(Role::Student));
        let alumni = navigation_for(Some(Role::Alumni));
        assert!(student.iter().any(|i| i.label == "Find a Mentor" && i.path == "/mentorship"));
        assert!(alumni.iter().any(|i| i.label == "My Mentees" && i.path == "/mentorship"));
        assert!(navigation_for(Some(Role::Admin)).iter().any(|i| i.label == "Platform Progress"));
    }

    #[test]
    fn test_all_app_items_require_auth() {
        let items = navigation_for(None);
        assert_eq!(items.len(), 11);
        assert!(items.iter().all(|i| i.requires_auth));
        assert!(public_navigation().iter().all(|i| !i.requires_auth));
    }

    #[test]
    fn test_paths_are_the_guarded_routes() {
        let paths: Vec<&str> = navigation_for(Some(Role::Student)).iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            vec![
                "/dashboard", "/profile", "/mentorship", "/messages", "/forum", "/resources",
                "/events", "/chatbot", "/notification", "/progress", "/ContactUs",
            ]
        );
    }
}
