//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    platform_config, use_config, use_session, use_session_store, AppSession, LogoutButton,
    PlatformStorage, SessionProvider,
};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastProvider, ToastQueue};

pub mod guard;
pub use guard::{GuestOnly, RequireAuth};

pub mod navigation;
pub use navigation::{navigation_for, public_navigation, NavIcon, NavIconView, NavigationItem};

mod sidebar;
pub use sidebar::AppSidebar;

mod chat_bubble;
pub use chat_bubble::{markdown_to_html, ChatBubble};

mod contact_form;
pub use contact_form::ContactForm;

mod timing;
pub use timing::sleep;
