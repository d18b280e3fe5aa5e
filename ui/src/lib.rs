//! Shared UI crate for Siteshift. Cross-platform logic and views live here.

pub mod api;
pub mod audit;
pub mod core;
pub mod results;
pub mod views;

pub mod components {
    // Application navbar with platform-registered route links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
