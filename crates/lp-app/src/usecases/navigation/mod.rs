//! In-page navigation: the mobile menu and smooth-scrolling anchors.

mod mobile_menu;
mod smooth_scroll;

pub use mobile_menu::MobileMenu;
pub use smooth_scroll::SmoothScroll;
