//! Presentation constants kept out of the components so the observed
//! behavior (scroll threshold, drawer close-on-select) stays tunable in
//! one place.

/// Vertical scroll offset in CSS pixels past which the navbar switches
/// to its compact, opaque styling.
pub const SCROLL_THRESHOLD_PX: i32 = 50;

/// Whether picking a navigation item while the mobile drawer is open
/// closes the drawer.
pub const CLOSE_MENU_ON_SELECT: bool = true;

/// Landing page sections in navigation order: display label and in-page
/// anchor target.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("Training", "#training"),
    ("Analysis", "#analysis"),
    ("Branding", "#branding"),
    ("Medical", "#medical"),
    ("Admin", "#admin"),
];
