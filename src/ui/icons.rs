// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached in a `OnceLock`, so each file is parsed once per process.
//! Sources are monochrome strokes; use [`tinted`] or [`themed`] to color them.
//!
//! Icons are named after what they show, not the action they trigger
//! (e.g. `rotate_ccw`, not `reset_viewer`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(upload, "upload.svg", "Tray with an arrow pointing up.");
define_icon!(
    rotate_ccw,
    "rotate_ccw.svg",
    "Circular arrow turning counter-clockwise."
);
define_icon!(play, "play.svg", "Triangle pointing right.");
define_icon!(pause, "pause.svg", "Two vertical bars.");
define_icon!(
    alert_circle,
    "alert_circle.svg",
    "Circle with an exclamation mark."
);
define_icon!(check_circle, "check_circle.svg", "Circle with a checkmark.");
define_icon!(cube, "cube.svg", "Isometric cube.");
define_icon!(cross, "cross.svg", "Diagonal cross (X).");
define_icon!(
    warning,
    "warning.svg",
    "Triangle with an exclamation mark."
);
define_icon!(info, "info.svg", "Circle with a lowercase i.");

/// Sets both dimensions of an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints the icon strokes with a fixed color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Paints the icon strokes with the theme text color.
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}
