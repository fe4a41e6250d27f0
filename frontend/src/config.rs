use log::Level;

use crate::cursor::spring::SpringConfig;
use crate::cursor::trail::Rgb;

/// localStorage key holding the visitor's language tag.
pub const LANGUAGE_STORAGE_KEY: &str = "glass-website-language";

pub const CONTACT_EMAIL: &str = "nextgenautomationn@gmail.com";

/// Form relay that forwards contact messages to [`CONTACT_EMAIL`].
pub const FORM_ENDPOINT: &str = "https://formsubmit.co/ajax/nextgenautomationn@gmail.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Media query deciding whether the system pointer gets replaced.
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorConfig {
    pub trail_length: usize,
    /// Fraction of the remaining distance the head covers each frame.
    pub head_easing: f64,
    /// Fraction of the remaining distance every other point covers toward its predecessor.
    pub follow_easing: f64,
    pub start_color: Rgb,
    pub end_color: Rgb,
    pub max_line_width: f64,
    pub dot_size: f64,
    pub ring_size: f64,
    pub snap_spring: SpringConfig,
    pub size_spring: SpringConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            trail_length: 20,
            head_easing: 0.3,
            follow_easing: 0.25,
            start_color: Rgb::new(0x00, 0xFF, 0xFF),
            end_color: Rgb::new(0x8A, 0x2B, 0xE2),
            max_line_width: 3.0,
            dot_size: 8.0,
            ring_size: 40.0,
            snap_spring: SpringConfig {
                stiffness: 300.0,
                damping: 20.0,
                mass: 1.0,
            },
            size_spring: SpringConfig {
                stiffness: 400.0,
                damping: 25.0,
                mass: 0.5,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    pub frames: usize,
    /// Probability that a single pixel carries grain.
    pub density: f64,
    /// RGBA value written for a grain pixel.
    pub pixel: [u8; 4],
    pub frame_delay_ms: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            density: 0.05,
            pixel: [0x00, 0x00, 0x00, 0x0f],
            frame_delay_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub duration_ms: f64,
    /// Per-frame catch-up fraction for wheel driven scrolling.
    pub wheel_lerp: f64,
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            wheel_lerp: 0.1,
            wheel_multiplier: 1.0,
        }
    }
}

/// Space left above a section after scrolling to it, clearing the floating navbar.
pub const SECTION_SCROLL_OFFSET: f64 = 96.0;
