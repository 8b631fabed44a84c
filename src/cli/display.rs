// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the shelfsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SHELFSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped for `NO_COLOR` and when stdout is not a TTY, so piping into
//! other tools gets plain text.
//!
//! This is also the ANSI rendering adapter for highlight segments: the engine
//! says which spans matched, this module decides what a match looks like.

use std::sync::OnceLock;

use shelfsearch::Segment;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHELFSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Background variant, used for highlighted matches
fn rgb_bg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const MARK_BG: (u8, u8, u8) = (62, 68, 81); // #3e4451
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const MARK_BG: (u8, u8, u8) = (229, 229, 230); // #e5e5e6
}

macro_rules! theme_color {
    ($name:ident, $wrap:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => $wrap(onedark::$name),
                Theme::Light => $wrap(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN, rgb);
theme_color!(YELLOW, rgb);
theme_color!(BLUE, rgb);
theme_color!(GRAY, rgb);
theme_color!(MARK_BG, rgb_bg);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Render highlight segments for the terminal. Without colors, matches are
/// wrapped in `[` `]` so they stay visible in plain output.
pub fn highlighted(segments: &[Segment<'_>]) -> String {
    let colors = use_colors();
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Marked(text) if colors => {
                out.push_str(&format!("{}{}{}{}{}", BOLD, MARK_BG(), YELLOW(), text, RESET));
            }
            Segment::Marked(text) => {
                out.push('[');
                out.push_str(text);
                out.push(']');
            }
        }
    }
    out
}

/// Result-count summary, e.g. "3 results - fuzzy(1), AND."
pub fn status_line(count: usize, fuzzy: u32) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("{} {} - fuzzy({}), AND.", count, noun, fuzzy)
}

/// Right-aligned score column
pub fn score_label(score: f64) -> String {
    themed(GREEN, &[], &format!("{:>8.1}", score))
}

/// Rank number in the left gutter
pub fn rank_label(rank: usize) -> String {
    themed(GRAY, &[], &format!("{:>3}.", rank))
}

/// Secondary line (author, series)
pub fn secondary(text: &str) -> String {
    themed(BLUE, &[DIM], text)
}
