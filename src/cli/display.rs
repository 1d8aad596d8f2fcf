// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for luhnmod CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `LUHNMOD_THEME`
//! picks explicitly, then `COLORFGBG`, then dark. Respects `NO_COLOR` and
//! disables color when stdout is not a TTY.

use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LUHNMOD_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
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

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
}

macro_rules! themed_color {
    ($name:ident, $const:ident) => {
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$const,
                Theme::Light => onelight::$const,
            };
            rgb(r, g, b)
        }
    };
}

themed_color!(red, RED);
themed_color!(green, GREEN);
themed_color!(yellow, YELLOW);

/// Color is allowed on `stream` unless `NO_COLOR` is set or it is not a TTY.
pub fn use_colors(stream: atty::Stream) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(stream)
}

fn paint_for(stream: atty::Stream, color: &str, modifiers: &[&str], text: &str) -> String {
    if !use_colors(stream) {
        return text.to_string();
    }
    format!("{}{}{}{}", modifiers.concat(), color, text, RESET)
}

/// Wrap `text` in `color` and optional modifiers for stdout, or return it bare.
pub fn paint(color: &str, modifiers: &[&str], text: &str) -> String {
    paint_for(atty::Stream::Stdout, color, modifiers, text)
}

/// `error:` label, colored only when stderr is a terminal.
pub fn error_prefix() -> String {
    paint_for(atty::Stream::Stderr, &red(), &[BOLD], "error:")
}

/// `phrase` dimmed, check character highlighted.
pub fn signed(phrase: &str, check: char) -> String {
    format!(
        "{}{}",
        paint("", &[DIM], phrase),
        paint(&yellow(), &[BOLD], &check.to_string())
    )
}

pub fn verdict(is_valid: bool) -> String {
    if is_valid {
        paint(&green(), &[BOLD], "valid")
    } else {
        paint(&red(), &[BOLD], "invalid")
    }
}
