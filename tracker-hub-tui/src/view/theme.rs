//! Colour themes

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::Relaxed);
}

/// Colours of the current theme
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::Relaxed) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// Theme colours
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
    pub modal_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(222, 226, 230),
            border: Color::Rgb(73, 80, 87),
            border_focused: Color::Rgb(76, 154, 255),
            highlight: Color::Rgb(38, 132, 255),
            selected_bg: Color::Rgb(7, 71, 166),
            selected_fg: Color::White,
            success: Color::Rgb(54, 179, 126),
            error: Color::Rgb(255, 86, 48),
            muted: Color::Rgb(134, 142, 150),
            modal_bg: Color::Rgb(22, 27, 34),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(23, 43, 77),
            border: Color::Rgb(193, 199, 208),
            border_focused: Color::Rgb(0, 82, 204),
            highlight: Color::Rgb(0, 82, 204),
            selected_bg: Color::Rgb(222, 235, 255),
            selected_fg: Color::Rgb(9, 30, 66),
            success: Color::Rgb(0, 135, 90),
            error: Color::Rgb(222, 53, 11),
            muted: Color::Rgb(107, 119, 140),
            modal_bg: Color::Rgb(244, 245, 247),
        }
    }
}

/// Shared styles
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Button that can be pressed
    pub fn button() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Button whose request is in flight, or that does not apply
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::DIM)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(235, 236, 240))
    }
}
