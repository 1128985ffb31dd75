//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` rather than hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Search input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::CYAN;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const LOADING: Color = palette::PURPLE;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Results list styles
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::CYAN;
    pub const TICKER: Color = palette::TEXT;
    pub const TICKER_MODIFIER: Modifier = Modifier::BOLD;
    pub const NAME: Color = palette::TEXT_MUTED;
    pub const EMPTY_STATE: Color = palette::TEXT_MUTED;
    pub const EMPTY_STATE_MODIFIER: Modifier = Modifier::BOLD;
    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const SELECTED_MARKER: Color = palette::PINK;
    pub const SCROLLBAR: Color = palette::TEXT_DIM;
}

/// Ticker detail card styles
pub mod detail {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const TICKER: Color = palette::CYAN;
    pub const NAME: Color = palette::TEXT;
    pub const LABEL: Color = palette::TEXT_MUTED;
    pub const VALUE: Color = palette::TEXT;
    pub const YES: Color = palette::SUCCESS;
    pub const NO: Color = palette::TEXT_DIM;
    pub const ROUTE: Color = palette::TEXT_DIM;
}

/// Alert modal styles
pub mod alert {
    use super::*;

    pub const BORDER: Color = palette::WARNING;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TITLE: Color = palette::WARNING;
    pub const MESSAGE: Color = palette::TEXT;
    pub const DISMISS_HINT: Color = palette::TEXT_MUTED;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const STATUS: Color = palette::PURPLE;
    pub const ERROR: Color = palette::ERROR;
}
