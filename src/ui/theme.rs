use crossterm::style::Color;

/// Design tokens for compareoffers output.
///
/// All colors, icons and borders used by the UI come from this module.
pub mod colors {
    use super::Color;

    /// Second offer earns more
    pub const SUCCESS: Color = Color::Green;
    /// First offer earns more
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
    pub const TOP_TEE: &str = "┬";
    pub const BOTTOM_TEE: &str = "┴";
    pub const LEFT_TEE: &str = "├";
    pub const RIGHT_TEE: &str = "┤";
    pub const CROSS: &str = "┼";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
    pub const TOP_TEE: &str = "+";
    pub const BOTTOM_TEE: &str = "+";
    pub const LEFT_TEE: &str = "+";
    pub const RIGHT_TEE: &str = "+";
    pub const CROSS: &str = "+";
}

pub fn icon_error(unicode: bool) -> &'static str {
    if unicode {
        icons::ERROR
    } else {
        icons_ascii::ERROR
    }
}

pub fn icon_warning(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

pub fn icon_arrow(unicode: bool) -> &'static str {
    if unicode {
        icons::ARROW
    } else {
        icons_ascii::ARROW
    }
}
