use crossterm::style::{Color, Stylize};

use crate::cli::ColorArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
    pub ground: Color,
    pub wall: Color,
    pub sky: Color,
}

impl Palette {
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::colored()
        }
    }

    #[must_use]
    pub fn colored() -> Self {
        Self {
            enabled: true,
            ground: Color::DarkGreen,
            wall: Color::DarkGrey,
            sky: Color::Cyan,
        }
    }

    /// Resolves `mode` against the process environment and stdout.
    #[must_use]
    pub fn detect(mode: ColorArg) -> Self {
        use std::io::IsTerminal;

        let term = std::env::var("TERM").ok();
        let no_color = std::env::var("NO_COLOR").ok();
        let enabled = color_enabled_from(
            mode,
            term.as_deref(),
            no_color.as_deref(),
            std::io::stdout().is_terminal(),
        );
        if enabled {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Paints one tile. `is_wall` marks tiles of the boundary column.
    #[must_use]
    pub fn paint(&self, symbol: char, is_ground: bool, is_wall: bool) -> String {
        if !self.enabled {
            return symbol.to_string();
        }
        let color = match (is_ground, is_wall) {
            (true, true) => self.wall,
            (true, false) => self.ground,
            (false, _) => self.sky,
        };
        symbol.with(color).to_string()
    }
}

pub(crate) fn color_enabled_from(
    mode: ColorArg,
    term: Option<&str>,
    no_color: Option<&str>,
    stdout_is_terminal: bool,
) -> bool {
    match mode {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => {
            stdout_is_terminal
                && !no_color.is_some_and(|value| !value.is_empty())
                && !term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"))
        }
    }
}
