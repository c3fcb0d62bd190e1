use portfolio_core::{ColorScheme, Rgb};
use ratatui::style::{Color, Style};

/// Colors for one color scheme. `Automatic` keeps the terminal's own
/// foreground and background.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub selected: Color,
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

/// Terminal colors for `scheme`. `Automatic` leaves the terminal's own
/// foreground and background alone and takes the dark accents.
pub const fn palette(scheme: ColorScheme) -> Palette {
    let colors = scheme.palette(true);
    let (fg, bg) = match scheme {
        ColorScheme::Automatic => (Color::Reset, Color::Reset),
        ColorScheme::Light | ColorScheme::Dark => (rgb(colors.fg), rgb(colors.bg)),
    };
    Palette {
        fg,
        bg,
        muted: rgb(colors.muted),
        accent: rgb(colors.accent),
        selected: rgb(colors.selected),
    }
}

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}
