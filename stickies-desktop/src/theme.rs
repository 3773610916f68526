//! Card and palette styling for the desktop shell.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use stickies_core::NoteColor;

/// Background color for a note card of the given palette color.
pub fn note_background(color: NoteColor) -> Color {
    match color {
        NoteColor::Yellow => Color::from_rgb8(0xFF, 0xE0, 0x82),
        NoteColor::Green => Color::from_rgb8(0xC8, 0xE6, 0xC9),
        NoteColor::Pink => Color::from_rgb8(0xF8, 0xBB, 0xD0),
        NoteColor::Purple => Color::from_rgb8(0xE1, 0xBE, 0xE7),
        NoteColor::Blue => Color::from_rgb8(0xBB, 0xDE, 0xFB),
    }
}

/// Container style for a note card.
pub fn card(color: NoteColor) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(note_background(color))),
        text_color: Some(Color::from_rgb8(0x33, 0x33, 0x33)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Button style for a color swatch in the palette.
pub fn swatch(color: NoteColor) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base = note_background(color);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => darken(base),
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: 14.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

fn darken(color: Color) -> Color {
    Color {
        r: color.r * 0.85,
        g: color.g * 0.85,
        b: color.b * 0.85,
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_color_has_a_background() {
        for color in NoteColor::ALL {
            let bg = note_background(color);
            assert!(bg.r > 0.0 || bg.g > 0.0 || bg.b > 0.0);
        }
    }

    #[test]
    fn test_darken_keeps_alpha() {
        let darker = darken(Color::from_rgb8(0xFF, 0xE0, 0x82));
        assert!(darker.r < 1.0);
        assert_eq!(darker.a, 1.0);
    }
}
