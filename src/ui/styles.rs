use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// Kanga palette
pub const PAPER: Color = Color::from_rgb(0.988, 0.976, 0.953); // #FCF9F3
pub const SURFACE: Color = Color::from_rgb(0.957, 0.929, 0.886); // #F4EDE2
pub const INK: Color = Color::from_rgb(0.231, 0.204, 0.180); // #3B342E
pub const MUTED: Color = Color::from_rgb(0.541, 0.502, 0.459); // #8A8075
pub const ACCENT: Color = Color::from_rgb(0.769, 0.420, 0.173); // #C46B2C (terracotta)
pub const ACCENT_HOVER: Color = Color::from_rgb(0.690, 0.361, 0.133);
pub const MEETING: Color = Color::from_rgb(0.976, 0.882, 0.784); // #F9E1C8
pub const DANGER: Color = Color::from_rgb(0.741, 0.298, 0.259); // #BD4C42

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

pub struct NavStyle {
    pub active: bool,
}

impl button::StyleSheet for NavStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        if self.active {
            button::Appearance {
                background: Some(Background::Color(Color::WHITE)),
                text_color: ACCENT,
                border: rounded(6.0),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
                ..Default::default()
            }
        } else {
            button::Appearance {
                background: None,
                text_color: MUTED,
                ..Default::default()
            }
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        if self.active {
            return self.active(style);
        }
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.04))),
            text_color: INK,
            border: rounded(6.0),
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.hovered(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct SidebarStyle;
impl container::StyleSheet for SidebarStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(SURFACE)),
            ..Default::default()
        }
    }
}

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(PAPER)),
            ..Default::default()
        }
    }
}

pub struct CardStyle;
impl container::StyleSheet for CardStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                radius: 10.0.into(),
                width: 1.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.03),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        }
    }
}

/// Error banner shown at the top of the content area.
pub struct BannerStyle;
impl container::StyleSheet for BannerStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgb(0.984, 0.906, 0.894))),
            text_color: Some(DANGER),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: DANGER,
            },
            ..Default::default()
        }
    }
}

pub struct InputStyle;
impl text_input::StyleSheet for InputStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::WHITE),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            },
            icon_color: MUTED,
        }
    }
    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: ACCENT,
            },
            ..self.active(style)
        }
    }
    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.0, 0.0, 0.0, 0.3)
    }
    fn value_color(&self, _style: &Self::Style) -> Color {
        INK
    }
    fn disabled_color(&self, _style: &Self::Style) -> Color {
        MUTED
    }
    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.769, 0.420, 0.173, 0.2)
    }
    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}

pub struct PrimaryButtonStyle;
impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ACCENT)),
            text_color: Color::WHITE,
            border: rounded(6.0),
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct DestructiveButtonStyle;
impl button::StyleSheet for DestructiveButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: DANGER,
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: DANGER,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(DANGER)),
            text_color: Color::WHITE,
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

/// A calendar day. Meeting days are filled, today gets an accent ring.
pub struct DayCellStyle {
    pub has_meeting: bool,
    pub is_today: bool,
}

impl button::StyleSheet for DayCellStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(if self.has_meeting { MEETING } else { Color::WHITE })),
            text_color: if self.is_today { ACCENT } else { INK },
            border: Border {
                radius: 6.0.into(),
                width: if self.is_today { 2.0 } else { 1.0 },
                color: if self.is_today {
                    ACCENT
                } else {
                    Color::from_rgba(0.0, 0.0, 0.0, 0.06)
                },
            },
            ..Default::default()
        }
    }
    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..self.active(style)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}
