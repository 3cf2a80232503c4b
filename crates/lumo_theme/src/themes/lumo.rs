//! Default Lumo theme
//!
//! Neutral zinc surfaces with a blue accent and red for destructive actions.

use crate::theme::ThemeBundle;
use crate::tokens::*;
use lumo_core::Color;

/// Raw palette the semantic tokens are drawn from
pub mod palette {
    use lumo_core::Color;

    pub const ZINC_50: Color = Color::rgb(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0);
    pub const ZINC_100: Color = Color::rgb(244.0 / 255.0, 244.0 / 255.0, 245.0 / 255.0);
    pub const ZINC_200: Color = Color::rgb(228.0 / 255.0, 228.0 / 255.0, 231.0 / 255.0);
    pub const ZINC_300: Color = Color::rgb(212.0 / 255.0, 212.0 / 255.0, 216.0 / 255.0);
    pub const ZINC_400: Color = Color::rgb(161.0 / 255.0, 161.0 / 255.0, 170.0 / 255.0);
    pub const ZINC_500: Color = Color::rgb(113.0 / 255.0, 113.0 / 255.0, 122.0 / 255.0);
    pub const ZINC_600: Color = Color::rgb(82.0 / 255.0, 82.0 / 255.0, 91.0 / 255.0);
    pub const ZINC_700: Color = Color::rgb(63.0 / 255.0, 63.0 / 255.0, 70.0 / 255.0);
    pub const ZINC_800: Color = Color::rgb(39.0 / 255.0, 39.0 / 255.0, 42.0 / 255.0);
    pub const ZINC_900: Color = Color::rgb(24.0 / 255.0, 24.0 / 255.0, 27.0 / 255.0);
    pub const ZINC_950: Color = Color::rgb(9.0 / 255.0, 9.0 / 255.0, 11.0 / 255.0);

    pub const BLUE_300: Color = Color::rgb(147.0 / 255.0, 197.0 / 255.0, 253.0 / 255.0);
    pub const BLUE_400: Color = Color::rgb(96.0 / 255.0, 165.0 / 255.0, 250.0 / 255.0);
    pub const BLUE_500: Color = Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0);
    pub const BLUE_600: Color = Color::rgb(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0);
    pub const BLUE_700: Color = Color::rgb(29.0 / 255.0, 78.0 / 255.0, 216.0 / 255.0);
    pub const BLUE_800: Color = Color::rgb(30.0 / 255.0, 64.0 / 255.0, 175.0 / 255.0);

    pub const RED_300: Color = Color::rgb(252.0 / 255.0, 165.0 / 255.0, 165.0 / 255.0);
    pub const RED_400: Color = Color::rgb(248.0 / 255.0, 113.0 / 255.0, 113.0 / 255.0);
    pub const RED_500: Color = Color::rgb(239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0);
    pub const RED_600: Color = Color::rgb(220.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0);
    pub const RED_700: Color = Color::rgb(185.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0);
    pub const RED_800: Color = Color::rgb(153.0 / 255.0, 27.0 / 255.0, 27.0 / 255.0);
}

use palette::*;

/// The built-in Lumo theme
pub struct LumoTheme;

impl LumoTheme {
    pub const NAME: &'static str = "Lumo";

    /// Light token set
    pub fn light() -> ColorTokens {
        ColorTokens {
            bg: BackgroundColors {
                primary: Color::WHITE,
                secondary: ZINC_100,
                tertiary: ZINC_200,
                state: StateColors {
                    primary: BLUE_600,
                    primary_hover: BLUE_700,
                    primary_press: BLUE_800,
                    secondary: ZINC_100,
                    secondary_hover: ZINC_200,
                    secondary_press: ZINC_300,
                    soft: BLUE_600.with_alpha(0.1),
                    soft_hover: BLUE_600.with_alpha(0.15),
                    soft_press: BLUE_600.with_alpha(0.2),
                    ghost_hover: ZINC_900.with_alpha(0.05),
                    ghost_press: ZINC_900.with_alpha(0.1),
                    destructive: RED_600,
                    destructive_hover: RED_700,
                    destructive_press: RED_800,
                    disabled: ZINC_100,
                },
            },
            text: TextColors {
                primary: ZINC_900,
                secondary: ZINC_600,
                tertiary: ZINC_500,
                inverse: Color::WHITE,
                disabled: ZINC_400,
                destructive: RED_600,
            },
            border: BorderColors {
                default: ZINC_200,
                strong: ZINC_300,
                hover: ZINC_400,
                destructive: RED_600,
            },
            highlight: HighlightColors {
                default: BLUE_300,
                destructive: RED_300,
                soft: BLUE_600.with_alpha(0.15),
                input: BLUE_600,
            },
            shadow: ShadowColors {
                subtle: Color::BLACK.with_alpha(0.05),
                strong: Color::BLACK.with_alpha(0.12),
            },
        }
    }

    /// Dark token set
    pub fn dark() -> ColorTokens {
        ColorTokens {
            bg: BackgroundColors {
                primary: ZINC_950,
                secondary: ZINC_900,
                tertiary: ZINC_800,
                state: StateColors {
                    primary: BLUE_500,
                    primary_hover: BLUE_400,
                    primary_press: BLUE_300,
                    secondary: ZINC_800,
                    secondary_hover: ZINC_700,
                    secondary_press: ZINC_600,
                    soft: BLUE_500.with_alpha(0.15),
                    soft_hover: BLUE_500.with_alpha(0.22),
                    soft_press: BLUE_500.with_alpha(0.3),
                    ghost_hover: ZINC_50.with_alpha(0.06),
                    ghost_press: ZINC_50.with_alpha(0.12),
                    destructive: RED_500,
                    destructive_hover: RED_400,
                    destructive_press: RED_300,
                    disabled: ZINC_800,
                },
            },
            text: TextColors {
                primary: ZINC_50,
                secondary: ZINC_400,
                tertiary: ZINC_500,
                inverse: ZINC_950,
                disabled: ZINC_600,
                destructive: RED_400,
            },
            border: BorderColors {
                default: ZINC_800,
                strong: ZINC_700,
                hover: ZINC_600,
                destructive: RED_400,
            },
            highlight: HighlightColors {
                default: BLUE_700,
                destructive: RED_800,
                soft: BLUE_500.with_alpha(0.25),
                input: BLUE_500,
            },
            shadow: ShadowColors {
                subtle: Color::BLACK.with_alpha(0.3),
                strong: Color::BLACK.with_alpha(0.5),
            },
        }
    }

    /// Light and dark token sets as one bundle
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(Self::NAME, Self::light(), Self::dark())
    }
}
