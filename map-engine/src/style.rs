//! Pure styling of countries from status and interaction state.

use crate::types::CountryStatus;

/// An opaque sRGB color; opacity travels separately in [`StylePaint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The fixed color set of the map, handed to [`StylePolicy`] at
/// construction so nothing reads shared mutable constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub available: Rgb,
    pub available_hover: Rgb,
    pub coming_soon: Rgb,
    pub coming_soon_hover: Rgb,
    pub soon: Rgb,
    pub soon_hover: Rgb,
    pub land_default: Rgb,
    pub land_hover: Rgb,
    pub selected: Rgb,
    pub border_default: Rgb,
    pub border_hover: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            available: Rgb(0x7c, 0xb3, 0x42),
            available_hover: Rgb(0x9c, 0xcc, 0x65),
            coming_soon: Rgb(0xff, 0xb7, 0x4d),
            coming_soon_hover: Rgb(0xff, 0xcc, 0x80),
            soon: Rgb(0xff, 0xd5, 0x4f),
            soon_hover: Rgb(0xff, 0xe0, 0x82),
            land_default: Rgb(0xe0, 0xe0, 0xe0),
            land_hover: Rgb(0xbd, 0xbd, 0xbd),
            selected: Rgb(0xf0, 0x62, 0x92),
            border_default: Rgb(0x90, 0xa4, 0xae),
            border_hover: Rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Computed visual style for one feature at one moment. Recomputed on every
/// paint pass, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePaint {
    pub fill_color: Rgb,
    pub fill_opacity: f32,
    pub stroke_weight: f32,
    pub stroke_color: Rgb,
}

/// Maps `(status, hovered, selected)` to a [`StylePaint`].
#[derive(Debug, Clone)]
pub struct StylePolicy {
    palette: Palette,
}

impl StylePolicy {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Total over all inputs. The status picks the base fill, then selection
    /// overrides everything (direct user focus must dominate status
    /// coloring) and hover alone only thickens and lightens the stroke.
    pub fn paint(&self, status: CountryStatus, hovered: bool, selected: bool) -> StylePaint {
        let p = &self.palette;
        let (fill_color, fill_opacity) = match status {
            CountryStatus::Available if hovered || selected => (p.available_hover, 0.9),
            CountryStatus::Available => (p.available, 0.75),
            CountryStatus::ComingSoon if hovered => (p.coming_soon_hover, 0.85),
            CountryStatus::ComingSoon => (p.coming_soon, 0.7),
            CountryStatus::Soon if hovered => (p.soon_hover, 0.85),
            CountryStatus::Soon => (p.soon, 0.7),
            CountryStatus::None if hovered => (p.land_hover, 0.7),
            CountryStatus::None => (p.land_default, 0.7),
        };

        if selected {
            StylePaint {
                fill_color: p.selected,
                fill_opacity: 0.95,
                stroke_weight: 2.0,
                stroke_color: p.border_hover,
            }
        } else if hovered {
            StylePaint {
                fill_color,
                fill_opacity,
                stroke_weight: 1.5,
                stroke_color: p.border_hover,
            }
        } else {
            StylePaint {
                fill_color,
                fill_opacity,
                stroke_weight: 0.5,
                stroke_color: p.border_default,
            }
        }
    }
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
