// palette.rs - Bright random colors for newborn cells and their afterglow

use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::FADE_MAX;

pub const SATURATION: f32 = 1.0;   // Full saturation
pub const LIGHTNESS: f32 = 0.7;    // 70% lightness keeps every hue bright on black

/// Hue of a cell in degrees, `[0, 360)`. Saturation and lightness are fixed,
/// so the hue is all a cell needs to carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellColor {
    hue: f32,
}

impl CellColor {
    pub fn from_hue(hue: f32) -> Self {
        Self { hue: hue.rem_euclid(360.0) }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Opaque sRGB color at `SATURATION` / `LIGHTNESS`.
    pub fn to_color32(self) -> Color32 {
        self.with_alpha(1.0)
    }

    /// Same color, reinterpreted with the given alpha (0.0 ..= 1.0).
    pub fn with_alpha(self, alpha: f32) -> Color32 {
        let [r, g, b] = hsl_to_rgb(self.hue, SATURATION, LIGHTNESS);
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl Default for CellColor {
    fn default() -> Self {
        Self::from_hue(0.0)
    }
}

/// Afterglow color: `base` with alpha `fade / FADE_MAX`.
pub fn faded_color(base: CellColor, fade: u8) -> Color32 {
    base.with_alpha(fade_alpha(fade))
}

pub fn fade_alpha(fade: u8) -> f32 {
    f32::from(fade.min(FADE_MAX)) / f32::from(FADE_MAX)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(r), channel(g), channel(b)]
}

/// Owns the random source for everything that needs one: cell colors and
/// the initial seeding. Seed it for reproducible runs.
pub struct Palette {
    rng: StdRng,
}

impl Palette {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn random_color(&mut self) -> CellColor {
        CellColor::from_hue(self.rng.gen_range(0.0..360.0))
    }

    /// Bernoulli draw used when seeding a grid.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hues_stay_in_range() {
        let mut palette = Palette::seeded(7);
        for _ in 0..1000 {
            let hue = palette.random_color().hue();
            assert!((0.0..360.0).contains(&hue), "hue {hue} out of range");
        }
    }

    #[test]
    fn primary_hues_at_seventy_percent_lightness() {
        // hsl(0, 100%, 70%) == rgb(255, 102, 102)
        assert_eq!(CellColor::from_hue(0.0).to_color32(), Color32::from_rgb(255, 102, 102));
        // hsl(120, 100%, 70%) == rgb(102, 255, 102)
        assert_eq!(CellColor::from_hue(120.0).to_color32(), Color32::from_rgb(102, 255, 102));
        // hsl(240, 100%, 70%) == rgb(102, 102, 255)
        assert_eq!(CellColor::from_hue(240.0).to_color32(), Color32::from_rgb(102, 102, 255));
    }

    #[test]
    fn faded_alpha_spans_zero_to_one() {
        let base = CellColor::from_hue(200.0);
        assert_eq!(faded_color(base, 0).a(), 0);
        assert_eq!(faded_color(base, FADE_MAX).a(), 255);
        assert!((fade_alpha(5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn seeded_palettes_agree() {
        let mut a = Palette::seeded(42);
        let mut b = Palette::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.random_color(), b.random_color());
        }
    }
}
