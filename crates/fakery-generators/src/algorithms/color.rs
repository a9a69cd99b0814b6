//! HSL to RGB conversion and nearest named color lookup.

use std::fmt;

/// Reference palette for nearest-color naming.
pub const NAMED_COLORS: [(&str, Rgb); 27] = [
    ("Red", Rgb::new(255, 0, 0)),
    ("Green", Rgb::new(0, 255, 0)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Purple", Rgb::new(128, 0, 128)),
    ("Pink", Rgb::new(255, 192, 203)),
    ("Brown", Rgb::new(165, 42, 42)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Gray", Rgb::new(128, 128, 128)),
    ("Black", Rgb::new(0, 0, 0)),
    ("White", Rgb::new(255, 255, 255)),
    ("Maroon", Rgb::new(128, 0, 0)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("Gold", Rgb::new(255, 215, 0)),
    ("Beige", Rgb::new(245, 245, 220)),
    ("Turquoise", Rgb::new(64, 224, 208)),
    ("Salmon", Rgb::new(250, 128, 114)),
    ("Crimson", Rgb::new(220, 20, 60)),
    ("Indigo", Rgb::new(75, 0, 130)),
    ("Plum", Rgb::new(221, 160, 221)),
    ("Lavender", Rgb::new(230, 230, 250)),
    ("Azure", Rgb::new(240, 255, 255)),
];

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.h, self.s, self.l)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Convert HSL to RGB, truncating each channel to an integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s.min(100)) / 100.0;
    let l = f64::from(hsl.l.min(100)) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    // `as` saturates, so float noise outside [0, 1] stays in range
    (v * 255.0) as u8
}

/// Perceptual luminance, 0.0 (black) to 255.0 (white).
pub fn luminance(rgb: Rgb) -> f64 {
    0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b)
}

/// Shade qualifier for a luminance value.
pub fn shade(luminance: f64) -> &'static str {
    if luminance < 85.0 {
        "Dark"
    } else if luminance < 170.0 {
        "Medium"
    } else {
        "Light"
    }
}

/// Name of the closest palette color, prefixed with a shade unless the
/// match is white or black. Ties go to the earlier palette entry.
pub fn closest_named_color(rgb: Rgb) -> String {
    let mut closest = NAMED_COLORS[0];
    let mut min_distance = f64::MAX;
    for (name, reference) in NAMED_COLORS {
        let distance = rgb.distance(reference);
        if distance < min_distance {
            min_distance = distance;
            closest = (name, reference);
        }
    }

    match closest.0 {
        name @ ("White" | "Black") => name.to_string(),
        name => format!("{} {name}", shade(luminance(rgb))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakery_core::FakeRng;

    fn hsl(h: u16, s: u8, l: u8) -> Hsl {
        Hsl { h, s, l }
    }

    #[test]
    fn test_reference_colors() {
        assert_eq!(hsl_to_rgb(hsl(0, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(hsl(120, 100, 50)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(hsl(240, 100, 50)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(hsl(0, 0, 100)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(hsl(0, 0, 0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_achromatic_is_gray() {
        let gray = hsl_to_rgb(hsl(200, 0, 50));
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
        assert_eq!(gray.r, 127);
    }

    #[test]
    fn test_random_hsl_round_trips_through_hex() {
        let mut rng = FakeRng::from_seed(360);
        for _ in 0..5000 {
            let h = rng.int_below(360).unwrap() as u16;
            let s = rng.int_below(101).unwrap() as u8;
            let l = rng.int_below(101).unwrap() as u8;
            let rgb = hsl_to_rgb(hsl(h, s, l));
            assert_eq!(Rgb::from_hex(&rgb.to_hex()), Some(rgb));
        }
    }

    #[test]
    fn test_hex_round_trip_and_rejects() {
        assert_eq!(Rgb::new(255, 165, 0).to_hex(), "#FFA500");
        assert_eq!(Rgb::from_hex("#ffa500"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(Rgb::from_hex("FFA500"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(Rgb::from_hex("#FFA5"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_closest_named_color_shades() {
        assert_eq!(closest_named_color(Rgb::new(255, 255, 255)), "White");
        assert_eq!(closest_named_color(Rgb::new(5, 5, 5)), "Black");
        assert_eq!(closest_named_color(Rgb::new(250, 5, 5)), "Dark Red");
        assert_eq!(closest_named_color(Rgb::new(0, 0, 120)), "Dark Navy");
        assert_eq!(closest_named_color(Rgb::new(250, 250, 5)), "Light Yellow");
        assert_eq!(closest_named_color(Rgb::new(130, 130, 130)), "Medium Gray");
    }

    #[test]
    fn test_shade_thresholds() {
        assert_eq!(shade(0.0), "Dark");
        assert_eq!(shade(84.9), "Dark");
        assert_eq!(shade(85.0), "Medium");
        assert_eq!(shade(169.9), "Medium");
        assert_eq!(shade(170.0), "Light");
        assert!((luminance(Rgb::new(255, 255, 255)) - 255.0).abs() < 1e-9);
    }
}
