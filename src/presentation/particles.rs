use rand::Rng;

/// Sparkles rising behind each slide.
pub const SPARKLE_COUNT: usize = 12;

const GOLD: &str = "#fbbf24";
const WHITE: &str = "#ffffff";

/// One decorative particle. Purely cosmetic; values feed inline CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub left_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub color: &'static str,
}

/// Scatter `count` sparkles, alternating gold and white.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|i| Sparkle {
            left_pct: round1(rng.random_range(0.0..100.0)),
            size_px: round1(rng.random_range(2.0..6.0)),
            delay_s: round1(rng.random_range(0.0..10.0)),
            duration_s: round1(rng.random_range(10.0..20.0)),
            color: if i % 2 == 0 { GOLD } else { WHITE },
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
