pub const FILLED_STAR: char = '\u{2605}';
pub const HALF_STAR: char = '\u{2B50}';
pub const EMPTY_STAR: char = '\u{2606}';

const MAX_STARS: u8 = 5;

/// How many of each glyph a rating renders as. Always sums to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCounts {
    pub filled: u8,
    pub half: u8,
    pub empty: u8,
}

/// Split an average score into filled, half and empty stars.
///
/// Scores outside 0–5 are clamped and NaN counts as zero.
pub fn star_counts(rate: f64) -> StarCounts {
    let rate = if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, f64::from(MAX_STARS))
    };

    let filled = rate.floor() as u8;
    let half = u8::from(rate % 1.0 >= 0.5);
    StarCounts {
        filled,
        half,
        empty: MAX_STARS - filled - half,
    }
}

/// Render a rating as a star string, e.g. 3.5 -> "★★★⭐☆".
pub fn render_stars(rate: f64) -> String {
    let counts = star_counts(rate);
    let mut stars = String::new();
    stars.extend(std::iter::repeat(FILLED_STAR).take(counts.filled.into()));
    if counts.half == 1 {
        stars.push(HALF_STAR);
    }
    stars.extend(std::iter::repeat(EMPTY_STAR).take(counts.empty.into()));
    stars
}
