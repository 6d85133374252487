pub const MAX_STARS: u8 = 5;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯨';
const EMPTY_STAR: char = '☆';

/// Star breakdown of a 0–5 rating.
///
/// `full + half + empty` is always [`MAX_STARS`]. Ratings outside the range
/// are clamped and NaN counts as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
    pub value: f64,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let value = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, MAX_STARS as f64)
        };

        let full = value.floor() as u8;
        let half = value % 1.0 >= 0.5;
        let empty = MAX_STARS - full - half as u8;

        Self {
            full,
            half,
            empty,
            value,
        }
    }

    pub fn half_count(&self) -> u8 {
        self.half as u8
    }

    /// One-decimal numeric label, e.g. `4.5` or `3.0`.
    pub fn label(&self) -> String {
        format!("{:.1}", self.value)
    }

    pub fn stars(&self) -> String {
        let mut stars = String::with_capacity(MAX_STARS as usize * 3);
        (0..self.full).for_each(|_| stars.push(FULL_STAR));
        if self.half {
            stars.push(HALF_STAR);
        }
        (0..self.empty).for_each(|_| stars.push(EMPTY_STAR));
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(rating: f64) -> (u8, u8, u8) {
        let r = StarRating::from_rating(rating);
        (r.full, r.half_count(), r.empty)
    }

    #[test]
    fn test_star_counts_always_sum_to_five() {
        for step in 0..=500 {
            let rating = step as f64 / 100.0;
            let (full, half, empty) = counts(rating);
            assert_eq!(full + half + empty, MAX_STARS, "rating {}", rating);
            assert!(half <= 1);
        }
    }

    #[test]
    fn test_known_ratings() {
        assert_eq!(counts(4.5), (4, 1, 0));
        assert_eq!(counts(3.0), (3, 0, 2));
        assert_eq!(counts(0.0), (0, 0, 5));
        assert_eq!(counts(5.0), (5, 0, 0));
        assert_eq!(counts(4.2), (4, 0, 1));
        assert_eq!(counts(4.8), (4, 1, 0));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(counts(-1.0), (0, 0, 5));
        assert_eq!(counts(7.3), (5, 0, 0));
        assert_eq!(counts(f64::NAN), (0, 0, 5));
        assert_eq!(StarRating::from_rating(9.0).label(), "5.0");
    }

    #[test]
    fn test_label_has_one_decimal() {
        assert_eq!(StarRating::from_rating(4.5).label(), "4.5");
        assert_eq!(StarRating::from_rating(3.0).label(), "3.0");
        assert_eq!(StarRating::from_rating(4.26).label(), "4.3");
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(StarRating::from_rating(4.5).stars(), "★★★★⯨");
        assert_eq!(StarRating::from_rating(2.0).stars(), "★★☆☆☆");
        assert_eq!(StarRating::from_rating(0.0).stars().chars().count(), 5);
    }
}
