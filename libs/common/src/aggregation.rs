//! Rating aggregation
//!
//! A store's displayed rating is the arithmetic mean of every rating stored
//! for it, rounded to one decimal place. Stores without ratings show `0.0`.

use serde::Serialize;

use crate::models::RatingValue;

/// Round half away from zero to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounded mean of the given rating values
pub fn average_rating<I>(values: I) -> f64
where
    I: IntoIterator<Item = RatingValue>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), value| {
            (sum + u64::from(value.get()), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    round_to_tenth(sum as f64 / count as f64)
}

/// Number of ratings per star value; index 0 holds the one-star count
pub fn rating_distribution<I>(values: I) -> [u32; 5]
where
    I: IntoIterator<Item = RatingValue>,
{
    let mut distribution = [0u32; 5];
    for value in values {
        if let Some(bucket) = distribution.get_mut(usize::from(value.get()) - 1) {
            *bucket += 1;
        }
    }
    distribution
}

/// How many full, half and empty stars represent a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarDisplay {
    pub filled: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarDisplay {
    pub fn from_rating(rating: f64, max: u8) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(max))
        };

        let whole = rating.floor();
        let fraction = rating - whole;
        let mut filled = whole as u8;
        let mut half = 0;

        if fraction > 0.7 {
            filled += 1;
        } else if fraction >= 0.3 {
            half = 1;
        }

        Self {
            filled,
            half,
            empty: max.saturating_sub(filled + half),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[i64]) -> Vec<RatingValue> {
        raw.iter()
            .map(|v| RatingValue::new(*v).unwrap())
            .collect()
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(average_rating(Vec::new()), 0.0);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        assert_eq!(average_rating(values(&[5, 4])), 4.5);
        assert_eq!(average_rating(values(&[5, 4, 5])), 4.7);
        assert_eq!(average_rating(values(&[3, 4, 4, 4, 4])), 3.8);
        assert_eq!(average_rating(values(&[1, 2])), 1.5);
        assert_eq!(average_rating(values(&[1, 1, 2])), 1.3);
    }

    #[test]
    fn adding_a_value_matches_incremental_mean() {
        let existing = [5, 4, 3, 4];
        let n = existing.len() as f64;
        let m = existing.iter().sum::<i64>() as f64 / n;

        for v in 1..=5 {
            let mut all = existing.to_vec();
            all.push(v);
            let expected = round_to_tenth((m * n + v as f64) / (n + 1.0));
            assert_eq!(average_rating(values(&all)), expected);
        }
    }

    #[test]
    fn distribution_counts_each_star() {
        assert_eq!(rating_distribution(values(&[5, 4, 5, 3, 4])), [0, 0, 1, 2, 2]);
        assert_eq!(rating_distribution(Vec::new()), [0; 5]);
    }

    #[test]
    fn star_display_thresholds() {
        let stars = |r| StarDisplay::from_rating(r, 5);
        assert_eq!(stars(4.5), StarDisplay { filled: 4, half: 1, empty: 0 });
        assert_eq!(stars(3.8), StarDisplay { filled: 4, half: 0, empty: 1 });
        assert_eq!(stars(4.2), StarDisplay { filled: 4, half: 0, empty: 1 });
        assert_eq!(stars(0.0), StarDisplay { filled: 0, half: 0, empty: 5 });
        assert_eq!(stars(5.0), StarDisplay { filled: 5, half: 0, empty: 0 });
        assert_eq!(stars(7.0), StarDisplay { filled: 5, half: 0, empty: 0 });
    }
}
