use rand::seq::SliceRandom;
use rand::Rng;

use super::SearchError;

/// Shifts `weights` so that every one of them is strictly positive. If none is
/// negative they are returned unchanged; otherwise all are raised by
/// `|min| + 1`, which keeps their relative order.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
    if min < 0.0 {
        let shift = min.abs() + 1.0;
        weights.iter().map(|weight| weight + shift).collect()
    } else {
        weights.to_vec()
    }
}

/// Picks an index into `weights` with probability proportional to its
/// normalized weight.
///
/// Candidates are visited in shuffled order so that list position carries no
/// bias, and the first candidate whose cumulative weight reaches the draw wins.
pub fn weighted_random_choice<R: Rng>(
    weights: &[f64],
    rng: &mut R,
) -> Result<usize, SearchError> {
    if weights.is_empty() {
        return Err(SearchError::NoCandidates);
    }

    let weights = normalize_weights(weights);
    let total: f64 = weights.iter().sum();
    let draw = if total > 0.0 {
        rng.gen_range(0.0..total)
    } else {
        0.0
    };

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.shuffle(rng);

    let mut cumulative = 0.0;
    for index in order {
        cumulative += weights[index];
        if cumulative >= draw {
            return Ok(index);
        }
    }

    Err(SearchError::InvariantViolation(
        "weighted random choice returned no candidate",
    ))
}
