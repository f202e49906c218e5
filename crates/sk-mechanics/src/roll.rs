//! Randomised damage and healing amounts.

use rand::Rng;
use rand::rngs::StdRng;

/// Apply a symmetric percentage spread to a base amount.
///
/// `vary(20, 10, rng)` returns a value in 18..=22. A positive base never
/// rolls below 1; a zero or negative base rolls 0.
pub fn vary(base: i32, percent: u32, rng: &mut StdRng) -> i32 {
    if base <= 0 {
        return 0;
    }
    let percent = percent.min(100) as i64;
    let base = base as i64;
    let low = base * (100 - percent) / 100;
    let high = base * (100 + percent) / 100;
    let rolled = if low >= high {
        low
    } else {
        rng.random_range(low..=high)
    };
    rolled.clamp(1, i32::MAX as i64) as i32
}
