//! Minimum-coin solver.
//!
//! Bottom-up dynamic programming over a cost table indexed `0..=amount`.
//! Entry `i` holds the fewest denominations summing to `i`, or `None` while
//! `i` is unreachable. Each entry only reads entries below it, so a single
//! ascending pass fills the table.

use super::{Amount, Denominations};

/// Result of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumCoins {
    /// The fewest denominations that sum exactly to the amount.
    Count(usize),
    /// No combination sums exactly to the amount.
    Infeasible,
}

impl MinimumCoins {
    /// Wire encoding: the count, or `-1` when infeasible.
    ///
    /// # Examples
    /// ```
    /// use coin_change::domain::MinimumCoins;
    ///
    /// assert_eq!(MinimumCoins::Count(3).to_wire(), 3);
    /// assert_eq!(MinimumCoins::Infeasible.to_wire(), -1);
    /// ```
    #[must_use]
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Count(count) => i64::try_from(count).unwrap_or(i64::MAX),
            Self::Infeasible => -1,
        }
    }
}

/// Compute the minimum number of denominations summing to `amount`.
///
/// Denominations may be reused any number of times. Never fails: amounts no
/// combination reaches yield [`MinimumCoins::Infeasible`].
///
/// # Examples
/// ```
/// use coin_change::domain::{Amount, Denominations, MinimumCoins, solve};
///
/// let coins = Denominations::from_values([1, 2, 5]).unwrap();
/// assert_eq!(solve(&coins, Amount::new(11)), MinimumCoins::Count(3));
/// ```
#[must_use]
pub fn solve(denominations: &Denominations, amount: Amount) -> MinimumCoins {
    let target = amount.get();
    if target == 0 {
        return MinimumCoins::Count(0);
    }

    let coins: Vec<usize> = denominations
        .values()
        .filter(|&coin| coin <= target)
        .collect();
    let mut costs: Vec<Option<usize>> = vec![None; target.saturating_add(1)];
    if let Some(base) = costs.first_mut() {
        *base = Some(0);
    }

    for value in 1..=target {
        let best = coins
            .iter()
            .filter_map(|&coin| value.checked_sub(coin))
            .filter_map(|remainder| costs.get(remainder).copied().flatten())
            .min()
            .map(|count| count + 1);
        if let Some(slot) = costs.get_mut(value) {
            *slot = best;
        }
    }

    match costs.get(target).copied().flatten() {
        Some(count) => MinimumCoins::Count(count),
        None => MinimumCoins::Infeasible,
    }
}
