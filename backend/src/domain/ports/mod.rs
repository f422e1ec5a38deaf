//! Domain ports for the hexagonal boundary.

mod coin_change_query;

#[cfg(test)]
pub use coin_change_query::MockCoinChangeQuery;
pub use coin_change_query::CoinChangeQuery;
