//! HTML fragments served to browser users.

/// Path of the calculator form; also the form's POST target.
pub const COIN_CHANGE_PATH: &str = "/coin-change";

/// Plain-text greeting served at the root.
pub const WELCOME_TEXT: &str = "Welcome to the Coin Change DP API";

/// Calculator form posting `coins` and `amount` back to [`COIN_CHANGE_PATH`].
pub fn coin_change_form() -> String {
    format!(
        r#"<h1>Coin Change DP Calculator</h1>
<form method="POST" action="{COIN_CHANGE_PATH}">
  <label>Coins (comma separated): </label>
  <input type="text" name="coins" placeholder="e.g. 1,2,5" required /><br/><br/>
  <label>Amount: </label>
  <input type="number" name="amount" placeholder="e.g. 11" min="0" required /><br/><br/>
  <button type="submit">Calculate</button>
</form>
"#
    )
}

/// Result fragment for a form submission; `minimum_coins` is `-1` when
/// infeasible.
pub fn coin_change_result(minimum_coins: i64) -> String {
    format!(
        r#"<h2>Minimum Coins Needed: {minimum_coins}</h2>
<a href="{COIN_CHANGE_PATH}">Try Again</a>
"#
    )
}
