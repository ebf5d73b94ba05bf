/// Currency codes offered by the new-game form
///
/// Display list only; the data layer accepts any code (see [`Game`]).
///
/// [`Game`]: crate::domain::Game
pub const SUPPORTED_CURRENCIES: [&str; 5] = ["USD", "INR", "EUR", "GBP", "JPY"];

/// Currency preselected on a fresh draft
pub const DEFAULT_CURRENCY: &str = "USD";

/// Check whether a code is on the display list
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_CURRENCIES.contains(&code)
}
