/// Base URL of the tracker API. Override at build time with `BACKEND_URL`.
pub const API_BASE_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8001",
};

/// Goal used when the snapshot carries no usable goal amount (P2M).
pub const DEFAULT_GOAL_AMOUNT: f64 = 2_000_000.0;

pub const CURRENCY_SYMBOL: &str = "P";

// recent activity only shows the head of each list
pub const RECENT_INCOME_SHOWN: usize = 3;
pub const RECENT_EXPENSES_SHOWN: usize = 2;
