//! Mining profitability estimate
//!
//! A deliberately rough, offline estimate: a fixed BTC price and a fixed
//! yield per TH/s. Nothing here touches the network.

use serde::Serialize;

use crate::client::models::number::parse_lenient;
use crate::output::formatters::to_fixed;

/// BTC price assumed by the estimate, in USD
pub const BTC_PRICE_USD: f64 = 42_000.0;

/// BTC mined per day per MH/s of hashrate
pub const BTC_PER_MHS_DAY: f64 = 0.000_01;

/// Daily profit in USD for `hashrate` TH/s drawing `power` watts at
/// `electricity_rate` USD per kWh. No validation: NaN in, NaN out.
pub fn profit(hashrate: f64, power: f64, electricity_rate: f64) -> f64 {
    let daily_btc = hashrate / 1_000_000.0 * BTC_PER_MHS_DAY;
    let daily_revenue = daily_btc * BTC_PRICE_USD;
    let daily_electricity = (power / 1000.0) * 24.0 * electricity_rate;
    daily_revenue - daily_electricity
}

/// Formatted daily, monthly and yearly estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub daily: String,
    pub monthly: String,
    pub yearly: String,
}

/// Estimate from raw text input.
///
/// Longer periods are derived from the already-rounded daily figure, so
/// `monthly` is exactly `daily * 30` as displayed.
pub fn estimate(hashrate: &str, power: &str, electricity_rate: &str) -> Estimate {
    let daily = to_fixed(
        profit(
            parse_lenient(hashrate),
            parse_lenient(power),
            parse_lenient(electricity_rate),
        ),
        2,
    );
    let rounded = parse_lenient(&daily);

    Estimate {
        monthly: to_fixed(rounded * 30.0, 2),
        yearly: to_fixed(rounded * 365.0, 2),
        daily,
    }
}
