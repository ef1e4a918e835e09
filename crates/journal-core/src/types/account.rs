//! Account settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Process-wide account settings, injected explicitly into sizing and
/// risk aggregation rather than read from ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Total account equity
    pub size: Decimal,
    /// Percent of equity risked per trade
    pub risk_percent: Decimal,
    /// Cap on any single position as a percent of equity
    pub max_position_percent: Decimal,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            size: Decimal::ZERO,
            risk_percent: Decimal::ONE,
            max_position_percent: Decimal::from(25),
        }
    }
}
