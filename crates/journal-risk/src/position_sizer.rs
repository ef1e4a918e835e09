//! Fixed fractional-risk position sizing.

use journal_core::SizingError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Raw sizing inputs, typically straight from a form. Fields are optional
/// because a half-filled form is legitimate input: sizing is simply not yet
/// computable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizingInputs {
    pub account_size: Option<Decimal>,
    pub risk_percent: Option<Decimal>,
    pub max_percent: Option<Decimal>,
    pub entry_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
}

impl SizingInputs {
    pub fn new(
        account_size: Decimal,
        risk_percent: Decimal,
        max_percent: Decimal,
        entry_price: Decimal,
        stop_loss: Decimal,
    ) -> Self {
        Self {
            account_size: Some(account_size),
            risk_percent: Some(risk_percent),
            max_percent: Some(max_percent),
            entry_price: Some(entry_price),
            stop_loss: Some(stop_loss),
        }
    }
}

/// Outcome of a sizing request.
#[derive(Debug, Clone)]
pub enum SizingOutcome {
    /// All inputs present and valid
    Sized(SizingResult),
    /// One or more inputs absent or non-positive; not an error
    Incomplete,
}

impl SizingOutcome {
    pub fn sized(&self) -> Option<&SizingResult> {
        match self {
            SizingOutcome::Sized(result) => Some(result),
            SizingOutcome::Incomplete => None,
        }
    }
}

/// A computed position size and its derived figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingResult {
    /// Whole shares to buy
    pub shares: i64,
    /// shares * entry
    pub position_size: Decimal,
    /// Dollar risk if stopped out
    pub actual_risk: Decimal,
    /// Actual risk as a percent of the account
    pub actual_risk_percent: Decimal,
    /// Position size as a percent of the account
    pub percent_of_account: Decimal,
    /// Stop distance as a percent of entry
    pub stop_distance_percent: Decimal,
    /// Per-share risk (entry - stop)
    pub risk_per_share: Decimal,
    /// True when the account-percentage cap reduced the share count
    pub is_limited: bool,
}

fn percent_in_range(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= dec!(100)
}

/// Size a position from account equity, a risk fraction, and a stop.
///
/// Shares are floored to whole units, then clamped so the position never
/// exceeds `max_percent` of the account.
pub fn size(inputs: &SizingInputs) -> Result<SizingOutcome, SizingError> {
    let (account_size, risk_percent, max_percent, entry_price, stop_loss) = match (
        inputs.account_size,
        inputs.risk_percent,
        inputs.max_percent,
        inputs.entry_price,
        inputs.stop_loss,
    ) {
        (Some(a), Some(r), Some(m), Some(e), Some(s)) => (a, r, m, e, s),
        _ => return Ok(SizingOutcome::Incomplete),
    };

    if account_size <= Decimal::ZERO || entry_price <= Decimal::ZERO || stop_loss <= Decimal::ZERO
    {
        return Ok(SizingOutcome::Incomplete);
    }
    if risk_percent <= Decimal::ZERO || max_percent <= Decimal::ZERO {
        return Ok(SizingOutcome::Incomplete);
    }

    if !percent_in_range(risk_percent) {
        return Err(SizingError::InvalidPercent {
            field: "risk_percent",
            value: risk_percent,
        });
    }
    if !percent_in_range(max_percent) {
        return Err(SizingError::InvalidPercent {
            field: "max_percent",
            value: max_percent,
        });
    }
    if stop_loss >= entry_price {
        return Err(SizingError::InvalidStopLoss {
            stop: stop_loss,
            entry: entry_price,
        });
    }

    let risk_per_share = entry_price - stop_loss;
    let dollar_risk = account_size * risk_percent / dec!(100);

    let raw_shares = (dollar_risk / risk_per_share)
        .floor()
        .to_i64()
        .unwrap_or(0);
    let raw_position_size = Decimal::from(raw_shares) * entry_price;
    let max_position_size = account_size * max_percent / dec!(100);

    let (shares, is_limited) = if raw_position_size > max_position_size {
        let capped = (max_position_size / entry_price).floor().to_i64().unwrap_or(0);
        (capped, true)
    } else {
        (raw_shares, false)
    };

    let position_size = Decimal::from(shares) * entry_price;
    let actual_risk = Decimal::from(shares) * risk_per_share;

    Ok(SizingOutcome::Sized(SizingResult {
        shares,
        position_size,
        actual_risk,
        actual_risk_percent: actual_risk / account_size * dec!(100),
        percent_of_account: position_size / account_size * dec!(100),
        stop_distance_percent: risk_per_share / entry_price * dec!(100),
        risk_per_share,
        is_limited,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(inputs: &SizingInputs) -> SizingResult {
        match size(inputs).unwrap() {
            SizingOutcome::Sized(result) => result,
            SizingOutcome::Incomplete => panic!("expected a sized outcome"),
        }
    }

    #[test]
    fn test_basic_sizing() {
        // account=10000, risk 1%, entry 50, stop 48 -> $100 risk at $2/share
        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(100), dec!(50), dec!(48));
        let result = sized(&inputs);

        assert_eq!(result.shares, 50);
        assert_eq!(result.risk_per_share, dec!(2));
        assert_eq!(result.position_size, dec!(2500));
        assert_eq!(result.actual_risk, dec!(100));
        assert_eq!(result.actual_risk_percent, dec!(1));
        assert_eq!(result.percent_of_account, dec!(25));
        assert_eq!(result.stop_distance_percent, dec!(4));
        assert!(!result.is_limited);
    }

    #[test]
    fn test_clamped_to_max_percent() {
        // Tight stop blows up the raw size; cap at 10% of account.
        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(10), dec!(50), dec!(49.90));
        let result = sized(&inputs);

        // raw: floor(100 / 0.10) = 1000 shares = $50k, cap = $1000 -> 20 shares
        assert!(result.is_limited);
        assert_eq!(result.shares, 20);
        assert!(result.position_size <= dec!(10000) * dec!(10) / dec!(100));
    }

    #[test]
    fn test_limited_flag_only_when_cap_binds() {
        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(100), dec!(50), dec!(48));
        assert!(!sized(&inputs).is_limited);

        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(5), dec!(50), dec!(48));
        let result = sized(&inputs);
        // raw 50 shares = $2500 > $500 cap -> floor(500/50) = 10 shares
        assert!(result.is_limited);
        assert_eq!(result.shares, 10);
    }

    #[test]
    fn test_missing_inputs_are_incomplete() {
        let inputs = SizingInputs {
            account_size: Some(dec!(10000)),
            ..Default::default()
        };
        assert!(matches!(size(&inputs).unwrap(), SizingOutcome::Incomplete));

        let inputs = SizingInputs::new(dec!(0), dec!(1), dec!(100), dec!(50), dec!(48));
        assert!(matches!(size(&inputs).unwrap(), SizingOutcome::Incomplete));
    }

    #[test]
    fn test_stop_at_or_above_entry_rejected() {
        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(100), dec!(50), dec!(50));
        assert_eq!(
            size(&inputs).unwrap_err(),
            SizingError::InvalidStopLoss {
                stop: dec!(50),
                entry: dec!(50)
            }
        );

        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(100), dec!(50), dec!(55));
        assert!(size(&inputs).is_err());
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        let inputs = SizingInputs::new(dec!(10000), dec!(101), dec!(100), dec!(50), dec!(48));
        assert_eq!(
            size(&inputs).unwrap_err(),
            SizingError::InvalidPercent {
                field: "risk_percent",
                value: dec!(101)
            }
        );

        let inputs = SizingInputs::new(dec!(10000), dec!(1), dec!(150), dec!(50), dec!(48));
        assert!(matches!(
            size(&inputs).unwrap_err(),
            SizingError::InvalidPercent {
                field: "max_percent",
                ..
            }
        ));
    }

    #[test]
    fn test_clamp_holds_across_inputs() {
        // Clamp property over a spread of stops and caps.
        for (stop, max) in [
            (dec!(48), dec!(100)),
            (dec!(49.5), dec!(25)),
            (dec!(49.9), dec!(10)),
            (dec!(45), dec!(50)),
        ] {
            let inputs = SizingInputs::new(dec!(10000), dec!(1), max, dec!(50), stop);
            let result = sized(&inputs);
            assert!(
                result.position_size <= dec!(10000) * max / dec!(100),
                "cap violated for stop={} max={}",
                stop,
                max
            );
        }
    }
}
