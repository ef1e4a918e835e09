//! Sell plan and exit target types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An exit target's R-level.
///
/// Ladder targets are priced at whole multiples of the initial per-share risk
/// above entry. The `Exit` sentinel marks the synthesized close-the-remainder
/// target and is never part of the generated ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RLevel {
    /// A positive R-multiple (R1, R2, ...).
    Multiple(u32),
    /// Sentinel for a close-remaining exit.
    Exit,
}

impl RLevel {
    /// True for the close-remaining sentinel.
    pub fn is_exit(&self) -> bool {
        matches!(self, RLevel::Exit)
    }
}

impl fmt::Display for RLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RLevel::Multiple(n) => write!(f, "R{}", n),
            RLevel::Exit => write!(f, "exit"),
        }
    }
}

// Persisted journals store rLevel as either a JSON number or the string
// "exit", so the serde impls are written by hand.
impl Serialize for RLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RLevel::Multiple(n) => serializer.serialize_u32(*n),
            RLevel::Exit => serializer.serialize_str("exit"),
        }
    }
}

impl<'de> Deserialize<'de> for RLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RLevelVisitor;

        impl Visitor<'_> for RLevelVisitor {
            type Value = RLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a positive integer R-multiple or the string \"exit\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RLevel, E> {
                if value == 0 || value > u32::MAX as u64 {
                    return Err(E::custom(format!("R-level out of range: {}", value)));
                }
                Ok(RLevel::Multiple(value as u32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RLevel, E> {
                if value <= 0 {
                    return Err(E::custom(format!("R-level out of range: {}", value)));
                }
                self.visit_u64(value as u64)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RLevel, E> {
                match value {
                    "exit" => Ok(RLevel::Exit),
                    other => Err(E::custom(format!("unknown R-level: {:?}", other))),
                }
            }
        }

        deserializer.deserialize_any(RLevelVisitor)
    }
}

/// Execution state of a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Pending,
    Executed,
}

/// One exit target in a sell plan.
///
/// A `Pending` target carries no execution fields; an `Executed` target
/// always carries all three.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// R-level this target exits at
    pub r_level: RLevel,
    /// Display label for the fraction sold, e.g. "1/2"
    pub portion: String,
    /// Planned exit price
    pub target_price: Decimal,
    /// Shares planned to sell at this level
    pub planned_shares: i64,
    /// Pending or executed
    pub status: TargetStatus,
    /// Date the sale was logged
    pub executed_date: Option<NaiveDate>,
    /// Actual fill price
    pub executed_price: Option<Decimal>,
    /// Actual shares sold
    pub shares_sold: Option<i64>,
}

impl Target {
    pub fn is_executed(&self) -> bool {
        self.status == TargetStatus::Executed
    }
}

/// A cascading partial-exit plan.
///
/// Invariant: `sum(planned_shares) + runner == initial_shares`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellPlan {
    /// Whether the plan participates in freeroll/heat logic
    pub enabled: bool,
    /// Shares the position started with
    pub initial_shares: i64,
    /// Ordered exit ladder, plus any synthesized exit target
    pub targets: Vec<Target>,
    /// Shares intentionally left unsold after the ladder
    pub runner: i64,
}

impl SellPlan {
    /// Total shares sold across executed targets.
    pub fn shares_sold(&self) -> i64 {
        self.targets
            .iter()
            .filter(|t| t.is_executed())
            .filter_map(|t| t.shares_sold)
            .sum()
    }

    /// Shares still held.
    pub fn remaining(&self) -> i64 {
        self.initial_shares - self.shares_sold()
    }

    /// A position is freerolled once any ladder target (not the exit
    /// sentinel) has been executed. The domain treats the remainder of a
    /// freerolled position as riskless; this is a stated assumption, not
    /// something verified against the current stop.
    pub fn is_freerolled(&self) -> bool {
        self.enabled
            && self
                .targets
                .iter()
                .any(|t| t.is_executed() && !t.r_level.is_exit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pending_target(level: u32) -> Target {
        Target {
            r_level: RLevel::Multiple(level),
            portion: "1/2".to_string(),
            target_price: dec!(52.00),
            planned_shares: 25,
            status: TargetStatus::Pending,
            executed_date: None,
            executed_price: None,
            shares_sold: None,
        }
    }

    #[test]
    fn test_rlevel_serde_forms() {
        let json = serde_json::to_string(&RLevel::Multiple(3)).unwrap();
        assert_eq!(json, "3");
        let json = serde_json::to_string(&RLevel::Exit).unwrap();
        assert_eq!(json, "\"exit\"");

        let level: RLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, RLevel::Multiple(2));
        let level: RLevel = serde_json::from_str("\"exit\"").unwrap();
        assert_eq!(level, RLevel::Exit);

        assert!(serde_json::from_str::<RLevel>("0").is_err());
        assert!(serde_json::from_str::<RLevel>("\"runner\"").is_err());
    }

    #[test]
    fn test_remaining_tracks_executed_targets() {
        let mut plan = SellPlan {
            enabled: true,
            initial_shares: 50,
            targets: vec![pending_target(1), pending_target(2)],
            runner: 0,
        };
        assert_eq!(plan.remaining(), 50);
        assert!(!plan.is_freerolled());

        plan.targets[0].status = TargetStatus::Executed;
        plan.targets[0].shares_sold = Some(25);
        plan.targets[0].executed_price = Some(dec!(52.00));
        assert_eq!(plan.shares_sold(), 25);
        assert_eq!(plan.remaining(), 25);
        assert!(plan.is_freerolled());
    }

    #[test]
    fn test_exit_target_does_not_freeroll() {
        let mut plan = SellPlan {
            enabled: true,
            initial_shares: 50,
            targets: vec![pending_target(1)],
            runner: 0,
        };
        plan.targets.push(Target {
            r_level: RLevel::Exit,
            portion: "remaining".to_string(),
            target_price: dec!(49.00),
            planned_shares: 50,
            status: TargetStatus::Executed,
            executed_date: None,
            executed_price: Some(dec!(49.00)),
            shares_sold: Some(50),
        });
        assert!(!plan.is_freerolled());
    }

    #[test]
    fn test_disabled_plan_never_freerolls() {
        let mut plan = SellPlan {
            enabled: false,
            initial_shares: 50,
            targets: vec![pending_target(1)],
            runner: 0,
        };
        plan.targets[0].status = TargetStatus::Executed;
        plan.targets[0].shares_sold = Some(25);
        assert!(!plan.is_freerolled());
    }
}
