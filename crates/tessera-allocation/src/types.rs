//! Allocation value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of one holder's asset-token balance at allocation time.
///
/// Supplied by the holdings ledger; the engine treats it as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderBalance {
    /// Opaque holder (patient) identifier, unique within a snapshot.
    pub holder_id: String,
    /// Asset-token holdings at snapshot time.
    pub holding_amount: Decimal,
}

impl HolderBalance {
    /// Creates a new holder snapshot entry.
    #[must_use]
    pub fn new(holder_id: impl Into<String>, holding_amount: Decimal) -> Self {
        Self {
            holder_id: holder_id.into(),
            holding_amount,
        }
    }
}

/// A trading-profit pool to be split between patients and the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitPool {
    /// Total profit to distribute, non-negative.
    pub total_profit: Decimal,
    /// Percentage of the pool allocated to patients, in [0, 100]. The
    /// operator share is always the complement.
    pub patient_share_pct: Decimal,
}

impl ProfitPool {
    /// Creates a new profit pool.
    #[must_use]
    pub fn new(total_profit: Decimal, patient_share_pct: Decimal) -> Self {
        Self {
            total_profit,
            patient_share_pct,
        }
    }

    /// The patient share of the pool: `total_profit * pct / 100`.
    #[must_use]
    pub fn patient_share(&self) -> Decimal {
        self.total_profit * self.patient_share_pct / Decimal::ONE_HUNDRED
    }

    /// The operator share of the pool.
    ///
    /// Computed by subtraction from the total rather than by a second
    /// multiplication, so the two shares always sum exactly to
    /// `total_profit`.
    #[must_use]
    pub fn operator_share(&self) -> Decimal {
        self.total_profit - self.patient_share()
    }
}

/// One holder's cut of a distributed profit pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderAllocation {
    /// The holder receiving this cut.
    pub holder_id: String,
    /// The holder's asset-token balance the cut was computed from.
    pub holding_amount: Decimal,
    /// The holder's share of total holdings, as a percentage rounded to
    /// two decimal places.
    pub share_pct: Decimal,
    /// Health tokens allocated to the holder, rounded to two decimal
    /// places.
    pub health_tokens: Decimal,
}

/// The full result of one allocation run.
///
/// Carries the pool split alongside the per-holder breakdown so callers can
/// render the summary the way the operator dashboard does. When total
/// holdings are zero the `allocations` list is empty and the patient share
/// remains unallocated; the caller decides whether to retain or escalate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Monetary amount allocated to patients.
    pub patient_share: Decimal,
    /// Monetary amount retained by the operator.
    pub operator_share: Decimal,
    /// Sum of all holder balances in the snapshot.
    pub total_holding: Decimal,
    /// Monetary units per health token used for this run.
    pub conversion_rate: Decimal,
    /// Per-holder allocations, sorted by holder identifier.
    pub allocations: Vec<HolderAllocation>,
    /// Sum of the rounded per-holder health-token amounts. May differ from
    /// `patient_share / conversion_rate` by at most the documented rounding
    /// tolerance.
    pub total_health_tokens: Decimal,
}

impl AllocationReport {
    /// Returns the allocation for one holder, if present.
    #[must_use]
    pub fn get(&self, holder_id: &str) -> Option<&HolderAllocation> {
        self.allocations.iter().find(|a| a.holder_id == holder_id)
    }

    /// Returns the number of holders allocated to.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns true if nothing was allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pool_split_sums_to_total() {
        let pool = ProfitPool::new(dec!(50000), dec!(70));
        assert_eq!(pool.patient_share(), dec!(35000));
        assert_eq!(pool.operator_share(), dec!(15000));
        assert_eq!(pool.patient_share() + pool.operator_share(), pool.total_profit);
    }

    #[test]
    fn test_pool_split_exact_for_awkward_percentage() {
        // 1/3-ish percentage still splits exactly because the operator
        // share is the subtraction remainder
        let pool = ProfitPool::new(dec!(100), dec!(33.33));
        assert_eq!(pool.patient_share() + pool.operator_share(), dec!(100));
    }

    #[test]
    fn test_report_lookup() {
        let report = AllocationReport {
            patient_share: dec!(100),
            operator_share: dec!(0),
            total_holding: dec!(10),
            conversion_rate: dec!(1),
            allocations: vec![HolderAllocation {
                holder_id: "PAT-001".to_string(),
                holding_amount: dec!(10),
                share_pct: dec!(100),
                health_tokens: dec!(100),
            }],
            total_health_tokens: dec!(100),
        };
        assert_eq!(report.len(), 1);
        assert!(report.get("PAT-001").is_some());
        assert!(report.get("PAT-404").is_none());
    }
}
