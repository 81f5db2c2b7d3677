//! The allocation engine.
//!
//! Distributes the patient share of a trading-profit pool across holders in
//! proportion to their asset-token balances, converting each cut into
//! health tokens.
//!
//! # Rounding policy
//!
//! Per-holder amounts are computed at full `Decimal` precision; only the
//! stored `share_pct` and `health_tokens` fields are rounded, to two
//! decimal places half-up. The sum of rounded amounts may therefore drift
//! from the rounded pool total by at most
//! `holders.len() * 0.5 * 10^-2` - see
//! [`rounding_tolerance`](tessera_core::rounding::rounding_tolerance).
//! Tests assert the bound; the engine never hides the discrepancy.

use std::collections::HashSet;

use log::debug;
use rust_decimal::Decimal;

use tessera_core::rounding::round_money;

use crate::error::{AllocationError, AllocationResult};
use crate::types::{AllocationReport, HolderAllocation, HolderBalance, ProfitPool};

/// Distributes a profit pool across holders pro rata.
///
/// `conversion_rate` is the number of monetary units one health token
/// represents. Holder iteration order does not affect any individual
/// result; the output is sorted by `holder_id` for reproducible ordering.
///
/// An empty holder set, or one whose balances sum to zero, is a defined
/// edge case rather than an error: the report comes back with an empty
/// allocation list and the pool split intact.
///
/// # Errors
///
/// - `AllocationError::InvalidSharePercentage` if `patient_share_pct` is
///   outside [0, 100]
/// - `AllocationError::InvalidProfit` if `total_profit < 0`
/// - `AllocationError::InvalidConversionRate` if `conversion_rate <= 0`
/// - `AllocationError::InvalidHolding` for a negative holder balance
/// - `AllocationError::DuplicateHolder` if a holder appears twice
///
/// # Example
///
/// ```rust
/// use tessera_allocation::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let pool = ProfitPool::new(dec!(50000), dec!(70));
/// let holders = vec![
///     HolderBalance::new("PAT-001", dec!(5000)),
///     HolderBalance::new("PAT-002", dec!(3200)),
///     HolderBalance::new("PAT-003", dec!(4500)),
///     HolderBalance::new("PAT-004", dec!(2800)),
///     HolderBalance::new("PAT-005", dec!(6200)),
/// ];
///
/// let report = allocate(&pool, &holders, dec!(10))?;
/// assert_eq!(report.total_holding, dec!(21700));
/// assert_eq!(report.get("PAT-001").unwrap().share_pct, dec!(23.04));
/// assert_eq!(report.get("PAT-001").unwrap().health_tokens, dec!(806.45));
/// # Ok::<(), tessera_allocation::AllocationError>(())
/// ```
pub fn allocate(
    pool: &ProfitPool,
    holders: &[HolderBalance],
    conversion_rate: Decimal,
) -> AllocationResult<AllocationReport> {
    if pool.patient_share_pct < Decimal::ZERO || pool.patient_share_pct > Decimal::ONE_HUNDRED {
        return Err(AllocationError::InvalidSharePercentage {
            pct: pool.patient_share_pct,
        });
    }
    if pool.total_profit < Decimal::ZERO {
        return Err(AllocationError::InvalidProfit {
            profit: pool.total_profit,
        });
    }
    if conversion_rate <= Decimal::ZERO {
        return Err(AllocationError::InvalidConversionRate {
            rate: conversion_rate,
        });
    }

    let mut seen = HashSet::with_capacity(holders.len());
    for holder in holders {
        if holder.holding_amount < Decimal::ZERO {
            return Err(AllocationError::InvalidHolding {
                holder_id: holder.holder_id.clone(),
                amount: holder.holding_amount,
            });
        }
        if !seen.insert(holder.holder_id.as_str()) {
            return Err(AllocationError::DuplicateHolder {
                holder_id: holder.holder_id.clone(),
            });
        }
    }

    let patient_share = pool.patient_share();
    let operator_share = pool.operator_share();
    let total_holding: Decimal = holders.iter().map(|h| h.holding_amount).sum();

    // No holder has a claim; the caller decides what happens to the
    // unallocated patient share.
    if total_holding.is_zero() {
        return Ok(AllocationReport {
            patient_share,
            operator_share,
            total_holding,
            conversion_rate,
            allocations: Vec::new(),
            total_health_tokens: Decimal::ZERO,
        });
    }

    let mut ordered: Vec<&HolderBalance> = holders.iter().collect();
    ordered.sort_by(|a, b| a.holder_id.cmp(&b.holder_id));

    let allocations: Vec<HolderAllocation> = ordered
        .into_iter()
        .map(|holder| {
            let fraction = holder.holding_amount / total_holding;
            HolderAllocation {
                holder_id: holder.holder_id.clone(),
                holding_amount: holder.holding_amount,
                share_pct: round_money(fraction * Decimal::ONE_HUNDRED),
                health_tokens: round_money(fraction * patient_share / conversion_rate),
            }
        })
        .collect();

    let total_health_tokens: Decimal = allocations.iter().map(|a| a.health_tokens).sum();

    debug!(
        "allocated {} across {} holders ({} HT at rate {})",
        patient_share,
        allocations.len(),
        total_health_tokens,
        conversion_rate
    );

    Ok(AllocationReport {
        patient_share,
        operator_share,
        total_holding,
        conversion_rate,
        allocations,
        total_health_tokens,
    })
}
