//! Benefit catalog value objects.
//!
//! The catalog itself lives outside this module's ownership - entries are
//! supplied by the benefit service and inventory is decremented externally
//! on fulfilment. This module only describes entries and answers
//! eligibility questions against a balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One redeemable benefit in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitCatalogEntry {
    /// Opaque benefit identifier (e.g. `CHECKUP`).
    pub id: String,
    /// Human-readable benefit name.
    pub name: String,
    /// Health tokens per unit, positive.
    pub unit_cost: Decimal,
    /// Units currently available for redemption.
    pub available_units: u32,
}

impl BenefitCatalogEntry {
    /// Creates a new catalog entry.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_cost: Decimal,
        available_units: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_cost,
            available_units,
        }
    }

    /// True if a holder with `balance` can afford at least one unit and
    /// inventory remains.
    #[must_use]
    pub fn affordable_with(&self, balance: Decimal) -> bool {
        self.available_units > 0 && balance >= self.unit_cost
    }
}

/// The standard benefit catalog, seeded with the platform's five stock
/// benefits. Intended for tests and demo deployments; production catalogs
/// come from the benefit service.
#[must_use]
pub fn standard_catalog() -> Vec<BenefitCatalogEntry> {
    use rust_decimal_macros::dec;
    vec![
        BenefitCatalogEntry::new("CHECKUP", "Regular Health Checkup", dec!(10), 100),
        BenefitCatalogEntry::new("MEDICINE", "Medicine Discount (20%)", dec!(5), 100),
        BenefitCatalogEntry::new("SPECIALIST", "Specialist Consultation", dec!(25), 100),
        BenefitCatalogEntry::new("DIAGNOSTIC", "Diagnostic Tests Package", dec!(30), 100),
        BenefitCatalogEntry::new("INSURANCE", "Health Insurance Coverage", dec!(50), 100),
    ]
}

/// Filters a catalog down to the benefits a holder can currently afford.
#[must_use]
pub fn eligible(balance: Decimal, catalog: &[BenefitCatalogEntry]) -> Vec<&BenefitCatalogEntry> {
    catalog
        .iter()
        .filter(|entry| entry.affordable_with(balance))
        .collect()
}
