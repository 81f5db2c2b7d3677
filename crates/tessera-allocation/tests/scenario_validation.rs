//! Integration tests validated against the platform dashboard figures.
//!
//! These scenarios reproduce the numbers shown on the operator dashboards
//! end to end: a deposit is valuated under the standard profile, a mint is
//! recommended against the appraised value, a quarter's trading profit is
//! distributed pro rata, and the resulting health-token balance is spent on
//! benefits.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tessera_allocation::prelude::*;
use tessera_config::ConfigManager;
use tessera_core::rounding::rounding_tolerance;
use tessera_core::types::AssetKind;
use tessera_valuation::prelude::*;

fn five_patients() -> Vec<HolderBalance> {
    vec![
        HolderBalance::new("PAT-001", dec!(5000)),
        HolderBalance::new("PAT-002", dec!(3200)),
        HolderBalance::new("PAT-003", dec!(4500)),
        HolderBalance::new("PAT-004", dec!(2800)),
        HolderBalance::new("PAT-005", dec!(6200)),
    ]
}

#[test]
fn gold_deposit_valuation_matches_dashboard() {
    let manager = ConfigManager::new();
    let params = manager.get_params("PK.STANDARD").unwrap();
    let table = manager.get_rates("PK.STANDARD").unwrap().build_table().unwrap();

    // 10 g of gold at 15000 PKR/g
    let valuation = valuate(
        AssetKind::Gold,
        dec!(10),
        &table,
        params.token_conversion_rate,
    )
    .unwrap();
    assert_eq!(valuation.worth, dec!(150000));
    assert_eq!(valuation.estimated_tokens, dec!(1500));
}

#[test]
fn mint_recommendation_matches_dashboard() {
    let manager = ConfigManager::new();
    let params = manager.get_params("PK.STANDARD").unwrap();

    let recommended = recommend_mint(dec!(625000), params.collateral_ratio).unwrap();
    assert_eq!(recommended, dec!(500000));
}

#[test]
fn quarterly_allocation_matches_dashboard() {
    let manager = ConfigManager::new();
    let params = manager.get_params("PK.STANDARD").unwrap();

    let pool = ProfitPool::new(dec!(50000), params.patient_share_pct);
    let report = allocate(&pool, &five_patients(), params.ht_conversion_rate).unwrap();

    assert_eq!(report.patient_share, dec!(35000));
    assert_eq!(report.operator_share, dec!(15000));
    assert_eq!(report.total_holding, dec!(21700));

    // 5000 / 21700 = 23.04% of the pool, 806.45 HT at rate 10
    let pat_001 = report.get("PAT-001").unwrap();
    assert_eq!(pat_001.share_pct, dec!(23.04));
    assert_eq!(pat_001.health_tokens, dec!(806.45));

    // the rounded payouts drift from the exact pool total by no more than
    // the documented bound
    let exact_total = report.patient_share / report.conversion_rate;
    let drift = (report.total_health_tokens - exact_total).abs();
    assert!(drift <= rounding_tolerance(report.len()));
}

#[test]
fn allocation_then_redemption_round_trip() {
    let manager = ConfigManager::new();
    let params = manager.get_params("PK.STANDARD").unwrap();

    let pool = ProfitPool::new(dec!(50000), params.patient_share_pct);
    let report = allocate(&pool, &five_patients(), params.ht_conversion_rate).unwrap();
    let balance = report.get("PAT-001").unwrap().health_tokens;

    // PAT-001 can afford every benefit in the standard catalog
    let catalog = standard_catalog();
    assert_eq!(eligible(balance, &catalog).len(), catalog.len());

    // spend most of the balance on specialist consultations
    let specialist = &catalog[2];
    assert_eq!(specialist.id, "SPECIALIST");
    let quote =
        validate_redemption(balance, specialist.unit_cost, 32, specialist.available_units)
            .unwrap();
    assert_eq!(quote.total_cost, dec!(800));
    assert_eq!(quote.balance_after, dec!(6.45));
    assert!(quote.allowed);

    // one more unit would overdraw: quoted, flagged, not an error
    let overdrawn =
        validate_redemption(quote.balance_after, specialist.unit_cost, 1, specialist.available_units)
            .unwrap();
    assert!(!overdrawn.allowed);
    assert_eq!(overdrawn.deficit(), Some(dec!(18.55)));
}

#[test]
fn pipeline_with_custom_profile() {
    let manager = ConfigManager::new();
    manager
        .load_toml_str(
            r#"
            [[params]]
            name = "EU.PILOT"
            token_conversion_rate = 50.0
            collateral_ratio = 0.9
            patient_share_pct = 60.0
            ht_conversion_rate = 5.0

            [[rates]]
            name = "EU.PILOT"

            [[rates.entries]]
            kind = "gold"
            unit_price = 55.0
            "#,
        )
        .unwrap();

    let params = manager.get_params("EU.PILOT").unwrap();
    let table = manager.get_rates("EU.PILOT").unwrap().build_table().unwrap();

    let valuation = valuate(
        AssetKind::Gold,
        dec!(100),
        &table,
        params.token_conversion_rate,
    )
    .unwrap();
    assert_eq!(valuation.worth, dec!(5500));
    assert_eq!(valuation.estimated_tokens, dec!(110));

    let report = allocate(
        &ProfitPool::new(dec!(10000), params.patient_share_pct),
        &[
            HolderBalance::new("A", dec!(300)),
            HolderBalance::new("B", dec!(100)),
        ],
        params.ht_conversion_rate,
    )
    .unwrap();
    assert_eq!(report.patient_share, dec!(6000));
    assert_eq!(report.get("A").unwrap().health_tokens, dec!(900));
    assert_eq!(report.get("B").unwrap().health_tokens, dec!(300));
    assert_eq!(
        report.total_health_tokens,
        report.patient_share / params.ht_conversion_rate
    );
}

#[test]
fn empty_snapshot_leaves_pool_unallocated() {
    let pool = ProfitPool::new(dec!(50000), dec!(70));
    let report = allocate(&pool, &[], dec!(10)).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.patient_share, dec!(35000));
    assert_eq!(report.operator_share, dec!(15000));
    assert_eq!(report.total_health_tokens, Decimal::ZERO);
}
