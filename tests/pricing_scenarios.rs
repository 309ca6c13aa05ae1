use resale_pricer::{
    domain::{
        CompetitionLevel, CostFactors, FactorTable, MarkupTier, PricingCalculator, PricingConfig,
        ProductCategory, ProductRecord, BELOW_TIERS_MARKUP,
    },
    infra::bulk_input::{parse_products, BulkInputError},
    util::persistence::{load_profile, save_profile},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn budget_phone_case_under_very_high_competition() {
    let calc = PricingCalculator::default();
    let result = calc.calculate_price(120.0, "electronics", "very_high", false, true);

    // 0.60 × 0.85 × 0.70 = 0.357
    assert!(approx(result.adjusted_markup_percent, 35.7));
    assert!(approx(result.selling_price, 162.84));
    assert_eq!(result.final_price, 299.0);
}

#[test]
fn premium_beauty_serum_with_unique_value() {
    let calc = PricingCalculator::default();
    let result = calc.calculate_price(800.0, "beauty", "medium", true, true);

    assert!(approx(result.base_markup_percent, 35.0));
    assert!(approx(result.adjusted_markup_percent, 35.0 * 1.2 * 1.15));
    // 800 × 1.483 = 1186.4; + 1186.4 × 0.26 + 10 = 1504.864 → hundreds 15
    assert!(approx(result.cost_adjusted_price, 1504.864));
    assert_eq!(result.final_price, 1499.0);
}

#[test]
fn item_below_lowest_tier_gets_fallback_markup() {
    let calc = PricingCalculator::default();
    let result = calc.calculate_price(50.0, "generic", "medium", false, true);

    assert!(approx(result.base_markup_percent, BELOW_TIERS_MARKUP * 100.0));
    // 50 × 1.7 = 85; 85 × 1.26 + 10 = 117.1
    assert!(approx(result.cost_adjusted_price, 117.1));
    assert_eq!(result.final_price, 199.0);
}

#[test]
fn unknown_category_prices_like_generic() {
    let calc = PricingCalculator::default();
    for price in [50.0, 150.0, 450.0, 999.0, 1800.0, 4200.0] {
        assert_eq!(
            calc.calculate_price(price, "appliances", "medium", false, true),
            calc.calculate_price(price, "generic", "medium", false, true),
        );
    }
}

#[test]
fn every_listed_key_has_a_default_factor() {
    let config = PricingConfig::default();
    for category in ProductCategory::ALL {
        assert!(config.categories.contains(category.key()), "{category}");
    }
    for level in CompetitionLevel::ALL {
        assert!(config.competition.contains(level.key()), "{level}");
    }
}

#[test]
fn bulk_from_json_matches_single_calls() {
    let calc = PricingCalculator::default();
    let products = parse_products(
        r#"[
            {"supplier_price": 150, "category": "electronics", "competition": "high"},
            {"supplier_price": 500, "category": "fashion", "competition": "medium"},
            {"supplier_price": 900, "category": "beauty", "competition": "low", "has_unique_value": true},
            {"supplier_price": 1600, "category": "generic", "competition": "medium"}
        ]"#,
    )
    .unwrap();

    let results = calc.bulk_calculate(&products);

    let prices: Vec<f64> = results.iter().map(|r| r.supplier_price).collect();
    assert_eq!(prices, vec![150.0, 500.0, 900.0, 1600.0]);
    for (product, result) in products.iter().zip(&results) {
        let single = calc.calculate_price(
            product.supplier_price,
            &product.category,
            &product.competition,
            product.has_unique_value,
            true,
        );
        assert_eq!(result, &single);
    }
}

#[test]
fn bulk_rejects_bad_records_before_pricing() {
    let err = parse_products(r#"[{"supplier_price": 0}]"#).unwrap_err();
    assert!(matches!(err, BulkInputError::Product { index: 1, .. }));
    assert_eq!(
        err.to_string(),
        "product 1: supplier price must be a positive number, got 0"
    );
}

#[test]
fn independent_markets_coexist() {
    let home = PricingCalculator::default();
    let export = PricingCalculator::new(PricingConfig {
        tiers: vec![
            MarkupTier::bounded(0.0, 999.0, 0.5),
            MarkupTier::unbounded(1000.0, 0.3),
        ],
        categories: FactorTable::new().with("appliances", 1.3),
        cost_factors: CostFactors {
            gst_rate: 0.0,
            ..CostFactors::default()
        },
        ..PricingConfig::default()
    })
    .unwrap();

    let home_result = home.calculate_price(150.0, "appliances", "medium", false, false);
    let export_result = export.calculate_price(150.0, "appliances", "medium", false, false);

    assert!(approx(home_result.adjusted_markup_percent, 60.0));
    assert!(approx(export_result.adjusted_markup_percent, 65.0));
    assert_eq!(export_result.cost_breakdown.gst, 0.0);
    assert!(home_result.cost_breakdown.gst > 0.0);
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calc = PricingCalculator::default();
    let records: Vec<ProductRecord> = (1..=64)
        .map(|i| ProductRecord::new(f64::from(i) * 75.0))
        .collect();
    let sequential = calc.bulk_calculate(&records);

    let shared = &calc;
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = records
            .chunks(16)
            .map(|chunk| scope.spawn(move || shared.bulk_calculate(chunk)))
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(parallel, sequential);
}

#[test]
fn profile_round_trip_drives_the_calculator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    let config = PricingConfig {
        cost_factors: CostFactors {
            packaging_cost: 0.0,
            ..CostFactors::default()
        },
        ..PricingConfig::default()
    };
    save_profile(&path, &config).unwrap();

    let calc = PricingCalculator::new(load_profile(&path).unwrap()).unwrap();
    let result = calc.calculate_price(1000.0, "generic", "medium", false, false);

    assert_eq!(result.cost_breakdown.packaging, 0.0);
    assert!(approx(result.total_additional_costs, 1350.0 * 0.26));
}
