use traffic_charts::core::aggregate::ScaledGroup;
use traffic_charts::core::stack::{stack_series, StackKey, STACK_ORDER};

fn group(year: i32, asm: f64, rpm: f64, lf_scaled: f64) -> ScaledGroup {
    ScaledGroup {
        year,
        asm,
        rpm,
        lf_scaled,
    }
}

#[test]
fn bands_are_contiguous_from_zero_to_the_group_sum() {
    let groups = vec![group(2019, 300.0, 200.0, 420.0), group(2020, 50.0, 20.0, 28.0)];
    let series = stack_series(&STACK_ORDER, &groups);

    assert_eq!(series.len(), 3);
    for (g, grp) in groups.iter().enumerate() {
        assert_eq!(series[0].bands[g].lower, 0.0);
        for pair in series.windows(2) {
            assert_eq!(pair[0].bands[g].upper, pair[1].bands[g].lower);
        }
        let total = grp.asm + grp.rpm + grp.lf_scaled;
        assert!((series[2].bands[g].upper - total).abs() <= 1e-9);
    }
}

#[test]
fn bands_follow_declared_key_order_not_magnitude() {
    // LF is the largest value but is declared last, so it stacks on top.
    let groups = vec![group(2019, 10.0, 20.0, 1000.0)];
    let series = stack_series(&STACK_ORDER, &groups);

    assert_eq!(series[0].key, StackKey::Asm);
    assert_eq!(series[1].key, StackKey::Rpm);
    assert_eq!(series[2].key, StackKey::LoadFactor);
    assert_eq!(series[0].bands[0].upper, 10.0);
    assert_eq!(series[1].bands[0].upper, 30.0);
    assert_eq!(series[2].bands[0].upper, 1030.0);
}

#[test]
fn restacking_the_same_input_is_deterministic() {
    let groups = vec![
        group(2019, 300.0, 200.0, 420.0),
        group(2020, 50.0, 20.0, 28.0),
        group(2021, 75.0, 60.0, 94.5),
    ];
    assert_eq!(
        stack_series(&STACK_ORDER, &groups),
        stack_series(&STACK_ORDER, &groups)
    );
}

#[test]
fn bands_carry_their_group_key() {
    let groups = vec![group(2019, 1.0, 2.0, 3.0), group(2021, 4.0, 5.0, 6.0)];
    let series = stack_series(&STACK_ORDER, &groups);

    for s in &series {
        assert_eq!(s.bands[0].year, 2019);
        assert_eq!(s.bands[1].year, 2021);
    }
}

#[test]
fn empty_group_set_produces_empty_bands() {
    let series = stack_series(&STACK_ORDER, &[]);
    assert_eq!(series.len(), 3);
    assert!(series.iter().all(|s| s.bands.is_empty()));
}
