use approx::assert_relative_eq;
use chrono::NaiveDate;
use traffic_charts::core::aggregate::{
    aggregate_by_year, display_load_factor, rescale_load_factor, FilterMode,
};
use traffic_charts::core::TrafficRecord;
use traffic_charts::error::ChartError;

fn record(year: i32, month: u32, asm: f64, rpm: f64, lf: f64) -> TrafficRecord {
    TrafficRecord {
        year,
        month,
        date: NaiveDate::from_ymd_opt(year, month, 1).expect("valid month"),
        dom_asm: asm * 0.75,
        int_asm: asm * 0.25,
        asm,
        dom_rpm: rpm * 0.75,
        int_rpm: rpm * 0.25,
        rpm,
        dom_lf: lf - 1.0,
        int_lf: lf + 1.0,
        lf,
        dom_pax: 0.0,
        int_pax: 0.0,
        pax: 0.0,
    }
}

#[test]
fn sums_asm_rpm_and_means_lf_per_year() {
    let records = vec![
        record(2019, 1, 100.0, 80.0, 80.0),
        record(2019, 2, 110.0, 90.0, 82.0),
        record(2020, 1, 50.0, 20.0, 40.0),
    ];
    let groups = aggregate_by_year(&records, FilterMode::Total).expect("aggregate");

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].year, 2019);
    assert_eq!(groups[0].asm, 210.0);
    assert_eq!(groups[0].rpm, 170.0);
    assert_relative_eq!(groups[0].lf, 81.0);
    assert_eq!(groups[1].year, 2020);
    assert_eq!(groups[1].asm, 50.0);
}

#[test]
fn grouping_is_independent_of_row_arrival_order() {
    let forward = vec![
        record(2019, 1, 100.0, 80.0, 80.0),
        record(2019, 2, 110.0, 90.0, 82.0),
        record(2020, 1, 50.0, 20.0, 40.0),
        record(2021, 6, 75.0, 60.0, 70.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();
    let mut interleaved = vec![forward[2], forward[0], forward[3], forward[1]];

    let expected = aggregate_by_year(&forward, FilterMode::Total).expect("forward");
    for permutation in [&mut reversed, &mut interleaved] {
        let groups = aggregate_by_year(permutation, FilterMode::Total).expect("permutation");
        assert_eq!(groups, expected);
    }
}

#[test]
fn filter_mode_selects_the_matching_triplet() {
    let records = vec![record(2019, 1, 100.0, 80.0, 80.0)];

    let total = aggregate_by_year(&records, FilterMode::Total).expect("total");
    let domestic = aggregate_by_year(&records, FilterMode::Domestic).expect("domestic");
    let international =
        aggregate_by_year(&records, FilterMode::International).expect("international");

    assert_eq!(total[0].asm, 100.0);
    assert_eq!(domestic[0].asm, 75.0);
    assert_eq!(international[0].asm, 25.0);
    assert_relative_eq!(domestic[0].lf, 79.0);
    assert_relative_eq!(international[0].lf, 81.0);
}

#[test]
fn empty_input_is_rejected() {
    let err = aggregate_by_year(&[], FilterMode::Total).expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn load_factor_rescale_uses_the_asm_plus_rpm_base() {
    let groups = aggregate_by_year(
        &[record(2019, 1, 300.0, 200.0, 84.0)],
        FilterMode::Total,
    )
    .expect("aggregate");
    let scaled = rescale_load_factor(&groups);

    assert_eq!(scaled[0].lf_scaled, 84.0 / 100.0 * 500.0);
}

#[test]
fn display_load_factor_inverts_the_rescale() {
    let groups = aggregate_by_year(
        &[
            record(2019, 1, 300.0, 200.0, 84.37),
            record(2019, 2, 280.0, 210.0, 79.13),
        ],
        FilterMode::Total,
    )
    .expect("aggregate");
    let scaled = rescale_load_factor(&groups);

    assert_relative_eq!(
        display_load_factor(&scaled[0]),
        groups[0].lf,
        epsilon = 1e-9
    );
}
