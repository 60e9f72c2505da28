use chrono::NaiveDate;
use proptest::prelude::*;
use traffic_charts::api::format::format_grouped;
use traffic_charts::core::aggregate::{
    aggregate_by_year, display_load_factor, rescale_load_factor, FilterMode,
};
use traffic_charts::core::record::load_records;
use traffic_charts::core::stack::{stack_series, STACK_ORDER};
use traffic_charts::core::{BandScale, LinearScale, TrafficRecord};

fn make_record(year: i32, month: u32, asm: f64, rpm: f64, lf: f64) -> TrafficRecord {
    TrafficRecord {
        year,
        month,
        date: NaiveDate::from_ymd_opt(year, month, 1).expect("valid month"),
        dom_asm: asm * 0.6,
        int_asm: asm * 0.4,
        asm,
        dom_rpm: rpm * 0.6,
        int_rpm: rpm * 0.4,
        rpm,
        dom_lf: lf,
        int_lf: lf,
        lf,
        dom_pax: 0.0,
        int_pax: 0.0,
        pax: 0.0,
    }
}

fn record_strategy() -> impl Strategy<Value = TrafficRecord> {
    (
        1990i32..2030,
        1u32..=12,
        1.0f64..1.0e9,
        1.0f64..1.0e9,
        1.0f64..100.0,
    )
        .prop_map(|(year, month, asm, rpm, lf)| make_record(year, month, asm, rpm, lf))
}

/// Fisher-Yates over a splitmix-style generator, seeded per case.
fn shuffled(records: &[TrafficRecord], seed: u64) -> Vec<TrafficRecord> {
    let mut out = records.to_vec();
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state
    };
    for i in (1..out.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        max in 0.001f64..1.0e12,
        value_factor in 0.0f64..1.0,
        height in 100.0f64..2000.0
    ) {
        let value = max * value_factor;
        let scale = LinearScale::y_axis(max, height).expect("valid scale");

        let px = scale.to_pixel(value).expect("to pixel");
        let recovered = scale.from_pixel(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= max * 1e-9);
    }

    #[test]
    fn aggregation_is_order_independent_property(
        records in proptest::collection::vec(record_strategy(), 1..30),
        seed in any::<u64>()
    ) {
        let permuted = shuffled(&records, seed);

        let expected = aggregate_by_year(&records, FilterMode::Total).expect("aggregate");
        let actual = aggregate_by_year(&permuted, FilterMode::Total).expect("aggregate");

        prop_assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            prop_assert_eq!(a.year, e.year);
            // Permuting rows reorders the in-year additions, so sums agree
            // only to floating-point tolerance.
            prop_assert!((a.asm - e.asm).abs() <= e.asm.abs() * 1e-12 + 1e-9);
            prop_assert!((a.rpm - e.rpm).abs() <= e.rpm.abs() * 1e-12 + 1e-9);
            prop_assert!((a.lf - e.lf).abs() <= e.lf.abs() * 1e-12 + 1e-9);
        }
    }

    #[test]
    fn stacked_bands_partition_the_group_sum_property(
        records in proptest::collection::vec(record_strategy(), 1..30)
    ) {
        let groups = aggregate_by_year(&records, FilterMode::Total).expect("aggregate");
        let scaled = rescale_load_factor(&groups);
        let series = stack_series(&STACK_ORDER, &scaled);

        for (g, group) in scaled.iter().enumerate() {
            prop_assert_eq!(series[0].bands[g].lower, 0.0);
            for pair in series.windows(2) {
                prop_assert_eq!(pair[0].bands[g].upper, pair[1].bands[g].lower);
            }
            let total = group.asm + group.rpm + group.lf_scaled;
            let top = series[2].bands[g].upper;
            prop_assert!((top - total).abs() <= total.abs() * 1e-12 + 1e-9);
        }
    }

    #[test]
    fn load_factor_display_inverts_the_rescale_property(
        records in proptest::collection::vec(record_strategy(), 1..30)
    ) {
        let groups = aggregate_by_year(&records, FilterMode::Total).expect("aggregate");
        let scaled = rescale_load_factor(&groups);

        for (group, scaled_group) in groups.iter().zip(&scaled) {
            let recovered = display_load_factor(scaled_group);
            prop_assert!((recovered - group.lf).abs() <= 1e-6);
        }
    }

    #[test]
    fn grouped_figures_survive_ingestion_property(pax in 0u64..10_000_000_000) {
        let grouped = format_grouped(pax as f64);
        let text = format!(
            "Year,Month,Dom_ASM,Int_ASM,ASM,Dom_RPM,Int_RPM,RPM,Dom_LF,Int_LF,LF,Dom_Pax,Int_Pax,Pax\n\
             2019,7,0,0,0,0,0,0,0,0,0,0,0,\"{grouped}\""
        );

        let records = load_records(&text).expect("parse");
        prop_assert_eq!(records[0].pax, pax as f64);
    }

    #[test]
    fn band_positions_advance_by_one_step_property(
        n in 1usize..40,
        width in 100.0f64..2000.0,
        padding in 0.0f64..0.9
    ) {
        let years: Vec<i32> = (0..n as i32).map(|i| 2000 + i).collect();
        let scale = BandScale::new(years.clone(), (0.0, width), padding).expect("valid scale");

        let step = width / (n as f64 + padding);
        prop_assert!((scale.bandwidth() - step * (1.0 - padding)).abs() <= 1e-9 * width);

        let mut previous: Option<f64> = None;
        for year in &years {
            let position = scale.position(year).expect("in domain");
            prop_assert!(position >= 0.0 && position + scale.bandwidth() <= width + 1e-6);
            if let Some(prev) = previous {
                prop_assert!((position - prev - step).abs() <= 1e-9 * width);
            }
            previous = Some(position);
        }
    }
}
