use traffic_charts::core::SequentialColorScale;
use traffic_charts::error::ChartError;

#[test]
fn domain_is_reversed_max_to_zero() {
    let scale = SequentialColorScale::from_max([10.0, 86_925_851.0, 500.0]).expect("valid scale");
    assert_eq!(scale.domain(), (86_925_851.0, 0.0));
}

#[test]
fn max_value_maps_to_the_hot_endpoint() {
    let scale = SequentialColorScale::from_max([10.0, 1000.0]).expect("valid scale");
    assert_eq!(
        scale.color_for(1000.0).expect("max"),
        SequentialColorScale::hot()
    );
    assert_eq!(
        scale.color_for(0.0).expect("zero"),
        SequentialColorScale::cold()
    );
}

#[test]
fn hot_end_is_red_and_cold_end_is_blue() {
    let hot = SequentialColorScale::hot();
    let cold = SequentialColorScale::cold();
    assert!(hot.red > hot.blue);
    assert!(cold.blue > cold.red);
}

#[test]
fn interior_values_interpolate_inside_the_ramp() {
    let scale = SequentialColorScale::from_max([100.0]).expect("valid scale");
    let mid = scale.color_for(50.0).expect("midpoint");
    mid.validate().expect("valid color");
    assert_ne!(mid, SequentialColorScale::hot());
    assert_ne!(mid, SequentialColorScale::cold());
}

#[test]
fn out_of_domain_values_clamp_to_the_endpoints() {
    let scale = SequentialColorScale::from_max([100.0]).expect("valid scale");
    assert_eq!(
        scale.color_for(250.0).expect("above max"),
        SequentialColorScale::hot()
    );
    assert_eq!(
        scale.color_for(-25.0).expect("below zero"),
        SequentialColorScale::cold()
    );
}

#[test]
fn empty_input_fails_fast() {
    let err = SequentialColorScale::from_max(std::iter::empty()).expect_err("empty domain");
    assert!(matches!(err, ChartError::EmptyDataset));
}
