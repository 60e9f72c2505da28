use approx::assert_relative_eq;
use traffic_charts::interaction::{
    HitShape, HoverController, HoverTarget, TooltipContent, TooltipPhase, TooltipState,
};

fn content(text: &str) -> TooltipContent {
    TooltipContent::new(vec![text.to_owned()])
}

#[test]
fn attack_fade_reaches_steady_state_in_two_tenths_of_a_second() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("a"), 0.0, 0.0);
    assert_eq!(tooltip.phase(), TooltipPhase::FadingIn);

    tooltip.step(0.1);
    assert_relative_eq!(tooltip.opacity(), 0.45);

    tooltip.step(0.1);
    assert_eq!(tooltip.phase(), TooltipPhase::Visible);
    assert_relative_eq!(tooltip.opacity(), 0.9);
}

#[test]
fn release_fade_takes_half_a_second_and_drops_the_content() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("a"), 0.0, 0.0);
    tooltip.step(0.2);

    tooltip.on_pointer_out();
    assert_eq!(tooltip.phase(), TooltipPhase::FadingOut);

    tooltip.step(0.25);
    assert_relative_eq!(tooltip.opacity(), 0.45);
    assert!(tooltip.content().is_some());

    tooltip.step(0.25);
    assert_eq!(tooltip.phase(), TooltipPhase::Rest);
    assert_relative_eq!(tooltip.opacity(), 0.0);
    assert!(tooltip.content().is_none());
}

#[test]
fn pointer_over_cancels_an_in_flight_release() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("first"), 0.0, 0.0);
    tooltip.step(0.2);
    tooltip.on_pointer_out();
    tooltip.step(0.25);

    // Re-entry resumes the attack from the current opacity with new content.
    tooltip.on_pointer_over(content("second"), 0.0, 0.0);
    assert_eq!(tooltip.phase(), TooltipPhase::FadingIn);
    assert_relative_eq!(tooltip.opacity(), 0.45);
    assert_eq!(tooltip.content().expect("content").lines[0], "second");

    tooltip.step(0.1);
    assert_eq!(tooltip.phase(), TooltipPhase::Visible);
}

#[test]
fn tooltip_anchors_offset_from_the_pointer() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("a"), 100.0, 200.0);
    assert_eq!(tooltip.position(), (110.0, 172.0));
}

#[test]
fn pointer_over_while_visible_stays_visible() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("a"), 0.0, 0.0);
    tooltip.step(1.0);
    tooltip.on_pointer_over(content("b"), 5.0, 5.0);
    assert_eq!(tooltip.phase(), TooltipPhase::Visible);
    assert_relative_eq!(tooltip.opacity(), 0.9);
}

#[test]
fn zero_and_negative_deltas_are_ignored() {
    let mut tooltip = TooltipState::default();
    tooltip.on_pointer_over(content("a"), 0.0, 0.0);
    tooltip.step(0.0);
    tooltip.step(-1.0);
    tooltip.step(f64::NAN);
    assert_relative_eq!(tooltip.opacity(), 0.0);
    assert_eq!(tooltip.phase(), TooltipPhase::FadingIn);
}

#[test]
fn tooltip_content_serializes_for_host_embedding() {
    let content = TooltipContent::new(vec!["Year: 2019".to_owned(), "ASM: 580".to_owned()]);
    let json = serde_json::to_string(&content).expect("serialize");
    assert_eq!(json, r#"{"lines":["Year: 2019","ASM: 580"]}"#);
    let back: TooltipContent = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, content);
}

fn overlapping_targets() -> Vec<HoverTarget<&'static str>> {
    vec![
        HoverTarget {
            shape: HitShape::Rect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
            },
            payload: "bottom",
        },
        HoverTarget {
            shape: HitShape::Circle {
                cx: 50.0,
                cy: 50.0,
                radius: 10.0,
            },
            payload: "top",
        },
    ]
}

#[test]
fn hit_test_prefers_the_topmost_target() {
    let mut controller = HoverController::default();
    controller.rebuild(overlapping_targets());

    assert_eq!(controller.hit_test(50.0, 50.0), Some(1));
    assert_eq!(controller.hit_test(5.0, 5.0), Some(0));
    assert_eq!(controller.hit_test(200.0, 200.0), None);
}

#[test]
fn pointer_move_highlights_and_formats_from_the_payload() {
    let mut controller = HoverController::default();
    controller.rebuild(overlapping_targets());

    controller.on_pointer_move(50.0, 50.0, |payload| content(payload));
    assert_eq!(controller.highlighted(), Some(1));
    assert_eq!(controller.marker_opacity(1), 1.0);
    assert_eq!(controller.marker_opacity(0), 0.5);
    assert_eq!(
        controller.tooltip().content().expect("content").lines[0],
        "top"
    );

    controller.on_pointer_move(200.0, 200.0, |payload| content(payload));
    assert!(controller.highlighted().is_none());
    assert_eq!(controller.tooltip().phase(), TooltipPhase::FadingOut);
}

#[test]
fn rebuild_drops_the_highlight_and_fades_the_tooltip_out() {
    let mut controller = HoverController::default();
    controller.rebuild(overlapping_targets());
    controller.on_pointer_move(50.0, 50.0, |payload| content(payload));
    assert!(controller.highlighted().is_some());

    controller.rebuild(Vec::new());
    assert!(controller.highlighted().is_none());
    assert_eq!(controller.target_count(), 0);
    assert_eq!(controller.tooltip().phase(), TooltipPhase::FadingOut);
}
