//! Tests for value to pixel mapping.

use renderer::CoordinateMapper;
use test_utils::assert_approx_eq;
use wx_common::{ChartError, ChartLayout, Metric, MetricPolicy, OriginRule};

// ============================================================================
// Shifted origin
// ============================================================================

#[test]
fn test_shifted_maps_range_onto_plot_height() {
    let mapper = CoordinateMapper::new(19.0, 270.0, 20.0, 80.0, OriginRule::Shifted).unwrap();
    assert_approx_eq!(mapper.map(20.0), 289.0, 1e-9);
    assert_approx_eq!(mapper.map(100.0), 19.0, 1e-9);
    assert_approx_eq!(mapper.map(60.0), 154.0, 1e-9);
}

#[test]
fn test_larger_values_map_higher() {
    let mapper = CoordinateMapper::new(19.0, 270.0, 984.0, 62.0, OriginRule::Shifted).unwrap();
    assert!(mapper.map(1030.0) < mapper.map(1000.0));
}

#[test]
fn test_values_outside_range_are_not_clamped() {
    let mapper = CoordinateMapper::new(19.0, 270.0, 0.0, 100.0, OriginRule::Shifted).unwrap();
    assert!(mapper.map(110.0) < 19.0);
    assert!(mapper.map(-10.0) > 289.0);
}

// ============================================================================
// Sign-aware origin
// ============================================================================

#[test]
fn test_sign_aware_non_negative_min_measures_from_zero() {
    let mapper = CoordinateMapper::new(19.0, 208.0, 2.0, 8.0, OriginRule::SignAware).unwrap();
    // 19 + 208 - 208 * 5 / 8
    assert_approx_eq!(mapper.map(5.0), 97.0, 1e-9);
    assert_approx_eq!(mapper.map(0.0), 227.0, 1e-9);
}

#[test]
fn test_sign_aware_negative_min_shifts() {
    let mapper = CoordinateMapper::new(19.0, 208.0, -10.0, 20.0, OriginRule::SignAware).unwrap();
    assert_approx_eq!(mapper.map(-10.0), 227.0, 1e-9);
    assert_approx_eq!(mapper.map(0.0), 123.0, 1e-9);
    assert_approx_eq!(mapper.map(10.0), 19.0, 1e-9);
}

#[test]
fn test_origins_agree_when_min_is_zero() {
    let shifted = CoordinateMapper::new(19.0, 208.0, 0.0, 5.1, OriginRule::Shifted).unwrap();
    let aware = CoordinateMapper::new(19.0, 208.0, 0.0, 5.1, OriginRule::SignAware).unwrap();
    for v in [0.0, 1.3, 2.7, 5.1] {
        assert_approx_eq!(shifted.map(v), aware.map(v), 1e-9);
    }
}

// ============================================================================
// Degenerate ranges
// ============================================================================

#[test]
fn test_zero_range_is_rejected() {
    let err = CoordinateMapper::new(19.0, 270.0, 0.0, 0.0, OriginRule::SignAware).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
}

#[test]
fn test_non_finite_range_is_rejected() {
    for range in [f64::NAN, f64::INFINITY] {
        let result = CoordinateMapper::new(19.0, 270.0, 0.0, range, OriginRule::Shifted);
        assert!(matches!(result, Err(ChartError::DegenerateRange { .. })));
    }
}

#[test]
fn test_for_layout_reports_bounds() {
    let layout = ChartLayout::default();
    match CoordinateMapper::for_layout(&layout, 0.0, 0.0, OriginRule::SignAware) {
        Err(ChartError::DegenerateRange { min, max }) => {
            assert_eq!(min, 0.0);
            assert_eq!(max, 0.0);
        }
        other => panic!("expected DegenerateRange, got {:?}", other),
    }
}

#[test]
fn test_for_layout_uses_policy_geometry() {
    let policy = MetricPolicy::default_for(Metric::WindDirection);
    let mapper =
        CoordinateMapper::for_layout(&policy.layout, 0.0, 359.9, policy.origin).unwrap();
    assert_approx_eq!(mapper.map(359.9), 20.0, 1e-9);
    assert_approx_eq!(mapper.map(0.0), 228.0, 1e-9);
}
