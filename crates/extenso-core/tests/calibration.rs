//! Tests for the calibration engine: batch shape, baseline behavior and
//! the certificate polynomial numerics.

use extenso_core::calibration::{
    CalibratedReading, CalibrationCurve, CalibrationEngine, ReferenceRow, CURVE_COUNT,
    GAUGE_LENGTH_MM,
};
use extenso_core::reading::{RawReading, ReadingOrigin};

fn reading_with_signals(signals: [f64; 3]) -> RawReading {
    RawReading {
        date: "10/01/2025".to_string(),
        time: "06:00".to_string(),
        temperature_c: 24.5,
        battery_v: 13.25,
        signals,
    }
}

#[test]
fn test_batch_of_n_yields_n_plus_one_rows() {
    let engine = CalibrationEngine::default();
    for n in [0usize, 1, 5, 48] {
        let batch: Vec<RawReading> = (0..n)
            .map(|i| reading_with_signals([0.07 + 0.001 * i as f64, 0.035, 0.179]))
            .collect();
        let table = engine.calibrate(&batch);
        assert_eq!(table.len(), n + 1);
        assert_eq!(table[0].origin, ReadingOrigin::Reference);
        assert!(table[1..].iter().all(|r| r.origin == ReadingOrigin::Live));
    }
}

#[test]
fn test_reference_drift_is_zero_by_construction() {
    let engine = CalibrationEngine::default();
    let table = engine.calibrate(&[reading_with_signals([0.08, 0.04, 0.18])]);

    let reference = &table[0];
    for channel in &reference.channels {
        assert_eq!(channel.move_from_start_mm, [0.0; CURVE_COUNT]);
        assert_eq!(channel.mean_move_mm, 0.0);
        assert_eq!(channel.microstrain, 0.0);
    }
    // Stored certificate outputs, not recomputed from the signals
    assert_eq!(
        reference.channels[0].displacement_mm,
        [0.027181591, -0.14321684, -0.273843431]
    );
}

#[test]
fn test_reading_identical_to_reference_has_no_drift() {
    let engine = CalibrationEngine::default();
    let signals = engine.reference().signals;
    let table = engine.calibrate(&[reading_with_signals(signals)]);

    // The stored reference displacements are rounded certificate values,
    // so the drift is only zero to their recording precision.
    for channel in &table[1].channels {
        for drift in channel.move_from_start_mm {
            assert!(drift.abs() < 1e-6, "drift {} too large", drift);
        }
        assert!(channel.microstrain.abs() < 1e-3);
    }
}

#[test]
fn test_certificate_one_matches_recorded_commissioning_value() {
    let mm = CalibrationCurve::CERTIFICATE_1.evaluate(0.073 / 5.0);
    assert!((mm - 0.027181591).abs() < 1e-6, "got {}", mm);
}

#[test]
fn test_op_ratio_normalizes_to_full_scale() {
    let engine = CalibrationEngine::default();
    let table = engine.calibrate(&[reading_with_signals([2.5, 5.0, 0.0])]);

    let channels = &table[1].channels;
    assert_eq!(channels[0].op_ratio, 0.5);
    assert_eq!(channels[1].op_ratio, 1.0);
    assert_eq!(channels[2].op_ratio, 0.0);
}

#[test]
fn test_known_microstrain_value() {
    let engine = CalibrationEngine::default();
    let table = engine.calibrate(&[reading_with_signals([0.085, 0.0349, 0.1787])]);

    // Certificate drift of a 0.085 V signal on channel 1, averaged and
    // normalized to the 700 mm gauge length
    let channel = &table[1].channels[0];
    assert!((channel.microstrain - 29.310479).abs() < 1e-5, "got {}", channel.microstrain);
}

#[test]
fn test_microstrain_round_trip() {
    // A target microstrain maps back to mean displacement via the gauge length
    let target = 150.0;
    let mean_move_mm = target * GAUGE_LENGTH_MM / 1_000_000.0;
    assert!((mean_move_mm / GAUGE_LENGTH_MM * 1_000_000.0 - target).abs() < 1e-9);
}

#[test]
fn test_non_finite_signals_propagate() {
    let engine = CalibrationEngine::default();
    let table = engine.calibrate(&[reading_with_signals([f64::NAN, f64::INFINITY, 0.18])]);

    let channels = &table[1].channels;
    assert!(channels[0].microstrain.is_nan());
    assert!(!channels[1].microstrain.is_finite());
    assert!(channels[2].microstrain.is_finite());
}

#[test]
fn test_engine_takes_curves_and_reference_as_configuration() {
    // An identity curve and a zeroed reference make drift equal the op-ratio
    let identity = CalibrationCurve::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let reference = ReferenceRow {
        date: "01/01/2025".to_string(),
        time: "00:00".to_string(),
        temperature_c: 20.0,
        battery_v: 13.0,
        signals: [0.0; 3],
        displacements_mm: [[0.0; 3]; 3],
    };
    let engine = CalibrationEngine::new([identity; 3], reference);

    let table = engine.calibrate(&[reading_with_signals([1.0, 2.0, 3.0])]);
    let channels = &table[1].channels;
    assert!((channels[0].mean_move_mm - 0.2).abs() < 1e-12);
    assert!((channels[1].mean_move_mm - 0.4).abs() < 1e-12);
    assert!((channels[2].mean_move_mm - 0.6).abs() < 1e-12);
}

#[test]
fn test_all_intermediate_columns_are_exposed() {
    let engine = CalibrationEngine::default();
    let table: Vec<CalibratedReading> = engine.calibrate(&[reading_with_signals([0.08, 0.04, 0.18])]);

    let channel = &table[1].channels[0];
    assert_eq!(channel.signal_v, 0.08);
    assert_eq!(channel.displacement_mm.len(), CURVE_COUNT);
    assert_eq!(channel.move_from_start_mm.len(), CURVE_COUNT);
    let mean: f64 = channel.move_from_start_mm.iter().sum::<f64>() / CURVE_COUNT as f64;
    assert_eq!(channel.mean_move_mm, mean);
}
