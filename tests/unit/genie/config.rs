use super::*;

#[test]
fn defaults_are_valid() {
    let c = GenieConfig::default();
    c.validate().unwrap();
    assert_eq!(c.curve_phase(), PhaseWindow { start: 0.0, end: 0.4 });
    assert_eq!(c.slide_phase(), PhaseWindow { start: 0.3, end: 0.4 });
    assert_eq!(c.slice_thickness, 10.0);
    assert_eq!(c.frame_rate.as_f64(), 60.0);
}

#[test]
fn json_overrides_only_given_keys() {
    let c = GenieConfig::from_json_str(
        r#"{ "slide_phase_end": 1.0, "frame_rate": { "num": 30, "den": 1 } }"#,
    )
    .unwrap();
    assert_eq!(c.slide_phase_end, 1.0);
    assert_eq!(c.curve_phase_end, 0.4);
    assert_eq!(c.frame_rate, Fps { num: 30, den: 1 });
}

#[test]
fn json_rejects_unknown_keys_and_bad_values() {
    let err = GenieConfig::from_json_str(r#"{ "slice_size": 4 }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    let err = GenieConfig::from_json_str(r#"{ "slice_thickness": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("slice_thickness"));

    let err = GenieConfig::from_json_str(r#"{ "curve_phase_end": 0.0 }"#).unwrap_err();
    assert!(err.to_string().contains("curve phase"));
}

#[test]
fn zero_frame_rate_is_rejected() {
    let c = GenieConfig {
        frame_rate: Fps { num: 0, den: 1 },
        ..GenieConfig::default()
    };
    assert!(c.validate().is_err());
}
