use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::SmoothStep,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn smoothstep_matches_closed_form() {
    let t = 0.3;
    let expected = 10.0 + t * t * (3.0 - 2.0 * t) * (50.0 - 10.0);
    assert_eq!(Ease::SmoothStep.interpolate(t, 10.0, 50.0), expected);
    assert_eq!(Ease::SmoothStep.interpolate(0.5, 10.0, 50.0), 30.0);
}

#[test]
fn interpolate_stays_in_range_for_descending_bounds() {
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        let v = Ease::SmoothStep.interpolate(t, 80.0, -20.0);
        assert!((-20.0..=80.0).contains(&v));
    }
    assert_eq!(Ease::SmoothStep.interpolate(0.0, 80.0, -20.0), 80.0);
    assert_eq!(Ease::SmoothStep.interpolate(1.0, 80.0, -20.0), -20.0);
}

#[test]
fn interpolate_with_equal_bounds_is_constant() {
    assert_eq!(Ease::SmoothStep.interpolate(0.4, 7.0, 7.0), 7.0);
}
