use approx::assert_relative_eq;
use lumapick::ColorError;
use lumapick::hue::{hue_from_angle, is_pure_hue, is_pure_tint};
use lumapick::luminance::relative_luminance;
use lumapick::shade::{Reach, apply_shade, shade_for_luminance};
use lumapick::tint::{TINT_STEPS, interpolate_tints};
use palette::Srgb;

fn sample_hues() -> Vec<Srgb<f64>> {
    (0..360)
        .step_by(7)
        .map(|deg| hue_from_angle(f64::from(deg)).unwrap())
        .collect()
}

#[test]
fn test_hue_from_angle_is_pure() {
    for hue in sample_hues() {
        assert!(is_pure_hue(hue), "{:?} is not pure", hue);
    }
}

#[test]
fn test_every_integer_angle_is_a_pure_hue() {
    for deg in 0..360 {
        assert!(is_pure_hue(hue_from_angle(f64::from(deg)).unwrap()));
    }
    assert_eq!(hue_from_angle(0.0).unwrap(), Srgb::new(1.0, 0.0, 0.0));
}

#[test]
fn test_hue_from_angle_wraps() {
    assert_eq!(hue_from_angle(360.0).unwrap(), hue_from_angle(0.0).unwrap());
    assert_eq!(hue_from_angle(-60.0).unwrap(), hue_from_angle(300.0).unwrap());
    assert_eq!(hue_from_angle(750.0).unwrap(), hue_from_angle(30.0).unwrap());
}

#[test]
fn test_hue_from_angle_quantizes_free_channel() {
    let orange = hue_from_angle(30.0).unwrap();
    assert_eq!(orange.green, 128.0 / 255.0);
}

#[test]
fn test_hue_from_angle_rejects_nan() {
    assert!(matches!(
        hue_from_angle(f64::NAN),
        Err(ColorError::NonFiniteAngle(_))
    ));
}

#[test]
fn test_pure_hue_and_tint_predicates() {
    assert!(is_pure_hue(Srgb::new(1.0, 0.3, 0.0)));
    assert!(!is_pure_hue(Srgb::new(1.0, 1.0, 1.0)));
    assert!(!is_pure_hue(Srgb::new(0.9, 0.0, 0.0)));
    assert!(is_pure_tint(Srgb::new(1.0, 1.0, 1.0)));
    assert!(is_pure_tint(Srgb::new(0.2, 1.0, 0.7)));
    assert!(!is_pure_tint(Srgb::new(0.5, 0.5, 0.5)));
}

#[test]
fn test_tints_span_hue_to_white() {
    for hue in sample_hues() {
        let tints = interpolate_tints(hue).unwrap();
        assert_eq!(tints.len(), TINT_STEPS);
        assert_eq!(tints[0], hue);
        assert_eq!(tints[255], Srgb::new(1.0, 1.0, 1.0));
    }
}

#[test]
fn test_tint_channels_never_decrease() {
    for hue in sample_hues() {
        let tints = interpolate_tints(hue).unwrap();
        for pair in tints.as_slice().windows(2) {
            assert!(pair[1].red >= pair[0].red);
            assert!(pair[1].green >= pair[0].green);
            assert!(pair[1].blue >= pair[0].blue);
        }
    }
}

#[test]
fn test_every_tint_is_pure() {
    let tints = interpolate_tints(hue_from_angle(200.0).unwrap()).unwrap();
    assert!(tints.iter().all(|t| is_pure_tint(*t)));
}

#[test]
fn test_interpolate_tints_rejects_non_hues() {
    assert!(matches!(
        interpolate_tints(Srgb::new(1.0, 1.0, 1.0)),
        Err(ColorError::NotPureHue(_))
    ));
    assert!(matches!(
        interpolate_tints(Srgb::new(1.5, 0.0, 0.0)),
        Err(ColorError::ComponentOutOfRange { name: "red", .. })
    ));
}

#[test]
fn test_shade_round_trip_identity() {
    for hue in sample_hues() {
        let tints = interpolate_tints(hue).unwrap();
        for step in [0, 17, 128, 200, 255] {
            let tint = tints[step];
            let own = relative_luminance(tint).unwrap();
            let shade = shade_for_luminance(own, tint).unwrap();
            assert_relative_eq!(shade, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_shade_for_black_is_not_positive() {
    for hue in sample_hues() {
        assert!(shade_for_luminance(0.0, hue).unwrap() <= 0.0);
    }
}

#[test]
fn test_shade_above_one_is_unreachable() {
    // Pure blue is too dark to reach the legibility luminance
    let shade = shade_for_luminance(0.1795, Srgb::new(0.0, 0.0, 1.0)).unwrap();
    assert!(shade > 1.0);
    assert_eq!(Reach::classify(shade), Reach::Unreachable);
    assert_eq!(Reach::classify(shade).shade(), None);
    assert_eq!(Reach::classify(-0.01).shade(), Some(0.0));
}

#[test]
fn test_shade_for_luminance_validates_inputs() {
    let red = Srgb::new(1.0, 0.0, 0.0);
    assert!(matches!(
        shade_for_luminance(1.2, red),
        Err(ColorError::LuminanceOutOfRange(_))
    ));
    assert!(matches!(
        shade_for_luminance(0.5, Srgb::new(0.5, 0.5, 0.5)),
        Err(ColorError::NotPureTint(_))
    ));
}

#[test]
fn test_apply_shade_endpoints() {
    let red = Srgb::new(1.0, 0.0, 0.0);
    assert_eq!(apply_shade(red, 1.0), Srgb::new(255u8, 0, 0));
    assert_eq!(apply_shade(red, 0.0), Srgb::new(0u8, 0, 0));
}
