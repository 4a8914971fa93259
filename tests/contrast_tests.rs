use approx::assert_relative_eq;
use lumapick::ColorError;
use lumapick::contrast::{
    BoundaryPath, ContrastBounds, DisplayMode, LEGIBILITY_LUMINANCE, boundary_path,
    boundary_region, legibility_curve,
};
use lumapick::hue::hue_from_angle;
use lumapick::shade::shade_for_luminance;
use lumapick::tint::interpolate_tints;

#[test]
fn test_white_at_max_ratio_covers_everything() {
    let bounds = ContrastBounds::new(1.0, 21.0).unwrap();
    let (upper, lower) = bounds.clamped();
    assert_eq!(upper, 1.0);
    assert!(bounds.lower <= 1e-12);
    assert_eq!(lower, 0.0);
    assert!(!bounds.is_empty());
    assert!(bounds.fails(0.5));
    // The solved lower bound lands a hair below zero; black still passes
    assert!(!bounds.fails(0.0));
    assert_eq!(bounds.contrast(0.0), 21.0);
}

#[test]
fn test_black_at_ratio_one_is_empty() {
    let bounds = ContrastBounds::new(0.0, 1.0).unwrap();
    assert!(bounds.is_empty());
    assert!(!bounds.fails(0.0));
    assert!(!bounds.fails(0.5));
}

#[test]
fn test_bounds_for_white_at_aa() {
    let bounds = ContrastBounds::new(1.0, 4.5).unwrap();
    assert_relative_eq!(bounds.upper, 4.675, epsilon = 1e-12);
    assert_relative_eq!(bounds.lower, 0.18333, epsilon = 1e-5);
    // Pure red fails 4.5:1 against white
    assert!(bounds.fails(0.2126));
    assert!(!bounds.fails(0.1));
}

#[test]
fn test_bounds_reject_out_of_range() {
    assert!(matches!(
        ContrastBounds::new(1.0, 22.0),
        Err(ColorError::RatioOutOfRange(_))
    ));
    assert!(matches!(
        ContrastBounds::new(1.0, 0.5),
        Err(ColorError::RatioOutOfRange(_))
    ));
    assert!(matches!(
        ContrastBounds::new(-0.1, 4.5),
        Err(ColorError::LuminanceOutOfRange(_))
    ));
}

#[test]
fn test_display_mode_cycles() {
    for mode in DisplayMode::ALL {
        assert_eq!(mode.next().prev(), mode);
        assert_eq!(mode.next().next().next(), mode);
    }
}

#[test]
fn test_legibility_curve_matches_solver() {
    let tints = interpolate_tints(hue_from_angle(0.0).unwrap()).unwrap();
    let points = legibility_curve(&tints, 512.0, 256.0).unwrap();
    assert_eq!(points.len(), 256);

    for (j, point) in points.iter().enumerate() {
        let shade = shade_for_luminance(LEGIBILITY_LUMINANCE, tints[j]).unwrap();
        assert_relative_eq!(point.x, j as f64 / 255.0 * 512.0);
        assert_relative_eq!(point.y, (1.0 - shade) * 256.0);
    }
    assert_relative_eq!(points[0].y, 18.3889, epsilon = 1e-4);
    assert_eq!(points[255].x, 512.0);
}

#[test]
fn test_legibility_curve_is_not_clipped() {
    // Pure blue cannot get bright enough, so the curve leaves the top edge
    let tints = interpolate_tints(hue_from_angle(240.0).unwrap()).unwrap();
    let points = legibility_curve(&tints, 256.0, 256.0).unwrap();
    assert!(points[0].y < 0.0);
    assert!(points[255].y > 0.0);
}

#[test]
fn test_region_walks_upper_then_lower() {
    let tints = interpolate_tints(hue_from_angle(120.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(1.0, 4.5).unwrap();
    let points = boundary_region(&tints, &bounds, 256.0, 100.0)
        .unwrap()
        .unwrap();

    assert_eq!(points.len(), 512);
    // Upper bound is above white, so it hugs the top edge
    assert!(points[..256].iter().all(|p| p.y == 0.0));
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[255].x, 256.0);
    assert_eq!(points[256].x, 256.0);
    assert_eq!(points[511].x, 0.0);
    assert!(points[256..].iter().all(|p| (0.0..=100.0).contains(&p.y)));
}

#[test]
fn test_region_reaches_bottom_when_lower_is_negative() {
    let tints = interpolate_tints(hue_from_angle(0.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(1.0, 21.0).unwrap();
    let points = boundary_region(&tints, &bounds, 256.0, 256.0)
        .unwrap()
        .unwrap();
    assert!(points[..256].iter().all(|p| p.y == 0.0));
    assert!(points[256..].iter().all(|p| p.y == 256.0));
}

#[test]
fn test_empty_region_collapses_to_none() {
    let tints = interpolate_tints(hue_from_angle(0.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(0.0, 1.0).unwrap();
    assert_eq!(
        boundary_region(&tints, &bounds, 256.0, 256.0).unwrap(),
        None
    );
    assert_eq!(
        boundary_path(DisplayMode::ContrastBoundary, &tints, &bounds, 256.0, 256.0).unwrap(),
        BoundaryPath::None
    );
}

#[test]
fn test_boundary_path_per_mode() {
    let tints = interpolate_tints(hue_from_angle(60.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(1.0, 4.5).unwrap();

    let none = boundary_path(DisplayMode::None, &tints, &bounds, 10.0, 10.0).unwrap();
    assert!(none.points().is_empty());

    let line = boundary_path(DisplayMode::Legibility, &tints, &bounds, 10.0, 10.0).unwrap();
    assert!(matches!(line, BoundaryPath::Polyline(ref p) if p.len() == 256));

    let region = boundary_path(DisplayMode::ContrastBoundary, &tints, &bounds, 10.0, 10.0).unwrap();
    assert!(matches!(region, BoundaryPath::Region(ref p) if p.len() == 512));
}

#[test]
fn test_mid_gray_region_is_ordered() {
    let tints = interpolate_tints(hue_from_angle(300.0).unwrap()).unwrap();
    let bounds = ContrastBounds::new(0.2, 4.5).unwrap();
    let points = boundary_region(&tints, &bounds, 256.0, 256.0)
        .unwrap()
        .unwrap();
    assert_eq!(points.len(), 512);

    // Lower boundary is walked right to left, so column j pairs with 511 - j
    for j in 0..256 {
        let upper = points[j];
        let lower = points[511 - j];
        assert_eq!(upper.x, lower.x);
        assert!(upper.y <= lower.y, "column {} crosses", j);
    }
}
