//! Field rasterization tests.
//!
//! The snapshot pins a handful of pixels of the red field; the rest of the
//! tests check the forward map directly.

use insta::assert_snapshot;
use lumapick::field::{FIELD_SIZE, render_field, row_shade};
use lumapick::hue::hue_from_angle;
use lumapick::picker::hex_string;
use lumapick::shade::apply_shade;
use lumapick::tint::interpolate_tints;
use palette::Srgb;

fn red_field() -> lumapick::field::Field {
    let tints = interpolate_tints(hue_from_angle(0.0).unwrap()).unwrap();
    render_field(&tints)
}

#[test]
fn test_field_dimensions() {
    let field = red_field();
    assert_eq!(field.pixels().len(), FIELD_SIZE * FIELD_SIZE);
    assert_eq!(field.row(17).len(), FIELD_SIZE);
    assert_eq!(field.to_rgba_bytes().len(), FIELD_SIZE * FIELD_SIZE * 4);
}

#[test]
fn test_field_sample_pixels() {
    let field = red_field();
    let text: String = [0, 128, 255]
        .iter()
        .map(|&row| {
            let cells: Vec<String> = [0, 64, 128, 255]
                .iter()
                .map(|&col| hex_string(field.pixel(row, col)))
                .collect();
            format!("row {row:3}: {}\n", cells.join(" "))
        })
        .collect();

    assert_snapshot!(text, @r"
    row   0: #ff0000 #ff4040 #ff8080 #ffffff
    row 128: #7f0000 #7f2020 #7f4040 #7f7f7f
    row 255: #000000 #000000 #000000 #000000
    ");
}

#[test]
fn test_top_row_is_the_tints() {
    let tints = interpolate_tints(hue_from_angle(200.0).unwrap()).unwrap();
    let field = render_field(&tints);
    for (col, tint) in tints.iter().enumerate() {
        assert_eq!(field.pixel(0, col), apply_shade(*tint, 1.0));
    }
}

#[test]
fn test_bottom_row_is_black() {
    let field = red_field();
    assert!(field.row(255).iter().all(|p| *p == Srgb::new(0u8, 0, 0)));
}

#[test]
fn test_rows_follow_shade() {
    assert_eq!(row_shade(0), 1.0);
    assert_eq!(row_shade(255), 0.0);

    let tints = interpolate_tints(hue_from_angle(90.0).unwrap()).unwrap();
    let field = render_field(&tints);
    for row in [1, 50, 200] {
        assert_eq!(field.pixel(row, 10), apply_shade(tints[10], row_shade(row)));
    }
}

#[test]
fn test_rgba_bytes_are_opaque() {
    let bytes = red_field().to_rgba_bytes();
    assert_eq!(&bytes[..4], &[255, 0, 0, 255]);
    assert!(bytes.chunks(4).all(|px| px[3] == 255));
}
