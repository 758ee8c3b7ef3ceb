use super::*;
use pretty_assertions::assert_eq;

const CORNFLOWER: Color = Color::new([100.0, 149.0, 237.0], 1.0);

#[test]
fn hsl_projections_are_rounded() {
    assert_eq!(hue(&CORNFLOWER), Value::number(219.0));
    assert_eq!(saturation(&CORNFLOWER), Value::percentage(79.0));
    assert_eq!(lightness(&CORNFLOWER), Value::percentage(66.0));
}

#[test]
fn red_is_pure_hue_zero() {
    let red_color = Color::new([255.0, 0.0, 0.0], 1.0);
    assert_eq!(hue(&red_color), Value::number(0.0));
    assert_eq!(saturation(&red_color), Value::percentage(100.0));
    assert_eq!(lightness(&red_color), Value::percentage(50.0));
}

#[test]
fn channel_projections_are_raw() {
    let c = Color::new([10.5, 300.0, -2.0], 0.25);
    assert_eq!(red(&c), Value::number(10.5));
    assert_eq!(green(&c), Value::number(300.0));
    assert_eq!(blue(&c), Value::number(-2.0));
    assert_eq!(alpha(&c), Value::number(0.25));
}

#[test]
fn luma_weights_by_alpha() {
    assert_eq!(luma(&Color::white()), Value::percentage(100.0));
    assert_eq!(luma(&Color::black()), Value::percentage(0.0));
    assert_eq!(
        luma(&Color::new([255.0, 255.0, 255.0], 0.5)),
        Value::percentage(50.0)
    );
    // 0.7152 of pure green
    assert_eq!(
        luma(&Color::new([0.0, 255.0, 0.0], 1.0)),
        Value::percentage(72.0)
    );
}

#[test]
fn argb_is_anonymous() {
    assert_eq!(
        argb(&Color::new([255.0, 0.0, 128.0], 0.5)),
        Value::anonymous("#80ff0080")
    );
}
