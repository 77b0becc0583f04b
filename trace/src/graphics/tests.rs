use super::*;
use test_case::test_case;

#[test_case(LineCapStyle::Butt => "BUTT")]
#[test_case(LineCapStyle::Round => "ROUND")]
#[test_case(LineCapStyle::Square => "SQUARE")]
#[test_case(LineCapStyle::Triangle => "TRIANGLE")]
fn line_cap_name(cap: LineCapStyle) -> &'static str {
    cap.into()
}

#[test_case(LineJoinStyle::Miter => "MITER")]
#[test_case(LineJoinStyle::Round => "ROUND")]
#[test_case(LineJoinStyle::Bevel => "BEVEL")]
#[test_case(LineJoinStyle::MiterXps => "MITER_XPS"; "miter xps")]
fn line_join_name(join: LineJoinStyle) -> &'static str {
    join.into()
}

#[test_case(false => 0)]
#[test_case(true => 1)]
fn fill_rule_flag(even_odd: bool) -> u8 {
    FillRule::from_even_odd(even_odd).flag()
}

#[test]
fn stroke_style_default() {
    let s = StrokeStyle::default();
    assert_eq!(1, s.refs);
    assert_eq!(LineCapStyle::Butt, s.start_cap);
    assert_eq!(LineJoinStyle::Miter, s.line_join);
    assert_eq!(1.0, s.line_width);
    assert_eq!(10.0, s.miter_limit);
    assert!(s.dash.is_empty());
}

#[test]
fn stroke_style_builders() {
    let s = StrokeStyle::default()
        .with_cap(LineCapStyle::Round)
        .with_dash([3.0f32, 1.0], 0.5);
    assert_eq!(
        [LineCapStyle::Round; 3],
        [s.start_cap, s.dash_cap, s.end_cap]
    );
    assert_eq!(vec![3.0, 1.0], s.dash);
    assert_eq!(0.5, s.dash_phase);
}

#[test_case(ColorSpace::device_gray() => ("DeviceGray".to_owned(), 1); "gray")]
#[test_case(ColorSpace::device_rgb() => ("DeviceRGB".to_owned(), 3); "rgb")]
#[test_case(ColorSpace::device_cmyk() => ("DeviceCMYK".to_owned(), 4); "cmyk")]
#[test_case(ColorSpace::new("Separation", 1) => ("Separation".to_owned(), 1); "custom")]
fn color_space_identity(cs: ColorSpace) -> (String, usize) {
    (cs.name().to_owned(), cs.n())
}

#[test]
fn color_spec_rgb() {
    let c = ColorSpec::rgb(1.0, 0.0, 0.0, 0.5);
    assert_eq!(ColorSpace::device_rgb(), c.color_space);
    assert_eq!(vec![1.0, 0.0, 0.0], c.values);
    assert_eq!(0.5, c.alpha);
}

#[test]
fn point_from_tuple() {
    assert_eq!(Point::new(1.5, -2.0), Point::from((1.5, -2.0)));
}
