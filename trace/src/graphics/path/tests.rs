use super::*;
use test_case::test_case;

const ALL: [PathCommand; 19] = [
    PathCommand::MoveTo,
    PathCommand::LineTo,
    PathCommand::DegenerateLineTo,
    PathCommand::CurveTo,
    PathCommand::CurveToV,
    PathCommand::CurveToY,
    PathCommand::HorizontalTo,
    PathCommand::VerticalTo,
    PathCommand::QuadTo,
    PathCommand::RectTo,
    PathCommand::MoveToClose,
    PathCommand::LineToClose,
    PathCommand::DegenerateLineToClose,
    PathCommand::CurveToClose,
    PathCommand::CurveToVClose,
    PathCommand::CurveToYClose,
    PathCommand::HorizontalToClose,
    PathCommand::VerticalToClose,
    PathCommand::QuadToClose,
];

fn opcodes(p: &Path) -> String {
    p.cmds().iter().map(|c| c.opcode()).collect()
}

#[test]
fn opcode_char_round_trip() {
    for cmd in ALL {
        assert_eq!(Ok(cmd), PathCommand::try_from(cmd.opcode()));
    }
}

#[test_case('X')]
#[test_case('r'; "rect has no closed form")]
#[test_case(' '; "space")]
fn unknown_opcode(c: char) {
    assert_eq!(Err(UnknownPathCommand(c)), PathCommand::try_from(c));
}

#[test]
fn closed_variant_keeps_coord_count() {
    for cmd in ALL {
        if let Some(closed) = cmd.closed() {
            assert!(closed.is_closed());
            assert!(!cmd.is_closed());
            assert_eq!(cmd.coord_count(), closed.coord_count());
        }
    }
    assert_eq!(None, PathCommand::RectTo.closed());
    assert_eq!(None, PathCommand::LineToClose.closed());
}

#[test]
fn build_move_line() {
    let mut b = PathBuilder::new();
    b.move_to(0.0, 0.0).line_to(10.0, 10.0);
    let p = b.finish();
    assert_eq!("ML", opcodes(&p));
    assert_eq!(&[0.0, 0.0, 10.0, 10.0], p.coords());
    assert_eq!(Point::new(0.0, 0.0), p.begin());
    assert_eq!(Point::new(10.0, 10.0), p.current());
    assert_eq!(p.coords().len(), p.expected_coord_len());
}

#[test]
fn axis_aligned_lines_compact() {
    let mut b = PathBuilder::new();
    b.move_to(1.0, 1.0)
        .line_to(5.0, 1.0)
        .line_to(5.0, 7.0)
        .close_path();
    let p = b.finish();
    assert_eq!("MHi", opcodes(&p));
    assert_eq!(&[1.0, 1.0, 5.0, 7.0], p.coords());
    assert_eq!(p.begin(), p.current());
}

#[test]
fn degenerate_line_only_after_move() {
    let mut b = PathBuilder::new();
    b.move_to(3.0, 3.0)
        .line_to(3.0, 3.0)
        .line_to(4.0, 5.0)
        .line_to(4.0, 5.0);
    let p = b.finish();
    assert_eq!("MDL", opcodes(&p));
    assert_eq!(p.coords().len(), p.expected_coord_len());
}

#[test]
fn consecutive_moves_collapse() {
    let mut b = PathBuilder::new();
    b.move_to(1.0, 2.0).move_to(3.0, 4.0);
    let p = b.finish();
    assert_eq!("M", opcodes(&p));
    assert_eq!(&[3.0, 4.0], p.coords());
    assert_eq!(Point::new(3.0, 4.0), p.begin());
}

#[test]
fn curve_forms() {
    let mut b = PathBuilder::new();
    b.move_to(0.0, 0.0)
        .curve_to(0.0, 0.0, 1.0, 1.0, 2.0, 0.0)
        .curve_to(3.0, 1.0, 4.0, 0.0, 4.0, 0.0)
        .curve_to(5.0, 1.0, 6.0, 1.0, 7.0, 0.0)
        .quad_to(8.0, 1.0, 9.0, 0.0);
    let p = b.finish();
    assert_eq!("MVYCQ", opcodes(&p));
    assert_eq!(20, p.coords().len());
    assert_eq!(p.coords().len(), p.expected_coord_len());
    assert_eq!(Point::new(9.0, 0.0), p.current());
}

#[test]
fn rect_resets_begin() {
    let mut b = PathBuilder::new().packed(true);
    b.rect_to(1.0, 2.0, 3.0, 4.0).close_path();
    let p = b.finish();
    assert!(p.packed());
    assert_eq!("R", opcodes(&p));
    assert_eq!(Point::new(1.0, 2.0), p.begin());
    assert_eq!(Point::new(1.0, 2.0), p.current());
}

#[test_log::test]
fn drawing_without_current_point_ignored() {
    let mut b = PathBuilder::new();
    b.line_to(1.0, 1.0)
        .curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
        .quad_to(1.0, 2.0, 3.0, 4.0)
        .close_path();
    let p = b.finish();
    assert!(p.is_empty());
    assert!(p.coords().is_empty());
}

#[test]
fn from_raw_keeps_buffers() {
    let p = Path::from_raw(
        false,
        vec![PathCommand::MoveTo, PathCommand::LineTo],
        vec![0.0, 0.0],
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
    );
    // buffers are recorded as is, even when they disagree
    assert_eq!(4, p.expected_coord_len());
    assert_eq!(2, p.coords().len());
    assert!(p.cmd_capacity() >= 2);
}

#[test]
fn explicit_v_and_y_curves() {
    let mut b = PathBuilder::new();
    b.move_to(0.0, 0.0)
        .curve_to_v(1.0, 2.0, 3.0, 0.0)
        .curve_to_y(4.0, 1.0, 6.0, 0.0);
    let p = b.finish();
    assert_eq!("MVY", opcodes(&p));
    assert_eq!(
        &[0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 4.0, 1.0, 6.0, 0.0],
        p.coords()
    );
    assert_eq!(p.coords().len(), p.expected_coord_len());
    assert_eq!(Point::new(6.0, 0.0), p.current());
    assert_eq!(Point::new(0.0, 0.0), p.begin());
}

#[test_case(true; "curve_to_v")]
#[test_case(false; "curve_to_y")]
fn v_y_curve_without_current_point_ignored(v: bool) {
    let mut b = PathBuilder::new();
    if v {
        b.curve_to_v(1.0, 2.0, 3.0, 4.0);
    } else {
        b.curve_to_y(1.0, 2.0, 3.0, 4.0);
    }
    let p = b.finish();
    assert!(p.is_empty());
    assert!(p.coords().is_empty());
    assert_eq!(Point::default(), p.current());
}
