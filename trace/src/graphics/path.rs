//! Path as recorded in a trace: raw command and coordinate buffers.
//!
//! The trace never interprets commands, but [`PathCommand::coord_count`] tells
//! how many coordinates each command consumes, so a reader can replay the buffers.

use super::Point;
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    /// Line to the current point, marks a dot for round/square caps.
    DegenerateLineTo,
    CurveTo,
    /// Cubic curve whose first control point is the current point.
    CurveToV,
    /// Cubic curve whose second control point is the end point.
    CurveToY,
    HorizontalTo,
    VerticalTo,
    QuadTo,
    /// Closed rectangle by two corners.
    RectTo,
    MoveToClose,
    LineToClose,
    DegenerateLineToClose,
    CurveToClose,
    CurveToVClose,
    CurveToYClose,
    HorizontalToClose,
    VerticalToClose,
    QuadToClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown path command '{0}'")]
pub struct UnknownPathCommand(pub char);

impl PathCommand {
    pub fn opcode(self) -> char {
        use PathCommand::*;
        match self {
            MoveTo => 'M',
            LineTo => 'L',
            DegenerateLineTo => 'D',
            CurveTo => 'C',
            CurveToV => 'V',
            CurveToY => 'Y',
            HorizontalTo => 'H',
            VerticalTo => 'I',
            QuadTo => 'Q',
            RectTo => 'R',
            MoveToClose => 'm',
            LineToClose => 'l',
            DegenerateLineToClose => 'd',
            CurveToClose => 'c',
            CurveToVClose => 'v',
            CurveToYClose => 'y',
            HorizontalToClose => 'h',
            VerticalToClose => 'i',
            QuadToClose => 'q',
        }
    }

    /// Number of scalars the command consumes from the coordinate buffer.
    pub fn coord_count(self) -> usize {
        use PathCommand::*;
        match self {
            DegenerateLineTo | DegenerateLineToClose => 0,
            HorizontalTo | VerticalTo | HorizontalToClose | VerticalToClose => 1,
            MoveTo | LineTo | MoveToClose | LineToClose => 2,
            CurveToV | CurveToY | QuadTo | RectTo | CurveToVClose | CurveToYClose
            | QuadToClose => 4,
            CurveTo | CurveToClose => 6,
        }
    }

    pub fn is_closed(self) -> bool {
        self.opcode().is_ascii_lowercase()
    }

    /// Closed variant of the command, `None` for commands that have no open form
    /// to close: already closed ones and rectangles.
    pub fn closed(self) -> Option<Self> {
        use PathCommand::*;
        Some(match self {
            MoveTo => MoveToClose,
            LineTo => LineToClose,
            DegenerateLineTo => DegenerateLineToClose,
            CurveTo => CurveToClose,
            CurveToV => CurveToVClose,
            CurveToY => CurveToYClose,
            HorizontalTo => HorizontalToClose,
            VerticalTo => VerticalToClose,
            QuadTo => QuadToClose,
            _ => return None,
        })
    }
}

impl TryFrom<char> for PathCommand {
    type Error = UnknownPathCommand;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        use PathCommand::*;
        Ok(match c {
            'M' => MoveTo,
            'L' => LineTo,
            'D' => DegenerateLineTo,
            'C' => CurveTo,
            'V' => CurveToV,
            'Y' => CurveToY,
            'H' => HorizontalTo,
            'I' => VerticalTo,
            'Q' => QuadTo,
            'R' => RectTo,
            'm' => MoveToClose,
            'l' => LineToClose,
            'd' => DegenerateLineToClose,
            'c' => CurveToClose,
            'v' => CurveToVClose,
            'y' => CurveToYClose,
            'h' => HorizontalToClose,
            'i' => VerticalToClose,
            'q' => QuadToClose,
            _ => return Err(UnknownPathCommand(c)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    packed: bool,
    cmds: Vec<PathCommand>,
    coords: Vec<f32>,
    begin: Point,
    current: Point,
}

impl Path {
    /// Create path from raw buffers, no check that `coords` matches `cmds`.
    pub fn from_raw(
        packed: bool,
        cmds: Vec<PathCommand>,
        coords: Vec<f32>,
        begin: Point,
        current: Point,
    ) -> Self {
        Self {
            packed,
            cmds,
            coords,
            begin,
            current,
        }
    }

    pub fn packed(&self) -> bool {
        self.packed
    }

    pub fn cmds(&self) -> &[PathCommand] {
        &self.cmds
    }

    pub fn cmd_capacity(&self) -> usize {
        self.cmds.capacity()
    }

    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    pub fn coord_capacity(&self) -> usize {
        self.coords.capacity()
    }

    /// Start point of current sub path.
    pub fn begin(&self) -> Point {
        self.begin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Coordinate buffer length implied by replaying the command buffer.
    pub fn expected_coord_len(&self) -> usize {
        self.cmds.iter().map(|c| c.coord_count()).sum()
    }
}

/// Build [`Path`] command by command, choosing the compact command form
/// and keeping `begin` / `current` points up to date.
#[derive(Debug, Default)]
pub struct PathBuilder(Path);

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn packed(mut self, packed: bool) -> Self {
        self.0.packed = packed;
        self
    }

    fn last_cmd(&self) -> Option<PathCommand> {
        self.0.cmds.last().copied()
    }

    fn push(&mut self, cmd: PathCommand, coords: &[f32]) {
        debug_assert_eq!(cmd.coord_count(), coords.len());
        self.0.cmds.push(cmd);
        self.0.coords.extend_from_slice(coords);
    }

    fn has_current_point(&self, op: &str) -> bool {
        if self.0.cmds.is_empty() {
            warn!("{op} with no current point");
            false
        } else {
            true
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        if self.last_cmd() == Some(PathCommand::MoveTo) {
            // consecutive moves collapse into the last one
            let n = self.0.coords.len();
            self.0.coords[n - 2..].copy_from_slice(&[x, y]);
        } else {
            self.push(PathCommand::MoveTo, &[x, y]);
        }
        self.0.begin = (x, y).into();
        self.0.current = self.0.begin;
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        if !self.has_current_point("line_to") {
            return self;
        }

        let Point { x: x0, y: y0 } = self.0.current;
        if x0 == x && y0 == y {
            // only a line right after move is kept, as a dot
            if self.last_cmd() == Some(PathCommand::MoveTo) {
                self.push(PathCommand::DegenerateLineTo, &[]);
            }
            return self;
        }

        if x0 == x {
            self.push(PathCommand::VerticalTo, &[y]);
        } else if y0 == y {
            self.push(PathCommand::HorizontalTo, &[x]);
        } else {
            self.push(PathCommand::LineTo, &[x, y]);
        }
        self.0.current = (x, y).into();
        self
    }

    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        if !self.has_current_point("curve_to") {
            return self;
        }

        let cur = self.0.current;
        if cur == Point::new(x1, y1) {
            self.push(PathCommand::CurveToV, &[x2, y2, x3, y3]);
        } else if (x2, y2) == (x3, y3) {
            self.push(PathCommand::CurveToY, &[x1, y1, x3, y3]);
        } else {
            self.push(PathCommand::CurveTo, &[x1, y1, x2, y2, x3, y3]);
        }
        self.0.current = (x3, y3).into();
        self
    }

    pub fn curve_to_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        if self.has_current_point("curve_to_v") {
            self.push(PathCommand::CurveToV, &[x2, y2, x3, y3]);
            self.0.current = (x3, y3).into();
        }
        self
    }

    pub fn curve_to_y(&mut self, x1: f32, y1: f32, x3: f32, y3: f32) -> &mut Self {
        if self.has_current_point("curve_to_y") {
            self.push(PathCommand::CurveToY, &[x1, y1, x3, y3]);
            self.0.current = (x3, y3).into();
        }
        self
    }

    pub fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        if self.has_current_point("quad_to") {
            self.push(PathCommand::QuadTo, &[x1, y1, x2, y2]);
            self.0.current = (x2, y2).into();
        }
        self
    }

    /// Append a closed rectangle, `begin` and `current` move to its first corner.
    pub fn rect_to(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> &mut Self {
        self.push(PathCommand::RectTo, &[x0, y0, x1, y1]);
        self.0.begin = (x0, y0).into();
        self.0.current = self.0.begin;
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        if !self.has_current_point("close_path") {
            return self;
        }

        if let Some(closed) = self.last_cmd().and_then(PathCommand::closed) {
            if let Some(last) = self.0.cmds.last_mut() {
                *last = closed;
            }
        }
        self.0.current = self.0.begin;
        self
    }

    pub fn finish(self) -> Path {
        self.0
    }
}

#[cfg(test)]
mod tests;
