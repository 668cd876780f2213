use crate::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Close,
    MoveTo,
    LineTo,
    HLineTo,
    VLineTo,
    QuadTo,
    CubicTo,
}

/// A path segment as appended by the caller: a kind plus whether its
/// coordinates are relative to the current point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub relative: bool,
}

impl Segment {
    pub fn abs(kind: SegmentKind) -> Segment {
        Segment {
            kind,
            relative: false,
        }
    }

    pub fn rel(kind: SegmentKind) -> Segment {
        Segment {
            kind,
            relative: true,
        }
    }

    pub fn coord_count(&self) -> usize {
        match self.kind {
            SegmentKind::Close => 0,
            SegmentKind::HLineTo | SegmentKind::VLineTo => 1,
            SegmentKind::MoveTo | SegmentKind::LineTo => 2,
            SegmentKind::QuadTo => 4,
            SegmentKind::CubicTo => 6,
        }
    }
}

/// Number of coordinates a run of segments consumes.
pub fn coords_required(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::coord_count).sum()
}

/// Absolute path command in user space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}
