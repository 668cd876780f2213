use crate::{Bounds, Matrix33, Point};
use clamped::Clamp;

mod commands;

pub use commands::*;

/// The only path format defined by the API.
pub const PATH_FORMAT_STANDARD: i32 = 0;

bitflags! {
    pub struct PathCapabilities: u32 {
        const APPEND_FROM = 1 << 0;
        const APPEND_TO = 1 << 1;
        const MODIFY = 1 << 2;
        const TRANSFORM_FROM = 1 << 3;
        const TRANSFORM_TO = 1 << 4;
        const INTERPOLATE_FROM = 1 << 5;
        const INTERPOLATE_TO = 1 << 6;
        const PATH_LENGTH = 1 << 7;
        const POINT_ALONG_PATH = 1 << 8;
        const TANGENT_ALONG_PATH = 1 << 9;
        const PATH_BOUNDS = 1 << 10;
        const PATH_TRANSFORMED_BOUNDS = 1 << 11;
        const ALL = (1 << 12) - 1;
    }
}

/// Storage type of path coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathDatatype {
    S8,
    S16,
    S32,
    F32,
}

impl PathDatatype {
    /// Rounds and saturates a raw coordinate to what this datatype can hold.
    pub fn quantize(&self, v: f32) -> f32 {
        match self {
            PathDatatype::S8 => v.round().clamped(i8::MIN as f32, i8::MAX as f32),
            PathDatatype::S16 => v.round().clamped(i16::MIN as f32, i16::MAX as f32),
            PathDatatype::S32 => v.round().clamped(i32::MIN as f32, i32::MAX as f32),
            PathDatatype::F32 => v,
        }
    }
}

/// Creation parameters of a path, after validation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathParams {
    pub format: i32,
    pub datatype: PathDatatype,
    pub scale: f32,
    pub bias: f32,
    pub segment_capacity_hint: usize,
    pub coord_capacity_hint: usize,
    pub capabilities: PathCapabilities,
}

/// Segment and coordinate storage shared by backend path objects.
///
/// Coordinates are kept as quantized raw values; `value * scale + bias`
/// yields user space.
#[derive(Debug, Clone)]
pub struct PathData {
    params: PathParams,
    capabilities: PathCapabilities,
    segments: Vec<Segment>,
    coords: Vec<f32>,
}

impl PathData {
    pub fn new(params: &PathParams) -> Self {
        Self {
            params: *params,
            capabilities: params.capabilities,
            segments: Vec::with_capacity(params.segment_capacity_hint),
            coords: Vec::with_capacity(params.coord_capacity_hint),
        }
    }

    #[inline]
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    #[inline]
    pub fn capabilities(&self) -> PathCapabilities {
        self.capabilities
    }

    pub fn remove_capabilities(&mut self, caps: PathCapabilities) {
        self.capabilities.remove(caps);
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends segments whose coordinate count has already been checked.
    pub fn append(&mut self, segments: &[Segment], coords: &[f32]) {
        let datatype = self.params.datatype;
        self.segments.extend_from_slice(segments);
        self.coords.extend(coords.iter().map(|v| datatype.quantize(*v)));
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.coords.clear();
    }

    /// Resolves relative and axis-aligned segments into absolute commands in
    /// user space.
    pub fn commands(&self) -> Vec<PathCommand> {
        let scale = self.params.scale;
        let bias = self.params.bias;
        let user = |v: f32| v * scale + bias;

        let mut out = Vec::with_capacity(self.segments.len());
        let mut coords = self.coords.iter().copied().map(user);
        let mut cur = Point::default();
        let mut start = Point::default();

        for seg in &self.segments {
            let origin = if seg.relative { cur } else { Point::default() };
            let next_pt = |coords: &mut dyn Iterator<Item = f32>| {
                let x = coords.next().unwrap_or_default();
                let y = coords.next().unwrap_or_default();
                Point::new(origin.x + x, origin.y + y)
            };
            match seg.kind {
                SegmentKind::Close => {
                    out.push(PathCommand::Close);
                    cur = start;
                }
                SegmentKind::MoveTo => {
                    let p = next_pt(&mut coords);
                    out.push(PathCommand::MoveTo(p));
                    cur = p;
                    start = p;
                }
                SegmentKind::LineTo => {
                    let p = next_pt(&mut coords);
                    out.push(PathCommand::LineTo(p));
                    cur = p;
                }
                SegmentKind::HLineTo => {
                    let x = coords.next().unwrap_or_default();
                    let p = Point::new(if seg.relative { cur.x + x } else { x }, cur.y);
                    out.push(PathCommand::LineTo(p));
                    cur = p;
                }
                SegmentKind::VLineTo => {
                    let y = coords.next().unwrap_or_default();
                    let p = Point::new(cur.x, if seg.relative { cur.y + y } else { y });
                    out.push(PathCommand::LineTo(p));
                    cur = p;
                }
                SegmentKind::QuadTo => {
                    let c = next_pt(&mut coords);
                    let p = next_pt(&mut coords);
                    out.push(PathCommand::QuadTo(c, p));
                    cur = p;
                }
                SegmentKind::CubicTo => {
                    let c1 = next_pt(&mut coords);
                    let c2 = next_pt(&mut coords);
                    let p = next_pt(&mut coords);
                    out.push(PathCommand::CubicTo(c1, c2, p));
                    cur = p;
                }
            }
        }
        out
    }

    /// Bounds of every end and control point in user space.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(commands_points(&self.commands()))
    }

    pub fn transformed_bounds(&self, xform: &Matrix33) -> Option<Bounds> {
        Bounds::from_points(
            commands_points(&self.commands())
                .into_iter()
                .map(|pt| xform.transform_point(pt)),
        )
    }
}

fn commands_points(commands: &[PathCommand]) -> Vec<Point> {
    let mut pts = Vec::with_capacity(commands.len() * 2);
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => pts.push(p),
            PathCommand::QuadTo(c, p) => pts.extend_from_slice(&[c, p]),
            PathCommand::CubicTo(c1, c2, p) => pts.extend_from_slice(&[c1, c2, p]),
            PathCommand::Close => {}
        }
    }
    pts
}
