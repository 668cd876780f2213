use clamped::Clamp;
use ovgx::{PathCommand, Point};

const MAX_CURVE_SEGMENTS: f32 = 128.0;

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Polyline {
    pub(crate) points: Vec<Point>,
    pub(crate) closed: bool,
}

impl Polyline {
    fn push(&mut self, pt: Point) {
        match self.points.last() {
            Some(last) if last.equals(pt, 1e-6) => {}
            _ => self.points.push(pt),
        }
    }
}

fn curve_segments(dd: f32, tol: f32) -> usize {
    (dd / tol).sqrt().ceil().clamped(1.0, MAX_CURVE_SEGMENTS) as usize
}

fn finish(line: &mut Polyline, lines: &mut Vec<Polyline>) {
    let line = std::mem::take(line);
    if line.points.len() >= 2 {
        lines.push(line);
    }
}

/// Flattens commands into polylines; `tol` is in the commands' units.
pub(crate) fn flatten(commands: &[PathCommand], tol: f32) -> Vec<Polyline> {
    let mut lines = Vec::new();
    let mut cur = Polyline::default();
    let mut start = Point::default();
    let mut last = Point::default();

    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                finish(&mut cur, &mut lines);
                cur.push(p);
                start = p;
                last = p;
            }
            PathCommand::LineTo(p) => {
                if cur.points.is_empty() {
                    cur.push(last);
                }
                cur.push(p);
                last = p;
            }
            PathCommand::QuadTo(c, p) => {
                if cur.points.is_empty() {
                    cur.push(last);
                }
                let dd = (last - c * 2.0 + p).length();
                let n = curve_segments(dd, tol * 4.0);
                for i in 1..=n {
                    let t = i as f32 / n as f32;
                    let a = last.lerp(c, t);
                    let b = c.lerp(p, t);
                    cur.push(a.lerp(b, t));
                }
                last = p;
            }
            PathCommand::CubicTo(c1, c2, p) => {
                if cur.points.is_empty() {
                    cur.push(last);
                }
                let dd1 = (last - c1 * 2.0 + c2).length();
                let dd2 = (c1 - c2 * 2.0 + p).length();
                let n = curve_segments(dd1.max(dd2) * 0.75, tol);
                for i in 1..=n {
                    let t = i as f32 / n as f32;
                    let mt = 1.0 - t;
                    let pt = last * (mt * mt * mt)
                        + c1 * (3.0 * mt * mt * t)
                        + c2 * (3.0 * mt * t * t)
                        + p * (t * t * t);
                    cur.push(pt);
                }
                last = p;
            }
            PathCommand::Close => {
                cur.closed = true;
                finish(&mut cur, &mut lines);
                last = start;
            }
        }
    }
    finish(&mut cur, &mut lines);
    lines
}

/// Triangle fan over each polyline with at least three points.
pub(crate) fn fill_triangles(lines: &[Polyline]) -> Vec<[Point; 3]> {
    let mut tris = Vec::new();
    for line in lines {
        let pts = &line.points;
        if pts.len() < 3 {
            continue;
        }
        for i in 1..pts.len() - 1 {
            tris.push([pts[0], pts[i], pts[i + 1]]);
        }
    }
    tris
}

/// Two triangles per polyline segment, butt-ended, `width` wide.
pub(crate) fn stroke_triangles(lines: &[Polyline], width: f32) -> Vec<[Point; 3]> {
    let half = width * 0.5;
    let mut tris = Vec::new();
    for line in lines {
        let pts = &line.points;
        let mut segs: Vec<(Point, Point)> = pts.windows(2).map(|w| (w[0], w[1])).collect();
        if line.closed && pts.len() > 2 {
            segs.push((pts[pts.len() - 1], pts[0]));
        }
        for (a, b) in segs {
            let n = match (b - a).normalize() {
                Some(dir) => dir.perp() * half,
                None => continue,
            };
            tris.push([a + n, a - n, b + n]);
            tris.push([b + n, a - n, b - n]);
        }
    }
    tris
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 10.0)),
            PathCommand::LineTo(Point::new(0.0, 10.0)),
            PathCommand::Close,
        ]
    }

    #[test]
    fn flatten_keeps_closed_subpaths() {
        let lines = flatten(&square(), 0.25);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].closed);
        assert_eq!(lines[0].points.len(), 4);
    }

    #[test]
    fn lone_move_is_dropped() {
        let lines = flatten(&[PathCommand::MoveTo(Point::new(1.0, 1.0))], 0.25);
        assert!(lines.is_empty());
    }

    #[test]
    fn curves_end_on_their_endpoint() {
        let cmds = vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::QuadTo(Point::new(50.0, 100.0), Point::new(100.0, 0.0)),
            PathCommand::CubicTo(
                Point::new(120.0, 50.0),
                Point::new(150.0, 50.0),
                Point::new(200.0, 0.0),
            ),
        ];
        let lines = flatten(&cmds, 0.25);
        let pts = &lines[0].points;
        assert!(pts.len() > 4);
        assert!(pts.contains(&Point::new(100.0, 0.0)));
        assert!(pts[pts.len() - 1].equals(Point::new(200.0, 0.0), 1e-3));
    }

    #[test]
    fn fan_and_stroke_counts() {
        let lines = flatten(&square(), 0.25);
        assert_eq!(fill_triangles(&lines).len(), 2);
        assert_eq!(stroke_triangles(&lines, 2.0).len(), 8);
    }

    #[test]
    fn stroke_offsets_by_half_width() {
        let lines = flatten(
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 0.0)),
            ],
            0.25,
        );
        let tris = stroke_triangles(&lines, 4.0);
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0][0], Point::new(0.0, 2.0));
        assert_eq!(tris[0][1], Point::new(0.0, -2.0));
    }
}
