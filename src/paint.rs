use crate::{Color, Point};
use clamped::Clamp;

/// How gradient parameters outside `[0, 1]` are folded back into the ramp.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    Pad,
    Repeat,
    Reflect,
}

impl SpreadMode {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            SpreadMode::Pad => t.clamped(0.0, 1.0),
            SpreadMode::Repeat => t - t.floor(),
            SpreadMode::Reflect => {
                let f = t.rem_euclid(2.0);
                if f > 1.0 {
                    2.0 - f
                } else {
                    f
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub fn new<C: Into<Color>>(offset: f32, color: C) -> ColorStop {
        ColorStop {
            offset,
            color: color.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintKind {
    Color(Color),
    LinearGradient { start: Point, end: Point },
    RadialGradient { center: Point, radius: f32 },
}

/// Backend-independent description of a paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintDesc {
    pub kind: PaintKind,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl Default for PaintDesc {
    fn default() -> Self {
        Self {
            kind: PaintKind::Color(Color::rgb(0.0, 0.0, 0.0)),
            stops: vec![
                ColorStop::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                ColorStop::new(1.0, Color::rgb(1.0, 1.0, 1.0)),
            ],
            spread: SpreadMode::Pad,
        }
    }
}

impl PaintDesc {
    pub fn linear<P: Into<Point>>(start: P, end: P, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: PaintKind::LinearGradient {
                start: start.into(),
                end: end.into(),
            },
            stops,
            spread: SpreadMode::Pad,
        }
    }

    pub fn radial<P: Into<Point>>(center: P, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self {
            kind: PaintKind::RadialGradient {
                center: center.into(),
                radius,
            },
            stops,
            spread: SpreadMode::Pad,
        }
    }

    pub fn with_spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    /// Gradient parameter of `pt` in paint space, before spreading. `None`
    /// for solid colors.
    pub fn gradient_t(&self, pt: Point) -> Option<f32> {
        match self.kind {
            PaintKind::Color(_) => None,
            PaintKind::LinearGradient { start, end } => {
                let d = end - start;
                let len2 = d.dot(d);
                if len2 < 1e-12 {
                    return Some(0.0);
                }
                Some((pt - start).dot(d) / len2)
            }
            PaintKind::RadialGradient { center, radius } => {
                if radius <= 0.0 {
                    return Some(1.0);
                }
                Some((pt - center).length() / radius)
            }
        }
    }

    /// Color of the ramp at an already spread parameter `t`.
    pub fn ramp_color(&self, t: f32) -> Color {
        let stops = &self.stops;
        let first = match stops.first() {
            Some(first) => first,
            None => return Color::rgba(0.0, 0.0, 0.0, 0.0),
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        stops[stops.len() - 1].color
    }
}

impl From<Color> for PaintDesc {
    fn from(color: Color) -> Self {
        Self {
            kind: PaintKind::Color(color),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_modes_fold_parameter() {
        assert_eq!(SpreadMode::Pad.apply(1.5), 1.0);
        assert_eq!(SpreadMode::Pad.apply(-0.5), 0.0);
        assert!((SpreadMode::Repeat.apply(1.25) - 0.25).abs() < 1e-6);
        assert!((SpreadMode::Reflect.apply(1.25) - 0.75).abs() < 1e-6);
        assert!((SpreadMode::Reflect.apply(-0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn linear_parameter_projects_on_axis() {
        let desc = PaintDesc::linear(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Vec::new());
        assert_eq!(desc.gradient_t(Point::new(5.0, 3.0)), Some(0.5));
        let solid = PaintDesc::from(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(solid.gradient_t(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn radial_parameter_is_distance_over_radius() {
        let desc = PaintDesc::radial(Point::new(0.0, 0.0), 4.0, Vec::new());
        assert_eq!(desc.gradient_t(Point::new(0.0, 2.0)), Some(0.5));
    }

    #[test]
    fn ramp_interpolates_between_stops() {
        let desc = PaintDesc::linear(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            vec![
                ColorStop::new(0.0, Color::rgb(0.0, 0.0, 0.0)),
                ColorStop::new(0.5, Color::rgb(1.0, 1.0, 1.0)),
            ],
        );
        assert_eq!(desc.ramp_color(0.25), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(desc.ramp_color(0.9), Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(desc.ramp_color(-1.0), Color::rgb(0.0, 0.0, 0.0));
    }
}
