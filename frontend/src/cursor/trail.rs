use super::engine::CursorPhase;
use crate::config::CursorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves `t` of the way toward `target`.
    pub fn lerp(self, target: Point, t: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn mix(self, other: Rgb, t: f64) -> [f64; 3] {
        let channel = |a: u8, b: u8| f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        [
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        ]
    }
}

/// One drawable piece of the trail between two neighbouring points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: [f64; 3],
    pub alpha: f64,
    pub width: f64,
}

impl Segment {
    pub fn css_color(&self) -> String {
        format!(
            "rgba({:.0}, {:.0}, {:.0}, {:.3})",
            self.color[0], self.color[1], self.color[2], self.alpha
        )
    }
}

/// Fixed-length chain of points lagging behind the pointer.
///
/// The length never changes after construction; every step produces a new
/// trail with the same number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: Vec<Point>,
}

impl Trail {
    pub fn new(length: usize, at: Point) -> Self {
        Self {
            points: vec![at; length],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Every point moved onto `at`, no easing.
    pub fn collapsed(&self, at: Point) -> Trail {
        Trail::new(self.len(), at)
    }

    /// Head eases toward the pointer, each follower toward the already
    /// moved point in front of it.
    pub fn eased(&self, pointer: Point, head_easing: f64, follow_easing: f64) -> Trail {
        let mut points = Vec::with_capacity(self.len());
        let mut leader = pointer;
        let mut easing = head_easing;
        for point in &self.points {
            let next = point.lerp(leader, easing);
            points.push(next);
            leader = next;
            easing = follow_easing;
        }
        Trail { points }
    }

    /// One animation frame of the trail.
    pub fn step(&self, pointer: Point, phase: CursorPhase, config: &CursorConfig) -> Trail {
        match phase {
            CursorPhase::Tracking => self.eased(pointer, config.head_easing, config.follow_easing),
            CursorPhase::Snapped | CursorPhase::Hidden => self.collapsed(pointer),
        }
    }

    /// Segments from head to tail. Color runs from `start_color` on the first
    /// segment to `end_color` on the last; width and opacity taper to zero.
    pub fn segments<'a>(&'a self, config: &'a CursorConfig) -> impl Iterator<Item = Segment> + 'a {
        let count = self.points.len().saturating_sub(1);
        let last = count.saturating_sub(1).max(1) as f64;
        self.points.windows(2).enumerate().map(move |(index, pair)| {
            let progress = if count > 1 { index as f64 / last } else { 0.0 };
            Segment {
                from: pair[0],
                to: pair[1],
                color: config.start_color.mix(config.end_color, progress),
                alpha: 1.0 - progress,
                width: config.max_line_width * (1.0 - progress),
            }
        })
    }
}
