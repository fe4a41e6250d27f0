//! Pointer state machine behind the custom cursor.
//!
//! ```text
//!            move / enter              over interactive
//!   Hidden ───────────────▶ Tracking ◀──────────────────▶ Snapped
//!     ▲                        │        over anything else   │
//!     └──────── leave ─────────┴─────────────────────────────┘
//! ```
//!
//! The engine never touches the DOM. Events come in as plain values, and
//! [`CursorEngine::frame`] returns everything the renderer needs.

use super::hover::Rect;
use super::spring::Spring;
use super::trail::{Point, Trail};
use crate::config::CursorConfig;

/// Where the cursor starts before the pointer has been seen.
const OFFSCREEN: Point = Point::new(-100.0, -100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPhase {
    /// Pointer outside the page or not seen yet.
    #[default]
    Hidden,
    Tracking,
    /// Pointer over a link, button or input; the dot is centered on it.
    Snapped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotFrame {
    pub position: Point,
    pub size: f64,
    /// 1.0 for a solid dot, 0.0 for a hollow ring.
    pub fill: f64,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct CursorEngine {
    config: CursorConfig,
    phase: CursorPhase,
    pointer: Point,
    hover: Option<Rect>,
    trail: Trail,
    dot_x: Spring,
    dot_y: Spring,
    dot_size: Spring,
}

impl CursorEngine {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            phase: CursorPhase::Hidden,
            pointer: OFFSCREEN,
            hover: None,
            trail: Trail::new(config.trail_length, Point::default()),
            dot_x: Spring::new(OFFSCREEN.x, config.snap_spring),
            dot_y: Spring::new(OFFSCREEN.y, config.snap_spring),
            dot_size: Spring::new(config.dot_size, config.size_spring),
            config,
        }
    }

    pub fn phase(&self) -> CursorPhase {
        self.phase
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn pointer_moved(&mut self, at: Point) {
        self.pointer = at;
        if self.phase == CursorPhase::Hidden {
            self.reveal(at);
        } else if self.phase == CursorPhase::Tracking {
            self.place_dot(at);
        }
    }

    pub fn pointer_entered(&mut self, at: Point) {
        self.pointer = at;
        self.reveal(at);
    }

    /// `target` is the hovered interactive element, if the pointer is over one.
    pub fn pointer_over(&mut self, target: Option<Rect>) {
        self.hover = target;
        match (self.phase, target) {
            (CursorPhase::Hidden, _) => {}
            (_, Some(_)) => self.phase = CursorPhase::Snapped,
            (CursorPhase::Snapped, None) => {
                self.phase = CursorPhase::Tracking;
                self.place_dot(self.pointer);
            }
            (CursorPhase::Tracking, None) => {}
        }
    }

    /// Hides the cursor and forgets the hovered element; the next `mouseover`
    /// after re-entry decides whether to snap again.
    pub fn pointer_left(&mut self) {
        self.phase = CursorPhase::Hidden;
        self.hover = None;
    }

    /// Advances one animation frame of `dt` seconds.
    pub fn frame(&mut self, dt: f64) -> DotFrame {
        self.trail = self.trail.step(self.pointer, self.phase, &self.config);

        let snapped = self.phase == CursorPhase::Snapped;
        let size_target = if snapped {
            self.config.ring_size
        } else {
            self.config.dot_size
        };
        let size = self.dot_size.advance(size_target, dt);

        if let (true, Some(rect)) = (snapped, self.hover) {
            let center = rect.center();
            self.dot_x.advance(center.x, dt);
            self.dot_y.advance(center.y, dt);
        }

        let span = self.config.ring_size - self.config.dot_size;
        let fill = if span > 0.0 {
            (1.0 - (size - self.config.dot_size) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };

        DotFrame {
            position: Point::new(self.dot_x.value(), self.dot_y.value()),
            size,
            fill,
            visible: self.phase != CursorPhase::Hidden,
        }
    }

    fn reveal(&mut self, at: Point) {
        self.trail = self.trail.collapsed(at);
        self.place_dot(at);
        self.phase = if self.hover.is_some() {
            CursorPhase::Snapped
        } else {
            CursorPhase::Tracking
        };
    }

    fn place_dot(&mut self, at: Point) {
        self.dot_x.jump(at.x);
        self.dot_y.jump(at.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn button() -> Rect {
        Rect {
            left: 100.0,
            top: 100.0,
            width: 80.0,
            height: 40.0,
        }
    }

    fn engine() -> CursorEngine {
        CursorEngine::new(CursorConfig::default())
    }

    #[test]
    fn starts_hidden_and_invisible() {
        let mut engine = engine();
        assert_eq!(engine.phase(), CursorPhase::Hidden);
        assert!(!engine.frame(FRAME).visible);
    }

    #[test]
    fn first_move_reveals_and_resets_trail_to_pointer() {
        let mut engine = engine();
        let at = Point::new(400.0, 300.0);
        engine.pointer_moved(at);

        assert_eq!(engine.phase(), CursorPhase::Tracking);
        assert!(engine.trail().points().iter().all(|p| *p == at));
    }

    #[test]
    fn enter_resets_a_stale_trail() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(10.0, 10.0));
        for _ in 0..5 {
            engine.pointer_moved(Point::new(500.0, 10.0));
            engine.frame(FRAME);
        }
        engine.pointer_left();

        let at = Point::new(20.0, 700.0);
        engine.pointer_entered(at);
        assert_eq!(engine.phase(), CursorPhase::Tracking);
        assert!(engine.trail().points().iter().all(|p| *p == at));
    }

    #[test]
    fn tracking_dot_follows_pointer_one_to_one() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(1.0, 1.0));
        engine.pointer_moved(Point::new(250.0, 75.0));
        let dot = engine.frame(FRAME);

        assert_eq!(dot.position, Point::new(250.0, 75.0));
        assert!(dot.visible);
        assert_eq!(dot.fill, 1.0);
    }

    #[test]
    fn hovering_an_interactive_element_snaps() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(90.0, 90.0));
        engine.pointer_over(Some(button()));
        assert_eq!(engine.phase(), CursorPhase::Snapped);

        engine.pointer_over(None);
        assert_eq!(engine.phase(), CursorPhase::Tracking);
    }

    #[test]
    fn next_frame_after_snapping_has_no_trail_lag() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(0.0, 0.0));
        for step in 1..10 {
            engine.pointer_moved(Point::new(step as f64 * 20.0, 100.0));
            engine.frame(FRAME);
        }
        let pointer = Point::new(120.0, 110.0);
        engine.pointer_moved(pointer);
        engine.pointer_over(Some(button()));
        engine.frame(FRAME);

        assert!(engine.trail().points().iter().all(|p| *p == pointer));
    }

    #[test]
    fn snapped_dot_springs_to_center_and_grows() {
        let mut engine = engine();
        let start = Point::new(105.0, 105.0);
        engine.pointer_moved(start);
        engine.pointer_over(Some(button()));

        let first = engine.frame(FRAME);
        assert_ne!(first.position, start);
        assert_ne!(first.position, button().center());

        let mut last = first;
        for _ in 0..240 {
            last = engine.frame(FRAME);
        }
        assert!((last.position.x - 140.0).abs() < 0.5);
        assert!((last.position.y - 120.0).abs() < 0.5);
        assert!((last.size - 40.0).abs() < 0.5);
        assert!(last.fill < 0.05);
    }

    #[test]
    fn pointer_moves_while_snapped_do_not_move_the_dot() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(140.0, 120.0));
        engine.pointer_over(Some(button()));
        for _ in 0..240 {
            engine.frame(FRAME);
        }
        engine.pointer_moved(Point::new(170.0, 130.0));
        let dot = engine.frame(FRAME);

        assert!((dot.position.x - 140.0).abs() < 0.5);
        assert_eq!(engine.pointer(), Point::new(170.0, 130.0));
    }

    #[test]
    fn leaving_hover_returns_dot_to_pointer() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(140.0, 120.0));
        engine.pointer_over(Some(button()));
        engine.frame(FRAME);
        engine.pointer_moved(Point::new(300.0, 300.0));
        engine.pointer_over(None);

        assert_eq!(engine.frame(FRAME).position, Point::new(300.0, 300.0));
    }

    #[test]
    fn leave_hides_and_collapses_trail() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(10.0, 10.0));
        engine.pointer_moved(Point::new(300.0, 10.0));
        engine.frame(FRAME);
        engine.pointer_left();

        let dot = engine.frame(FRAME);
        assert!(!dot.visible);
        assert!(engine
            .trail()
            .points()
            .iter()
            .all(|p| *p == Point::new(300.0, 10.0)));
    }

    #[test]
    fn hover_seen_while_hidden_applies_on_reveal() {
        let mut engine = engine();
        engine.pointer_over(Some(button()));
        assert_eq!(engine.phase(), CursorPhase::Hidden);

        engine.pointer_moved(Point::new(120.0, 110.0));
        assert_eq!(engine.phase(), CursorPhase::Snapped);
    }

    #[test]
    fn leaving_while_snapped_forgets_the_hovered_element() {
        let mut engine = engine();
        engine.pointer_moved(Point::new(140.0, 120.0));
        engine.pointer_over(Some(button()));
        engine.pointer_left();

        let at = Point::new(600.0, 400.0);
        engine.pointer_moved(at);
        assert_eq!(engine.phase(), CursorPhase::Tracking);
        assert_eq!(engine.frame(FRAME).position, at);
    }

    #[test]
    fn trail_length_is_constant_under_any_event_sequence() {
        let mut engine = engine();
        for i in 0..300 {
            match i % 7 {
                0 => engine.pointer_moved(Point::new(i as f64, (i * 3) as f64)),
                1 => engine.pointer_over(Some(button())),
                2 => engine.pointer_over(None),
                3 => engine.pointer_left(),
                4 => engine.pointer_entered(Point::new(5.0, i as f64)),
                _ => {}
            }
            engine.frame(FRAME);
            assert_eq!(engine.trail().len(), 20);
        }
    }
}
