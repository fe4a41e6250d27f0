//! Inertial page scrolling.
//!
//! Wheel input moves a target offset and the page catches up a fraction of
//! the gap every frame. Section links run a fixed-length easeOutExpo tween
//! instead. When neither is active the model follows the browser's own
//! scroll position, so keyboard and scrollbar scrolling keep working.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use web_sys::{Event, WheelEvent};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{self, ScrollConfig};
use crate::dom::FrameLoop;

/// Closer than this the page is considered to have arrived.
const SETTLE_PX: f64 = 0.5;

pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
        }
    }

    /// Clamps `position` to the stretch of page this tween covers.
    fn within(&self, position: f64) -> f64 {
        position.clamp(self.from.min(self.to), self.from.max(self.to))
    }

    /// Position at `now` (ms) and whether the tween is finished. The first
    /// sample starts the clock.
    pub fn sample(&mut self, now: f64) -> (f64, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now - started_at) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_out_expo(t), false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    config: ScrollConfig,
    current: f64,
    target: f64,
    tween: Option<ScrollTween>,
}

impl SmoothScroll {
    pub fn new(config: ScrollConfig, at: f64) -> Self {
        Self {
            config,
            current: at,
            target: at,
            tween: None,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some() || (self.target - self.current).abs() > SETTLE_PX
    }

    /// Adds a wheel delta to the target, kept within `0..=max_scroll`. A
    /// running tween is abandoned where the page currently is.
    pub fn wheel(&mut self, delta: f64, max_scroll: f64) {
        let base = match self.tween.take() {
            Some(tween) => tween.within(self.current),
            None => self.target,
        };
        self.target = (base + delta * self.config.wheel_multiplier).clamp(0.0, max_scroll.max(0.0));
    }

    pub fn scroll_to(&mut self, offset: f64, max_scroll: f64) {
        let to = offset.clamp(0.0, max_scroll.max(0.0));
        self.tween = Some(ScrollTween::new(self.current, to, self.config.duration_ms));
        self.target = to;
    }

    /// Adopts a position the browser scrolled to on its own.
    pub fn sync(&mut self, native: f64) {
        if !self.is_animating() {
            self.current = native;
            self.target = native;
        }
    }

    /// Advances to `now` (ms). Returns the offset to apply, if the page should move.
    pub fn frame(&mut self, now: f64) -> Option<f64> {
        if let Some(tween) = self.tween.as_mut() {
            let (position, done) = tween.sample(now);
            self.current = position;
            if done {
                self.tween = None;
            }
            return Some(position);
        }

        let gap = self.target - self.current;
        if gap.abs() <= SETTLE_PX {
            if gap != 0.0 {
                self.current = self.target;
                return Some(self.current);
            }
            return None;
        }
        self.current += gap * self.config.wheel_lerp;
        Some(self.current)
    }
}

fn max_scroll(window: &web_sys::Window) -> f64 {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    (content - viewport).max(0.0)
}

/// Handle components use to scroll to a section.
#[derive(Clone)]
pub struct ScrollHandle {
    state: Rc<RefCell<SmoothScroll>>,
}

impl PartialEq for ScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollHandle {
    /// Scrolls so that the element with `id` sits `offset` px below the top.
    pub fn scroll_to_section(&self, id: &str, offset: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            warn!("No section #{} to scroll to", id);
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let destination = element.get_bounding_client_rect().top() + scroll_y - offset;
        debug!("Scrolling to #{} at {:.0}px", id, destination);
        self.state
            .borrow_mut()
            .scroll_to(destination, max_scroll(&window));
    }
}

struct ScrollRuntime {
    _wheel: EventListener,
    _frames: FrameLoop,
}

impl ScrollRuntime {
    fn mount(state: Rc<RefCell<SmoothScroll>>) -> Option<Self> {
        let window = web_sys::window()?;

        let wheel = {
            let state = state.clone();
            let viewport = window.clone();
            EventListener::new_with_options(
                &window,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                        return;
                    };
                    // Pinch zoom arrives as ctrl+wheel.
                    if wheel.ctrl_key() {
                        return;
                    }
                    event.prevent_default();
                    state.borrow_mut().wheel(wheel.delta_y(), max_scroll(&viewport));
                },
            )
        };

        let frames = FrameLoop::start(move |now| {
            let Some(window) = web_sys::window() else {
                return false;
            };
            let mut state = state.borrow_mut();
            state.sync(window.scroll_y().unwrap_or(0.0));
            if let Some(offset) = state.frame(now) {
                window.scroll_to_with_x_and_y(0.0, offset);
            }
            true
        });

        Some(Self {
            _wheel: wheel,
            _frames: frames,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProviderProps) -> Html {
    let handle = use_memo(
        |_| ScrollHandle {
            state: Rc::new(RefCell::new(SmoothScroll::new(
                ScrollConfig::default(),
                web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0),
            ))),
        },
        (),
    );

    {
        let state = handle.state.clone();
        use_effect_with_deps(
            move |_| {
                let runtime = ScrollRuntime::mount(state);
                move || drop(runtime)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollHandle> context={(*handle).clone()}>
            { props.children.clone() }
        </ContextProvider<ScrollHandle>>
    }
}

/// Scroll handle of the surrounding [`SmoothScrollProvider`].
#[hook]
pub fn use_smooth_scroll() -> Option<ScrollHandle> {
    use_context::<ScrollHandle>()
}

/// Brings section `id` into view, animated when a provider is mounted.
pub fn go_to_section(handle: Option<&ScrollHandle>, id: &str) {
    match handle {
        Some(handle) => handle.scroll_to_section(id, config::SECTION_SCROLL_OFFSET),
        None => {
            if let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            {
                element.scroll_into_view();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll() -> SmoothScroll {
        SmoothScroll::new(ScrollConfig::default(), 0.0)
    }

    #[test]
    fn ease_out_expo_is_monotonic_and_capped() {
        assert!(ease_out_expo(0.0) < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        let mut previous = ease_out_expo(0.0);
        for step in 1..=100 {
            let value = ease_out_expo(step as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let mut tween = ScrollTween::new(0.0, 1000.0, 1200.0);
        let (start, done) = tween.sample(5000.0);
        assert!(start < 5.0 && !done);

        let (middle, done) = tween.sample(5600.0);
        assert!(middle > 900.0 && middle < 1000.0 && !done);

        assert_eq!(tween.sample(6200.0), (1000.0, true));
    }

    #[test]
    fn wheel_moves_toward_target_gradually() {
        let mut scroll = scroll();
        scroll.wheel(100.0, 5000.0);

        let first = scroll.frame(0.0).unwrap();
        assert!((first - 10.0).abs() < 1e-9);
        for i in 1..200 {
            scroll.frame(i as f64 * 16.0);
        }
        assert_eq!(scroll.current(), 100.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.frame(10_000.0), None);
    }

    #[test]
    fn wheel_target_is_clamped_to_the_page() {
        let mut scroll = scroll();
        scroll.wheel(-300.0, 5000.0);
        assert!(!scroll.is_animating());

        scroll.wheel(9000.0, 800.0);
        for i in 0..500 {
            scroll.frame(i as f64 * 16.0);
        }
        assert_eq!(scroll.current(), 800.0);
    }

    #[test]
    fn section_scroll_runs_the_tween() {
        let mut scroll = scroll();
        scroll.scroll_to(2400.0, 10_000.0);
        assert!(scroll.is_animating());

        scroll.frame(100.0);
        scroll.frame(700.0);
        assert_eq!(scroll.frame(1300.0), Some(2400.0));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn wheel_interrupts_a_running_tween() {
        let mut scroll = scroll();
        scroll.scroll_to(2400.0, 10_000.0);
        scroll.frame(0.0);
        scroll.frame(300.0);
        let reached = scroll.current();

        scroll.wheel(-50.0, 10_000.0);
        for i in 0..500 {
            scroll.frame(400.0 + i as f64 * 16.0);
        }
        assert!((scroll.current() - (reached - 50.0)).abs() < 1e-6);
    }

    #[test]
    fn wheel_interrupts_an_upward_tween_where_it_is() {
        let mut scroll = SmoothScroll::new(ScrollConfig::default(), 2000.0);
        scroll.scroll_to(0.0, 10_000.0);
        scroll.frame(0.0);
        scroll.frame(100.0);
        let reached = scroll.current();
        assert!(reached > 0.0 && reached < 2000.0);

        scroll.wheel(50.0, 10_000.0);
        for i in 0..500 {
            scroll.frame(200.0 + i as f64 * 16.0);
        }
        assert!((scroll.current() - (reached + 50.0)).abs() < 1e-6);
    }

    #[test]
    fn native_scroll_is_adopted_only_when_idle() {
        let mut scroll = scroll();
        scroll.sync(640.0);
        assert_eq!(scroll.current(), 640.0);

        scroll.wheel(200.0, 5000.0);
        scroll.sync(0.0);
        assert_eq!(scroll.current(), 640.0);
    }
}
