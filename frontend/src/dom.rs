//! Animation-frame loop and canvas helpers shared by the page effects.
//!
//! Dropping a [`FrameLoop`] cancels whatever frame or delay is pending, so
//! components can hold one in an effect and let the effect's destructor clean
//! up on unmount.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct FrameShared {
    frame: RefCell<Option<AnimationFrame>>,
    timer: RefCell<Option<Timeout>>,
    tick: RefCell<Box<dyn FnMut(f64) -> bool>>,
    delay_ms: Option<u32>,
    stopped: Cell<bool>,
}

/// A `requestAnimationFrame` loop. The tick gets the frame timestamp in
/// milliseconds and returns whether to keep going.
pub struct FrameLoop {
    shared: Rc<FrameShared>,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut(f64) -> bool + 'static) -> Self {
        Self::spawn(None, tick)
    }

    /// Like [`start`](Self::start), but waits `delay_ms` after each tick
    /// before asking for the next frame.
    pub fn start_throttled(delay_ms: u32, tick: impl FnMut(f64) -> bool + 'static) -> Self {
        Self::spawn(Some(delay_ms), tick)
    }

    fn spawn(delay_ms: Option<u32>, tick: impl FnMut(f64) -> bool + 'static) -> Self {
        let shared = Rc::new(FrameShared {
            frame: RefCell::new(None),
            timer: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
            delay_ms,
            stopped: Cell::new(false),
        });
        request_frame(&shared);
        Self { shared }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.shared.stopped.set(true);
        // Dropping the gloo handles cancels the pending frame and clears the delay.
        self.shared.frame.borrow_mut().take();
        self.shared.timer.borrow_mut().take();
    }
}

fn schedule(shared: &Rc<FrameShared>) {
    if shared.stopped.get() {
        return;
    }
    match shared.delay_ms {
        Some(delay_ms) => {
            let weak: Weak<FrameShared> = Rc::downgrade(shared);
            let timer = Timeout::new(delay_ms, move || {
                if let Some(shared) = weak.upgrade() {
                    request_frame(&shared);
                }
            });
            *shared.timer.borrow_mut() = Some(timer);
        }
        None => request_frame(shared),
    }
}

fn request_frame(shared: &Rc<FrameShared>) {
    if shared.stopped.get() {
        return;
    }
    let weak = Rc::downgrade(shared);
    let handle = request_animation_frame(move |timestamp| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.frame.borrow_mut().take();
        let keep_going = {
            let mut tick = shared.tick.borrow_mut();
            (*tick)(timestamp)
        };
        if keep_going {
            schedule(&shared);
        }
    });
    *shared.frame.borrow_mut() = Some(handle);
}

/// The 2d context of `canvas`, or `None` where the browser cannot provide one.
pub fn canvas_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Sizes the canvas backing store to the window's inner size.
pub fn fit_canvas_to_window(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let (width, height) = web_sys::window()
        .map(|w| {
            let dimension = |value: Result<wasm_bindgen::JsValue, _>| {
                value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
            };
            (dimension(w.inner_width()), dimension(w.inner_height()))
        })
        .unwrap_or((0, 0));
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}
