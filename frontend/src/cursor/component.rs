use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::engine::{CursorEngine, CursorPhase, DotFrame};
use super::hover::{HoverPolicy, Rect};
use super::trail::Point;
use crate::config::{self, CursorConfig};
use crate::dom::{canvas_2d, fit_canvas_to_window, FrameLoop};

/// Used for the first frame, before there is a previous timestamp.
const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

/// Everything the cursor installed on the page. Dropping it removes the
/// listeners, cancels the frame loop and gives the system pointer back.
struct CursorRuntime {
    _listeners: Vec<EventListener>,
    _frames: FrameLoop,
    hidden_system_cursor: Option<HtmlElement>,
}

impl CursorRuntime {
    fn mount(
        canvas_ref: NodeRef,
        dot_ref: NodeRef,
        config: CursorConfig,
        policy: HoverPolicy,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let engine = Rc::new(RefCell::new(CursorEngine::new(config)));

        let is_desktop = window
            .match_media(config::DESKTOP_QUERY)
            .ok()
            .flatten()
            .map_or(false, |query| query.matches());
        let hidden_system_cursor = document.body().filter(|_| is_desktop).map(|body| {
            let _ = body.style().set_property("cursor", "none");
            body
        });

        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
            fit_canvas_to_window(&canvas);
        }

        let mut listeners = Vec::new();
        {
            let engine = engine.clone();
            listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
                if let Some(at) = client_point(event) {
                    engine.borrow_mut().pointer_moved(at);
                }
            }));
        }
        {
            let engine = engine.clone();
            listeners.push(EventListener::new_with_options(
                &document,
                "mouseover",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: true,
                },
                move |event: &Event| {
                    let target = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| interactive_ancestor(element, &policy))
                        .map(|element| bounding_rect(&element));
                    engine.borrow_mut().pointer_over(target);
                },
            ));
        }
        {
            let engine = engine.clone();
            listeners.push(EventListener::new(&document, "mouseleave", move |_| {
                engine.borrow_mut().pointer_left();
            }));
        }
        {
            let engine = engine.clone();
            listeners.push(EventListener::new(&document, "mouseenter", move |event: &Event| {
                if let Some(at) = client_point(event) {
                    engine.borrow_mut().pointer_entered(at);
                }
            }));
        }
        {
            let canvas_ref = canvas_ref.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    fit_canvas_to_window(&canvas);
                }
            }));
        }

        let mut last_timestamp: Option<f64> = None;
        let frames = FrameLoop::start(move |timestamp| {
            let dt = last_timestamp
                .map(|last| (timestamp - last) / 1000.0)
                .unwrap_or(FIRST_FRAME_SECS);
            last_timestamp = Some(timestamp);

            let mut engine = engine.borrow_mut();
            let dot = engine.frame(dt);
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                // No 2d context means nothing to draw on, not an error.
                if let Some(context) = canvas_2d(&canvas) {
                    draw_trail(&context, &canvas, &engine);
                }
            }
            if let Some(element) = dot_ref.cast::<HtmlElement>() {
                style_dot(&element, &dot);
            }
            true
        });

        info!("Cursor mounted (desktop: {})", is_desktop);
        Some(Self {
            _listeners: listeners,
            _frames: frames,
            hidden_system_cursor,
        })
    }
}

impl Drop for CursorRuntime {
    fn drop(&mut self) {
        if let Some(body) = &self.hidden_system_cursor {
            let _ = body.style().set_property("cursor", "auto");
        }
        debug!("Cursor torn down");
    }
}

fn client_point(event: &Event) -> Option<Point> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// Walks from `element` up through its ancestors to the first one the policy accepts.
fn interactive_ancestor(element: Element, policy: &HoverPolicy) -> Option<Element> {
    let mut chain = Vec::new();
    let mut current = Some(element);
    while let Some(element) = current {
        current = element.parent_element();
        let tag_name = element.tag_name();
        let role = element.get_attribute("role");
        chain.push((element, tag_name, role));
    }
    let index = policy.first_match(
        chain
            .iter()
            .map(|(_, tag_name, role)| (tag_name.as_str(), role.as_deref())),
    )?;
    chain.into_iter().nth(index).map(|(element, _, _)| element)
}

fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn draw_trail(context: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, engine: &CursorEngine) {
    context.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
    if engine.phase() != CursorPhase::Tracking {
        return;
    }

    context.set_line_cap("round");
    context.set_line_join("round");
    for segment in engine.trail().segments(engine.config()) {
        context.begin_path();
        context.move_to(segment.from.x, segment.from.y);
        context.line_to(segment.to.x, segment.to.y);
        context.set_stroke_style(&JsValue::from_str(&segment.css_color()));
        context.set_line_width(segment.width);
        context.stroke();
    }
}

fn style_dot(element: &HtmlElement, dot: &DotFrame) {
    let style = element.style();
    let _ = style.set_property(
        "transform",
        &format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)",
            dot.position.x, dot.position.y
        ),
    );
    let _ = style.set_property("width", &format!("{:.2}px", dot.size));
    let _ = style.set_property("height", &format!("{:.2}px", dot.size));
    let _ = style.set_property(
        "background-color",
        &format!("rgba(255, 255, 255, {:.3})", dot.fill),
    );
    let _ = style.set_property(
        "border",
        if dot.fill < 1.0 {
            "1px solid white"
        } else {
            "0px solid white"
        },
    );
    let _ = style.set_property("opacity", if dot.visible { "1" } else { "0" });
}

#[derive(Properties, PartialEq, Default)]
pub struct CursorProps {
    #[prop_or_default]
    pub policy: HoverPolicy,
}

/// Canvas trail plus magnetic dot that replace the system pointer.
#[function_component(Cursor)]
pub fn cursor(props: &CursorProps) -> Html {
    let canvas_ref = use_node_ref();
    let dot_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let dot_ref = dot_ref.clone();
        use_effect_with_deps(
            move |policy: &HoverPolicy| {
                let runtime =
                    CursorRuntime::mount(canvas_ref, dot_ref, CursorConfig::default(), policy.clone());
                move || drop(runtime)
            },
            props.policy.clone(),
        );
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="cursor-trail" aria-hidden="true" />
            <div ref={dot_ref} class="cursor-dot" aria-hidden="true" />
        </>
    }
}
