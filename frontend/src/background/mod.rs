//! Fixed page backdrop: three drifting aurora orbs under a grain overlay.

pub mod noise;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::Clamped;
use web_sys::{HtmlCanvasElement, ImageData};
use yew::prelude::*;

use crate::config::NoiseConfig;
use crate::dom::{canvas_2d, fit_canvas_to_window, FrameLoop};
use noise::NoisePool;

struct NoiseRuntime {
    _resize: EventListener,
    _frames: FrameLoop,
}

impl NoiseRuntime {
    fn mount(canvas: HtmlCanvasElement, config: NoiseConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let Some(context) = canvas_2d(&canvas) else {
            warn!("Noise canvas has no 2d context, skipping grain");
            return None;
        };

        let rng = Rc::new(RefCell::new(SmallRng::from_entropy()));
        let build_pool = {
            let canvas = canvas.clone();
            let rng = rng.clone();
            move || {
                let (width, height) = fit_canvas_to_window(&canvas);
                let pool = NoisePool::generate(width, height, &config, &mut *rng.borrow_mut());
                debug!("Generated {} noise frames at {}x{}", pool.len(), width, height);
                pool
            }
        };
        let pool = Rc::new(RefCell::new(build_pool()));

        let resize = {
            let pool = pool.clone();
            EventListener::new(&window, "resize", move |_| {
                *pool.borrow_mut() = build_pool();
            })
        };

        let frames = FrameLoop::start_throttled(config.frame_delay_ms, move |_| {
            let mut pool = pool.borrow_mut();
            let (width, height) = (pool.width(), pool.height());
            if width == 0 || height == 0 {
                return true;
            }
            if let Some(frame) = pool.next_frame() {
                match ImageData::new_with_u8_clamped_array_and_sh(Clamped(frame), width, height) {
                    Ok(image) => {
                        let _ = context.put_image_data(&image, 0.0, 0.0);
                    }
                    Err(e) => warn!("Could not build noise frame: {:?}", e),
                }
            }
            true
        });

        Some(Self {
            _resize: resize,
            _frames: frames,
        })
    }
}

#[function_component(Background)]
pub fn background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let runtime = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| NoiseRuntime::mount(canvas, NoiseConfig::default()));
                move || drop(runtime)
            },
            (),
        );
    }

    html! {
        <div class="background" aria-hidden="true">
            <div class="aurora">
                <div class="orb orb-cyan"></div>
                <div class="orb orb-purple"></div>
                <div class="orb orb-emerald"></div>
            </div>
            <canvas ref={canvas_ref} class="noise" />
        </div>
    }
}
