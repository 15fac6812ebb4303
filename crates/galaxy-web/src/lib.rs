#![cfg(target_arch = "wasm32")]
use crate::constants::{BADGE_URL, CANVAS_ID};
use galaxy_core::{Camera, GuideTracker, Scene, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod guide_view;
mod input;
mod render;
mod texture;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    dom::wire_canvas_resize(&canvas);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = Scene::new(SceneConfig {
        seed,
        ..SceneConfig::default()
    })?;
    log::info!(
        "[scene] seed={} points={} edge_cap={}",
        seed,
        scene.field().len(),
        scene.graph().capacity()
    );

    let started = Instant::now();
    let guide = Rc::new(RefCell::new(GuideTracker::new(0.0)));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    {
        // pick up the section for a page restored mid-scroll
        let (offset, vh) = dom::scroll_metrics(&window);
        guide.borrow_mut().on_scroll(offset, vh, 0.0);
    }

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        pointer: pointer.clone(),
        guide: guide.clone(),
        started,
    });

    // Badge image loads in the background; the badge stays blank until it lands
    let pending_badge = Rc::new(RefCell::new(None));
    {
        let pending = pending_badge.clone();
        spawn_local(async move {
            match texture::fetch_image(BADGE_URL).await {
                Ok(img) => *pending.borrow_mut() = Some(img),
                Err(e) => log::warn!("[texture] badge unavailable: {:?}", e),
            }
        });
    }

    let gpu = frame::init_gpu(&canvas, &scene).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera: Camera::default(),
        gpu,
        canvas: canvas.clone(),
        pointer,
        guide,
        guide_view: guide_view::GuideView::find(&document),
        pending_badge,
        started,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
