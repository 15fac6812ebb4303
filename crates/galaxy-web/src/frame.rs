use crate::constants::MAX_HOST_DT_SEC;
use crate::guide_view::GuideView;
use crate::input::{self, PointerState};
use crate::render;
use crate::texture::BadgeImage;
use galaxy_core::{Camera, FrameInput, GuideTracker, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub camera: Camera,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,

    pub pointer: Rc<RefCell<PointerState>>,
    pub guide: Rc<RefCell<GuideTracker>>,
    pub guide_view: GuideView,
    // filled by the async texture load, consumed once by the renderer
    pub pending_badge: Rc<RefCell<Option<BadgeImage>>>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = input::clamp_delta((now - self.last_instant).as_secs_f32(), MAX_HOST_DT_SEC);
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        let pointer = self.pointer.borrow().ndc;
        self.scene.tick(&FrameInput {
            elapsed,
            delta: dt_sec,
            pointer,
        });

        {
            let mut guide = self.guide.borrow_mut();
            guide.tick((now - self.started).as_secs_f64());
            self.guide_view.render(guide.message(), guide.is_visible());
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if let Some(img) = self.pending_badge.borrow_mut().take() {
            gpu.set_badge(&img);
        }
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let (w, h) = gpu.size();
        self.camera.set_viewport(w, h);
        match gpu.render(&self.scene, &self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
