use crate::constants::{GUIDE_AVATAR_ID, GUIDE_CLOSE_ID};
use crate::dom;
use crate::input::PointerState;
use galaxy_core::GuideTracker;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
    pub guide: Rc<RefCell<GuideTracker>>,
    pub started: Instant,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_scroll(&w);
    wire_guide_buttons(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size(&w.window);
        w.pointer.borrow_mut().update(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vw as f32,
            vh as f32,
        );
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();
    let target = w.window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (offset, vh) = dom::scroll_metrics(&w.window);
        let now = w.started.elapsed().as_secs_f64();
        if let Some(section) = w.guide.borrow_mut().on_scroll(offset, vh, now) {
            log::info!("[scroll] section {}", section.id());
        }
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_guide_buttons(w: &InputWiring) {
    let guide_click = w.guide.clone();
    let started = w.started;
    dom::add_click_listener(&w.document, GUIDE_AVATAR_ID, move || {
        let mut g = guide_click.borrow_mut();
        g.on_click(started.elapsed().as_secs_f64());
        log::info!("[click] guide clicked {} times", g.click_count());
    });

    let guide_close = w.guide.clone();
    dom::add_click_listener(&w.document, GUIDE_CLOSE_ID, move || {
        guide_close.borrow_mut().dismiss();
    });
}
