use crate::canvas::CanvasPainter;
use crate::constants::FPS_LOG_INTERVAL;
use crate::dom;
use instant::Instant;
use skyfall_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub painter: CanvasPainter,
    pub window: web::Window,
    pub last_instant: Instant,
    pub frames: u64,
    pub elapsed_sec: f32,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, painter: CanvasPainter, window: web::Window) -> Self {
        Self {
            scene,
            painter,
            window,
            last_instant: Instant::now(),
            frames: 0,
            elapsed_sec: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.elapsed_sec += dt.as_secs_f32();

        let scroll = dom::scroll_metrics(&self.window);
        let stats = self
            .scene
            .borrow_mut()
            .frame(&mut self.painter, &scroll, instant::now());

        self.frames += 1;
        if self.frames % FPS_LOG_INTERVAL == 0 {
            let fps = FPS_LOG_INTERVAL as f32 / self.elapsed_sec.max(f32::EPSILON);
            log::debug!(
                "[frame] fps={:.1} alternate={} entities={} offset={:.0}",
                fps,
                stats.alternate,
                stats.entity_updates,
                scroll.offset
            );
            self.elapsed_sec = 0.0;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
