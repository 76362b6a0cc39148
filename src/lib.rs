#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfall_core::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod toggle;

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) {
    let window_resize = window.clone();
    let canvas_resize = canvas.clone();
    dom::on_window_resize(window, move || {
        let viewport = dom::sync_canvas_size(&window_resize, &canvas_resize);
        scene.borrow_mut().resize(viewport);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyfall-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::sync_canvas_size(&window, &canvas);
    let scene = Scene::new(SceneConfig::default(), viewport, StdRng::from_entropy())?;
    toggle::apply_mode(&document, &canvas, scene.is_alternate());
    let scene = Rc::new(RefCell::new(scene));

    wire_canvas_resize(&window, &canvas, scene.clone());
    toggle::wire_toggle(&document, &canvas, scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        canvas::CanvasPainter::new(ctx),
        window,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
