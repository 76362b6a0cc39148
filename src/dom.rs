use skyfall_core::{ScrollMetrics, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("missing #{element_id}, click listener not wired");
    }
}

pub fn on_window_resize(window: &web::Window, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Matches the canvas backing store to the window and returns the new size.
pub fn sync_canvas_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Viewport {
    let (w, h) = inner_size(window);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    Viewport::new(canvas.width() as f64, canvas.height() as f64)
}

pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let (_, viewport_height) = inner_size(window);
    let document_height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollMetrics {
        offset: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height,
    }
}
