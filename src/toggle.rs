use crate::constants::{NEWTON_BACKGROUND, SPACE_BACKGROUND, TOGGLE_ACTIVE_CLASS, TOGGLE_ID};
use crate::dom;
use skyfall_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Syncs the toggle button and the canvas CSS backdrop with the scene mode.
/// The button reads "active" while the space scene is showing.
pub fn apply_mode(document: &web::Document, canvas: &web::HtmlCanvasElement, alternate: bool) {
    if let Some(el) = document.get_element_by_id(TOGGLE_ID) {
        _ = el
            .class_list()
            .toggle_with_force(TOGGLE_ACTIVE_CLASS, !alternate);
    }
    let background = if alternate {
        NEWTON_BACKGROUND
    } else {
        SPACE_BACKGROUND
    };
    _ = canvas.style().set_property("background", background);
}

pub fn wire_toggle(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) {
    let doc = document.clone();
    let canvas = canvas.clone();
    dom::add_click_listener(document, TOGGLE_ID, move || {
        let alternate = scene.borrow_mut().toggle_alternate();
        apply_mode(&doc, &canvas, alternate);
    });
}
