//! Reads section geometry out of the live document and drives the window's
//! scroll position.

use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::scroll_sync::{self, Section};

pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

fn browser_window() -> Result<Window, JsValue> {
    window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Measures the sections with the given ids, in the order given. Ids with no
/// matching element are skipped.
pub fn measure_sections(ids: &[&str]) -> Vec<Section> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(Section::new(
                *id,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

pub fn viewport() -> Result<Viewport, JsValue> {
    let window = browser_window()?;
    let scroll_top = window.scroll_y()?;
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(Viewport { scroll_top, height })
}

pub fn smooth_scroll_to(top: f64) -> Result<(), JsValue> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    browser_window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smoothly scrolls `id` into view below the navigation bar. Unknown ids are
/// ignored.
pub fn scroll_to_section(id: &str) {
    let sections = measure_sections(&[id]);
    let Some(top) = scroll_sync::scroll_target(&sections, id) else {
        debug!("No section with id {}, ignoring scroll request", id);
        return;
    };

    debug!("Scrolling to {} at {}px", id, top);
    if let Err(e) = smooth_scroll_to(top) {
        warn!("Smooth scroll to {} failed: {:?}", id, e);
    }
}
