use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::page_core::config::{BracketLayer, NavbarConfig, PageConfig};
use crate::page_core::layout::{self, NavbarPosition};
use crate::page_core::sky;

// Applies the initial presentation state and registers the scroll and resize
// handlers. The handlers own a clone of the config for the page's lifetime.
pub fn attach(config: PageConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let now = js_sys::Date::new_0();
    let gradient = sky::sky_gradient_at(
        &config.sky,
        f64::from(now.get_hours()),
        f64::from(now.get_minutes()),
    );
    apply_sky(&document, &gradient)?;
    apply_brackets(&document, &config, viewport_width(&window))?;
    apply_navbar(&document, &config.navbar, scroll_y(&window))?;

    let resize_config = config.clone();
    let onresize = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        if let Err(e) = apply_brackets(&document, &resize_config, viewport_width(&window)) {
            log::warn!("failed to reposition brackets: {e:?}");
        }
    });
    window.set_onresize(Some(onresize.as_ref().unchecked_ref()));
    onresize.forget();

    let scroll_navbar = config.navbar.clone();
    let onscroll = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        if let Err(e) = apply_navbar(&document, &scroll_navbar, scroll_y(&window)) {
            log::warn!("failed to toggle navbar: {e:?}");
        }
    });
    window.set_onscroll(Some(onscroll.as_ref().unchecked_ref()));
    onscroll.forget();

    log::info!("page presentation attached");
    Ok(())
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

fn scroll_y(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn apply_sky(document: &Document, gradient: &str) -> Result<(), JsValue> {
    let target = match document.get_element_by_id("sky") {
        Some(element) => element,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| JsValue::from_str("no sky element and no body"))?,
    };
    let target: HtmlElement = target.dyn_into()?;
    target.style().set_property("background", gradient)
}

fn apply_brackets(
    document: &Document,
    config: &PageConfig,
    viewport_width: f64,
) -> Result<(), JsValue> {
    let fills = document.get_elements_by_class_name("bracket_fill");
    let lines = document.get_elements_by_class_name("bracket_line");

    let mut fill_index = 0;
    let mut line_index = 0;
    for placement in layout::bracket_placements(&config.layout, viewport_width) {
        let index = match placement.layer {
            BracketLayer::Fill => &mut fill_index,
            BracketLayer::Line => &mut line_index,
        };
        let collection = match placement.layer {
            BracketLayer::Fill => &fills,
            BracketLayer::Line => &lines,
        };
        let element = collection.item(*index);
        *index += 1;

        // pages may render fewer brackets than the config describes
        let Some(element) = element else {
            continue;
        };
        let element: HtmlElement = element.dyn_into()?;
        let style = element.style();
        style.set_property("width", &format!("{}px", placement.width))?;
        style.set_property("top", &format!("{}px", placement.top))?;
        style.set_property("left", &format!("{}px", placement.left))?;
    }

    Ok(())
}

fn apply_navbar(
    document: &Document,
    config: &NavbarConfig,
    scroll_y: f64,
) -> Result<(), JsValue> {
    let Some(nav) = document.get_element_by_id("navbar") else {
        return Ok(());
    };
    let nav: HtmlElement = nav.dyn_into()?;
    let style = nav.style();

    match layout::navbar_position(config, scroll_y) {
        NavbarPosition::Fixed { margin_top } => {
            style.set_property("position", "fixed")?;
            style.set_property("top", "0")?;
            style.set_property("margin-top", &format!("{margin_top}px"))?;
        }
        NavbarPosition::Static => {
            style.set_property("position", "static")?;
            style.set_property("margin-top", "0")?;
        }
    }

    Ok(())
}
