pub mod page_core;

#[cfg(target_arch = "wasm32")]
pub mod page_dom;

#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use wasm_bindgen::prelude::*;

    use crate::page_core::config::PageConfig;
    use crate::page_dom;

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        page_dom::attach(PageConfig::default()).expect("failed to attach page presentation");
    }
}
