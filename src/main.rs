// Binary entry point, native preview only.
// On wasm32 the page is driven by the #[wasm_bindgen(start)] export in lib.rs.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use teaser_page::page_core::config::PageConfig;
    use teaser_page::page_core::layout::{self, NavbarPosition};
    use teaser_page::page_core::sky;
    use teaser_page::page_core::time::PageClock;
    use teaser_page::preview::PreviewArgs;

    env_logger::init();
    let args = PreviewArgs::from_env_args()?;
    let config = PageConfig::load();

    if args.sweep {
        let mut clock = PageClock::new(config.preview.start_hour, config.preview.day_speed);
        for _ in 0..config.preview.steps {
            let (hour, minute) = clock.hour_minute();
            println!(
                "{:02}:{:02}  {}",
                hour as u32,
                minute as u32,
                sky::sky_gradient_at(&config.sky, hour, minute)
            );
            clock.advance(1.0);
        }
        return Ok(());
    }

    let (hour, minute) = match args.hour {
        Some(hour) => (hour, args.minute),
        None => PageClock::new(config.preview.start_hour, 0.0).hour_minute(),
    };

    log::info!(
        "previewing {:02}:{:02} at a {}px viewport",
        hour as u32,
        minute as u32,
        args.width
    );
    println!("{}", sky::sky_gradient_at(&config.sky, hour, minute));

    for placement in layout::bracket_placements(&config.layout, args.width) {
        println!(
            "{:?} bracket: top {:.1}px, left {:.1}px, width {:.1}px",
            placement.layer, placement.top, placement.left, placement.width
        );
    }
    match layout::navbar_position(&config.navbar, 0.0) {
        NavbarPosition::Fixed { margin_top } => println!("navbar: fixed, {margin_top}px margin"),
        NavbarPosition::Static => println!("navbar: static"),
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Wasm entry point is #[wasm_bindgen(start)] in lib.rs.
    // This binary target is not used for wasm builds.
}
