use crate::page_core::config::{Anchor, BracketLayer, LayoutConfig, NavbarConfig, Ramp};

pub fn remap(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

fn ramp_at(ramp: Ramp, viewport_width: f64, reference_width: f64) -> f64 {
    remap(viewport_width, 0.0, reference_width, ramp.from, ramp.to)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub layer: BracketLayer,
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

// One placement per descriptor, in descriptor order. Viewport-anchored
// descriptors ride the right edge of the viewport.
pub fn bracket_placements(config: &LayoutConfig, viewport_width: f64) -> Vec<Placement> {
    config
        .brackets
        .iter()
        .map(|spec| {
            let anchor_offset = match spec.anchor {
                Anchor::Page => 0.0,
                Anchor::Viewport => viewport_width,
            };
            Placement {
                layer: spec.layer,
                top: ramp_at(spec.top, viewport_width, config.reference_width),
                left: ramp_at(spec.left, viewport_width, config.reference_width) + anchor_offset,
                width: ramp_at(config.bracket_width, viewport_width, config.reference_width),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavbarPosition {
    Fixed { margin_top: f64 },
    Static,
}

pub fn navbar_position(config: &NavbarConfig, scroll_y: f64) -> NavbarPosition {
    if scroll_y > config.fixed_after {
        NavbarPosition::Fixed {
            margin_top: config.fixed_margin_top,
        }
    } else {
        NavbarPosition::Static
    }
}

#[cfg(test)]
mod tests {
    use super::{bracket_placements, navbar_position, remap, NavbarPosition};
    use crate::page_core::config::{BracketLayer, LayoutConfig, NavbarConfig};

    #[test]
    fn remap_is_exact_at_both_endpoints() {
        assert_eq!(remap(0.0, 0.0, 1920.0, 100.0, 150.0), 100.0);
        assert_eq!(remap(1920.0, 0.0, 1920.0, 100.0, 150.0), 150.0);
        assert_eq!(remap(960.0, 0.0, 1920.0, 100.0, 150.0), 125.0);
    }

    #[test]
    fn remap_extrapolates_outside_the_input_range() {
        assert_eq!(remap(3840.0, 0.0, 1920.0, 100.0, 150.0), 200.0);
        assert_eq!(remap(-1920.0, 0.0, 1920.0, 0.0, 100.0), -100.0);
    }

    #[test]
    fn reference_width_reproduces_the_design_placements() {
        let config = LayoutConfig::default();
        let placements = bracket_placements(&config, 1920.0);
        assert_eq!(placements.len(), 6);

        let first = placements[0];
        assert_eq!(first.layer, BracketLayer::Fill);
        assert_eq!(first.top, -40.0);
        assert_eq!(first.left, 450.0);
        assert_eq!(first.width, 150.0);

        let last = placements[5];
        assert_eq!(last.layer, BracketLayer::Line);
        assert_eq!(last.top, 200.0);
        assert_eq!(last.left, 1920.0 - 350.0);
    }

    #[test]
    fn viewport_anchored_brackets_track_the_viewport() {
        let config = LayoutConfig::default();
        let placements = bracket_placements(&config, 960.0);
        // second fill: left endpoint pair (100, -550) plus the viewport width
        assert_eq!(placements[1].left, 960.0 - 225.0);
        // page-anchored line stays put relative to the page
        assert_eq!(placements[2].left, 25.0);
    }

    #[test]
    fn all_brackets_share_the_width_ramp() {
        let config = LayoutConfig::default();
        for placement in bracket_placements(&config, 960.0) {
            assert_eq!(placement.width, 125.0);
        }
    }

    #[test]
    fn navbar_fixes_only_strictly_past_the_threshold() {
        let config = NavbarConfig::default();
        assert_eq!(navbar_position(&config, 0.0), NavbarPosition::Static);
        assert_eq!(navbar_position(&config, 331.0), NavbarPosition::Static);
        assert_eq!(
            navbar_position(&config, 331.5),
            NavbarPosition::Fixed { margin_top: 30.0 }
        );
    }
}
