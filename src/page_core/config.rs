use serde::{Deserialize, Serialize};

use crate::page_core::color::Rgba;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub sky: SkyConfig,
    pub layout: LayoutConfig,
    pub navbar: NavbarConfig,
    pub preview: PreviewConfig,
}

impl PageConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::path::Path::new("config.json");
        if !path.exists() {
            log::info!("no config.json found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded config.json");
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config.json: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config.json: {e}, using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyKeyframe {
    pub top: Rgba,
    pub bottom: Rgba,
}

const fn keyframe(top: Rgba, bottom: Rgba) -> SkyKeyframe {
    SkyKeyframe { top, bottom }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    // one keyframe per 3-hour block, starting at midnight
    pub keyframes: [SkyKeyframe; 8],
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            keyframes: [
                keyframe(Rgba::new(38, 37, 51, 0.9), Rgba::new(0, 0, 0, 1.0)),
                keyframe(Rgba::new(0, 0, 0, 0.5), Rgba::new(0, 0, 0, 0.9)),
                keyframe(Rgba::new(75, 83, 92, 1.0), Rgba::new(131, 177, 224, 1.0)),
                keyframe(Rgba::new(130, 175, 224, 1.0), Rgba::new(60, 203, 226, 1.0)),
                keyframe(Rgba::new(112, 216, 239, 1.0), Rgba::new(198, 180, 220, 1.0)),
                keyframe(Rgba::new(112, 163, 239, 1.0), Rgba::new(202, 142, 198, 1.0)),
                keyframe(Rgba::new(88, 81, 197, 1.0), Rgba::new(230, 105, 145, 1.0)),
                keyframe(Rgba::new(43, 28, 58, 1.0), Rgba::new(84, 18, 39, 1.0)),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketLayer {
    Fill,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Page,
    Viewport,
}

// endpoint values at viewport width 0 and at the reference width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub from: f64,
    pub to: f64,
}

const fn ramp(from: f64, to: f64) -> Ramp {
    Ramp { from, to }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketSpec {
    pub layer: BracketLayer,
    pub top: Ramp,
    pub left: Ramp,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub reference_width: f64,
    pub bracket_width: Ramp,
    pub brackets: Vec<BracketSpec>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let spec = |layer, top, left, anchor| BracketSpec {
            layer,
            top,
            left,
            anchor,
        };
        Self {
            reference_width: 1920.0,
            bracket_width: ramp(100.0, 150.0),
            brackets: vec![
                spec(BracketLayer::Fill, ramp(-30.0, -40.0), ramp(-300.0, 450.0), Anchor::Page),
                spec(BracketLayer::Fill, ramp(100.0, 150.0), ramp(100.0, -550.0), Anchor::Viewport),
                spec(BracketLayer::Line, ramp(-10.0, 30.0), ramp(-200.0, 250.0), Anchor::Page),
                spec(BracketLayer::Line, ramp(130.0, 180.0), ramp(-110.0, 550.0), Anchor::Page),
                spec(BracketLayer::Line, ramp(-60.0, -100.0), ramp(-70.0, -530.0), Anchor::Viewport),
                spec(BracketLayer::Line, ramp(180.0, 200.0), ramp(150.0, -350.0), Anchor::Viewport),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub fixed_after: f64,
    pub fixed_margin_top: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            fixed_after: 331.0,
            fixed_margin_top: 30.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub start_hour: f64,
    // hours of day advanced per sweep step
    pub day_speed: f64,
    pub steps: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            start_hour: 12.0,
            day_speed: 0.5,
            steps: 48,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageConfig, SkyConfig};
    use crate::page_core::color::Rgba;

    #[test]
    fn default_config_survives_a_json_round_trip() {
        let config = PageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PageConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.navbar.fixed_after, config.navbar.fixed_after);
        assert_eq!(parsed.sky.keyframes[3].top, config.sky.keyframes[3].top);
        assert_eq!(parsed.layout.brackets.len(), config.layout.brackets.len());
        assert_eq!(parsed.preview.steps, config.preview.steps);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: PageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.navbar.fixed_after, 331.0);
        assert_eq!(parsed.layout.reference_width, 1920.0);
        assert_eq!(parsed.sky.keyframes[0].top, Rgba::new(38, 37, 51, 0.9));
    }

    #[test]
    fn partial_sky_section_replaces_the_whole_table() {
        let json = serde_json::to_string(&SkyConfig::default()).unwrap();
        let parsed: SkyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keyframes.len(), 8);
        assert_eq!(parsed.keyframes[7].bottom, Rgba::new(84, 18, 39, 1.0));
    }
}
