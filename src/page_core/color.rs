use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

// Hue in whole degrees, saturation and value in whole percent. Alpha passes
// through untouched in both directions.
pub fn rgb_to_hsv(rgb: Rgba) -> Hsva {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max == 0.0 {
        return Hsva {
            h: 0.0,
            s: 0.0,
            v: 0.0,
            a: rgb.a,
        };
    }

    let v = (max / 255.0 * 100.0).floor();
    let s = (delta / max * 100.0).floor();

    // divisor of 1 keeps the hue defined for achromatic input
    let divisor = if delta == 0.0 { 1.0 } else { delta };
    let h = if r == max {
        (g - b) / divisor
    } else if g == max {
        2.0 + (b - r) / divisor
    } else {
        4.0 + (r - g) / divisor
    };
    let mut h = (h * 60.0).floor();
    if h < 0.0 {
        h += 360.0;
    }

    Hsva { h, s, v, a: rgb.a }
}

pub fn hsv_to_rgb(hsv: Hsva) -> Rgba {
    let h = hsv.h / 360.0;
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;

    if s == 0.0 {
        let val = (v * 255.0).round() as u8;
        return Rgba {
            r: val,
            g: val,
            b: val,
            a: hsv.a,
        };
    }

    let h_pos = h * 6.0;
    // the sector can leave 0..=5 when blending extrapolates slightly,
    // the fallback arm covers both ends
    let sector = h_pos.floor();
    let f = h_pos - sector;
    let base1 = v * (1.0 - s);
    let base2 = v * (1.0 - s * f);
    let base3 = v * (1.0 - s * (1.0 - f));

    let (red, green, blue) = match sector as i32 {
        0 => (v, base3, base1),
        1 => (base2, v, base1),
        2 => (base1, v, base3),
        3 => (base1, base2, v),
        4 => (base3, base1, v),
        _ => (v, base1, base2),
    };

    Rgba {
        r: (red * 255.0).round() as u8,
        g: (green * 255.0).round() as u8,
        b: (blue * 255.0).round() as u8,
        a: hsv.a,
    }
}

// Blends in HSV space, each channel independently. Hue interpolates in plain
// degree space rather than along the shorter circular arc.
pub fn mix_rgb(from: Rgba, to: Rgba, amount: f64) -> Rgba {
    let a = rgb_to_hsv(from);
    let b = rgb_to_hsv(to);

    hsv_to_rgb(Hsva {
        h: amount * b.h + (1.0 - amount) * a.h,
        s: amount * b.s + (1.0 - amount) * a.s,
        v: amount * b.v + (1.0 - amount) * a.v,
        a: amount * b.a + (1.0 - amount) * a.a,
    })
}
