//! sRGB to CIELAB conversion and color-difference formulas.
//!
//! Lab values use the conventional scale (L in 0..=100) against the D65
//! reference white. RGB distance works on channels normalised to 0..=1.

use serde::Serialize;

use crate::types::DistanceMetric;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn normalised(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Convert to CIELAB (D65).
    pub fn to_lab(self) -> Lab {
        let [r, g, b] = self.normalised().map(srgb_to_linear);

        let x = 0.412_390_799_265_959_5 * r + 0.357_584_339_383_878 * g + 0.180_480_788_401_834_3 * b;
        let y = 0.212_639_005_871_510_36 * r + 0.715_168_678_767_755_9 * g + 0.072_192_315_360_733_71 * b;
        let z = 0.019_330_818_715_591_85 * r + 0.119_194_779_794_625_99 * g + 0.950_532_152_249_660_6 * b;

        let fx = lab_f(x / WHITE_D65[0]);
        let fy = lab_f(y / WHITE_D65[1]);
        let fz = lab_f(z / WHITE_D65[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// A CIELAB coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

// Row sums of the sRGB matrix, so sRGB white lands exactly on a = b = 0.
const WHITE_D65: [f64; 3] = [0.950_455_927_051_671_6, 1.0, 1.089_057_750_759_878_4];

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

// ============================================================================
// DISTANCES
// ============================================================================

/// Distance between two colors under `metric`. Zero iff the inputs convert
/// to the same coordinates.
pub fn distance(metric: DistanceMetric, a: Rgb, b: Rgb) -> f64 {
    match metric {
        DistanceMetric::Rgb => distance_rgb(a, b),
        DistanceMetric::Cie76 => cie76(a.to_lab(), b.to_lab()),
        DistanceMetric::Cie94 => cie94(a.to_lab(), b.to_lab()),
        DistanceMetric::Ciede2000 => ciede2000(a.to_lab(), b.to_lab()),
    }
}

pub fn distance_rgb(a: Rgb, b: Rgb) -> f64 {
    let [r1, g1, b1] = a.normalised();
    let [r2, g2, b2] = b.normalised();
    ((r1 - r2).powi(2) + (g1 - g2).powi(2) + (b1 - b2).powi(2)).sqrt()
}

/// Euclidean distance in Lab.
pub fn cie76(p: Lab, q: Lab) -> f64 {
    ((p.l - q.l).powi(2) + (p.a - q.a).powi(2) + (p.b - q.b).powi(2)).sqrt()
}

/// CIE94 with graphic-arts weights (kL = 1, K1 = 0.045, K2 = 0.015).
///
/// Not symmetric: `p` is the reference color.
pub fn cie94(p: Lab, q: Lab) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let c1 = p.a.hypot(p.b);
    let c2 = q.a.hypot(q.b);
    let dl = p.l - q.l;
    let dc = c1 - c2;
    let da = p.a - q.a;
    let db = p.b - q.b;
    // Rounding can push this slightly negative for near-identical colors.
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + K1 * c1;
    let sh = 1.0 + K2 * c1;

    (dl * dl + (dc / sc).powi(2) + dh2 / (sh * sh)).sqrt()
}

/// CIEDE2000 with unit parametric factors.
pub fn ciede2000(p: Lab, q: Lab) -> f64 {
    let pow25_7 = 25f64.powi(7);

    let c_bar = (p.a.hypot(p.b) + q.a.hypot(q.b)) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + pow25_7)).sqrt());

    let a1 = p.a * (1.0 + g);
    let a2 = q.a * (1.0 + g);
    let c1 = a1.hypot(p.b);
    let c2 = a2.hypot(q.b);
    let h1 = hue_degrees(p.b, a1);
    let h2 = hue_degrees(q.b, a2);

    let dl = q.l - p.l;
    let dc = c2 - c1;
    let chroma_product = c1 * c2;
    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dh_big = 2.0 * chroma_product.sqrt() * (dh / 2.0).to_radians().sin();

    let l_bar = (p.l + q.l) / 2.0;
    let c_bar_p = (c1 + c2) / 2.0;
    let h_bar = if chroma_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();
    let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + pow25_7)).sqrt();
    let l_off = (l_bar - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_off / (20.0 + l_off).sqrt();
    let sc = 1.0 + 0.045 * c_bar_p;
    let sh = 1.0 + 0.015 * c_bar_p * t;
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let l_term = dl / sl;
    let c_term = dc / sc;
    let h_term = dh_big / sh;
    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term).sqrt()
}

fn hue_degrees(b: f64, a: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn white_is_l100() {
        let lab = Rgb::new(255, 255, 255).to_lab();
        assert!(close(lab.l, 100.0, 0.01), "{lab:?}");
        assert!(close(lab.a, 0.0, 0.01), "{lab:?}");
        assert!(close(lab.b, 0.0, 0.01), "{lab:?}");
    }

    #[test]
    fn black_is_origin() {
        let lab = Rgb::new(0, 0, 0).to_lab();
        assert!(close(lab.l, 0.0, 1e-9));
        assert!(close(lab.a, 0.0, 1e-9));
        assert!(close(lab.b, 0.0, 1e-9));
    }

    #[test]
    fn pure_red_lab() {
        let lab = Rgb::new(255, 0, 0).to_lab();
        assert!(close(lab.l, 53.24, 0.05), "{lab:?}");
        assert!(close(lab.a, 80.09, 0.1), "{lab:?}");
        assert!(close(lab.b, 67.20, 0.1), "{lab:?}");
    }

    #[test]
    fn ciede2000_reference_pair() {
        // Sharma, Wu & Dalal test data, pair 1.
        let p = Lab { l: 50.0, a: 2.6772, b: -79.7751 };
        let q = Lab { l: 50.0, a: 0.0, b: -82.7485 };
        assert!(close(ciede2000(p, q), 2.0425, 1e-4));
    }

    #[test]
    fn ciede2000_reference_pair_hue_wrap() {
        // Pair 7: hue mean crosses 0 degrees.
        let p = Lab { l: 50.0, a: 0.0, b: 0.0 };
        let q = Lab { l: 50.0, a: -1.0, b: 2.0 };
        assert!(close(ciede2000(p, q), 2.3669, 1e-4));
    }

    #[test]
    fn cie76_is_euclidean() {
        let p = Lab { l: 0.0, a: 3.0, b: 0.0 };
        let q = Lab { l: 0.0, a: 0.0, b: 4.0 };
        assert!(close(cie76(p, q), 5.0, 1e-12));
    }

    #[test]
    fn cie94_of_pure_lightness_difference_is_delta_l() {
        let p = Lab { l: 60.0, a: 0.0, b: 0.0 };
        let q = Lab { l: 50.0, a: 0.0, b: 0.0 };
        assert!(close(cie94(p, q), 10.0, 1e-12));
    }

    #[test]
    fn identical_colors_have_zero_distance_under_every_metric() {
        let c = Rgb::new(95, 135, 215);
        for metric in DistanceMetric::ALL {
            assert_eq!(distance(metric, c, c), 0.0, "{}", metric.label());
        }
    }

    #[test]
    fn black_white_rgb_distance_is_sqrt3() {
        let d = distance_rgb(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!(close(d, 3f64.sqrt(), 1e-12));
    }

    #[test]
    fn similar_colors_are_closer_than_dissimilar() {
        let red = Rgb::new(255, 0, 0);
        let dark_red = Rgb::new(215, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        for metric in DistanceMetric::ALL {
            assert!(
                distance(metric, red, dark_red) < distance(metric, red, blue),
                "{}",
                metric.label()
            );
        }
    }
}
