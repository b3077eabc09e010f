//! Perceptual color difference (CIEDE2000)
//!
//! Implements the CIE 142-2001 ΔE00 formula: lightness, chroma, and hue
//! weighting plus the blue-region rotation term. Parametric factors
//! kL = kC = kH = 1. The computation runs in f64 and is symmetric in its
//! arguments; identical inputs yield exactly 0.

use palette::Lab;

/// 25^7, shared by the G factor and the rotation term
const POW7_25: f64 = 6_103_515_625.0;

/// Compute ΔE00 between two Lab colors
///
/// Symmetric: `delta_e_2000(x, y) == delta_e_2000(y, x)`.
pub fn delta_e_2000(reference: Lab, sample: Lab) -> f32 {
    let (l1, a1, b1) = (reference.l as f64, reference.a as f64, reference.b as f64);
    let (l2, a2, b2) = (sample.l as f64, sample.a as f64, sample.b as f64);

    // Chroma correction: desaturate the a* axis for low-chroma pairs
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW7_25)).sqrt());

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_degrees(a1p, b1);
    let h2p = hue_degrees(a2p, b2);

    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;

    // Hue difference, wrapped into (-180, 180]
    let delta_h_angle = if c1p * c2p == 0.0 {
        0.0
    } else {
        let raw = h2p - h1p;
        if raw > 180.0 {
            raw - 360.0
        } else if raw < -180.0 {
            raw + 360.0
        } else {
            raw
        }
    };
    let delta_h = 2.0 * (c1p * c2p).sqrt() * (delta_h_angle / 2.0).to_radians().sin();

    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let hp_mean = if c1p * c2p == 0.0 {
        h1p + h2p
    } else {
        let sum = h1p + h2p;
        if (h1p - h2p).abs() <= 180.0 {
            sum / 2.0
        } else if sum < 360.0 {
            (sum + 360.0) / 2.0
        } else {
            (sum - 360.0) / 2.0
        }
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let l_dev_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let s_l = 1.0 + 0.015 * l_dev_sq / (20.0 + l_dev_sq).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    let cp_mean7 = cp_mean.powi(7);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + POW7_25)).sqrt();
    let delta_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let fl = delta_l / s_l;
    let fc = delta_c / s_c;
    let fh = delta_h / s_h;

    (fl * fl + fc * fc + fh * fh + r_t * fc * fh).sqrt() as f32
}

/// Hue angle in degrees, in [0, 360); 0 for the neutral axis
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let degrees = b.atan2(a).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}
