// SPDX-License-Identifier: MIT
//
// CIE XYZ and CIE L*a*b* under the D65 reference white.
//
// XYZ is the hub between sRGB and Oklab on the OKLCH path. CIE Lab is not
// used for derivation math; it is exposed for inspection and tooling.

use crate::rgb::{Rgb, linear_to_srgb, srgb_to_linear};

/// D65 reference white, Y normalized to 1.
pub const D65_WHITE: Xyz = Xyz {
    x: 0.950_47,
    y: 1.0,
    z: 1.088_83,
};

// CIE constants in their exact rational form.
const EPSILON: f64 = 216.0 / 24_389.0;
const KAPPA: f64 = 24_389.0 / 27.0;

/// A CIE 1931 XYZ tristimulus value (Y = 1 for reference white).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A CIE L*a*b* color; `l` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

// ─── sRGB ↔ XYZ ──────────────────────────────────────────────────────────────

/// Gamma-encoded unit sRGB → XYZ.
#[must_use]
pub fn unit_to_xyz([r, g, b]: [f64; 3]) -> Xyz {
    let (r, g, b) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    Xyz {
        x: 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g)),
        y: 0.072_175f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g)),
        z: 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192 * g)),
    }
}

/// XYZ → gamma-encoded unit sRGB. Out-of-gamut values are not clamped.
#[must_use]
pub fn xyz_to_unit(xyz: Xyz) -> [f64; 3] {
    let Xyz { x, y, z } = xyz;
    let r = (-0.498_531_4f64).mul_add(z, 3.240_454_2f64.mul_add(x, -(1.537_138_5 * y)));
    let g = 0.041_556f64.mul_add(z, (-0.969_266f64).mul_add(x, 1.876_010_8 * y));
    let b = 1.057_225_2f64.mul_add(z, 0.055_643_4f64.mul_add(x, -(0.204_025_9 * y)));
    [linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b)]
}

#[must_use]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    unit_to_xyz(rgb.to_unit())
}

/// XYZ → 8-bit sRGB, clamped into gamut.
#[must_use]
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    Rgb::from_unit(xyz_to_unit(xyz))
}

// ─── XYZ ↔ Lab ───────────────────────────────────────────────────────────────

#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let f = |t: f64| {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    };
    let fx = f(xyz.x / D65_WHITE.x);
    let fy = f(xyz.y / D65_WHITE.y);
    let fz = f(xyz.z / D65_WHITE.z);
    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

#[must_use]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let cube_or_linear = |f: f64| {
        let f3 = f * f * f;
        if f3 > EPSILON {
            f3
        } else {
            116.0f64.mul_add(f, -16.0) / KAPPA
        }
    };
    let yr = if lab.l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lab.l / KAPPA
    };

    Xyz {
        x: cube_or_linear(fx) * D65_WHITE.x,
        y: yr * D65_WHITE.y,
        z: cube_or_linear(fz) * D65_WHITE.z,
    }
}

/// Convenience: 8-bit sRGB → CIE Lab.
#[must_use]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
