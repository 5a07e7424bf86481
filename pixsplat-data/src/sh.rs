//! Spherical-harmonic DC color encoding.

use glam::Vec3;

/// Normalization constant of the zeroth real spherical harmonic.
pub const SH_C0: f32 = 0.28209479177387814;

/// Encode a normalized RGB triple (components in 0-1) as SH DC coefficients.
pub fn rgb_to_sh_dc(rgb: Vec3) -> Vec3 {
    (rgb - 0.5) / SH_C0
}

/// Recover normalized RGB from SH DC coefficients.
pub fn sh_dc_to_rgb(sh: Vec3) -> Vec3 {
    sh * SH_C0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_gray_encodes_to_zero() {
        let sh = rgb_to_sh_dc(Vec3::splat(0.5));
        assert_eq!(sh, Vec3::ZERO);
    }

    #[test]
    fn test_round_trip() {
        let rgb = Vec3::new(0.25, 0.5, 0.75);
        let recovered = sh_dc_to_rgb(rgb_to_sh_dc(rgb));
        assert!((recovered - rgb).length() < 1e-6);
    }

    #[test]
    fn test_round_trip_8bit_samples() {
        for sample in [0u8, 1, 127, 128, 200, 255] {
            let rgb = Vec3::splat(sample as f32 / 255.0);
            let recovered = sh_dc_to_rgb(rgb_to_sh_dc(rgb));
            assert!((recovered - rgb).length() < 1e-5);
        }
    }

    #[test]
    fn test_white_coefficient() {
        let sh = rgb_to_sh_dc(Vec3::ONE);
        assert!((sh.x - 0.5 / SH_C0).abs() < 1e-6);
    }
}
