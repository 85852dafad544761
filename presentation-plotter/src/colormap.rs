/// Polynomial sRGB approximation of the matplotlib inferno colormap.
///
/// Degree-6 polynomials in nested Horner form, fitted to the matplotlib
/// colormap data (both CC0).
const C0: [f32; 3] = [0.000_218_940_37, 0.001_651_004_6, -0.019_480_898];
const C1: [f32; 3] = [0.106_513_42, 0.563_956_44, 3.932_712_4];
const C2: [f32; 3] = [11.602_493, -3.972_854, -15.942_394];
const C3: [f32; 3] = [-41.703_995, 17.436_399, 44.354_145];
const C4: [f32; 3] = [77.162_94, -33.402_36, -81.807_31];
const C5: [f32; 3] = [-71.319_43, 32.626_064, 73.209_52];
const C6: [f32; 3] = [25.131_126, -12.242_669, -23.070_325];

/// sRGB inferno sample for a normalized `t`.
pub fn inferno(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let c = C0[i]
            + t * (C1[i] + t * (C2[i] + t * (C3[i] + t * (C4[i] + t * (C5[i] + t * C6[i])))));
        *channel = (c.clamp(0.0, 1.0) * 255.0) as u8;
    }
    rgb
}

/// Reversed inferno, matching matplotlib's `inferno_r`.
pub fn inferno_reversed(t: f32) -> [u8; 3] {
    inferno(1.0 - t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_run_dark_to_bright() {
        let dark = inferno(0.0);
        let bright = inferno(1.0);
        assert!(dark.iter().map(|&c| u32::from(c)).sum::<u32>() < 40);
        assert!(bright[0] > 200 && bright[1] > 150);
    }

    #[test]
    fn reversed_mirrors_the_forward_map() {
        for t in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(inferno_reversed(t), inferno(1.0 - t));
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(inferno(-1.0), inferno(0.0));
        assert_eq!(inferno(2.0), inferno(1.0));
    }
}
