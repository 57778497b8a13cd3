//! RGB colors.

//
// Types
//

/// An sRGB color with three channels of type `Ch`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Color3<Ch = u8>(pub [Ch; 3]);

/// An RGB color with `f32` components in 0.0..=1.0.
pub type Color3f = Color3<f32>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color3<Ch> {
    Color3([r, g, b])
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns the color encoded in the `0x00_RR_GG_BB` word `rgb`.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self([r, g, b])
    }
}

impl Color3f {
    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color3(self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_round_trip() {
        let c = rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgb_u32(), 0x00_12_34_56);
        assert_eq!(Color3::from_rgb_u32(0x00_12_34_56), c);
    }

    #[test]
    fn f32_to_u8() {
        assert_eq!(rgb(0.0, 0.5, 1.0).to_color3(), rgb(0, 127, 255));
        // Out-of-range components are clamped
        assert_eq!(rgb(-0.5, 1.5, 0.25).to_color3(), rgb(0, 255, 63));
    }
}
