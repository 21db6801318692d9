//! Model a color in the sRGB color space.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::{xyz::XyzD65, Model},
};

pub mod encoding {
    //! Tags selecting between gamma encoded and linear light components.

    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components carry the sRGB transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

/// Threshold below which the sRGB transfer function is linear.
const LINEAR_THRESHOLD: Component = 0.04045;

dinmatch_macros::gen_model! {
    /// A color specified in the sRGB color space, with components in the
    /// range `[0, 1]`.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs <= LINEAR_THRESHOLD {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this color to CIE-XYZ relative to the D65 white point.
    pub fn to_xyz(&self) -> XyzD65 {
        // The coefficients for each output component add up to the D65
        // white point, so white maps onto it exactly.
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.412453, 0.212671, 0.019334,
            0.357580, 0.715160, 0.119193,
            0.180423, 0.072169, 0.950227,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}
