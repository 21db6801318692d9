//! Model for a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::xyz::XyzD65,
};

dinmatch_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space, relative to
    /// the D65 white point.
    pub struct Lab {
        /// The lightness component, `[0, 100]`.
        pub lightness: Component,
        /// The green/red component.
        pub a: Component,
        /// The blue/yellow component.
        pub b: Component,
    }
}

/// Below this relative luminance the cube root is replaced by a line.
const EPSILON: Component = 0.008856;
/// Slope of the lightness line below [`EPSILON`].
const KAPPA: Component = 903.3;

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let relative = value.relative_to_white();

        let Components(f0, f1, f2) = relative.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                7.787 * v + 16.0 / 116.0
            }
        });

        let lightness = if relative.1 > EPSILON {
            116.0 * f1 - 16.0
        } else {
            KAPPA * relative.1
        };
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Srgb};

    fn lab(red: Component, green: Component, blue: Component) -> Lab {
        Lab::from(Srgb::new(red, green, blue).to_linear_light().to_xyz())
    }

    #[test]
    fn white_has_full_lightness_and_no_chroma() {
        let white = lab(1.0, 1.0, 1.0);
        assert_component_eq!(white.lightness, 100.0);
        assert_component_eq!(white.a, 0.0);
        assert_component_eq!(white.b, 0.0);
    }

    #[test]
    fn dark_colors_use_the_linear_segment() {
        let xyz = XyzD65::new(0.001, 0.001, 0.001);
        let dark = Lab::from(xyz);
        assert_component_eq!(dark.lightness, 0.9033);
    }

    #[test]
    fn chocolate() {
        // rgb(210, 105, 30)
        let c = lab(0.823529, 0.411765, 0.117647);
        assert!((c.lightness - 55.990).abs() < 0.01, "{c:?}");
        assert!((c.a - 37.054).abs() < 0.01, "{c:?}");
        assert!((c.b - 56.740).abs() < 0.01, "{c:?}");
    }
}
