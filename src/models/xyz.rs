//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white used to normalize CIE-XYZ components.
pub trait WhitePoint {
    /// The CIE-XYZ components of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(0.950456, 1.0, 1.088754);
}

dinmatch_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Divide each component by the matching component of the white point.
    pub fn relative_to_white(&self) -> Components {
        Components(
            self.x / W::WHITE_POINT.0,
            self.y / W::WHITE_POINT.1,
            self.z / W::WHITE_POINT.2,
        )
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Model};

    #[test]
    fn white_point_is_unit_after_normalizing() {
        let white = XyzD65::from(D65::WHITE_POINT);
        let Components(x, y, z) = white.relative_to_white();
        assert_component_eq!(x, 1.0);
        assert_component_eq!(y, 1.0);
        assert_component_eq!(z, 1.0);
    }

    #[test]
    fn components_keep_field_order() {
        let xyz = XyzD65::new(0.1, 0.2, 0.3);
        assert_eq!(xyz.to_components(), Components(0.1, 0.2, 0.3));
    }
}
