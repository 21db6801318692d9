//! Model for a color in the DIN99 color space (DIN 6176).
//!
//! DIN99 is derived from CIE-Lab by compressing lightness logarithmically,
//! rotating the a/b plane by 16 degrees and compressing the resulting chroma.
//! Euclidean distances in DIN99 follow perceived differences more closely than
//! in CIE-Lab.

use crate::{color::Component, models::lab::Lab};

dinmatch_macros::gen_model! {
    /// The model for a color specified in the DIN99 color space.
    pub struct Din99 {
        /// The compressed lightness component.
        pub lightness: Component,
        /// The compressed, rotated a component.
        pub a: Component,
        /// The compressed, rotated b component.
        pub b: Component,
    }
}

impl Din99 {
    /// cos(16°)
    #[allow(clippy::excessive_precision)]
    const COS_16: Component = 0.96126169593831886192;
    /// sin(16°)
    #[allow(clippy::excessive_precision)]
    const SIN_16: Component = 0.27563735581699918561;

    const LIGHTNESS_SCALE: Component = 105.51;
    const LIGHTNESS_FACTOR: Component = 0.0158;
    const CHROMA_FACTOR: Component = 0.045;
    const F_SCALE: Component = 0.7;
}

impl Lab {
    /// Convert this color into the DIN99 color space.
    pub fn to_din99(&self) -> Din99 {
        let lightness =
            Din99::LIGHTNESS_SCALE * (1.0 + Din99::LIGHTNESS_FACTOR * self.lightness).ln();

        let e = self.a * Din99::COS_16 + self.b * Din99::SIN_16;
        let f = Din99::F_SCALE * (-self.a * Din99::SIN_16 + self.b * Din99::COS_16);

        let g = (e * e + f * f).sqrt();

        // Achromatic colors have no direction to scale along.
        if g == 0.0 {
            return Din99::new(lightness, 0.0, 0.0);
        }

        let k = (1.0 + Din99::CHROMA_FACTOR * g).ln() / Din99::CHROMA_FACTOR;

        Din99::new(lightness, k * e / g, k * f / g)
    }
}

impl From<Lab> for Din99 {
    fn from(value: Lab) -> Self {
        value.to_din99()
    }
}
