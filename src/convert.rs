//! Conversions from 24-bit RGB into the spaces used for comparing colors.
//!
//! The path is always `Rgb8 -> Srgb -> SrgbLinear -> XyzD65 -> Lab`, with
//! DIN99 computed from Lab. Every step is a pure function of its input.

use crate::{
    hex::Rgb8,
    models::{Din99, Lab},
};

impl Rgb8 {
    /// Convert this color to CIE-Lab (D65).
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_srgb().to_linear_light().to_xyz())
    }

    /// Convert this color to DIN99.
    pub fn to_din99(&self) -> Din99 {
        self.to_lab().to_din99()
    }
}

/// Convert a 24-bit RGB color to CIE-Lab.
pub fn rgb_to_lab(rgb: Rgb8) -> Lab {
    rgb.to_lab()
}

/// Convert a CIE-Lab color to DIN99.
pub fn lab_to_din99(lab: Lab) -> Din99 {
    lab.to_din99()
}

/// Convert a 24-bit RGB color to DIN99.
pub fn rgb_to_din99(rgb: Rgb8) -> Din99 {
    lab_to_din99(rgb_to_lab(rgb))
}
