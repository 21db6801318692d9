//! Models are structs that represent a color in a specified color space. They
//! represent a type safe way to convert along the path
//! `Srgb -> SrgbLinear -> XyzD65 -> Lab -> Din99`.
//!
//! ```rust
//! use dinmatch::models::{Lab, Srgb};
//! let din99 = Lab::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light()  // convert to srgb-linear.
//!         .to_xyz(),          // convert to xyz-d65.
//! )
//! .to_din99();                // compress into din99.
//! ```

use crate::color::Components;

mod din99;
mod lab;
mod rgb;
mod xyz;

pub use din99::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;

/// A trait implemented by every color model, giving access to its three
/// components in a uniform way.
pub trait Model {
    /// Return the three components of the color in model order.
    fn to_components(&self) -> Components;
}
