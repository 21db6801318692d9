//! dinmatch converts sRGB colors to CIE-Lab and DIN99 and finds the closest
//! match for a color in a reference table of named colors.
//!
//! ```rust
//! use dinmatch::{find_best_match, Band, ColorTable, Metric};
//!
//! let mut table = ColorTable::new();
//! table.insert("red".to_owned(), "ff0000".to_owned());
//! table.insert("blue".to_owned(), "0000ff".to_owned());
//!
//! let found = find_best_match("fe0000", &table, Metric::Lab).unwrap();
//! assert_eq!(found.label, "red");
//! assert_eq!(found.band(), Band::VerySmall);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod difference;
mod error;
mod hex;
mod matcher;
mod math;
pub mod models;

#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use convert::{lab_to_din99, rgb_to_din99, rgb_to_lab};
pub use difference::{din_difference, distance, lab_difference, Metric};
pub use error::{HexError, MatchError};
pub use hex::{parse_hex, try_parse_hex, Rgb8};
pub use matcher::{find_best_match, Band, ColorTable, Match};
