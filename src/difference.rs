//! Color difference as the Euclidean distance between two colors in the same
//! model.

use std::fmt;

use crate::{color::Component, hex::parse_hex, models::Model};

/// Euclidean distance between two colors of the same model.
///
/// The result is exactly symmetric: `distance(x, y) == distance(y, x)`.
pub fn distance<M: Model>(x: &M, y: &M) -> Component {
    x.to_components()
        .zip_with(&y.to_components(), |l, r| (l - r) * (l - r))
        .sum()
        .sqrt()
}

/// Parse both hex colors leniently and return their distance in CIE-Lab.
pub fn lab_difference(x: &str, y: &str) -> Component {
    distance(&parse_hex(x).to_lab(), &parse_hex(y).to_lab())
}

/// Parse both hex colors leniently and return their distance in DIN99.
pub fn din_difference(x: &str, y: &str) -> Component {
    distance(&parse_hex(x).to_din99(), &parse_hex(y).to_din99())
}

/// The color space a difference is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Euclidean distance in CIE-Lab (ΔE*ab, CIE76).
    Lab,
    /// Euclidean distance in DIN99.
    Din99,
}

impl Metric {
    /// All metrics, in the order they are usually reported.
    pub const ALL: [Metric; 2] = [Metric::Lab, Metric::Din99];

    /// Measure the difference between two hex colors with this metric.
    pub fn difference(&self, x: &str, y: &str) -> Component {
        match self {
            Metric::Lab => lab_difference(x, y),
            Metric::Din99 => din_difference(x, y),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Lab => "LAB",
            Metric::Din99 => "DIN",
        })
    }
}
