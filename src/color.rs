//! Component storage shared by all color models.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Combine these components pairwise with `other` using the given
    /// function.
    pub fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(Component, Component) -> Component,
    ) -> Self {
        Self(f(self.0, other.0), f(self.1, other.1), f(self.2, other.2))
    }

    /// The sum of all three components.
    pub fn sum(&self) -> Component {
        self.0 + self.1 + self.2
    }
}

impl std::fmt::Display for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(1.0, 4.0, 9.0).map(|v| v.sqrt());
        assert_eq!(c, Components(1.0, 2.0, 3.0));
    }

    #[test]
    fn zip_with_pairs_components_in_order() {
        let left = Components(5.0, 6.0, 7.0);
        let right = Components(1.0, 2.0, 3.0);
        assert_eq!(left.zip_with(&right, |l, r| l - r), Components(4.0, 4.0, 4.0));
        assert_eq!(left.zip_with(&right, |l, r| l * r).sum(), 38.0);
    }
}
