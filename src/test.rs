/// Check for equality between two components allowing for single precision
/// rounding errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_relative_eq!(
            $actual,
            $expected,
            epsilon = 1e-3 as $crate::Component,
            max_relative = 1e-5 as $crate::Component
        );
    }};
}
