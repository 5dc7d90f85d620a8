/// Errors that can occur while fitting a bounding sphere.
///
/// Degenerate but non-empty inputs (a single point, duplicated, collinear or coplanar
/// points) are not errors: every solver handles them and returns a sphere. Numerical
/// trouble on nearly degenerate support sets is reported through
/// [`FitQuality::Approximate`](crate::bounding_volume::FitQuality::Approximate) instead.
///
/// # Example
///
/// ```
/// use spherefit3d::fitting::{BoundingSphereSolver, FitError, GeoFit};
///
/// assert_eq!(GeoFit::new().solve(&[]), Err(FitError::InvalidInput));
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FitError {
    /// The point set to enclose is empty.
    #[error("Cannot fit a bounding sphere to an empty point set.")]
    InvalidInput,
}
