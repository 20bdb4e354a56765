/// Scalar estimator fed one observation at a time.
///
/// Implementations accept weighted values via [`add`] and expose the
/// estimate via [`estimation`], which is `None` while nothing usable has
/// been observed.
pub trait Estimator {
    /// Incorporates a new observation with the given weight.
    fn add(&mut self, value: f64, weight: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> Option<f64>;
}
