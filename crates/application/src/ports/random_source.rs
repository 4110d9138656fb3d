pub trait RandomSource: Send + Sync {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&self) -> f64;
}
