use rkn_roulette_application::ports::RandomSource;

/// Thread-local `fastrand` generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastRandom;

impl RandomSource for FastRandom {
    fn next_unit(&self) -> f64 {
        fastrand::f64()
    }
}
