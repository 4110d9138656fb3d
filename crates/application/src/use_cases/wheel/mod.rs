mod spin_wheel;

pub use spin_wheel::{SpinOutcome, SpinWheelUseCase};
