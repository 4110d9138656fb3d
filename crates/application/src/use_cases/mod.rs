pub mod wheel;

pub use wheel::{SpinOutcome, SpinWheelUseCase};
