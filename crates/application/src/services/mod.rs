mod registry;
pub mod snapshot_codec;

pub use registry::Registry;
