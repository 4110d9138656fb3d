//! RKN Roulette Infrastructure Layer
pub mod export;
pub mod notifications;
pub mod repositories;
pub mod service_catalog;
pub mod system;

mod atomic_file;
