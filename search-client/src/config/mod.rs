//! Configuration sources and dependency wiring.

mod dependencies;
mod env_source;
mod static_source;

pub use dependencies::Dependencies;
pub use env_source::EnvConfigSource;
pub use static_source::StaticConfigSource;
