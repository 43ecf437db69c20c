// src/nn/mod.rs
// Layers, parameters and initialization built on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use init::Init;
pub use layers::dense::Dense;
pub use module::Module;
pub use parameter::Parameter;
