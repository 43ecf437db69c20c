//! # NeuroGrad core
//!
//! A scalar reverse-mode automatic-differentiation engine and a dense layer
//! built on top of it.
//!
//! Every [`Value`] is a node in a dynamically built graph. Operations record
//! their local derivatives at construction time, and [`Value::backward`]
//! propagates gradients from a root to every ancestor in topological order.

pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod nn;
pub mod utils;

pub mod error;

pub use error::NeuroGradError;
pub use nn::{Dense, Init, Module, Parameter};
pub use value::Value;
