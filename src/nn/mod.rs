//! Minimal feed-forward neurons with pluggable activation functions.
//!
//! A [`Neuron`] computes a weighted sum of its inputs plus a bias, passed
//! through an [`Activation`] function; a [`Layer`] is a fixed-size bank of
//! neurons sharing one input vector. Weights are caller-supplied and
//! training follows the single-layer perceptron delta rule, so everything
//! stays deterministic, allocation-free, and no-std compatible.
//!
//! ```
//! use sysid::nn::{Activation, Neuron};
//! use sysid::Vector;
//!
//! let mut n = Neuron::<f64, 2>::from_weights([0.5, -0.25], 0.1, Activation::Identity);
//! let y = n.forward(&Vector::from_array([2.0, 4.0]));
//! assert!((y - 0.1).abs() < 1e-12); // 0.5*2 - 0.25*4 + 0.1
//! ```

mod activation;
mod neuron;

pub use activation::Activation;
pub use neuron::{Layer, Neuron};
