use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;

use super::Activation;

/// A single feed-forward neuron with `I` inputs.
///
/// Computes `activation(w · x + b)` and remembers the result; training
/// applies the perceptron delta rule against that remembered output, so a
/// training step is always preceded by a [`forward`](Self::forward) pass
/// on the same inputs.
///
/// Weights are supplied by the caller; a common starting point is small
/// values symmetric around zero.
///
/// # Example
///
/// ```
/// use sysid::nn::{Activation, Neuron};
/// use sysid::Vector;
///
/// let mut n = Neuron::from_weights([1.0, -1.0], 0.5, Activation::Relu);
/// assert_eq!(n.forward(&Vector::from_array([2.0, 1.0])), 1.5);
/// assert_eq!(n.forward(&Vector::from_array([0.0, 2.0])), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Neuron<T: FloatScalar, const I: usize> {
    weights: Vector<T, I>,
    bias: T,
    activation: Activation,
    output: T,
}

impl<T: FloatScalar, const I: usize> Neuron<T, I> {
    /// Create a neuron from explicit weights and bias.
    pub fn from_weights(weights: [T; I], bias: T, activation: Activation) -> Self {
        Self {
            weights: Vector::from_array(weights),
            bias,
            activation,
            output: T::zero(),
        }
    }

    /// Compute and remember the neuron output for `inputs`.
    pub fn forward(&mut self, inputs: &Vector<T, I>) -> T {
        let sum = self.weights.dot(inputs) + self.bias;
        self.output = self.activation.eval(sum);
        self.output
    }

    /// One perceptron delta-rule step against the remembered output:
    ///
    /// ```text
    /// w_i ← w_i + η·(target − output)·x_i
    /// b   ← b + η·(target − output)
    /// ```
    ///
    /// `rate` is clamped to `[0, 1]`. The inputs must be the ones passed
    /// to the preceding [`forward`](Self::forward) call.
    pub fn train(&mut self, inputs: &Vector<T, I>, target: T, rate: T) {
        let rate = if rate > T::one() {
            T::one()
        } else if rate < T::zero() {
            T::zero()
        } else {
            rate
        };

        let delta = rate * (target - self.output);
        for i in 0..I {
            self.weights[i] = self.weights[i] + delta * inputs[i];
        }
        self.bias = self.bias + delta;
    }

    /// The output from the most recent forward pass.
    #[inline]
    pub fn output(&self) -> T {
        self.output
    }

    /// Current weight vector.
    #[inline]
    pub fn weights(&self) -> &Vector<T, I> {
        &self.weights
    }

    /// Current bias.
    #[inline]
    pub fn bias(&self) -> T {
        self.bias
    }
}

/// A bank of `N` neurons sharing the same `I`-element input vector.
#[derive(Debug, Clone, Copy)]
pub struct Layer<T: FloatScalar, const I: usize, const N: usize> {
    neurons: [Neuron<T, I>; N],
}

impl<T: FloatScalar, const I: usize, const N: usize> Layer<T, I, N> {
    /// Create a layer from per-neuron weight rows and biases, all using
    /// the same activation function.
    pub fn from_weights(weights: [[T; I]; N], biases: [T; N], activation: Activation) -> Self {
        let mut i = 0;
        Self {
            neurons: weights.map(|w| {
                let n = Neuron::from_weights(w, biases[i], activation);
                i += 1;
                n
            }),
        }
    }

    /// Forward-propagate `inputs` through every neuron.
    pub fn forward(&mut self, inputs: &Vector<T, I>) -> Vector<T, N> {
        let mut out = Vector::zeros();
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            out[i] = neuron.forward(inputs);
        }
        out
    }

    /// One delta-rule training step for every neuron against its target.
    pub fn train(&mut self, inputs: &Vector<T, I>, targets: &Vector<T, N>, rate: T) {
        for (i, neuron) in self.neurons.iter_mut().enumerate() {
            neuron.train(inputs, targets[i], rate);
        }
    }

    /// The neurons of the layer.
    #[inline]
    pub fn neurons(&self) -> &[Neuron<T, I>; N] {
        &self.neurons
    }
}
