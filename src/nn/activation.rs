use crate::traits::FloatScalar;

/// Neuron activation function.
///
/// Applied to the weighted input sum to produce the neuron output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Pass the sum through unchanged.
    #[default]
    Identity,
    /// Rectified linear unit: `max(0, x)`.
    Relu,
    /// Heaviside step: `1` for `x >= 0`, else `0`.
    Step,
    /// Logistic sigmoid: `1 / (1 + e^-x)`.
    Sigmoid,
    /// Hyperbolic tangent.
    Tanh,
}

impl Activation {
    /// Evaluate the activation function at `x`.
    #[inline]
    pub fn eval<T: FloatScalar>(self, x: T) -> T {
        match self {
            Activation::Identity => x,
            Activation::Relu => {
                if x < T::zero() {
                    T::zero()
                } else {
                    x
                }
            }
            Activation::Step => {
                if x < T::zero() {
                    T::zero()
                } else {
                    T::one()
                }
            }
            Activation::Sigmoid => T::one() / (T::one() + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}
