use crate::traits::FloatScalar;

/// Velocity-form discrete PID controller.
///
/// Rather than maintaining an explicit integrator, the controller computes
/// the *increment* to the previous output from the last three errors:
///
/// ```text
/// u(k) = u(k-1) + c0·e(k) + c1·e(k-1) + c2·e(k-2)
///
/// c0 = kp + ki·dt + kd/dt
/// c1 = -kp - 2·kd/dt
/// c2 = kd/dt
/// ```
///
/// The incremental form has no integrator state to wind up: clamping the
/// output inherently bounds the accumulated control action, which is why
/// this form is common in motor drives.
///
/// An optional error deadband holds the previous output when the error is
/// small, suppressing actuator chatter near the setpoint; when both the
/// setpoint and the error are exactly zero the output is forced to zero so
/// a stopped actuator stays stopped.
///
/// # Example
///
/// ```
/// use sysid::control::Pid;
///
/// // PI controller running at 100 Hz
/// let mut pid = Pid::new(1.0_f64, 0.5, 0.0, 0.01)
///     .with_output_limits(-10.0, 10.0);
///
/// let u = pid.tick(5.0, 0.0);
/// assert!(u > 0.0); // positive correction toward the setpoint
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pid<T> {
    // Configuration
    kp: T,
    ki: T,
    kd: T,
    dt: T,
    output_min: T,
    output_max: T,
    deadband: T,

    // Difference-equation coefficients, derived from the gains
    coeff: [T; 3],

    // State: e(k), e(k-1), e(k-2) and the previous output
    error: [T; 3],
    output: T,
}

impl<T: FloatScalar> Pid<T> {
    /// Create a controller with the given gains and sampling period.
    ///
    /// Output limits default to unbounded and the error deadband to zero.
    ///
    /// # Panics
    ///
    /// Panics if `dt <= 0` or `dt` is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use sysid::control::Pid;
    ///
    /// let pid = Pid::new(1.0_f64, 0.1, 0.05, 0.01);
    /// assert_eq!(pid.gains(), (1.0, 0.1, 0.05));
    /// ```
    pub fn new(kp: T, ki: T, kd: T, dt: T) -> Self {
        assert!(
            dt > T::zero() && dt.is_finite(),
            "sampling period must be positive and finite"
        );

        Self {
            kp,
            ki,
            kd,
            dt,
            output_min: T::neg_infinity(),
            output_max: T::infinity(),
            deadband: T::zero(),
            coeff: Self::coefficients(kp, ki, kd, dt),
            error: [T::zero(); 3],
            output: T::zero(),
        }
    }

    /// Set output clamping limits. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn with_output_limits(mut self, min: T, max: T) -> Self {
        assert!(min < max, "output_min must be less than output_max");
        self.output_min = min;
        self.output_max = max;
        self
    }

    /// Set the error deadband. Returns `self` for chaining.
    ///
    /// While `|error| < band` the controller holds its previous output
    /// instead of computing a new one. Zero (the default) disables the
    /// deadband.
    ///
    /// # Panics
    ///
    /// Panics if `band < 0`.
    pub fn with_error_deadband(mut self, band: T) -> Self {
        assert!(!(band < T::zero()), "error deadband must be non-negative");
        self.deadband = band;
        self
    }

    fn coefficients(kp: T, ki: T, kd: T, dt: T) -> [T; 3] {
        let two = T::one() + T::one();
        [
            kp + ki * dt + kd / dt,
            T::zero() - kp - two * (kd / dt),
            kd / dt,
        ]
    }

    /// Process one time step and return the control output.
    ///
    /// `setpoint` is the desired value; `measurement` is the current
    /// process value.
    ///
    /// # Example
    ///
    /// ```
    /// use sysid::control::Pid;
    ///
    /// let mut pid = Pid::new(2.0_f64, 0.0, 0.0, 0.01);
    /// let u = pid.tick(10.0, 3.0); // error = 7, first output = 2 * 7
    /// assert!((u - 14.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn tick(&mut self, setpoint: T, measurement: T) -> T {
        let e = setpoint - measurement;
        self.error[0] = e;

        if setpoint == T::zero() && e == T::zero() {
            // At rest: force the output to zero so the actuator stays off
            self.output = T::zero();
        } else if e.abs() < self.deadband {
            // Inside the deadband: hold the previous output
        } else {
            let mut u = self.output
                + self.coeff[0] * self.error[0]
                + self.coeff[1] * self.error[1]
                + self.coeff[2] * self.error[2];
            if u < self.output_min {
                u = self.output_min;
            }
            if u > self.output_max {
                u = self.output_max;
            }
            self.output = u;
        }

        self.error[2] = self.error[1];
        self.error[1] = self.error[0];
        self.output
    }

    /// Reset the error history and output to zero.
    ///
    /// Configuration (gains, limits, deadband) is preserved.
    pub fn reset(&mut self) {
        self.error = [T::zero(); 3];
        self.output = T::zero();
    }

    /// Return the current `(kp, ki, kd)` gains.
    pub fn gains(&self) -> (T, T, T) {
        (self.kp, self.ki, self.kd)
    }

    /// Update the gains at runtime, recomputing the difference-equation
    /// coefficients.
    ///
    /// The error history and previous output carry over, so the controller
    /// transitions without an output discontinuity.
    pub fn set_gains(&mut self, kp: T, ki: T, kd: T) {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self.coeff = Self::coefficients(kp, ki, kd, self.dt);
    }

    /// The output from the most recent tick.
    pub fn output(&self) -> T {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // Construction and configuration
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_new() {
        let pid = Pid::new(1.0, 2.0, 3.0, 0.01);
        assert_eq!(pid.gains(), (1.0, 2.0, 3.0));
        assert_eq!(pid.output(), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_zero_dt_panics() {
        Pid::new(1.0, 0.0, 0.0, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_dt_panics() {
        Pid::new(1.0, 0.0, 0.0, -0.01);
    }

    #[test]
    #[should_panic]
    fn test_invalid_limits_panics() {
        Pid::new(1.0, 0.0, 0.0, 0.01).with_output_limits(5.0, 5.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_deadband_panics() {
        Pid::new(1.0, 0.0, 0.0, 0.01).with_error_deadband(-0.1);
    }

    #[test]
    fn test_builder_chaining() {
        let pid = Pid::new(1.0, 0.5, 0.1, 0.01)
            .with_output_limits(-10.0, 10.0)
            .with_error_deadband(0.05);
        assert_eq!(pid.gains(), (1.0, 0.5, 0.1));
    }

    // ═══════════════════════════════════════════════════════════════
    // P-only
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_p_only_first_tick() {
        let mut pid = Pid::new(2.5, 0.0, 0.0, 0.01);
        let u = pid.tick(10.0, 3.0);
        assert_near(u, 2.5 * 7.0, TOL, "P-only first output");
    }

    #[test]
    fn test_p_only_holds_on_constant_error() {
        // Velocity form: with ki = kd = 0 the increment is kp*(e(k) - e(k-1)),
        // so a constant error leaves the output unchanged after the first tick
        let mut pid = Pid::new(2.5, 0.0, 0.0, 0.01);
        let u1 = pid.tick(10.0, 3.0);
        let u2 = pid.tick(10.0, 3.0);
        assert_near(u2, u1, TOL, "P-only constant error holds output");
    }

    #[test]
    fn test_p_only_negative_error() {
        let mut pid = Pid::new(3.0, 0.0, 0.0, 0.01);
        let u = pid.tick(1.0, 5.0);
        assert_near(u, 3.0 * (-4.0), TOL, "P-only negative error");
    }

    // ═══════════════════════════════════════════════════════════════
    // PI increments
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_pi_increment_per_tick() {
        let dt = 0.1;
        let mut pid = Pid::new(1.0, 2.0, 0.0, dt);

        // c0 = kp + ki*dt = 1.2, c1 = -kp = -1.0
        let u1 = pid.tick(10.0, 0.0); // u = 1.2 * 10 = 12
        assert_near(u1, 12.0, TOL, "PI first tick");

        // Constant error: each further tick adds ki*dt*e = 2.0
        let u2 = pid.tick(10.0, 0.0);
        assert_near(u2, 14.0, TOL, "PI second tick");
        let u3 = pid.tick(10.0, 0.0);
        assert_near(u3, 16.0, TOL, "PI third tick");
    }

    // ═══════════════════════════════════════════════════════════════
    // Derivative term
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_derivative_coefficients() {
        let dt = 0.01;
        let kd = 0.5;
        let mut pid = Pid::new(0.0, 0.0, kd, dt);

        // c0 = kd/dt = 50, c1 = -100, c2 = 50
        let u1 = pid.tick(1.0, 0.0); // u = 50 * 1 = 50
        assert_near(u1, 50.0, TOL, "D-only first tick");

        // Constant error: increment = 50*1 - 100*1 + 50*0 = -50
        let u2 = pid.tick(1.0, 0.0);
        assert_near(u2, 0.0, TOL, "D-only second tick");

        // Third tick: increment = 50 - 100 + 50 = 0
        let u3 = pid.tick(1.0, 0.0);
        assert_near(u3, 0.0, TOL, "D-only settles on constant error");
    }

    // ═══════════════════════════════════════════════════════════════
    // Deadband
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_deadband_holds_output() {
        let mut pid = Pid::new(2.0, 0.0, 0.0, 0.01).with_error_deadband(0.5);

        let u1 = pid.tick(10.0, 3.0); // error = 7, well outside the band
        assert_near(u1, 14.0, TOL, "outside deadband computes");

        let u2 = pid.tick(10.0, 9.9); // error = 0.1, inside the band
        assert_near(u2, u1, TOL, "inside deadband holds previous output");
    }

    #[test]
    fn test_zero_setpoint_zero_error_forces_zero() {
        let mut pid = Pid::new(2.0, 0.0, 0.0, 0.01).with_error_deadband(0.5);
        pid.tick(10.0, 3.0);
        assert!(pid.output() != 0.0);

        // Setpoint and measurement both zero: output forced off, not held
        let u = pid.tick(0.0, 0.0);
        assert_eq!(u, 0.0);
    }

    // ═══════════════════════════════════════════════════════════════
    // Clamping
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_output_clamped_upper() {
        let mut pid = Pid::new(100.0, 0.0, 0.0, 0.01).with_output_limits(-5.0, 5.0);
        let u = pid.tick(10.0, 0.0); // kp * error = 1000, clamped to 5
        assert_near(u, 5.0, TOL, "clamped to upper limit");
    }

    #[test]
    fn test_output_clamped_lower() {
        let mut pid = Pid::new(100.0, 0.0, 0.0, 0.01).with_output_limits(-5.0, 5.0);
        let u = pid.tick(0.0, 10.0);
        assert_near(u, -5.0, TOL, "clamped to lower limit");
    }

    #[test]
    fn test_clamping_bounds_accumulation() {
        // Incremental form: the next increment starts from the clamped
        // output, so saturation cannot wind up hidden state
        let dt = 0.01;
        let mut pid = Pid::new(1.0, 10.0, 0.0, dt).with_output_limits(-1.0, 1.0);

        for _ in 0..100 {
            pid.tick(10.0, 0.0);
        }
        assert_near(pid.output(), 1.0, TOL, "saturated at the limit");

        // Error reverses: output leaves the limit on the very next tick
        let u = pid.tick(10.0, 20.0);
        assert!(u < 1.0, "recovers immediately after saturation: {}", u);
    }

    // ═══════════════════════════════════════════════════════════════
    // Closed loop
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_pi_first_order_plant_convergence() {
        // First-order plant: dy/dt = -y + u, Euler-discretized at dt
        let dt = 0.01;
        let mut pid = Pid::new(2.0, 5.0, 0.0, dt);
        let setpoint = 1.0;
        let mut y = 0.0;

        for _ in 0..5_000 {
            let u = pid.tick(setpoint, y);
            y = y + dt * (-y + u);
        }

        assert_near(y, setpoint, 1e-3, "PI converges to setpoint");
    }

    // ═══════════════════════════════════════════════════════════════
    // Reset and runtime gain changes
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_reset_clears_state() {
        let mut pid = Pid::new(1.0, 1.0, 1.0, 0.01);
        pid.tick(10.0, 0.0);
        pid.tick(10.0, 1.0);
        assert!(pid.output() != 0.0);

        pid.reset();
        assert_eq!(pid.output(), 0.0);
        assert_eq!(pid.gains(), (1.0, 1.0, 1.0)); // config preserved

        // First tick after reset behaves like a fresh controller
        let u = pid.tick(10.0, 3.0);
        let mut fresh = Pid::new(1.0, 1.0, 1.0, 0.01);
        assert_near(u, fresh.tick(10.0, 3.0), TOL, "reset matches fresh");
    }

    #[test]
    fn test_set_gains_recomputes_coefficients() {
        let mut pid = Pid::new(1.0, 0.0, 0.0, 0.01);
        pid.set_gains(5.0, 0.0, 0.0);
        assert_eq!(pid.gains(), (5.0, 0.0, 0.0));

        let u = pid.tick(3.0, 0.0);
        assert_near(u, 5.0 * 3.0, TOL, "new kp takes effect");
    }

    // ═══════════════════════════════════════════════════════════════
    // f32 support
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_f32() {
        let mut pid = Pid::new(1.0_f32, 0.5, 0.1, 0.01).with_output_limits(-10.0, 10.0);
        let mut u = pid.tick(5.0_f32, 0.0);
        for _ in 0..10 {
            u = pid.tick(5.0, u);
        }
        assert!(u.is_finite(), "f32 output stays finite");
    }
}
