//! Closed-form solution of the damped spring-mass system.
//!
//! The simulated mass point hangs from a damped spring and starts at rest at
//! the spring's rest position. Its vertical displacement is
//!
//! ```text
//! y(t) = A_s e^(-d t) sin(w t) + A_c e^(-d t) cos(w t) - y_eq
//! ```
//!
//! where `y_eq` is the static equilibrium offset caused by gravity. Since the
//! mass starts at `y = 0`, `A_c == y_eq`.

/// Sampling interval of the solver output files, in seconds.
pub const STEP: f64 = 0.003;

/// Amplitude `A_s` of the sine term.
pub const AMPLITUDE_SIN: f64 = 0.000327029;

/// Amplitude `A_c` of the cosine term.
pub const AMPLITUDE_COS: f64 = 0.024545;

/// Exponential decay rate `d` of the envelope (1/s).
pub const DECAY_RATE: f64 = 0.266667;

/// Damped angular frequency `w` (rad/s).
pub const ANGULAR_FREQUENCY: f64 = 19.9982;

/// Equilibrium offset `y_eq`.
pub const OFFSET: f64 = 0.024545;

/// Displacement of the mass point at time `t`.
pub fn displacement(t: f64) -> f64 {
    let envelope = (-DECAY_RATE * t).exp();
    let phase = ANGULAR_FREQUENCY * t;
    AMPLITUDE_SIN * envelope * phase.sin() + AMPLITUDE_COS * envelope * phase.cos() - OFFSET
}

/// Uniform time axis `t_i = i * step` with `len` samples.
pub fn time_axis(len: usize, step: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 * step).collect()
}

/// Evaluate [`displacement`] at every time stamp.
pub fn evaluate(times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| displacement(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
            (a - b).abs()
        );
    }

    #[test]
    fn displacement_at_rest_is_zero() {
        assert_eq!(displacement(0.0), 0.0);
    }

    #[test]
    fn displacement_settles_at_offset() {
        // envelope is ~e^-26.7 after 100 s
        approx_eq(displacement(100.0), -OFFSET, 1e-12);
    }

    #[test]
    fn displacement_matches_formula() {
        let t: f64 = 0.75;
        let expected = 0.000327029 * (-0.266667 * t).exp() * (19.9982 * t).sin()
            + 0.024545 * (-0.266667 * t).exp() * (19.9982 * t).cos()
            - 0.024545;
        approx_eq(displacement(t), expected, 1e-15);
    }

    #[test]
    fn time_axis_uses_step() {
        let axis = time_axis(1000, STEP);
        assert_eq!(axis.len(), 1000);
        for (i, &t) in axis.iter().enumerate() {
            assert_eq!(t, i as f64 * 0.003);
        }
        assert!(axis.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn time_axis_empty() {
        assert!(time_axis(0, STEP).is_empty());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let axis = time_axis(500, STEP);
        let a = evaluate(&axis);
        let b = evaluate(&axis);
        assert_eq!(a.len(), axis.len());
        assert_eq!(a, b);
        assert_eq!(a[0], 0.0);
    }

    #[test]
    fn evaluate_stays_below_rest_position() {
        // the mass only falls from its starting point, the sine term is too
        // small to lift it above y = 0
        let axis = time_axis(2000, STEP);
        assert!(evaluate(&axis).iter().skip(1).all(|&y| y < 1e-4));
    }
}
