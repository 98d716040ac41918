//! The resistor value type and its Ohm's-law derivations.

use crate::error::{OhmnetError, Result};

/// An ideal resistor with a fixed resistance in ohms.
///
/// Resistors are immutable value types: once constructed they are copied
/// freely and never mutated. The resistance is guaranteed strictly positive
/// and finite, so the derived current and parallel-reciprocal formulas can
/// never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    ///
    /// Returns [`OhmnetError::InvalidValue`] if `resistance` is zero,
    /// negative, NaN, or infinite.
    pub fn new(resistance: f64) -> Result<Self> {
        if !resistance.is_finite() || resistance <= 0.0 {
            return Err(OhmnetError::invalid_value(resistance));
        }
        Ok(Self { resistance })
    }

    /// The resistance in ohms.
    pub fn value(&self) -> f64 {
        self.resistance
    }

    /// Current drawn at the given voltage: I = V / R.
    pub fn current(&self, voltage: f64) -> f64 {
        voltage / self.resistance
    }

    /// Voltage drop at the given current: V = I * R.
    pub fn voltage(&self, current: f64) -> f64 {
        current * self.resistance
    }

    /// Power dissipated at the given current: P = V * I = I^2 * R.
    pub fn power(&self, current: f64) -> f64 {
        self.voltage(current) * current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ohms_law_identities() {
        let r = Resistor::new(1000.0).unwrap();
        assert_relative_eq!(r.current(5.0), 0.005);
        assert_relative_eq!(r.voltage(0.005), 5.0);
        assert_relative_eq!(r.power(0.005), 0.025);
    }

    #[test]
    fn test_voltage_is_current_times_resistance() {
        for resistance in [0.5, 7.0, 3.0, 4700.0] {
            let r = Resistor::new(resistance).unwrap();
            assert_relative_eq!(r.voltage(2.0), 2.0 * resistance);
            assert_relative_eq!(r.current(2.0), 2.0 / resistance);
        }
    }

    #[test]
    fn test_value_accessor() {
        let r = Resistor::new(47.0).unwrap();
        assert_eq!(r.value(), 47.0);
    }

    #[test]
    fn test_rejects_nonpositive_resistance() {
        assert!(matches!(
            Resistor::new(0.0),
            Err(OhmnetError::InvalidValue { value }) if value == 0.0
        ));
        assert!(Resistor::new(-10.0).is_err());
    }

    #[test]
    fn test_rejects_nonfinite_resistance() {
        assert!(Resistor::new(f64::NAN).is_err());
        assert!(Resistor::new(f64::INFINITY).is_err());
        assert!(Resistor::new(f64::NEG_INFINITY).is_err());
    }
}
