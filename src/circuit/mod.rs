//! Circuit composition model.
//!
//! This module provides the polymorphic [`Circuit`] node over the three
//! circuit variants, the shared [`CircuitHandle`] used for composite
//! membership, and the resistance-based equality and display operations
//! common to every variant.

mod composite;
mod format;
mod leaf;

pub use composite::CompositeCircuit;
pub use format::format_ohms;
pub use leaf::{LeafCircuit, ParallelCircuit, SeriesCircuit};

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

/// A shared, mutable handle to a circuit node.
///
/// Composites hold children through handles, so a sub-circuit is owned by
/// whoever keeps a handle the longest and may sit under several composites
/// at once. Interior mutability lets a leaf gain resistors (or a composite
/// gain children) after it has been placed in a tree.
pub type CircuitHandle = Rc<RefCell<Circuit>>;

/// A circuit node: anything with an equivalent resistance.
///
/// The closed set of variants covers the two leaf strategies over concrete
/// resistors and the composite aggregation node.
#[derive(Debug, Clone)]
pub enum Circuit {
    /// Resistors connected end-to-end
    Series(SeriesCircuit),
    /// Resistors connected across the same two nodes
    Parallel(ParallelCircuit),
    /// Sub-circuits aggregated by summation
    Composite(CompositeCircuit),
}

impl Circuit {
    /// The equivalent resistance of this node, in ohms.
    pub fn equivalent_resistance(&self) -> Result<f64> {
        match self {
            Circuit::Series(c) => Ok(c.equivalent_resistance()),
            Circuit::Parallel(c) => c.equivalent_resistance(),
            Circuit::Composite(c) => c.equivalent_resistance(),
        }
    }

    /// Resistance-based equality: two circuits are equal exactly when their
    /// computed equivalent resistances are equal.
    ///
    /// This is deliberately NOT identity or structural equality - a series
    /// chain and a parallel bank that happen to evaluate to the same
    /// resistance compare equal. [`CompositeCircuit::remove_child`] matches
    /// children by this rule.
    pub fn resistance_equal(&self, other: &Circuit) -> Result<bool> {
        Ok(self.equivalent_resistance()? == other.equivalent_resistance()?)
    }

    /// The equivalent resistance rendered at display precision.
    pub fn format_resistance(&self) -> Result<String> {
        Ok(format_ohms(self.equivalent_resistance()?))
    }

    /// Wrap this circuit in a shared handle for composite membership.
    pub fn into_handle(self) -> CircuitHandle {
        Rc::new(RefCell::new(self))
    }
}

impl From<SeriesCircuit> for Circuit {
    fn from(circuit: SeriesCircuit) -> Self {
        Circuit::Series(circuit)
    }
}

impl From<ParallelCircuit> for Circuit {
    fn from(circuit: ParallelCircuit) -> Self {
        Circuit::Parallel(circuit)
    }
}

impl From<CompositeCircuit> for Circuit {
    fn from(circuit: CompositeCircuit) -> Self {
        Circuit::Composite(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Resistor;

    fn resistors(values: &[f64]) -> Vec<Resistor> {
        values.iter().map(|&v| Resistor::new(v).unwrap()).collect()
    }

    #[test]
    fn test_equality_ignores_shape() {
        // 2 + 3 in series equals 10 || 10 in parallel: both 5 ohms.
        let chain = Circuit::from(SeriesCircuit::new(resistors(&[2.0, 3.0])));
        let bank = Circuit::from(ParallelCircuit::new(resistors(&[10.0, 10.0])));
        assert!(chain.resistance_equal(&bank).unwrap());
    }

    #[test]
    fn test_equality_distinguishes_values() {
        let five = Circuit::from(SeriesCircuit::new(resistors(&[5.0])));
        let six = Circuit::from(SeriesCircuit::new(resistors(&[6.0])));
        assert!(!five.resistance_equal(&six).unwrap());
    }

    #[test]
    fn test_composite_equals_equivalent_leaf() {
        let mut composite = CompositeCircuit::new();
        composite.add_child(Circuit::from(SeriesCircuit::new(resistors(&[4.0]))).into_handle());
        composite.add_child(Circuit::from(SeriesCircuit::new(resistors(&[1.0]))).into_handle());
        let composite = Circuit::from(composite);

        let leaf = Circuit::from(SeriesCircuit::new(resistors(&[5.0])));
        assert!(composite.resistance_equal(&leaf).unwrap());
    }

    #[test]
    fn test_format_resistance_display_precision() {
        let bank = Circuit::from(ParallelCircuit::new(resistors(&[7.0, 3.0])));
        assert_eq!(bank.format_resistance().unwrap(), "2.1");
    }
}
