//! Leaf circuits: series and parallel combinations of concrete resistors.

use crate::components::Resistor;
use crate::error::{OhmnetError, Result};

/// An ordered collection of resistors, shared by the two leaf strategies.
///
/// Resistors are owned by value and kept in insertion order. The series and
/// parallel sums are commutative so the order never changes a result, but it
/// is preserved for any future order-sensitive computation.
#[derive(Debug, Clone, Default)]
pub struct LeafCircuit {
    resistors: Vec<Resistor>,
}

impl LeafCircuit {
    /// Create a leaf circuit over an initial set of resistors.
    pub fn new(resistors: Vec<Resistor>) -> Self {
        Self { resistors }
    }

    /// Append a resistor. Never fails.
    pub fn add_resistor(&mut self, resistor: Resistor) {
        self.resistors.push(resistor);
    }

    /// The held resistors, in insertion order.
    pub fn resistors(&self) -> &[Resistor] {
        &self.resistors
    }

    /// Number of resistors held.
    pub fn len(&self) -> usize {
        self.resistors.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.resistors.is_empty()
    }
}

/// Resistors connected end-to-end; resistances add.
#[derive(Debug, Clone, Default)]
pub struct SeriesCircuit {
    leaf: LeafCircuit,
}

impl SeriesCircuit {
    /// Create a series circuit over an initial set of resistors.
    pub fn new(resistors: Vec<Resistor>) -> Self {
        Self {
            leaf: LeafCircuit::new(resistors),
        }
    }

    /// Append a resistor to the chain.
    pub fn add_resistor(&mut self, resistor: Resistor) {
        self.leaf.add_resistor(resistor);
    }

    /// The held resistors, in insertion order.
    pub fn resistors(&self) -> &[Resistor] {
        self.leaf.resistors()
    }

    /// Equivalent resistance: the sum of all resistor values.
    ///
    /// An empty series circuit evaluates to 0 ohms - a chain with no
    /// resistors is a plain wire.
    pub fn equivalent_resistance(&self) -> f64 {
        self.leaf.resistors().iter().map(|r| r.value()).sum()
    }
}

/// Resistors connected across the same two nodes; reciprocals add.
#[derive(Debug, Clone, Default)]
pub struct ParallelCircuit {
    leaf: LeafCircuit,
}

impl ParallelCircuit {
    /// Create a parallel circuit over an initial set of resistors.
    pub fn new(resistors: Vec<Resistor>) -> Self {
        Self {
            leaf: LeafCircuit::new(resistors),
        }
    }

    /// Append a resistor across the bank.
    pub fn add_resistor(&mut self, resistor: Resistor) {
        self.leaf.add_resistor(resistor);
    }

    /// The held resistors, in insertion order.
    pub fn resistors(&self) -> &[Resistor] {
        self.leaf.resistors()
    }

    /// Equivalent resistance: the reciprocal of the sum of reciprocals.
    ///
    /// Returns [`OhmnetError::DegenerateCircuit`] for an empty bank - an
    /// open circuit has no finite equivalent resistance, and a silent
    /// division by zero would poison every composite sum above it.
    pub fn equivalent_resistance(&self) -> Result<f64> {
        if self.leaf.is_empty() {
            return Err(OhmnetError::degenerate(
                "parallel circuit holds no resistors (open circuit)",
            ));
        }
        let reciprocal_sum: f64 = self.leaf.resistors().iter().map(|r| 1.0 / r.value()).sum();
        Ok(1.0 / reciprocal_sum)
    }
}
