//! # Ohmnet
//!
//! A resistor network composition and equivalent resistance calculator.
//!
//! This library provides:
//! - An immutable [`Resistor`](components::Resistor) value type with Ohm's-law
//!   current, voltage, and power derivations
//! - Series and parallel leaf circuits over concrete resistors
//! - Composite circuits aggregating arbitrary sub-circuit trees by summation
//! - Resistance-based circuit equality and fixed-precision display formatting
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - [`components`] - The resistor value type
//! - [`circuit`] - Circuit variants, composition, and formatting
//! - [`error`] - The unified error type
//!
//! ## Usage
//!
//! ```
//! use ohmnet::circuit::{Circuit, CompositeCircuit, ParallelCircuit, SeriesCircuit};
//! use ohmnet::components::Resistor;
//!
//! # fn main() -> ohmnet::Result<()> {
//! let r1 = Resistor::new(7.0)?;
//! let r2 = Resistor::new(3.0)?;
//!
//! let series = SeriesCircuit::new(vec![r1, r2]);
//! let parallel = ParallelCircuit::new(vec![r1, r2]);
//!
//! let mut network = CompositeCircuit::new();
//! network.add_child(Circuit::from(series).into_handle());
//! network.add_child(Circuit::from(parallel).into_handle());
//!
//! let total = network.equivalent_resistance()?;
//! assert!((total - 12.1).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluation model
//!
//! Equivalent resistance is computed on demand by recursive descent: a
//! composite sums its children's equivalent resistances, a series leaf sums
//! its resistor values, and a parallel leaf takes the reciprocal of the sum
//! of reciprocals. Nothing is cached; every call re-evaluates the subtree.
//! The child graph must be acyclic - evaluation detects a composite inside
//! its own subtree and reports it as an error rather than recursing forever.

pub mod circuit;
pub mod components;
pub mod error;

// Re-export main types for convenience
pub use circuit::{Circuit, CircuitHandle, CompositeCircuit, ParallelCircuit, SeriesCircuit};
pub use components::Resistor;
pub use error::{OhmnetError, Result};

/// Significant digits used when displaying resistance values
pub const DISPLAY_SIG_FIGS: usize = 4;
