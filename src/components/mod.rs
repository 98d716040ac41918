//! Component models for resistor networks.
//!
//! The only component in an ideal resistive DC network is the [`Resistor`]
//! itself; circuits compose resistors, never other component kinds.

mod resistor;

pub use resistor::Resistor;
