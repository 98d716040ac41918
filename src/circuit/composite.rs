//! Composite circuits: trees of sub-circuits aggregated by summation.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Circuit, CircuitHandle};
use crate::error::{OhmnetError, Result};

/// A circuit node holding a dynamic collection of child circuits.
///
/// Children are shared handles, so a sub-circuit may appear under several
/// composites at once and lives as long as its longest holder. A child may
/// itself be a composite, giving arbitrary tree depth. The equivalent
/// resistance is the sum of the children's equivalent resistances (the
/// children are connected in series at this level).
///
/// The child graph must stay acyclic; evaluation tracks the path of
/// composites it has descended through and fails with
/// [`OhmnetError::CyclicComposition`] if a composite turns up inside its own
/// subtree. Sharing a child between two branches is not a cycle and is
/// evaluated once per appearance.
#[derive(Debug, Clone, Default)]
pub struct CompositeCircuit {
    children: Vec<CircuitHandle>,
}

impl CompositeCircuit {
    /// Create an empty composite circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child circuit. Always succeeds.
    pub fn add_child(&mut self, child: CircuitHandle) {
        self.children.push(child);
    }

    /// Remove every child whose equivalent resistance equals `target`'s.
    ///
    /// Matching is by computed resistance, NOT by handle identity: an
    /// unrelated sibling that happens to evaluate to the same resistance is
    /// removed too, and all matches go in one call. Returns the number of
    /// children removed.
    pub fn remove_child(&mut self, target: &CircuitHandle) -> Result<usize> {
        let target_resistance = target.borrow().equivalent_resistance()?;

        // Evaluate first, mutate second; removing mid-iteration would skip
        // the element after each match.
        let mut matched = Vec::with_capacity(self.children.len());
        for child in &self.children {
            matched.push(child.borrow().equivalent_resistance()? == target_resistance);
        }

        let mut index = 0;
        self.children.retain(|_| {
            let keep = !matched[index];
            index += 1;
            keep
        });
        Ok(matched.iter().filter(|&&m| m).count())
    }

    /// Number of children held.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Equivalent resistance: the sum of the children's equivalent
    /// resistances, computed by recursive descent. Recomputed from scratch
    /// on every call; callers needing repeated reads should cache the value.
    pub fn equivalent_resistance(&self) -> Result<f64> {
        let mut path = Vec::new();
        self.sum_subtree(&mut path)
    }

    /// Sum the subtree under this composite, with `path` holding the
    /// pointer identity of every composite on the current descent.
    fn sum_subtree(&self, path: &mut Vec<*const RefCell<Circuit>>) -> Result<f64> {
        let mut total = 0.0;
        for child in &self.children {
            let identity = Rc::as_ptr(child);
            if path.contains(&identity) {
                return Err(OhmnetError::CyclicComposition);
            }
            let node = child.borrow();
            match &*node {
                Circuit::Composite(inner) => {
                    path.push(identity);
                    total += inner.sum_subtree(path)?;
                    path.pop();
                }
                leaf => total += leaf.equivalent_resistance()?,
            }
        }
        Ok(total)
    }
}
