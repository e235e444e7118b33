use std::{collections::HashMap, fmt::Debug, hash::Hash};

use derivative::Derivative;

/// Bound for vertex labels.  Labels identify vertices by equality, so two
/// equal labels always name the same vertex.
pub trait Label: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Label for T {}

/// An ordered collection of unique labels.  A label's position in the store
/// is the row/column index of its vertex in the adjacency matrix.
///
/// Positions are not stable: removing the label at position `k` moves every
/// label after it down by one.
#[derive(Derivative)]
#[derivative(Default(bound = ""), Clone(bound = "L: Clone"), Debug(bound = "L: Debug"))]
pub struct VertexStore<L> {
    labels: Vec<L>,
    #[derivative(Debug = "ignore")]
    positions: HashMap<L, usize>,
}

impl<L: Label> VertexStore<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the position of `label`, if present.
    pub fn locate(&self, label: &L) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.positions.contains_key(label)
    }

    /// Returns the label at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&L> {
        self.labels.get(index)
    }

    /// Appends `label` and returns its position, or returns `None` without
    /// changing anything if the label is already present.
    pub fn insert(&mut self, label: L) -> Option<usize> {
        if self.positions.contains_key(&label) {
            return None;
        }
        let index = self.labels.len();
        self.positions.insert(label.clone(), index);
        self.labels.push(label);
        Some(index)
    }

    /// Removes `label` and returns the position it had.  Every label after it
    /// moves down one position.
    pub fn remove(&mut self, label: &L) -> Option<usize> {
        let index = self.positions.remove(label)?;
        self.labels.remove(index);
        for (position, moved) in self.labels.iter().enumerate().skip(index) {
            if let Some(slot) = self.positions.get_mut(moved) {
                *slot = position;
            }
        }
        Some(index)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.positions.clear();
    }

    /// Iterates over labels in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.labels.iter()
    }

    pub fn as_slice(&self) -> &[L] {
        &self.labels
    }
}
