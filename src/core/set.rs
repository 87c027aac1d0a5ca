//! UniqueCollection - a mutable, duplicate-free set backed by a vector
//!
//! Membership is decided by the element type's own `PartialEq`, so any
//! type with an equality relation can be stored. Elements are kept in the
//! order they were appended, but that order carries no meaning for callers:
//! only membership and cardinality are part of the contract.

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Raised by [`UniqueCollection::choose_any`] when there is nothing to choose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot choose an element: the collection is empty")]
#[diagnostic(
    code(pccat::set::empty),
    help("check `size()` or `is_empty()` before calling `choose_any()`")
)]
pub struct EmptyCollectionError;

/// A mutable, unbounded set of elements of one type
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UniqueCollection<T> {
    elements: Vec<T>,
}

impl<T> UniqueCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Current cardinality
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the members without copying them
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Return some member of the collection
    ///
    /// No fairness is promised; the most recently appended element is returned.
    pub fn choose_any(&self) -> Result<&T, EmptyCollectionError> {
        self.elements.last().ok_or(EmptyCollectionError)
    }
}

impl<T: PartialEq> UniqueCollection<T> {
    /// Add `x` unless an equal element is already present
    ///
    /// Returns `true` when the collection grew.
    pub fn insert(&mut self, x: T) -> bool {
        if self.index_of(&x).is_some() {
            return false;
        }
        self.elements.push(x);
        true
    }

    /// Remove the element equal to `x`, if any
    ///
    /// The vacated slot is filled with the last element. Returns `true`
    /// when an element was removed.
    pub fn remove(&mut self, x: &T) -> bool {
        match self.index_of(x) {
            Some(i) => {
                self.elements.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, x: &T) -> bool {
        self.index_of(x).is_some()
    }

    /// Check that no two stored elements are equal
    ///
    /// Only a self-test: every mutation path already preserves this.
    pub fn invariant_holds(&self) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(i, x)| self.elements[i + 1..].iter().all(|y| y != x))
    }

    fn index_of(&self, x: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == x)
    }
}

impl<T: Clone> UniqueCollection<T> {
    /// Independent copy of the current members in insertion order
    ///
    /// An empty collection yields an empty vector.
    pub fn snapshot(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T> Default for UniqueCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Setwise equality: same cardinality and every member of one is in the other
impl<T: PartialEq> PartialEq for UniqueCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().all(|x| other.contains(x))
    }
}

impl<T: Eq> Eq for UniqueCollection<T> {}

impl<T: PartialEq> FromIterator<T> for UniqueCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for UniqueCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for UniqueCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, x) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "}}")
    }
}
