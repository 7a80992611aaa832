//! Default path container.

use std::ops::Index;

use crate::traits::GraphPath;

/// `Vec`-backed path of nodes or connections.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultGraphPath<T> {
    items: Vec<T>,
}

impl<T> Default for DefaultGraphPath<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DefaultGraphPath<T> {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty path with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate elements in path order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the path, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> GraphPath<T> for DefaultGraphPath<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn reverse(&mut self) {
        self.items.reverse();
    }
}

impl<T> Index<usize> for DefaultGraphPath<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a DefaultGraphPath<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for DefaultGraphPath<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
