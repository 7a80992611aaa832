//! Output container for search results.

/// Ordered sequence the engine fills with nodes or connections.
///
/// On success the engine clears the container, pushes elements from goal
/// back to start, then reverses. On failure it is left untouched.
pub trait GraphPath<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the path has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an element.
    fn push(&mut self, item: T);

    /// Remove all elements.
    fn clear(&mut self);

    /// Reverse the element order in place.
    fn reverse(&mut self);
}

impl<T> GraphPath<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }
}
