//! Appending one element to the end of a tuple.
//!
//! Multi-variant visitation binds one reference per visited variant and grows
//! the argument tuple as it goes.

/// A tuple that can be extended by one trailing element.
pub trait Append<T> {
    /// The extended tuple.
    type Output;

    /// Appends `value`.
    fn append(self, value: T) -> Self::Output;
}

impl<T> Append<T> for () {
    type Output = (T,);

    fn append(self, value: T) -> (T,) {
        (value,)
    }
}

impl<A, T> Append<T> for (A,) {
    type Output = (A, T);

    fn append(self, value: T) -> (A, T) {
        (self.0, value)
    }
}

impl<A, B, T> Append<T> for (A, B) {
    type Output = (A, B, T);

    fn append(self, value: T) -> (A, B, T) {
        (self.0, self.1, value)
    }
}

impl<A, B, C, T> Append<T> for (A, B, C) {
    type Output = (A, B, C, T);

    fn append(self, value: T) -> (A, B, C, T) {
        (self.0, self.1, self.2, value)
    }
}
