//! Pipeline steps applied to values before insertion.
//!
//! Steps run oldest-registered first. Each step maps one input to zero, one,
//! or many outputs; the outputs of one step fan through the remaining steps
//! in order. A pipeline is applied exactly once per externally supplied
//! value and never re-applied to values it produced itself.

/// The output of a single pipeline step.
pub enum Emitted<T> {
    /// Reject the input: nothing is inserted for it.
    Skip,
    /// Replace the input one-for-one.
    One(T),
    /// Expand the input into a lazy sequence of outputs, inserted in order.
    Many(Box<dyn Iterator<Item = T>>),
}

impl<T> Emitted<T> {
    /// Wrap an iterator of outputs.
    pub fn many<I>(outputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Emitted::Many(Box::new(outputs.into_iter()))
    }
}

pub(crate) type Step<T> = Box<dyn FnMut(T) -> Emitted<T>>;
