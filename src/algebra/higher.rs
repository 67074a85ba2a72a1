//! Higher-kinded plumbing for the type classes.

use crate::set::OpenHashSet;

/// A trait representing a type constructor.
///
/// Rust has no built-in notion of abstracting over `Option<_>` or
/// `OpenHashSet<_>` as type-level functions; this trait emulates it with
/// a generic associated type. `Inner` names the element type the
/// constructor is currently applied to, and `WithType<B>` is the same
/// constructor applied to `B`.
///
/// [`Foldable`](super::Foldable) builds on this to speak about a
/// container's elements generically.
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}

impl<A> TypeConstructor for OpenHashSet<A> {
    type Inner = A;
    type WithType<B> = OpenHashSet<B>;
}
