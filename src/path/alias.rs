//! Typed alias handles.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// A named indirection resolved through a context value of type `C`.
///
/// The handle only carries the identifier; the context-to-path function is
/// registered on the router with [`Router::add_alias`](crate::Router::add_alias).
///
/// ```
/// use typed_router::Alias;
///
/// const PRODUCT: Alias<u64> = Alias::new("product");
/// assert_eq!(PRODUCT.identifier(), "product");
/// ```
pub struct Alias<C> {
    identifier: Cow<'static, str>,
    _context: PhantomData<fn(C)>,
}

impl<C> Alias<C> {
    /// Create an alias from a static identifier.
    pub const fn new(identifier: &'static str) -> Self {
        Self {
            identifier: Cow::Borrowed(identifier),
            _context: PhantomData,
        }
    }

    /// Create an alias from a runtime identifier.
    pub fn named(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Cow::Owned(identifier.into()),
            _context: PhantomData,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

// Manual impls: the phantom context must not require `C: Clone` etc.
impl<C> Clone for Alias<C> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            _context: PhantomData,
        }
    }
}

impl<C> PartialEq for Alias<C> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<C> Eq for Alias<C> {}

impl<C> fmt::Debug for Alias<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alias")
            .field("identifier", &self.identifier)
            .field("context", &std::any::type_name::<C>())
            .finish()
    }
}

impl<C> fmt::Display for Alias<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
