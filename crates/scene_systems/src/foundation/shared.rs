//! Shared handles to engine-owned resources
//!
//! The engine is the single writer of its asset cache, texture registry and
//! configuration. Scenes receive a [`ReadHandle`], which can only hand out
//! shared borrows, so a scene can use those resources but never mutate them.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Read-only view of a value owned elsewhere
pub struct ReadHandle<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> ReadHandle<T> {
    /// Wrap a shared cell. Only the owner keeps the `Rc<RefCell<T>>` itself.
    pub(crate) fn new(inner: &Rc<RefCell<T>>) -> Self {
        Self { inner: Rc::clone(inner) }
    }

    /// Borrow the value
    ///
    /// # Panics
    /// Panics if the owner currently holds a mutable borrow. The frame loop is
    /// single threaded and the engine never writes while a scene is updating
    /// or rendering.
    pub fn read(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Whether both handles point at the same engine-owned value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether this handle points at the given cell
    pub fn points_to(&self, cell: &Rc<RefCell<T>>) -> bool {
        Rc::ptr_eq(&self.inner, cell)
    }
}

impl<T> Clone for ReadHandle<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(value) => f.debug_tuple("ReadHandle").field(&*value).finish(),
            Err(_) => f.write_str("ReadHandle(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_reads_owner_writes() {
        let owner = Rc::new(RefCell::new(1_u32));
        let handle = ReadHandle::new(&owner);

        *owner.borrow_mut() = 7;
        assert_eq!(*handle.read(), 7);
        assert!(handle.points_to(&owner));
        assert_eq!(Rc::strong_count(&owner), 2);

        drop(handle);
        assert_eq!(Rc::strong_count(&owner), 1);
    }
}
