use std::fmt;
use std::io;
use std::mem;

use log::{debug, trace};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayError {
    OutOfBounds { position: usize, len: usize },
}

impl fmt::Display for DynamicArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { position, len } => {
                write!(f, "position {position} is out of bounds for a dynamic array of length {len}")
            }
        }
    }
}

impl std::error::Error for DynamicArrayError {}

/// A growable array that never keeps spare capacity.
///
/// Every structural change (`add`, `remove_at`) moves the elements into a freshly
/// allocated buffer of exactly the new length, so `n` sequential insertions cost O(n²).
/// The buffer is a boxed slice, so its length *is* its capacity.
///
/// A never-populated array holds a zero-length slice, which doesn't allocate.
#[derive(Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    items: Box<[T]>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self { items: Box::default() }
    }

    /// Appends `item`, reallocating the buffer to `len + 1`.
    pub fn add(&mut self, item: T) {
        let old_len = self.items.len();

        // NOTE: `Box<[T]> -> Vec<T>` reuses the allocation, and `into_boxed_slice` trims whatever
        //       `reserve_exact` gave us beyond the request, so the new buffer is exactly `old_len + 1`.
        let mut items = Vec::from(mem::take(&mut self.items));
        items.reserve_exact(1);
        items.push(item);
        self.items = items.into_boxed_slice();

        trace!("Reallocated dynamic array buffer ({old_len} -> {})", self.items.len());
    }

    /// Removes the element at `position`, or does nothing if `position` is out of bounds.
    ///
    /// Returns the removed element, if there was one.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        match self.try_remove_at(position) {
            Ok(item) => Some(item),
            Err(e) => {
                debug!("Ignoring removal: {e}");
                None
            }
        }
    }

    /// Like `remove_at`, but reports an out of bounds `position` instead of ignoring it.
    pub fn try_remove_at(&mut self, position: usize) -> Result<T, DynamicArrayError> {
        let len = self.items.len();
        if position >= len {
            return Err(DynamicArrayError::OutOfBounds { position, len })
        }

        let mut items = Vec::from(mem::take(&mut self.items));
        // can't panic, `position < len` was checked above
        let removed = items.remove(position);
        self.items = items.into_boxed_slice();

        trace!("Reallocated dynamic array buffer ({len} -> {})", self.items.len());
        Ok(removed)
    }

    /// The amount of elements in the array.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: fmt::Display> DynamicArray<T> {
    /// Prints the array to stdout as `[e0,e1,...,en]`, followed by a newline.
    pub fn display(&self) {
        println!("{self}");
    }

    /// Writes the same line as `display` into any sink.
    pub fn write_line<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.add(item);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.items).into_iter()
    }
}
