use core::mem;
use core::ops::Range;

use crate::error::StrideVecError;
use crate::storage::RawStorage;

const MIN_CAPACITY: usize = 1;

/// A growable vector of fixed-size elements, addressed by index.
///
/// Element payloads are opaque byte blocks of exactly `element_size` bytes;
/// the stride is fixed at construction and never changes. The backing
/// buffer is a single owned allocation of `capacity * element_size` bytes,
/// doubled when an append finds the vector full and halved once occupancy
/// drops to a quarter.
#[derive(Debug)]
pub struct StrideVec {
    storage: RawStorage,
    element_size: usize,
    len: usize,
}

impl StrideVec {
    /// Creates a vector for elements of `element_size` bytes, with room for
    /// one element and length zero.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::BadElementSize` if `element_size` is zero,
    /// or `StrideVecError::AllocationFailure` if the initial slot cannot be
    /// allocated.
    pub fn new(element_size: usize) -> Result<Self, StrideVecError> {
        if element_size == 0 {
            return Err(StrideVecError::BadElementSize);
        }

        let storage = RawStorage::new(element_size * MIN_CAPACITY)?;

        Ok(Self {
            storage,
            element_size,
            len: 0,
        })
    }

    /// Number of elements currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots the buffer holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len() / self.element_size
    }

    /// Byte size of one element, fixed at construction.
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn check_item(&self, item: &[u8]) -> Result<(), StrideVecError> {
        if item.len() == self.element_size {
            Ok(())
        } else {
            Err(StrideVecError::BadPointer {
                expected: self.element_size,
                actual: item.len(),
            })
        }
    }

    fn check_index(&self, index: usize) -> Result<(), StrideVecError> {
        if index < self.len {
            Ok(())
        } else {
            Err(StrideVecError::OutOfRange {
                index,
                length: self.len,
            })
        }
    }

    fn slot(&self, index: usize) -> Range<usize> {
        let start = index * self.element_size;
        start..start + self.element_size
    }

    fn byte_len(&self, count: usize) -> Result<usize, StrideVecError> {
        count
            .checked_mul(self.element_size)
            .ok_or(StrideVecError::AllocationFailure {
                requested: usize::MAX,
            })
    }

    /// Grows the buffer so that at least `count` elements fit.
    ///
    /// Does nothing if the capacity already suffices; never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::AllocationFailure` if the larger buffer
    /// cannot be obtained. The vector is unchanged on failure.
    pub fn reserve(&mut self, count: usize) -> Result<(), StrideVecError> {
        if count <= self.capacity() {
            return Ok(());
        }
        self.storage.resize(self.byte_len(count)?)
    }

    // Capacity never drops below one slot, so doubling always makes progress.
    fn grow_for_append(&mut self) -> Result<(), StrideVecError> {
        let doubled = self.byte_len(self.capacity() * 2)?;
        self.storage.resize(doubled)
    }

    /// Halves the capacity once occupancy drops to a quarter, keeping the
    /// floor of one slot. A failed shrink leaves the vector at its current
    /// capacity; the triggering removal still succeeds.
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len > capacity / 4 {
            return;
        }

        let target = (capacity / 2).max(MIN_CAPACITY);
        if target < capacity {
            let _ = self.storage.resize(target * self.element_size);
        }
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::BadPointer` if `item` is not exactly
    /// `element_size` bytes, or `StrideVecError::AllocationFailure` if the
    /// vector is full and growing fails.
    pub fn push_back(&mut self, item: &[u8]) -> Result<(), StrideVecError> {
        self.check_item(item)?;

        if self.is_full() {
            self.grow_for_append()?;
        }

        let slot = self.slot(self.len);
        self.storage.as_mut_slice()[slot].copy_from_slice(item);
        self.len += 1;

        Ok(())
    }

    /// Removes the last element; does nothing when the vector is empty.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            return;
        }

        self.len -= 1;
        self.shrink_if_sparse();
    }

    /// Inserts an element at `pos`, shifting `[pos, len)` one slot up.
    /// `pos == len` appends without shifting.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfRange` if `pos > len`,
    /// `StrideVecError::BadPointer` for a mismatched payload, or
    /// `StrideVecError::AllocationFailure` if growing fails. The vector is
    /// unchanged on any failure.
    pub fn insert(&mut self, pos: usize, item: &[u8]) -> Result<(), StrideVecError> {
        self.check_item(item)?;

        if pos > self.len {
            return Err(StrideVecError::OutOfRange {
                index: pos,
                length: self.len,
            });
        }

        if self.is_full() {
            self.grow_for_append()?;
        }

        let stride = self.element_size;
        let len = self.len;
        let buf = self.storage.as_mut_slice();
        buf.copy_within(pos * stride..len * stride, (pos + 1) * stride);
        buf[pos * stride..(pos + 1) * stride].copy_from_slice(item);
        self.len += 1;

        Ok(())
    }

    /// Removes the element at `pos`, shifting `(pos, len)` one slot down.
    /// Erasing the last element shifts nothing.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfRange` if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<(), StrideVecError> {
        self.check_index(pos)?;

        let stride = self.element_size;
        let len = self.len;
        self.storage
            .as_mut_slice()
            .copy_within((pos + 1) * stride..len * stride, pos * stride);
        self.len -= 1;
        self.shrink_if_sparse();

        Ok(())
    }

    /// Writes `value` into indices `[0, n)`, growing the vector as needed.
    ///
    /// Capacity is rounded up to the smallest power of two at or above `n`
    /// so that repeated fills amortize. Length becomes `max(len, n)`:
    /// elements already present at indices `n` and beyond are kept.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::InvalidArgument` if `n` is zero,
    /// `StrideVecError::BadPointer` for a mismatched payload, or
    /// `StrideVecError::AllocationFailure` if growing fails.
    pub fn assign_n(&mut self, n: usize, value: &[u8]) -> Result<(), StrideVecError> {
        if n == 0 {
            return Err(StrideVecError::InvalidArgument {
                reason: "fill count must be positive",
            });
        }
        self.check_item(value)?;

        let rounded =
            n.checked_next_power_of_two()
                .ok_or(StrideVecError::AllocationFailure {
                    requested: usize::MAX,
                })?;
        self.reserve(rounded)?;

        let stride = self.element_size;
        for slot in self.storage.as_mut_slice()[..n * stride].chunks_exact_mut(stride) {
            slot.copy_from_slice(value);
        }
        self.len = self.len.max(n);

        Ok(())
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfRange` if `index >= len`, or
    /// `StrideVecError::BadPointer` for a mismatched payload.
    pub fn set(&mut self, index: usize, item: &[u8]) -> Result<(), StrideVecError> {
        self.check_item(item)?;
        self.check_index(index)?;

        let slot = self.slot(index);
        self.storage.as_mut_slice()[slot].copy_from_slice(item);

        Ok(())
    }

    /// Copies the element at `index` into `out`.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfRange` if `index >= len`, or
    /// `StrideVecError::BadPointer` if `out` is not exactly `element_size`
    /// bytes.
    pub fn at(&self, index: usize, out: &mut [u8]) -> Result<(), StrideVecError> {
        self.check_item(out)?;
        self.check_index(index)?;

        out.copy_from_slice(&self.storage.as_slice()[self.slot(index)]);

        Ok(())
    }

    /// Borrows the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len {
            return None;
        }
        Some(&self.storage.as_slice()[self.slot(index)])
    }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfRange` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&[u8], StrideVecError> {
        self.check_index(index)?;
        Ok(&self.storage.as_slice()[self.slot(index)])
    }

    /// Exclusively borrows the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        Some(&mut self.storage.as_mut_slice()[slot])
    }

    /// Exchanges the complete states of two vectors in O(1).
    ///
    /// Buffer, length, capacity, and element size all swap; no element data
    /// is copied.
    pub fn swap(&mut self, other: &mut StrideVec) {
        mem::swap(self, other);
    }

    /// Removes all elements and releases extra storage, resetting capacity
    /// to the floor of one slot.
    pub fn clear(&mut self) {
        self.len = 0;
        let _ = self.storage.resize(self.element_size * MIN_CAPACITY);
    }

    /// Deep-copies the vector into an independent allocation of the same
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::AllocationFailure` if the new buffer cannot
    /// be obtained; the source is untouched either way.
    pub fn try_clone(&self) -> Result<StrideVec, StrideVecError> {
        let mut storage = RawStorage::new(self.storage.len())?;
        let live = self.len * self.element_size;
        storage.as_mut_slice()[..live].copy_from_slice(&self.storage.as_slice()[..live]);

        Ok(StrideVec {
            storage,
            element_size: self.element_size,
            len: self.len,
        })
    }
}
