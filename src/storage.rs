use alloc::alloc::{alloc_zeroed, dealloc, realloc, Layout};
use core::fmt;
use core::ptr::NonNull;
use core::slice;

use crate::error::StrideVecError;

/// Exclusively owned heap allocation backing a `StrideVec`.
///
/// The buffer is never empty: callers keep at least one element slot
/// allocated, which rules out zero-size layouts and dangling-pointer
/// special cases. Every byte of the buffer is initialized (fresh
/// allocations and grown tails are zeroed), so the contents are always
/// addressable as a plain byte slice.
pub(crate) struct RawStorage {
    ptr: NonNull<u8>,
    bytes: usize,
}

// SAFETY: the allocation is exclusively owned and has no interior
// mutability, so moving it across threads or sharing it for reads is sound.
unsafe impl Send for RawStorage {}
unsafe impl Sync for RawStorage {}

impl RawStorage {
    /// Allocates a zero-filled buffer of `bytes` bytes.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::AllocationFailure` if the allocator cannot
    /// satisfy the request or the size exceeds the platform limit.
    pub(crate) fn new(bytes: usize) -> Result<Self, StrideVecError> {
        debug_assert!(bytes > 0, "storage is never empty");

        let layout = Self::layout(bytes)?;
        // SAFETY: the layout has non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr =
            NonNull::new(raw).ok_or(StrideVecError::AllocationFailure { requested: bytes })?;

        Ok(Self { ptr, bytes })
    }

    fn layout(bytes: usize) -> Result<Layout, StrideVecError> {
        Layout::from_size_align(bytes, 1)
            .map_err(|_| StrideVecError::AllocationFailure { requested: bytes })
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.bytes
    }

    /// Replaces the buffer with one of `new_bytes` bytes, preserving the
    /// common prefix and zeroing any grown tail.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::AllocationFailure` if no new buffer can be
    /// obtained; the current buffer then stays live and untouched.
    pub(crate) fn resize(&mut self, new_bytes: usize) -> Result<(), StrideVecError> {
        debug_assert!(new_bytes > 0, "storage is never empty");

        if new_bytes == self.bytes {
            return Ok(());
        }

        // Validates that new_bytes fits a legal layout before reallocating.
        let _ = Self::layout(new_bytes)?;
        let old_layout = Self::layout(self.bytes)?;

        // SAFETY: ptr was allocated through this allocator with old_layout,
        // and new_bytes is a non-zero legal size. On failure realloc leaves
        // the original allocation valid.
        let raw = unsafe { realloc(self.ptr.as_ptr(), old_layout, new_bytes) };
        let ptr =
            NonNull::new(raw).ok_or(StrideVecError::AllocationFailure { requested: new_bytes })?;

        if new_bytes > self.bytes {
            // SAFETY: the tail region lies inside the new allocation.
            unsafe {
                ptr.as_ptr()
                    .add(self.bytes)
                    .write_bytes(0, new_bytes - self.bytes);
            }
        }

        self.ptr = ptr;
        self.bytes = new_bytes;
        Ok(())
    }

    #[must_use]
    pub(crate) fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr covers exactly `bytes` initialized bytes.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.bytes) }
    }

    #[must_use]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr covers exactly `bytes` initialized bytes, exclusively owned.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.bytes) }
    }
}

impl Drop for RawStorage {
    fn drop(&mut self) {
        // SAFETY: ptr was allocated with exactly this layout and is released
        // only here, once.
        unsafe {
            dealloc(
                self.ptr.as_ptr(),
                Layout::from_size_align_unchecked(self.bytes, 1),
            );
        }
    }
}

impl fmt::Debug for RawStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage").field("bytes", &self.bytes).finish()
    }
}
