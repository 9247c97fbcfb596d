//! `f32` buffers placed at a chosen distance from a 64-byte boundary.
//!
//! The kernel must produce identical results whatever the alignment of its
//! operands and output. `Vec<f32>` gives no control over that, so this buffer
//! allocates a 64-byte-aligned region and exposes a slice starting `offset`
//! elements into it. Offsets 1, 2 and 3 put the slice 4, 8 and 12 bytes past
//! a 16-byte register boundary.
//!
//! # Example
//!
//! ```
//! use lanewise_core::{AlignedBuf, VECTOR_BYTES};
//!
//! let buf = AlignedBuf::from_slice(&[1.0, 2.0, 3.0], 1);
//! assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0]);
//! assert_eq!(buf.misalignment(), 4 % VECTOR_BYTES);
//! ```

use std::alloc;
use std::ptr::NonNull;

use crate::simd::VECTOR_BYTES;

/// Alignment of the underlying allocation (cache line).
pub const ALIGNMENT: usize = 64;

/// Heap `f32` buffer whose visible slice starts `offset` elements past a
/// 64-byte boundary.
///
/// Owns its allocation. `!Send` and `!Sync` through the raw pointer; it is a
/// test and benchmark fixture, not a general container.
pub struct AlignedBuf {
    ptr: NonNull<f32>,
    offset: usize,
    len: usize,
    layout: alloc::Layout,
}

impl AlignedBuf {
    /// Zero-filled buffer of `len` elements at element `offset`.
    pub fn zeroed(len: usize, offset: usize) -> Self {
        let total = (len + offset).max(1);
        let layout = alloc::Layout::array::<f32>(total)
            .and_then(|l| l.align_to(ALIGNMENT))
            .expect("Invalid layout");

        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw as *mut f32) else {
            alloc::handle_alloc_error(layout);
        };

        Self {
            ptr,
            offset,
            len,
            layout,
        }
    }

    /// Copy `data` into a new buffer at element `offset`.
    pub fn from_slice(data: &[f32], offset: usize) -> Self {
        let mut buf = Self::zeroed(data.len(), offset);
        buf.as_mut_slice().copy_from_slice(data);
        buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element offset from the 64-byte boundary.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte distance of the slice start past the previous register boundary.
    #[inline]
    pub fn misalignment(&self) -> usize {
        self.as_slice().as_ptr() as usize % VECTOR_BYTES
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        // SAFETY: the allocation holds at least offset + len zero-initialised
        // f32 values and lives as long as self.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr().add(self.offset), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        // SAFETY: as above, and &mut self gives exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr().add(self.offset), self.len) }
    }
}

impl Drop for AlignedBuf {
    fn drop(&mut self) {
        unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
    }
}

impl std::fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}
