// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Buffer ownership across the ABI boundary.
//!
//! A byte region backing a native tensor takes exactly one of two paths,
//! recorded as a [`TensorData`] tag at construction time:
//!
//! 1. **Copied** — the library receives an owned `Vec<u8>` and manages the
//!    copy with its own allocator.
//! 2. **Adopted** — the library receives a raw heap allocation made by the
//!    marshaling layer together with a deallocator callback. The callback is
//!    bound to exactly that allocation and runs exactly once, when the
//!    library destroys the tensor. The layer must not free the bytes itself.

/// A deallocation callback bound to one adopted allocation.
///
/// Invoked with the exact pointer and byte length originally supplied.
pub type Deallocator = Box<dyn FnOnce(*mut u8, usize)>;

/// The two ownership paths for a tensor's backing bytes.
pub enum TensorData {
    /// Bytes copied into library-managed memory.
    Copied(Vec<u8>),
    /// A heap allocation adopted by the library, freed through its
    /// deallocator callback.
    Adopted(AdoptedBuffer),
}

impl TensorData {
    /// Returns the backing bytes, whichever path owns them.
    pub fn bytes(&self) -> &[u8] {
        match self {
            TensorData::Copied(bytes) => bytes,
            TensorData::Adopted(buffer) => buffer.bytes(),
        }
    }

    /// Returns the byte length of the backing region.
    pub fn len(&self) -> usize {
        match self {
            TensorData::Copied(bytes) => bytes.len(),
            TensorData::Adopted(buffer) => buffer.len(),
        }
    }

    /// Returns `true` if the backing region is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for TensorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TensorData::Copied(bytes) => {
                f.debug_tuple("Copied").field(&bytes.len()).finish()
            }
            TensorData::Adopted(buffer) => f.debug_tuple("Adopted").field(buffer).finish(),
        }
    }
}

/// A heap allocation handed over to the native library, paired with the
/// deallocator that frees it.
///
/// Dropping the buffer invokes the deallocator with the original pointer and
/// length — exactly once, enforced by `Option::take`. Since the library is
/// the owner after adoption, the drop happens when the library decides the
/// tensor is no longer needed, not before.
pub struct AdoptedBuffer {
    ptr: *mut u8,
    len: usize,
    dealloc: Option<Deallocator>,
}

impl AdoptedBuffer {
    /// Adopts a raw allocation.
    ///
    /// # Safety
    /// `ptr` must be non-null, valid for reads of `len` bytes for the
    /// lifetime of the buffer, and owned by no one else. `dealloc` must free
    /// exactly that allocation and must be safe to call once with
    /// `(ptr, len)`.
    pub unsafe fn from_raw(ptr: *mut u8, len: usize, dealloc: Deallocator) -> Self {
        debug_assert!(!ptr.is_null(), "adopted buffer pointer is null");
        Self {
            ptr,
            len,
            dealloc: Some(dealloc),
        }
    }

    /// Returns the adopted pointer.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Returns the byte length of the allocation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the allocation is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a view of the adopted bytes.
    pub fn bytes(&self) -> &[u8] {
        // SAFETY: `from_raw` requires `ptr` valid for reads of `len` bytes
        // for the lifetime of `self`, and the buffer is sole owner.
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }
}

impl Drop for AdoptedBuffer {
    fn drop(&mut self) {
        if let Some(dealloc) = self.dealloc.take() {
            dealloc(self.ptr, self.len);
        }
    }
}

impl std::fmt::Debug for AdoptedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdoptedBuffer")
            .field("len", &self.len)
            .field("armed", &self.dealloc.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Boxes `values` and adopts the allocation, logging each deallocator
    /// call as `(ptr_addr, len)`.
    fn adopt_i32(values: Box<[i32; 2]>, log: Rc<RefCell<Vec<(usize, usize)>>>) -> AdoptedBuffer {
        let len = std::mem::size_of::<[i32; 2]>();
        let ptr = Box::into_raw(values) as *mut u8;
        let dealloc: Deallocator = Box::new(move |p, n| {
            log.borrow_mut().push((p as usize, n));
            // SAFETY: `p` came from Box::into_raw on a Box<[i32; 2]> above.
            unsafe { drop(Box::from_raw(p as *mut [i32; 2])) };
        });
        // SAFETY: `ptr` is a live heap allocation of exactly `len` bytes and
        // the closure frees exactly that allocation.
        unsafe { AdoptedBuffer::from_raw(ptr, len, dealloc) }
    }

    #[test]
    fn test_deallocator_runs_exactly_once_with_original_parts() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let buffer = adopt_i32(Box::new([7, 8]), Rc::clone(&log));
        let expected_ptr = buffer.as_ptr() as usize;

        // Not freed while the library still holds it.
        assert!(log.borrow().is_empty());

        drop(buffer);
        assert_eq!(log.borrow().as_slice(), &[(expected_ptr, 8)]);
    }

    #[test]
    fn test_bytes_view() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let buffer = adopt_i32(Box::new([1, -1]), Rc::clone(&log));
        assert_eq!(buffer.len(), 8);
        assert_eq!(&buffer.bytes()[..4], &1i32.to_ne_bytes());
        assert_eq!(&buffer.bytes()[4..], &(-1i32).to_ne_bytes());
    }

    #[test]
    fn test_tensor_data_tags() {
        let copied = TensorData::Copied(vec![1, 2, 3]);
        assert_eq!(copied.len(), 3);
        assert_eq!(copied.bytes(), &[1, 2, 3]);

        let log = Rc::new(RefCell::new(Vec::new()));
        let adopted = TensorData::Adopted(adopt_i32(Box::new([0, 0]), Rc::clone(&log)));
        assert_eq!(adopted.len(), 8);
        drop(adopted);
        assert_eq!(log.borrow().len(), 1);
    }
}
