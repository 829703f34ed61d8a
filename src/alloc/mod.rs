/*!
Allocation types and traits.

Owned encoder output lives in a `RawBuf`, which is allocated and released through an `Allocator`.  `Malloc` hands the driver memory from the C heap; `Rust` uses the global allocator.
*/
use std::alloc::{self as rust_alloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use libc::{self, c_void};
use thiserror::Error;

/**
Abstracts over different memory allocators.

In practice, this will be implemented by a marker type (which is not intended to actually be instantiated anywhere).
*/
pub trait Allocator {
    /**
    Allocate the specified number of zeroed bytes, with the specified alignment.

    `bytes` is never zero.
    */
    fn alloc_zeroed(bytes: usize, align: usize) -> Result<NonNull<u8>, AllocError>;

    /**
    Free an allocation.

    # Safety

    `ptr` must have come from `alloc_zeroed` on this allocator with the same `bytes` and `align`, and must not be used afterwards.
    */
    unsafe fn free(ptr: NonNull<u8>, bytes: usize, align: usize);

    /**
    Returns a string which can be used to identify this allocator in debug output.

    This string should *preferably* be short and a single `Camelword`, although nothing will break if this is not done.
    */
    fn debug_prefix() -> &'static str;
}

/**
A general allocation error.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum AllocError {
    #[error("failed to allocate memory")]
    Failed,
    #[error("cannot satisfy requested alignment")]
    CannotAlign,
    #[error("overflow while computing size")]
    SizeOverflow,
}

/**
Represents the C runtime heap allocator.
*/
pub enum Malloc {}

impl Allocator for Malloc {
    fn alloc_zeroed(bytes: usize, align: usize) -> Result<NonNull<u8>, AllocError> {
        // A conservative guess.
        if align > std::mem::align_of::<usize>() {
            return Err(AllocError::CannotAlign);
        }

        let ptr = unsafe { libc::calloc(bytes, 1) };
        NonNull::new(ptr as *mut u8).ok_or(AllocError::Failed)
    }

    unsafe fn free(ptr: NonNull<u8>, _bytes: usize, _align: usize) {
        libc::free(ptr.as_ptr() as *mut c_void);
    }

    fn debug_prefix() -> &'static str {
        "C"
    }
}

/**
Represents the Rust global heap allocator.
*/
pub enum Rust {}

impl Allocator for Rust {
    fn alloc_zeroed(bytes: usize, align: usize) -> Result<NonNull<u8>, AllocError> {
        let layout = Layout::from_size_align(bytes, align).map_err(|_| AllocError::CannotAlign)?;
        let ptr = unsafe { rust_alloc::alloc_zeroed(layout) };
        NonNull::new(ptr).ok_or(AllocError::Failed)
    }

    unsafe fn free(ptr: NonNull<u8>, bytes: usize, align: usize) {
        let layout = Layout::from_size_align_unchecked(bytes, align);
        rust_alloc::dealloc(ptr.as_ptr(), layout);
    }

    fn debug_prefix() -> &'static str {
        "R"
    }
}

/**
An owned, zero-filled byte buffer which is released through `A` when dropped.
*/
pub struct RawBuf<A>
where
    A: Allocator,
{
    ptr: NonNull<u8>,
    len: usize,
    align: usize,
    _marker: PhantomData<A>,
}

impl<A> RawBuf<A>
where
    A: Allocator,
{
    /**
    Allocates a buffer holding `content` followed by `term` zero bytes.

    # Failure

    Fails if the total size overflows, or if the allocator does.
    */
    pub fn terminated(content: &[u8], term: usize, align: usize) -> Result<Self, AllocError> {
        let len = content
            .len()
            .checked_add(term)
            .ok_or(AllocError::SizeOverflow)?
            .max(1);
        let ptr = A::alloc_zeroed(len, align)?;

        unsafe {
            ptr::copy_nonoverlapping(content.as_ptr(), ptr.as_ptr(), content.len());
        }

        Ok(RawBuf {
            ptr,
            len,
            align,
            _marker: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// The whole allocation, terminator included.
    pub fn as_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<A> fmt::Debug for RawBuf<A>
where
    A: Allocator,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}Buf({:?})", A::debug_prefix(), self.as_slice())
    }
}

impl<A> Drop for RawBuf<A>
where
    A: Allocator,
{
    fn drop(&mut self) {
        unsafe {
            A::free(self.ptr, self.len, self.align);
        }
    }
}
