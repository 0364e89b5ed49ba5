//! The allocation seam used for both list records and nodes.
//!
//! Anything that implements [`allocator_api2::alloc::Allocator`] is accepted,
//! including [`Global`], shared references to allocators, and arena allocators
//! such as `&bumpalo::Bump`.

use core::alloc::Layout;
use core::ptr::NonNull;
use allocator_api2::alloc::Allocator as Upstream;

pub use allocator_api2::alloc::Global;

/// A source of memory for a [`List`](crate::List).
///
/// # Safety
///
/// A pointer returned by `alloc` must be valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and must stay valid
/// until it is passed back to `free` with the same layout.

pub unsafe trait Allocator {
  /// Allocates memory for the given layout, or returns `None` when the
  /// request cannot be satisfied.

  fn alloc(&mut self, layout: Layout) -> Option<NonNull<u8>>;

  /// Releases memory previously returned by `alloc`.
  ///
  /// # Safety
  ///
  /// `ptr` must have come from `alloc` on this allocator with the same
  /// `layout`, and must not be used afterwards.

  unsafe fn free(&mut self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A> Allocator for A
where
  A: Upstream
{
  #[inline(always)]
  fn alloc(&mut self, layout: Layout) -> Option<NonNull<u8>> {
    match Upstream::allocate(self, layout) {
      Ok(p) => Some(p.cast()),
      Err(_) => None,
    }
  }

  #[inline(always)]
  unsafe fn free(&mut self, ptr: NonNull<u8>, layout: Layout) {
    Upstream::deallocate(self, ptr, layout)
  }
}
