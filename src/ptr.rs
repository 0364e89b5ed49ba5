use core::alloc::Layout;
use core::ptr::NonNull;
use crate::allocator::Allocator;

#[inline(always)]
pub(crate) const fn cast<T, U>(x: NonNull<T>) -> NonNull<U>
where
  T: ?Sized
{
  x.cast()
}

#[inline(always)]
pub(crate) unsafe fn write<T>(x: NonNull<T>, y: T) {
  x.as_ptr().write(y)
}

#[inline(always)]
pub(crate) unsafe fn read<T>(x: NonNull<T>) -> T {
  x.as_ptr().read()
}

#[inline(always)]
pub(crate) unsafe fn as_ref<'a, T>(x: NonNull<T>) -> &'a T
where
  T: ?Sized
{
  &*x.as_ptr()
}

#[inline(always)]
pub(crate) unsafe fn as_mut_ref<'a, T>(x: NonNull<T>) -> &'a mut T
where
  T: ?Sized
{
  &mut *x.as_ptr()
}

#[inline(always)]
pub(crate) fn alloc<A, T>(allocator: &mut A) -> Option<NonNull<T>>
where
  A: Allocator
{
  // NB: Every type we allocate here carries at least one link, so the layout
  // is never zero-sized.

  Some(cast(allocator.alloc(Layout::new::<T>())?))
}

#[inline(always)]
pub(crate) unsafe fn free<A, T>(allocator: &mut A, x: NonNull<T>)
where
  A: Allocator
{
  allocator.free(cast(x), Layout::new::<T>())
}

#[inline(always)]
pub(crate) fn from_ref<T>(x: &T) -> NonNull<T>
where
  T: ?Sized
{
  NonNull::from(x)
}
