#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use allocator::Allocator;
use allocator::Global;
use assert::strict_assert;
use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// The error returned by the `try_` family of methods when memory for a list
/// record or a node cannot be obtained.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// The errors reported by list construction and by the [`checked`] interface.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// A required callback or payload is absent, or a structural precondition
  /// does not hold.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
  /// Memory for a list record or a node could not be obtained.
  #[error("memory allocation failed")]
  AllocationFailure,
  /// The list itself is absent.
  #[error("invalid list")]
  InvalidList,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod allocator;

pub mod checked;

mod assert;

mod ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// The behavior a list applies to its payloads.
///
/// The list never looks inside a payload. Rendering, releasing, and matching
/// are all delegated to the handler that was bound when the list was created.

pub trait Handler<T> {
  /// Renders a payload. Called once per node, in order, by
  /// [`List::print`].

  fn print(&self, payload: &T);

  /// Releases a payload that is leaving the list, either through
  /// [`List::delete_matching`], [`List::clear`], or when the list is dropped.

  fn free(&self, payload: T);

  /// Decides whether the `stored` payload matches the `probe` given to
  /// [`List::find`] or [`List::delete_matching`].

  fn compare(&self, stored: &T, probe: &T) -> bool;
}

/// A [`Handler`] made of three plain function pointers.

pub struct Callbacks<T> {
  print: fn(&T),
  free: fn(T),
  compare: fn(&T, &T) -> bool,
}

/// A singly linked list whose payload behavior is fixed at construction.
///
/// The list record and every node are allocated through `A`.

pub struct List<T, H: Handler<T> = Callbacks<T>, A: Allocator = Global>(
  NonNull<Root<T, H, A>>,
  PhantomData<Root<T, H, A>>,
);

unsafe impl<T, H, A> Send for List<T, H, A>
where
  T: Send,
  H: Handler<T> + Send,
  A: Allocator + Send,
{ }

unsafe impl<T, H, A> Sync for List<T, H, A>
where
  T: Sync,
  H: Handler<T> + Sync,
  A: Allocator + Sync,
{ }

/// One element of a [`List`].
///
/// Nodes are only ever handed out as shared references that borrow the list,
/// so a node cannot outlive the next mutation of its list.

pub struct Node<T> {
  payload: T,
  next: Link<T>,
}

unsafe impl<T: Send> Send for Node<T> { }

unsafe impl<T: Sync> Sync for Node<T> { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<T> = Option<NonNull<Node<T>>>;

struct Root<T, H, A> {
  head: Link<T>,
  tail: Link<T>,
  handler: H,
  allocator: A,
}

struct Walk<'a, T>(Link<T>, PhantomData<&'a Node<T>>);

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Layout) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Layout) -> Result<T, Self> {
    Err(AllocError)
  }
}

impl From<AllocError> for Error {
  fn from(_: AllocError) -> Self {
    Error::AllocationFailure
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Handler                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, H> Handler<T> for &'a H
where
  H: Handler<T> + ?Sized
{
  #[inline(always)]
  fn print(&self, payload: &T) {
    (**self).print(payload)
  }

  #[inline(always)]
  fn free(&self, payload: T) {
    (**self).free(payload)
  }

  #[inline(always)]
  fn compare(&self, stored: &T, probe: &T) -> bool {
    (**self).compare(stored, probe)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Callbacks                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Callbacks<T> {
  /// Binds the three callbacks.

  pub fn new(print: fn(&T), free: fn(T), compare: fn(&T, &T) -> bool) -> Self {
    Self { print, free, compare, }
  }

  /// Binds the three callbacks, any of which may be absent.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidArgument`] naming the first absent callback,
  /// checked in the order print, free, compare.

  pub fn try_from_options(
      print: Option<fn(&T)>,
      free: Option<fn(T)>,
      compare: Option<fn(&T, &T) -> bool>,
    )
    -> Result<Self, Error>
  {
    let Some(print) = print else {
      log::error!("the print callback cannot be absent");
      return Err(Error::InvalidArgument("print callback is absent"));
    };

    let Some(free) = free else {
      log::error!("the free callback cannot be absent");
      return Err(Error::InvalidArgument("free callback is absent"));
    };

    let Some(compare) = compare else {
      log::error!("the compare callback cannot be absent");
      return Err(Error::InvalidArgument("compare callback is absent"));
    };

    Ok(Self::new(print, free, compare))
  }
}

impl<T> Handler<T> for Callbacks<T> {
  #[inline(always)]
  fn print(&self, payload: &T) {
    (self.print)(payload)
  }

  #[inline(always)]
  fn free(&self, payload: T) {
    (self.free)(payload)
  }

  #[inline(always)]
  fn compare(&self, stored: &T, probe: &T) -> bool {
    (self.compare)(stored, probe)
  }
}

impl<T> Clone for Callbacks<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Callbacks<T> { }

impl<T> fmt::Debug for Callbacks<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Callbacks").finish_non_exhaustive()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn node<T, H, A, E>(root: &mut Root<T, H, A>, payload: T) -> Result<NonNull<Node<T>>, E>
where
  H: Handler<T>,
  A: Allocator,
  E: Fail,
{
  let Some(p) = ptr::alloc::<A, Node<T>>(&mut root.allocator) else {
    let l = Layout::new::<Node<T>>();
    log::error!("failed to allocate a node of {} bytes", l.size());
    // NB: The payload already belongs to the list.
    root.handler.free(payload);
    return E::fail(l);
  };

  unsafe { ptr::write(p, Node { payload, next: None }) };

  Ok(p)
}

unsafe fn release<T, H, A>(root: &mut Root<T, H, A>, p: NonNull<Node<T>>) -> Link<T>
where
  H: Handler<T>,
  A: Allocator,
{
  let Node { payload, next } = ptr::read(p);
  root.handler.free(payload);
  ptr::free(&mut root.allocator, p);
  next
}

impl<T> Node<T> {
  /// The payload held by this node.

  #[inline(always)]
  pub fn payload(&self) -> &T {
    &self.payload
  }

  /// The following node, or `None` if this is the last node.

  #[inline(always)]
  pub fn next(&self) -> Option<&Node<T>> {
    self.next.map(|p| unsafe { ptr::as_ref(p) })
  }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.payload).finish()
  }
}

impl<'a, T> Iterator for Walk<'a, T> {
  type Item = &'a Node<T>;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let p = self.0?;
    let n: &'a Node<T> = unsafe { ptr::as_ref(p) };
    self.0 = n.next;
    Some(n)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn list<T, H, A, E>(handler: H, allocator: A) -> Result<List<T, H, A>, E>
where
  H: Handler<T>,
  A: Allocator,
  E: Fail,
{
  let mut allocator = allocator;

  let Some(r) = ptr::alloc::<A, Root<T, H, A>>(&mut allocator) else {
    let l = Layout::new::<Root<T, H, A>>();
    log::error!("failed to allocate a list record of {} bytes", l.size());
    return E::fail(l);
  };

  let root = Root {
    head: None,
    tail: None,
    handler,
    allocator,
  };

  unsafe { ptr::write(r, root) };

  log::trace!("created list {:p}", r);

  Ok(List(r, PhantomData))
}

fn insert_head<T, H, A, E>(list: &mut List<T, H, A>, payload: T) -> Result<(), E>
where
  H: Handler<T>,
  A: Allocator,
  E: Fail,
{
  let r = list.root_mut();
  let p = node(r, payload)?;

  match r.head {
    None => {
      r.head = Some(p);
      r.tail = Some(p);
    }
    Some(h) => {
      unsafe { ptr::as_mut_ref(p) }.next = Some(h);
      r.head = Some(p);
    }
  }

  strict_assert!(list.has_consistent_ends());

  Ok(())
}

fn insert_tail<T, H, A, E>(list: &mut List<T, H, A>, payload: T) -> Result<(), E>
where
  H: Handler<T>,
  A: Allocator,
  E: Fail,
{
  let r = list.root_mut();
  let p = node(r, payload)?;

  match r.tail {
    None => {
      r.head = Some(p);
      r.tail = Some(p);
    }
    Some(t) => {
      unsafe { ptr::as_mut_ref(t) }.next = Some(p);
      r.tail = Some(p);
    }
  }

  strict_assert!(list.has_consistent_ends());

  Ok(())
}

impl<T, H: Handler<T>> List<T, H, Global> {
  /// Creates an empty list bound to `handler`, backed by the global
  /// allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn new(handler: H) -> Self {
    unwrap(list(handler, Global))
  }

  /// Creates an empty list bound to `handler`, backed by the global
  /// allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_new(handler: H) -> Result<Self, AllocError> {
    list(handler, Global)
  }
}

impl<T, H: Handler<T>, A: Allocator> List<T, H, A> {
  /// Creates an empty list bound to `handler`, backed by `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn new_in(handler: H, allocator: A) -> Self {
    unwrap(list(handler, allocator))
  }

  /// Creates an empty list bound to `handler`, backed by `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_new_in(handler: H, allocator: A) -> Result<Self, AllocError> {
    list(handler, allocator)
  }

  #[inline(always)]
  fn root(&self) -> &Root<T, H, A> {
    unsafe { ptr::as_ref(self.0) }
  }

  #[inline(always)]
  fn root_mut(&mut self) -> &mut Root<T, H, A> {
    unsafe { ptr::as_mut_ref(self.0) }
  }

  #[inline(always)]
  fn walk(&self) -> Walk<'_, T> {
    Walk(self.root().head, PhantomData)
  }

  fn has_consistent_ends(&self) -> bool {
    let r = self.root();
    let last = r.tail.map_or(true, |p| unsafe { ptr::as_ref(p) }.next.is_none());
    r.head.is_none() == r.tail.is_none() && last
  }

  fn is_consistent(&self) -> bool {
    let r = self.root();
    let last = self.walk().last().map(ptr::from_ref);
    r.head.is_none() == r.tail.is_none() && last == r.tail
  }

  /// The handler bound at construction.

  pub fn handler(&self) -> &H {
    &self.root().handler
  }

  /// A reference to the backing allocator.

  pub fn allocator(&self) -> &A {
    &self.root().allocator
  }

  /// The first node, or `None` if the list is empty.

  pub fn head(&self) -> Option<&Node<T>> {
    self.root().head.map(|p| unsafe { ptr::as_ref(p) })
  }

  /// The last node, or `None` if the list is empty.

  pub fn tail(&self) -> Option<&Node<T>> {
    self.root().tail.map(|p| unsafe { ptr::as_ref(p) })
  }

  /// Inserts `payload` before the first node.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn insert_head(&mut self, payload: T) {
    unwrap(insert_head(self, payload))
  }

  /// Inserts `payload` before the first node.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `payload` is passed to [`Handler::free`].

  pub fn try_insert_head(&mut self, payload: T) -> Result<(), AllocError> {
    insert_head(self, payload)
  }

  /// Inserts `payload` after the last node.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn insert_tail(&mut self, payload: T) {
    unwrap(insert_tail(self, payload))
  }

  /// Inserts `payload` after the last node.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `payload` is passed to [`Handler::free`].

  pub fn try_insert_tail(&mut self, payload: T) -> Result<(), AllocError> {
    insert_tail(self, payload)
  }

  /// Passes every payload to [`Handler::print`], from head to tail.

  pub fn print(&self) {
    let h = &self.root().handler;
    for n in self.walk() {
      h.print(&n.payload);
    }
  }

  /// The number of nodes, counted by walking the chain.

  pub fn len(&self) -> usize {
    self.walk().count()
  }

  /// Whether the list has no nodes.

  pub fn is_empty(&self) -> bool {
    self.root().head.is_none()
  }

  /// The first node whose payload matches `probe` according to
  /// [`Handler::compare`].

  pub fn find(&self, probe: &T) -> Option<&Node<T>> {
    let h = &self.root().handler;
    self.walk().find(|n| h.compare(&n.payload, probe))
  }

  /// Reverses the order of the nodes in place.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidArgument`] if the list is empty; nothing is
  /// changed in that case.

  pub fn reverse(&mut self) -> Result<(), Error> {
    let r = self.root_mut();

    let Some(first) = r.head else {
      log::error!("cannot reverse an empty list");
      return Err(Error::InvalidArgument("cannot reverse an empty list"));
    };

    let mut prev = None;
    let mut curr = Some(first);

    while let Some(p) = curr {
      let n = unsafe { ptr::as_mut_ref(p) };
      curr = n.next;
      n.next = prev;
      prev = Some(p);
    }

    r.head = prev;
    r.tail = Some(first);

    strict_assert!(self.is_consistent());

    Ok(())
  }

  /// Removes every node whose payload matches `probe`, releasing each payload
  /// through [`Handler::free`]. The remaining nodes keep their relative
  /// order.
  ///
  /// Returns the number of nodes removed.

  pub fn delete_matching(&mut self, probe: &T) -> usize {
    let r = self.root_mut();
    let mut prev: Link<T> = None;
    let mut curr = r.head;
    let mut count = 0;

    while let Some(p) = curr {
      let n: &Node<T> = unsafe { ptr::as_ref(p) };
      let next = n.next;

      if ! r.handler.compare(&n.payload, probe) {
        prev = Some(p);
        curr = next;
        continue;
      }

      match prev {
        None => r.head = next,
        Some(q) => unsafe { ptr::as_mut_ref(q) }.next = next,
      }

      if next.is_none() {
        r.tail = prev;
      }

      let _: Link<T> = unsafe { release(r, p) };
      count = count + 1;
      curr = next;
    }

    log::trace!("deleted {} matching nodes", count);

    strict_assert!(self.is_consistent());

    count
  }

  /// Releases every node, from head to tail, leaving the list empty but
  /// usable. Each payload goes through [`Handler::free`] before its node is
  /// deallocated.
  ///
  /// Clearing an empty list does nothing.

  pub fn clear(&mut self) {
    let r = self.root_mut();
    let mut curr = r.head.take();
    let mut count = 0_usize;

    r.tail = None;

    while let Some(p) = curr {
      curr = unsafe { release(r, p) };
      count = count + 1;
    }

    if count != 0 {
      log::debug!("cleared {} nodes", count);
    }
  }
}

impl<T, H: Handler<T>, A: Allocator> Drop for List<T, H, A> {
  fn drop(&mut self) {
    self.clear();

    let Root { handler, allocator, .. } = unsafe { ptr::read(self.0) };
    let mut allocator = allocator;

    unsafe { ptr::free(&mut allocator, self.0) };

    // NB: The handler and allocator were moved out of the record above and
    // are dropped exactly once, here.
    drop::<H>(handler);
    drop::<A>(allocator)
  }
}

impl<T, H, A> fmt::Debug for List<T, H, A>
where
  T: fmt::Debug,
  H: Handler<T>,
  A: Allocator,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.walk().map(|n| &n.payload)).finish()
  }
}
