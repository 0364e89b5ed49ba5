//! Entry points that accept absent lists, payloads, and callbacks.
//!
//! Every function here first rejects an absent list, the same test that
//! [`is_valid`] answers, and an absent payload where one is taken. A rejected
//! call logs a diagnostic through [`log`] and mutates nothing; otherwise the
//! call is delegated to the corresponding [`List`] method.

use crate::Error;
use crate::Callbacks;
use crate::Handler;
use crate::List;
use crate::Node;
use crate::allocator::Allocator;

/// Creates an empty list from three callbacks, any of which may be absent.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if a callback is absent,
/// [`Error::AllocationFailure`] if the list record cannot be allocated.

pub fn create<T>(
    print: Option<fn(&T)>,
    free: Option<fn(T)>,
    compare: Option<fn(&T, &T) -> bool>,
  )
  -> Result<List<T>, Error>
{
  let callbacks = Callbacks::try_from_options(print, free, compare)?;
  Ok(List::try_new(callbacks)?)
}

/// Whether `list` refers to a list.

pub fn is_valid<T, H, A>(list: Option<&List<T, H, A>>) -> bool
where
  H: Handler<T>,
  A: Allocator,
{
  list.is_some()
}

fn payload<T>(payload: Option<T>) -> Result<T, Error> {
  let Some(payload) = payload else {
    log::error!("cannot create a node with an absent payload");
    return Err(Error::InvalidArgument("payload is absent"));
  };

  Ok(payload)
}

/// Inserts `payload` before the first node.
///
/// # Errors
///
/// [`Error::InvalidList`] if `list` is absent, [`Error::InvalidArgument`] if
/// `payload` is absent, [`Error::AllocationFailure`] if the node cannot be
/// allocated. The list is unchanged in every case.

pub fn insert_head<T, H, A>(list: Option<&mut List<T, H, A>>, payload: Option<T>) -> Result<(), Error>
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot insert into an absent list");
    return Err(Error::InvalidList);
  };

  let payload = self::payload(payload)?;

  list.try_insert_head(payload).map_err(|e| {
    log::error!("failed to insert at head: {}", e);
    Error::from(e)
  })
}

/// Inserts `payload` after the last node.
///
/// # Errors
///
/// Same as [`insert_head`].

pub fn insert_tail<T, H, A>(list: Option<&mut List<T, H, A>>, payload: Option<T>) -> Result<(), Error>
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot insert into an absent list");
    return Err(Error::InvalidList);
  };

  let payload = self::payload(payload)?;

  list.try_insert_tail(payload).map_err(|e| {
    log::error!("failed to insert at tail: {}", e);
    Error::from(e)
  })
}

/// Prints every payload from head to tail.
///
/// # Errors
///
/// [`Error::InvalidList`] if `list` is absent.

pub fn print<T, H, A>(list: Option<&List<T, H, A>>) -> Result<(), Error>
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot print an absent list");
    return Err(Error::InvalidList);
  };

  list.print();

  Ok(())
}

/// The number of nodes, or zero if `list` is absent.

pub fn length<T, H, A>(list: Option<&List<T, H, A>>) -> usize
where
  H: Handler<T>,
  A: Allocator,
{
  match list {
    Some(list) => list.len(),
    None => 0,
  }
}

/// The first node matching `probe`, or `None` if there is no match or `list`
/// is absent. An absent list is logged as an error.

pub fn find<'a, T, H, A>(list: Option<&'a List<T, H, A>>, probe: &T) -> Option<&'a Node<T>>
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot search an absent list");
    return None;
  };

  list.find(probe)
}

/// Reverses the list in place.
///
/// # Errors
///
/// [`Error::InvalidList`] if `list` is absent, [`Error::InvalidArgument`] if
/// it is empty.

pub fn reverse<T, H, A>(list: Option<&mut List<T, H, A>>) -> Result<(), Error>
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot reverse an absent list");
    return Err(Error::InvalidList);
  };

  list.reverse()
}

/// Removes every node matching `probe` and returns how many were removed.
/// An absent list is logged as an error and yields zero.

pub fn delete_matching<T, H, A>(list: Option<&mut List<T, H, A>>, probe: &T) -> usize
where
  H: Handler<T>,
  A: Allocator,
{
  let Some(list) = list else {
    log::error!("cannot delete from an absent list");
    return 0;
  };

  list.delete_matching(probe)
}

/// Releases every node of `list`, keeping the list itself. Does nothing if
/// `list` is absent or already empty.

pub fn destroy<T, H, A>(list: Option<&mut List<T, H, A>>)
where
  H: Handler<T>,
  A: Allocator,
{
  if let Some(list) = list {
    list.clear();
  }
}
