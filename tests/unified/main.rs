use std::cell::RefCell;
use singly::Callbacks;

mod checked;

thread_local! {
  static LOG: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

pub(crate) fn print_i32(x: &i32) {
  LOG.with(|l| l.borrow_mut().push(format!("print {x}")))
}

pub(crate) fn free_i32(x: i32) {
  LOG.with(|l| l.borrow_mut().push(format!("free {x}")))
}

pub(crate) fn eq_i32(x: &i32, y: &i32) -> bool {
  x == y
}

pub(crate) fn callbacks() -> Callbacks<i32> {
  Callbacks::new(print_i32, free_i32, eq_i32)
}

pub(crate) fn take_log() -> Vec<String> {
  LOG.with(|l| l.borrow_mut().drain(..).collect())
}
