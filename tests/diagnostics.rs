use std::sync::Mutex;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use singly::Callbacks;
use singly::List;
use singly::checked;

/// Keeps every error-level message.

struct Capture(Mutex<Vec<String>>);

impl Log for Capture {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= Level::Error
  }

  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      self.0.lock().unwrap().push(record.args().to_string());
    }
  }

  fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn take() -> Vec<String> {
  CAPTURE.0.lock().unwrap().drain(..).collect()
}

fn print(x: &i32) {
  let _ = x;
}

fn free(x: i32) {
  let _ = x;
}

fn compare(x: &i32, y: &i32) -> bool {
  x == y
}

// NB: One test function, since the logger is process-wide.

#[test]
fn test_rejected_calls_are_logged() {
  log::set_logger(&CAPTURE).unwrap();
  log::set_max_level(LevelFilter::Error);

  let absent = || None::<&mut List<i32>>;

  let _ = checked::insert_head(absent(), Some(1));
  let _ = checked::insert_tail(absent(), Some(1));
  let _ = checked::print(None::<&List<i32>>);
  let _ = checked::find(None::<&List<i32>>, &1);
  let _ = checked::reverse(absent());
  let _ = checked::delete_matching(absent(), &1);
  assert!(take().len() == 6);

  assert!(checked::length(None::<&List<i32>>) == 0);
  checked::destroy(absent());
  assert!(take().is_empty());

  assert!(checked::create::<i32>(None, Some(free), Some(compare)).is_err());
  assert!(take() == vec!["the print callback cannot be absent".to_string()]);

  let mut list = List::new(Callbacks::new(print, free, compare));

  let _ = checked::insert_tail(Some(&mut list), None);
  assert!(take() == vec!["cannot create a node with an absent payload".to_string()]);

  let _ = checked::reverse(Some(&mut list));
  assert!(take() == vec!["cannot reverse an empty list".to_string()]);

  checked::insert_tail(Some(&mut list), Some(1)).unwrap();
  checked::reverse(Some(&mut list)).unwrap();
  assert!(checked::delete_matching(Some(&mut list), &1) == 1);
  assert!(take().is_empty());
}
