/// Checks a structural invariant.
///
/// This is an `assert!` when the `strict_assertions` feature is enabled and a
/// `debug_assert!` otherwise.

macro_rules! strict_assert {
  ($($arg:tt)*) => {
    #[cfg(feature = "strict_assertions")]
    assert!($($arg)*);
    #[cfg(not(feature = "strict_assertions"))]
    debug_assert!($($arg)*);
  };
}

pub(crate) use strict_assert;
