use expect_test::expect;
use singly::Error;
use singly::List;
use singly::checked;
use crate::callbacks;
use crate::eq_i32;
use crate::free_i32;
use crate::print_i32;
use crate::take_log;

fn contents(list: &List<i32>) -> String {
  format!("{:?}", list)
}

#[test_log::test]
fn test_create() {
  let list = checked::create::<i32>(Some(print_i32), Some(free_i32), Some(eq_i32));
  assert!(list.as_ref().map_or(false, |l| l.is_empty()));

  let e = checked::create::<i32>(None, Some(free_i32), Some(eq_i32)).unwrap_err();
  assert!(e == Error::InvalidArgument("print callback is absent"));
  let e = checked::create::<i32>(Some(print_i32), None, Some(eq_i32)).unwrap_err();
  assert!(e == Error::InvalidArgument("free callback is absent"));
  let e = checked::create::<i32>(Some(print_i32), Some(free_i32), None).unwrap_err();
  assert!(e == Error::InvalidArgument("compare callback is absent"));
}

#[test]
fn test_is_valid() {
  let list = List::new(callbacks());
  assert!(checked::is_valid(Some(&list)));
  assert!(! checked::is_valid(None::<&List<i32>>));
}

#[test_log::test]
fn test_absent_list() {
  let absent = || None::<&mut List<i32>>;

  assert!(checked::insert_head(absent(), Some(1)) == Err(Error::InvalidList));
  assert!(checked::insert_tail(absent(), Some(1)) == Err(Error::InvalidList));
  assert!(checked::print(None::<&List<i32>>) == Err(Error::InvalidList));
  assert!(checked::length(None::<&List<i32>>) == 0);
  assert!(checked::find(None::<&List<i32>>, &1).is_none());
  assert!(checked::reverse(absent()) == Err(Error::InvalidList));
  assert!(checked::delete_matching(absent(), &1) == 0);
  checked::destroy(absent());
  assert!(take_log().is_empty());
}

#[test_log::test]
fn test_absent_payload() {
  let mut list = List::new(callbacks());
  checked::insert_tail(Some(&mut list), Some(1)).unwrap();

  let e = checked::insert_head(Some(&mut list), None);
  assert!(e == Err(Error::InvalidArgument("payload is absent")));
  let e = checked::insert_tail(Some(&mut list), None);
  assert!(e == Err(Error::InvalidArgument("payload is absent")));

  expect!["[1]"].assert_eq(&contents(&list));
}

#[test]
fn test_scenario() {
  let mut list = checked::create::<i32>(Some(print_i32), Some(free_i32), Some(eq_i32)).unwrap();

  checked::insert_tail(Some(&mut list), Some(1)).unwrap();
  checked::insert_tail(Some(&mut list), Some(2)).unwrap();
  checked::insert_head(Some(&mut list), Some(3)).unwrap();
  expect!["[3, 1, 2]"].assert_eq(&contents(&list));
  assert!(checked::length(Some(&list)) == 3);

  let found = checked::find(Some(&list), &2);
  expect!["Some(Node(2))"].assert_eq(&format!("{:?}", found));

  assert!(checked::delete_matching(Some(&mut list), &2) == 1);
  expect!["[3, 1]"].assert_eq(&contents(&list));

  checked::print(Some(&list)).unwrap();
  expect![[r#"["free 2", "print 3", "print 1"]"#]].assert_eq(&format!("{:?}", take_log()));
}

#[test_log::test]
fn test_reverse() {
  let mut list = List::new(callbacks());

  let e = checked::reverse(Some(&mut list));
  assert!(e == Err(Error::InvalidArgument("cannot reverse an empty list")));

  for i in [1, 2, 3] {
    checked::insert_tail(Some(&mut list), Some(i)).unwrap();
  }
  checked::reverse(Some(&mut list)).unwrap();
  expect!["[3, 2, 1]"].assert_eq(&contents(&list));
  checked::reverse(Some(&mut list)).unwrap();
  expect!["[1, 2, 3]"].assert_eq(&contents(&list));
}

#[test]
fn test_destroy() {
  let mut list = List::new(callbacks());
  for i in [1, 2, 3] {
    checked::insert_tail(Some(&mut list), Some(i)).unwrap();
  }

  checked::destroy(Some(&mut list));
  expect![[r#"["free 1", "free 2", "free 3"]"#]].assert_eq(&format!("{:?}", take_log()));
  assert!(checked::length(Some(&list)) == 0);
  assert!(list.head().is_none() && list.tail().is_none());

  checked::destroy(Some(&mut list));
  assert!(take_log().is_empty());

  checked::insert_tail(Some(&mut list), Some(4)).unwrap();
  expect!["[4]"].assert_eq(&contents(&list));
}
