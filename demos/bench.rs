#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use std::collections::LinkedList;
use std::hint;
use std::time::Instant;
use singly::Callbacks;
use singly::List;

fn print(x: &u64) {
  println!("{}", x);
}

fn free(x: u64) {
  let _: u64 = hint::black_box(x);
}

fn compare(x: &u64, y: &u64) -> bool {
  x == y
}

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 1_000_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F: FnOnce(usize, usize)>(iters: usize, len: usize, name: &str, f: F) {
  let iters = hint::black_box(iters);
  let len = hint::black_box(len);
  let duration = timeit(|| f(iters, len));
  let duration = duration / ((iters * len) as f64);
  print!("{:25} {:.3} ns\n", name, duration);
}

#[inline(never)]
fn bench_singly(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut list = List::new(Callbacks::new(print, free, compare));
    for i in 0 .. len {
      list.insert_tail(i as u64);
    }
    let _: usize = hint::black_box(list.delete_matching(&((len / 2) as u64)));
  }
}

#[inline(never)]
fn bench_singly_bumpalo(iters: usize, len: usize) {
  let mut bump = bumpalo::Bump::new();

  for _ in 0 .. iters {
    {
      let mut list = List::new_in(Callbacks::new(print, free, compare), &bump);
      for i in 0 .. len {
        list.insert_tail(i as u64);
      }
      let _: usize = hint::black_box(list.delete_matching(&((len / 2) as u64)));
    }
    bump.reset();
  }
}

#[inline(never)]
fn bench_std(iters: usize, len: usize) {
  for _ in 0 .. iters {
    let mut list = LinkedList::new();
    for i in 0 .. len {
      list.push_back(i as u64);
    }
    let k = (len / 2) as u64;
    let list: LinkedList<u64> = list.into_iter().filter(|x| *x != k).collect();
    let _: LinkedList<u64> = hint::black_box(list);
  }
}

fn main() {
  warmup();

  let iters = 1_000;
  let len = 1_000;

  run_bench(iters, len, "singly", bench_singly);
  run_bench(iters, len, "singly (bumpalo)", bench_singly_bumpalo);
  run_bench(iters, len, "std::collections", bench_std);
}
