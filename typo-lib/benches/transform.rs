//! Benchmarks for transforms and the sanitize pipeline in typo-lib.
//!
//! Run with: `cargo bench -p typo-lib --bench transform`

use divan::{
  Bencher,
  black_box,
};
use typo_lib::{
  Range,
  SanitizeOptions,
  Transform,
  apply_transform,
  sanitize,
};

fn main() {
  divan::main();
}

fn make_messy_text(size: usize) -> String {
  let line = "the  quick brown fox ,jumps over -the lazy dog .Łódź  café\n\n\n";
  let mut s = String::with_capacity(size + line.len());
  while s.len() < size {
    s.push_str(line);
  }
  s
}

#[divan::bench(args = Transform::ALL)]
fn transform(bencher: Bencher, transform: Transform) {
  let text = make_messy_text(64 * 1024);
  bencher.bench(|| apply_transform(black_box(&text), transform));
}

mod pipeline {
  use super::*;

  #[divan::bench(args = [1024, 64 * 1024])]
  fn whole_document(bencher: Bencher, size: usize) {
    let text = make_messy_text(size);
    let range = Range::whole(&text);
    let options = SanitizeOptions::default();
    bencher.bench(|| sanitize(black_box(&text), range, &options));
  }

  #[divan::bench]
  fn small_selection(bencher: Bencher) {
    let text = make_messy_text(64 * 1024);
    let options = SanitizeOptions::default();
    bencher.bench(|| sanitize(black_box(&text), Range::new(1000, 1200), &options));
  }
}
