// Host-side tests for the lightbox state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lightbox {
    include!("../src/core/lightbox.rs");
}

use lightbox::Lightbox;

fn three() -> Lightbox {
    Lightbox::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
}

#[test]
fn open_at_valid_index_displays_that_image() {
    let mut lb = three();
    assert_eq!(lb.open(1), Some("b.jpg"));
    assert!(lb.is_open());
    assert_eq!(lb.current_index(), 1);
    assert_eq!(lb.current_src(), Some("b.jpg"));
}

#[test]
fn open_out_of_range_is_rejected() {
    let mut lb = three();
    assert_eq!(lb.open(3), None);
    assert!(!lb.is_open());
}

#[test]
fn next_and_prev_wrap_around() {
    let mut lb = three();
    lb.open(2);
    assert_eq!(lb.next(), Some("a.jpg"));
    assert_eq!(lb.current_index(), 0);
    assert_eq!(lb.prev(), Some("c.jpg"));
    assert_eq!(lb.current_index(), 2);
}

#[test]
fn navigation_covers_all_indices_mod_n() {
    let mut lb = three();
    for start in 0..3 {
        lb.open(start);
        lb.next();
        assert_eq!(lb.current_index(), (start + 1) % 3);
        lb.open(start);
        lb.prev();
        assert_eq!(lb.current_index(), (start + 3 - 1) % 3);
    }
}

#[test]
fn navigation_is_ignored_while_closed() {
    let mut lb = three();
    assert_eq!(lb.next(), None);
    assert_eq!(lb.prev(), None);
    assert_eq!(lb.current_index(), 0);

    lb.open(1);
    lb.close();
    assert_eq!(lb.next(), None);
    assert_eq!(lb.current_index(), 1); // index survives close, unchanged
}

#[test]
fn empty_collection_is_always_a_no_op() {
    let mut lb = Lightbox::new(Vec::new());
    assert!(lb.is_empty());
    assert_eq!(lb.open(0), None);
    assert!(!lb.is_open());
    assert_eq!(lb.next(), None);
    assert_eq!(lb.prev(), None);
    assert_eq!(lb.current_src(), None);
}

#[test]
fn gallery_keyboard_scenario() {
    // Images [A,B,C]: click item 1, ArrowRight twice, Escape.
    let mut lb = Lightbox::new(vec!["A".into(), "B".into(), "C".into()]);
    assert_eq!(lb.open(1), Some("B"));
    assert_eq!(lb.next(), Some("C"));
    assert_eq!(lb.current_index(), 2);
    assert_eq!(lb.next(), Some("A"));
    assert_eq!(lb.current_index(), 0);
    lb.close();
    assert!(!lb.is_open());
}
