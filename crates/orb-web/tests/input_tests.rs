// Host-side tests for pointer tracking and the mount flag.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod mount {
    include!("../src/mount.rs");
}

use input::PointerState;
use mount::MountFlag;

#[test]
fn deltas_accumulate_only_while_down() {
    let mut ps = PointerState::default();
    ps.move_to(10.0, 10.0);
    assert_eq!(ps.take_delta(), (0.0, 0.0), "hover must not rotate the globe");

    ps.begin(10.0, 10.0);
    ps.move_to(14.0, 7.0);
    ps.move_to(20.0, 7.0);
    assert_eq!(ps.take_delta(), (10.0, -3.0));

    ps.end();
    ps.move_to(100.0, 100.0);
    assert_eq!(ps.take_delta(), (0.0, 0.0));
}

#[test]
fn take_delta_drains() {
    let mut ps = PointerState::default();
    ps.begin(0.0, 0.0);
    ps.move_to(5.0, 5.0);
    assert_eq!(ps.take_delta(), (5.0, 5.0));
    assert_eq!(ps.take_delta(), (0.0, 0.0), "deltas must not be double counted");
}

#[test]
fn drag_resumes_from_the_new_contact_point() {
    let mut ps = PointerState::default();
    ps.begin(0.0, 0.0);
    ps.move_to(10.0, 0.0);
    ps.end();
    let _ = ps.take_delta();

    // A new press elsewhere must not count the travel in between.
    ps.begin(50.0, 50.0);
    ps.move_to(51.0, 50.0);
    assert_eq!(ps.take_delta(), (1.0, 0.0));
}

#[test]
fn unmount_is_idempotent() {
    let flag = MountFlag::mounted();
    assert!(flag.is_mounted());
    assert!(flag.unmount(), "first unmount performs the transition");
    assert!(!flag.unmount(), "second unmount is a no-op");
    assert!(!flag.unmount());
    assert!(!flag.is_mounted());
}

#[test]
fn mount_flag_is_shared_between_clones() {
    let flag = MountFlag::mounted();
    let seen_by_loop = flag.clone();
    assert!(seen_by_loop.is_mounted());
    flag.unmount();
    assert!(
        !seen_by_loop.is_mounted(),
        "the frame loop must observe teardown through its clone"
    );
}
