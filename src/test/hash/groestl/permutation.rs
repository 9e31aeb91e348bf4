use crate::hash::groestl::{permutation::permute, round::Variant};

#[test]
fn permute_short_and_long_run_without_panicking() {
    let mut short = [0u64; 8];
    permute(&mut short, 10, Variant::P);
    permute(&mut short, 10, Variant::Q);

    let mut long = [0u64; 16];
    permute(&mut long, 14, Variant::P);
    permute(&mut long, 14, Variant::Q);
}

#[test]
fn permute_is_deterministic() {
    let input = [1u64, 2, 3, 4, 5, 6, 7, 8];
    let mut a = input;
    let mut b = input;
    permute(&mut a, 10, Variant::P);
    permute(&mut b, 10, Variant::P);
    assert_eq!(a, b);
}

#[test]
fn p_and_q_diverge_on_the_same_input() {
    let input = [1u64, 2, 3, 4, 5, 6, 7, 8];
    let mut p = input;
    let mut q = input;
    permute(&mut p, 10, Variant::P);
    permute(&mut q, 10, Variant::Q);
    assert_ne!(p, q);
}
