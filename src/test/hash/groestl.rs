mod digest;
mod permutation;
mod round;
mod sbox;
