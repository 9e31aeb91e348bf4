use crate::hash::groestl::sbox::{mul2, mul3};

#[test]
fn mul2_matches_known_products() {
    // 0x57 * 0x02 = 0xae, a standard worked example from FIPS 197.
    assert_eq!(mul2(0x57), 0xae);
}

#[test]
fn mul3_matches_known_products() {
    // 0x57 * 0x13 is the FIPS 197 example for general multiplication;
    // mul3 alone is checked against its definition instead.
    assert_eq!(mul3(0x57), mul2(0x57) ^ 0x57);
}
