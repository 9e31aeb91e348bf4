use crate::{Grostl256, Grostl512, Hash};

#[test]
fn empty_input_256() {
    let expected = hex::decode("1a52d11d550039be16107f9c58db9ebcc417f16f736adb2502567119f0083467").unwrap();
    assert_eq!(Grostl256::default().hash(b"").to_vec(), expected);
}

#[test]
fn empty_input_512() {
    let expected = hex::decode(
        "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8",
    )
    .unwrap();
    assert_eq!(Grostl512::default().hash(b"").to_vec(), expected);
}

#[test]
fn known_answer_abc_256() {
    let expected = hex::decode("f3c1bb19c048801326a7efbcf16e3d7887446249829c379e1840d1a3a1e7d4d2").unwrap();
    assert_eq!(Grostl256::default().hash(b"abc").to_vec(), expected);
}

#[test]
fn known_answer_million_a_256() {
    let message = vec![0x61u8; 1_000_000];
    let expected = hex::decode("a43cb4311fb1b53e2b207b1345e4e81c4279cf7afc9531ef10fb9edf4e705daf").unwrap();
    assert_eq!(Grostl256::default().hash(&message).to_vec(), expected);
}

#[test]
fn digest_length_matches_hashbitlen_for_every_variant() {
    assert_eq!(crate::sum_224(b"whatever").len(), 28);
    assert_eq!(crate::sum_256(b"whatever").len(), 32);
    assert_eq!(crate::sum_384(b"whatever").len(), 48);
    assert_eq!(crate::sum_512(b"whatever").len(), 64);
}

#[test]
fn incremental_writes_match_one_shot() {
    let message = b"the quick brown fox jumps over the lazy dog";

    let mut incremental = Grostl256::default();
    for chunk in message.chunks(7) {
        incremental.write(chunk);
    }

    assert_eq!(incremental.sum(), crate::sum_256(message));
}

#[test]
fn sum_does_not_mutate_the_digest() {
    let mut digest = Grostl256::default();
    digest.write(b"partial");

    let first = digest.sum();
    let second = digest.sum();
    assert_eq!(first, second, "sum() must not consume or mutate the digest");

    digest.write(b" message");
    assert_eq!(digest.sum(), crate::sum_256(b"partial message"));
}

#[test]
fn reset_returns_the_digest_to_its_initial_state() {
    let mut digest = Grostl256::default();
    digest.write(b"some bytes that are not going to matter");
    digest.reset();
    digest.write(b"abc");

    assert_eq!(digest.sum(), crate::sum_256(b"abc"));
}

#[test]
fn every_split_point_around_a_block_boundary_agrees_with_the_one_shot_digest() {
    let block_size = Grostl256::default().block_size();
    let message: Vec<u8> = (0..3 * block_size).map(|i| (i % 256) as u8).collect();
    let expected = crate::sum_256(&message);

    for split in 0..=message.len() {
        let (first, second) = message.split_at(split);
        let mut digest = Grostl256::default();
        digest.write(first);
        digest.write(second);
        assert_eq!(digest.sum(), expected, "mismatch for split point {split}");
    }
}

#[test]
fn long_variant_handles_multi_block_input() {
    let message = vec![0x61u8; 1000];
    let mut incremental = Grostl512::default();
    for chunk in message.chunks(37) {
        incremental.write(chunk);
    }
    assert_eq!(incremental.sum(), crate::sum_512(&message));
}
