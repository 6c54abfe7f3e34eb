//! Content hashing for the hash tool.
//!
//! Thin dispatch over the RustCrypto digests. Output is lowercase hex.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

use crate::types::HashAlgorithm;

/// Compute the hex digest of `data` with the given algorithm.
///
/// Total and deterministic: every algorithm accepts every input.
pub fn digest_hex(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Md5 => sum::<Md5>(data),
        HashAlgorithm::Sha1 => sum::<Sha1>(data),
        HashAlgorithm::Sha224 => sum::<Sha224>(data),
        HashAlgorithm::Sha256 => sum::<Sha256>(data),
        HashAlgorithm::Sha384 => sum::<Sha384>(data),
        HashAlgorithm::Sha512_224 => sum::<Sha512_224>(data),
        HashAlgorithm::Sha512_256 => sum::<Sha512_256>(data),
        HashAlgorithm::Sha512 => sum::<Sha512>(data),
    }
}

fn sum<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_of_abc() {
        assert_eq!(
            digest_hex(HashAlgorithm::Md5, b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn sha1_of_abc() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha1, b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn sha256_of_abc() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha512_256_of_abc() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha512_256, b"abc"),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn md5_of_empty_input() {
        assert_eq!(
            digest_hex(HashAlgorithm::Md5, b""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn every_algorithm_is_deterministic_with_fixed_length() {
        for algorithm in HashAlgorithm::ALL {
            let a = digest_hex(algorithm, b"hello world");
            let b = digest_hex(algorithm, b"hello world");
            assert_eq!(a, b, "{} not deterministic", algorithm.label());
            assert_eq!(a.len(), algorithm.hex_len(), "{}", algorithm.label());
            assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn different_input_different_digest() {
        assert_ne!(
            digest_hex(HashAlgorithm::Sha256, b"content A"),
            digest_hex(HashAlgorithm::Sha256, b"content B")
        );
    }
}
