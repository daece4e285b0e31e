//! Stable hashing for [`RedirectSpec`](super::RedirectSpec).
//!
//! `std::hash::Hash` output may change between toolchains, so values that end
//! up in persisted cache keys go through this polynomial instead.

const PRIME: u64 = 31;

pub(super) fn str_hash(s: &str) -> u64 {
    s.bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(PRIME).wrapping_add(u64::from(b)))
}

/// Order-sensitive: swapping two fields changes the result.
pub(super) fn combine<const N: usize>(fields: [&str; N]) -> u64 {
    fields
        .iter()
        .fold(1u64, |acc, f| acc.wrapping_mul(PRIME).wrapping_add(str_hash(f)))
}
