//! Proof module: canonical JSON bytes and domain-separated content hashes.
//!
//! Leaf module. Level encoding, action logs and the harness report all hash
//! through here so that digests stay comparable across processes.

pub mod canon;
pub mod hash;
pub mod hash_domain;
