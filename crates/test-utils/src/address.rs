//! Address generators.

use nor_primitives::address::{Address, ADDRESS_SIZE};
use proptest::prelude::*;
use sha2::{Digest, Sha256};

/// Derives a stable, non-zero address from a human readable seed.
///
/// The same seed always yields the same address, which keeps expectations in tests readable:
/// `certain_address("node-operator-1")`.
pub fn certain_address(seed: &str) -> Address {
    let digest = Sha256::digest(seed.as_bytes());

    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&digest[digest.len() - ADDRESS_SIZE..]);
    if bytes.iter().all(|b| *b == 0) {
        bytes[ADDRESS_SIZE - 1] = 1;
    }

    Address::new(bytes)
}

/// Generates an arbitrary [`Address`], including the null account.
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; ADDRESS_SIZE]>().prop_map(Address::new)
}

/// Generates an arbitrary non-zero [`Address`].
pub fn arb_nonzero_address() -> impl Strategy<Value = Address> {
    arb_address().prop_filter("address must not be zero", |address| !address.is_zero())
}
