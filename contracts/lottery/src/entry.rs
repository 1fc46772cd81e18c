use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env};

/// One purchased lottery entry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EntryToken {
    pub index: u32,
    pub collection: Address,
    pub owner: Address,
    /// Draw time of the cycle the entry was bought in.
    pub draw_time: u64,
}

/// Address of the entry token with the given index.
///
/// Derived the same way the host derives a child contract address, salted with
/// `sha256(template ‖ index)`, so it can be recomputed on demand and is never
/// stored.
pub fn derive_entry_address(env: &Env, template: &BytesN<32>, index: u32) -> Address {
    let mut preimage: Bytes = template.clone().into();
    preimage.extend_from_array(&index.to_be_bytes());
    let salt: BytesN<32> = env.crypto().sha256(&preimage).to_bytes();
    env.deployer().with_current_contract(salt).deployed_address()
}
