use soroban_sdk::{contractclient, Address, Env, Map, Vec};

use crate::constants::MAX_NFT_PRIZES;
use crate::error::Error;

/// Builds the collectible prize index `{0 → list[0], 1 → list[1], ...}`.
pub fn build(env: &Env, prize_list: &Vec<Address>) -> Result<Map<u32, Address>, Error> {
    if prize_list.len() > MAX_NFT_PRIZES {
        return Err(Error::TooManyCollectiblePrizes);
    }

    let mut index = Map::new(env);
    for (slot, prize) in prize_list.iter().enumerate() {
        index.set(slot as u32, prize);
    }
    Ok(index)
}

/// Prize addresses in index order.
pub fn prizes(index: &Map<u32, Address>) -> Vec<Address> {
    index.values()
}

/// Interface the draw uses to hand a pre-funded collectible to its winner.
/// The lottery must own the collectible when the draw runs.
#[contractclient(name = "CollectibleClient")]
pub trait Collectible {
    fn transfer(env: Env, from: Address, to: Address);
}
