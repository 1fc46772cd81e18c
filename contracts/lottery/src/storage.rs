use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, Map};

use crate::constants::{
    INSTANCE_BUMP_LEDGERS, INSTANCE_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS,
    PERSISTENT_THRESHOLD_LEDGERS,
};
use crate::entry::EntryToken;
use crate::error::Error;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // --- instance() ---
    State,
    // --- persistent() ---
    Entry(u32),
}

/// Deploy-time settings. Everything except `metadata` is fixed for the life
/// of the contract.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LotteryConfig {
    pub operator: Address,
    pub service_account_a: Address,
    pub service_account_b: Address,
    pub payment_token: Address,
    pub entry_template: BytesN<32>,
    pub metadata: Bytes,
}

/// The lottery singleton.
///
/// `draw_time == 0` means no sale window is open; `entry_price`,
/// `coin_prize_count` and `prize_index` only describe the current cycle while
/// it is nonzero. `total_entries` never goes back, so entry indices stay
/// unique across cycles.
#[derive(Clone, Debug)]
#[contracttype]
pub struct LotteryState {
    pub operator: Address,
    pub service_account_a: Address,
    pub service_account_b: Address,
    pub payment_token: Address,
    pub entry_template: BytesN<32>,
    pub metadata: Bytes,
    pub total_entries: u32,
    pub draw_time: u64,
    pub entry_price: i128,
    pub active_entries: u32,
    pub coin_prize_count: u32,
    pub prize_index: Map<u32, Address>,
}

impl LotteryState {
    pub fn new(env: &Env, config: LotteryConfig) -> Self {
        Self {
            operator: config.operator,
            service_account_a: config.service_account_a,
            service_account_b: config.service_account_b,
            payment_token: config.payment_token,
            entry_template: config.entry_template,
            metadata: config.metadata,
            total_entries: 0,
            draw_time: 0,
            entry_price: 0,
            active_entries: 0,
            coin_prize_count: 0,
            prize_index: Map::new(env),
        }
    }

    pub fn is_active(&self) -> bool {
        self.draw_time != 0
    }

    /// Index of the first entry taking part in the current cycle.
    pub fn first_active_index(&self) -> u32 {
        self.total_entries - self.active_entries
    }

    pub fn config(&self) -> LotteryConfig {
        LotteryConfig {
            operator: self.operator.clone(),
            service_account_a: self.service_account_a.clone(),
            service_account_b: self.service_account_b.clone(),
            payment_token: self.payment_token.clone(),
            entry_template: self.entry_template.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn read_state(env: &Env) -> Result<LotteryState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn write_state(env: &Env, state: &LotteryState) {
    env.storage().instance().set(&DataKey::State, state);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

pub fn read_entry(env: &Env, index: u32) -> Option<EntryToken> {
    let key = DataKey::Entry(index);
    let entry = env.storage().persistent().get(&key);
    if entry.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_THRESHOLD_LEDGERS,
            PERSISTENT_BUMP_LEDGERS,
        );
    }
    entry
}

pub fn write_entry(env: &Env, entry: &EntryToken) {
    let key = DataKey::Entry(entry.index);
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
