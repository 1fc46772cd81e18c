#![no_std]
//! Lottery contract.
//!
//! The operator opens a sale window with `start_lottery`; anyone can then buy
//! sequentially numbered entries with `buy_tickets`. `draw` picks distinct
//! winners for the jackpot, the coin prizes and the collectible prizes, pays
//! them, splits the rest of the pool with the two service accounts and closes
//! the window so the next cycle can start.

use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Bytes, Env, Vec};

mod constants;
mod entry;
mod error;
mod events;
mod lifecycle;
mod outbox;
mod payout;
mod prize_index;
mod sale;
mod selector;
mod storage;

pub use constants::{
    MAX_COIN_PRIZES, MAX_NFT_PRIZES, MAX_OUTBOUND_MESSAGES, MIN_TIMER, OPERATING_RESERVE,
};
pub use entry::EntryToken;
pub use error::Error;
pub use payout::{DrawReceipt, PrizeSplit};
pub use prize_index::{Collectible, CollectibleClient};
pub use sale::Purchase;
pub use storage::LotteryConfig;

use storage::{read_entry, read_state};

#[contract]
pub struct Lottery;

/// Snapshot returned by `get_lottery_data`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LotteryData {
    pub draw_time: u64,
    pub entry_price: i128,
    pub prize_pool: i128,
    pub active_entries: u32,
    pub coin_prize_count: u32,
    pub collectible_prizes: Vec<Address>,
}

#[contractimpl]
impl Lottery {
    pub fn init(env: Env, config: LotteryConfig) -> Result<(), Error> {
        lifecycle::initialize(&env, config)
    }

    /// Opens a sale window of `timer` seconds. Operator only.
    pub fn start_lottery(
        env: Env,
        caller: Address,
        timer: u64,
        entry_price: i128,
        coin_prize_count: u32,
        prize_list: Vec<Address>,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let mut state = read_state(&env)?;
        lifecycle::configure_and_start(
            &env,
            &mut state,
            &caller,
            timer,
            entry_price,
            coin_prize_count,
            &prize_list,
        )?;
        Ok(state.draw_time)
    }

    pub fn buy_tickets(
        env: Env,
        buyer: Address,
        quantity: u32,
        payment: i128,
    ) -> Result<Purchase, Error> {
        buyer.require_auth();
        let mut state = read_state(&env)?;
        sale::buy(&env, &mut state, &buyer, quantity, payment)
    }

    /// Settles the current cycle. Anyone may call it once a window is open.
    pub fn draw(env: Env, caller: Address) -> Result<DrawReceipt, Error> {
        caller.require_auth();
        let mut state = read_state(&env)?;
        payout::draw(&env, &mut state, &caller)
    }

    pub fn change_content(env: Env, caller: Address, metadata: Bytes) -> Result<(), Error> {
        caller.require_auth();
        let mut state = read_state(&env)?;
        lifecycle::change_content(&env, &mut state, &caller, metadata)?;
        log!(&env, "content changed");
        Ok(())
    }

    pub fn get_lottery_data(env: Env) -> Result<LotteryData, Error> {
        let state = read_state(&env)?;
        Ok(LotteryData {
            draw_time: state.draw_time,
            entry_price: state.entry_price,
            prize_pool: payout::prize_pool(&env, &state),
            active_entries: state.active_entries,
            coin_prize_count: state.coin_prize_count,
            collectible_prizes: prize_index::prizes(&state.prize_index),
        })
    }

    pub fn get_entry_address_by_index(env: Env, index: u32) -> Result<Address, Error> {
        let state = read_state(&env)?;
        Ok(entry::derive_entry_address(
            &env,
            &state.entry_template,
            index,
        ))
    }

    pub fn get_entry_data(env: Env, index: u32) -> Result<EntryToken, Error> {
        read_entry(&env, index).ok_or(Error::EntryNotFound)
    }

    pub fn get_entry_draw_time(env: Env, index: u32) -> Result<u64, Error> {
        Ok(read_entry(&env, index).ok_or(Error::EntryNotFound)?.draw_time)
    }

    pub fn get_total_entries(env: Env) -> Result<u32, Error> {
        Ok(read_state(&env)?.total_entries)
    }

    pub fn is_active(env: Env) -> Result<bool, Error> {
        Ok(read_state(&env)?.is_active())
    }

    pub fn get_metadata(env: Env) -> Result<Bytes, Error> {
        Ok(read_state(&env)?.metadata)
    }

    pub fn get_config(env: Env) -> Result<LotteryConfig, Error> {
        Ok(read_state(&env)?.config())
    }
}
