use soroban_sdk::{contracttype, log, token, Address, Env, Vec};

use crate::constants::{
    BPS_DENOMINATOR, COIN_PRIZES_SHARE_BPS, DRAW_FIXED_MESSAGES, JACKPOT_SHARE_BPS,
    OPERATING_RESERVE,
};
use crate::entry::EntryToken;
use crate::error::Error;
use crate::outbox::{Message, Outbox};
use crate::prize_index;
use crate::selector::select_distinct;
use crate::storage::{read_entry, write_state, LotteryState};

/// How a prize pool is divided. The four parts always add up to the pool.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PrizeSplit {
    pub service_a: i128,
    pub service_b: i128,
    pub jackpot: i128,
    /// Paid to each coin-prize winner.
    pub coin_prize: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DrawReceipt {
    pub prize_pool: i128,
    pub split: PrizeSplit,
    /// Winning entry indices: jackpot first, then coin prizes, then
    /// collectibles in prize index order.
    pub winning_indices: Vec<u32>,
    pub jackpot_winner: Address,
    pub coin_winners: Vec<Address>,
    pub collectible_winners: Vec<Address>,
    pub messages: u32,
}

/// Balance available for settlement: everything above the operating reserve.
pub fn prize_pool(env: &Env, state: &LotteryState) -> i128 {
    let balance =
        token::Client::new(env, &state.payment_token).balance(&env.current_contract_address());
    balance.saturating_sub(OPERATING_RESERVE).max(0)
}

/// Half of the pool goes to service account A. Of the other half the jackpot
/// takes `JACKPOT_SHARE_BPS`, the coin prizes share `COIN_PRIZES_SHARE_BPS`
/// equally, and service account B receives the rest including rounding dust.
pub fn split_pool(prize_pool: i128, coin_prize_count: u32) -> Result<PrizeSplit, Error> {
    let service_a = prize_pool / 2;
    let winners_half = prize_pool - service_a;

    let jackpot = winners_half
        .checked_mul(JACKPOT_SHARE_BPS)
        .ok_or(Error::ArithmeticOverflow)?
        / BPS_DENOMINATOR;

    let coin_prize = if coin_prize_count == 0 {
        0
    } else {
        winners_half
            .checked_mul(COIN_PRIZES_SHARE_BPS)
            .ok_or(Error::ArithmeticOverflow)?
            / BPS_DENOMINATOR
            / coin_prize_count as i128
    };

    let service_b = winners_half - jackpot - coin_prize * coin_prize_count as i128;

    Ok(PrizeSplit {
        service_a,
        service_b,
        jackpot,
        coin_prize,
    })
}

/// Settles the current cycle and closes its sale window.
///
/// Winners are resolved to entry owners before any message is queued, so a
/// draw either pays everyone or nobody.
pub fn draw(env: &Env, state: &mut LotteryState, caller: &Address) -> Result<DrawReceipt, Error> {
    if !state.is_active() {
        return Err(Error::NotActive);
    }

    let collectibles = prize_index::prizes(&state.prize_index);
    let prize_count = state
        .coin_prize_count
        .checked_add(collectibles.len())
        .ok_or(Error::ArithmeticOverflow)?;
    let winner_count = prize_count + 1;
    let mut outbox = Outbox::plan(env, DRAW_FIXED_MESSAGES + prize_count)?;

    let seed: u64 = env.prng().gen();
    let offsets = select_distinct(env, seed, state.active_entries, winner_count)?;

    let first_active = state.first_active_index();
    let mut winning_indices: Vec<u32> = Vec::new(env);
    let mut winners: Vec<EntryToken> = Vec::new(env);
    for offset in offsets.iter() {
        let index = first_active + offset;
        let entry = read_entry(env, index).ok_or(Error::EntryNotFound)?;
        winning_indices.push_back(index);
        winners.push_back(entry);
    }

    let pool = prize_pool(env, state);
    let split = split_pool(pool, state.coin_prize_count)?;

    outbox.push(Message::Pay(state.service_account_a.clone(), split.service_a))?;
    outbox.push(Message::Pay(state.service_account_b.clone(), split.service_b))?;

    let mut winners = winners.iter();
    let jackpot_winner = winners.next().ok_or(Error::EntryNotFound)?.owner;
    outbox.push(Message::Pay(jackpot_winner.clone(), split.jackpot))?;

    let mut coin_winners: Vec<Address> = Vec::new(env);
    for _ in 0..state.coin_prize_count {
        let owner = winners.next().ok_or(Error::EntryNotFound)?.owner;
        outbox.push(Message::Pay(owner.clone(), split.coin_prize))?;
        coin_winners.push_back(owner);
    }

    let mut collectible_winners: Vec<Address> = Vec::new(env);
    for prize in collectibles.iter() {
        let owner = winners.next().ok_or(Error::EntryNotFound)?.owner;
        outbox.push(Message::SendCollectible(prize, owner.clone()))?;
        collectible_winners.push_back(owner);
    }

    outbox.push(Message::Acknowledge(caller.clone(), pool, winner_count))?;

    state.draw_time = 0;
    write_state(env, state);

    let messages = outbox.dispatch(&state.payment_token);

    log!(
        env,
        "lottery drawn: pool={} winners={} messages={}",
        pool,
        winner_count,
        messages
    );

    Ok(DrawReceipt {
        prize_pool: pool,
        split,
        winning_indices,
        jackpot_winner,
        coin_winners,
        collectible_winners,
        messages,
    })
}
