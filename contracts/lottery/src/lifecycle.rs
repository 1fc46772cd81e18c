use soroban_sdk::{log, Address, Bytes, Env, Vec};

use crate::constants::{MAX_COIN_PRIZES, MIN_TIMER};
use crate::error::Error;
use crate::events::{ContentChanged, LotteryInitialized, LotteryStarted};
use crate::prize_index;
use crate::storage::{has_state, write_state, LotteryConfig, LotteryState};

/// Deploy: stores the fixed accounts and leaves the lottery inactive with all
/// counters at zero.
pub fn initialize(env: &Env, config: LotteryConfig) -> Result<(), Error> {
    if has_state(env) {
        return Err(Error::AlreadyInitialized);
    }

    let state = LotteryState::new(env, config);
    write_state(env, &state);

    LotteryInitialized {
        operator: state.operator,
        service_account_a: state.service_account_a,
        service_account_b: state.service_account_b,
        payment_token: state.payment_token,
    }
    .publish(env);

    log!(env, "lottery initialized");
    Ok(())
}

/// Configures a new cycle and opens its sale window.
///
/// Every check runs before the state is touched; the order of the checks
/// decides which error a request violating several of them gets.
pub fn configure_and_start(
    env: &Env,
    state: &mut LotteryState,
    caller: &Address,
    timer: u64,
    entry_price: i128,
    coin_prize_count: u32,
    prize_list: &Vec<Address>,
) -> Result<(), Error> {
    if *caller != state.operator {
        return Err(Error::Unauthorized);
    }
    if state.is_active() {
        return Err(Error::AlreadyActive);
    }
    if timer < MIN_TIMER {
        return Err(Error::TimerTooShort);
    }
    let prize_index = prize_index::build(env, prize_list)?;
    if coin_prize_count > MAX_COIN_PRIZES {
        return Err(Error::TooManyCoinPrizes);
    }
    if entry_price <= 0 {
        return Err(Error::InvalidEntryPrice);
    }
    let draw_time = env
        .ledger()
        .timestamp()
        .checked_add(timer)
        .ok_or(Error::ArithmeticOverflow)?;

    state.draw_time = draw_time;
    state.entry_price = entry_price;
    state.coin_prize_count = coin_prize_count;
    state.prize_index = prize_index;
    state.active_entries = 0;
    write_state(env, state);

    LotteryStarted {
        draw_time,
        entry_price,
        coin_prize_count,
        collectible_prizes: prize_list.clone(),
    }
    .publish(env);

    log!(
        env,
        "lottery started: draw_time={} price={} coin_prizes={} collectibles={}",
        draw_time,
        entry_price,
        coin_prize_count,
        prize_list.len()
    );
    Ok(())
}

pub fn change_content(
    env: &Env,
    state: &mut LotteryState,
    caller: &Address,
    metadata: Bytes,
) -> Result<(), Error> {
    if *caller != state.operator {
        return Err(Error::Unauthorized);
    }

    state.metadata = metadata.clone();
    write_state(env, state);

    ContentChanged { metadata }.publish(env);
    Ok(())
}
