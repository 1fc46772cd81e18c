use soroban_sdk::{contracttype, log, token, Address, Env};

use crate::entry::EntryToken;
use crate::error::Error;
use crate::events::TicketsPurchased;
use crate::outbox::{Message, Outbox};
use crate::storage::{write_entry, write_state, LotteryState};

/// Outcome of a successful purchase: entries `first_index..first_index + quantity`
/// now belong to the buyer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub first_index: u32,
    pub quantity: u32,
    pub notifications: u32,
}

/// Mints `quantity` sequential entries for `buyer` against `payment`.
///
/// The whole payment is kept; anything above `quantity * entry_price` stays
/// in the pool.
pub fn buy(
    env: &Env,
    state: &mut LotteryState,
    buyer: &Address,
    quantity: u32,
    payment: i128,
) -> Result<Purchase, Error> {
    if !state.is_active() {
        return Err(Error::NotActive);
    }
    if quantity == 0 {
        return Err(Error::InvalidQuantity);
    }
    let mut outbox = Outbox::plan(env, quantity)?;

    let required = state
        .entry_price
        .checked_mul(quantity as i128)
        .ok_or(Error::ArithmeticOverflow)?;
    if payment < required {
        return Err(Error::InsufficientPayment);
    }

    let first_index = state.total_entries;
    let total_entries = first_index
        .checked_add(quantity)
        .ok_or(Error::ArithmeticOverflow)?;
    let active_entries = state
        .active_entries
        .checked_add(quantity)
        .ok_or(Error::ArithmeticOverflow)?;

    let lottery = env.current_contract_address();
    token::Client::new(env, &state.payment_token).transfer(buyer, &lottery, &payment);

    for index in first_index..total_entries {
        write_entry(
            env,
            &EntryToken {
                index,
                collection: lottery.clone(),
                owner: buyer.clone(),
                draw_time: state.draw_time,
            },
        );
        outbox.push(Message::AssignEntry(buyer.clone(), index))?;
    }

    state.total_entries = total_entries;
    state.active_entries = active_entries;
    write_state(env, state);

    TicketsPurchased {
        buyer: buyer.clone(),
        first_index,
        quantity,
        total_paid: payment,
    }
    .publish(env);

    let notifications = outbox.dispatch(&state.payment_token);

    log!(
        env,
        "tickets purchased: buyer={} first={} quantity={} active={}",
        buyer,
        first_index,
        quantity,
        active_entries
    );

    Ok(Purchase {
        first_index,
        quantity,
        notifications,
    })
}
