use soroban_sdk::{contracttype, token, Address, Env, String, Vec};

use crate::constants::{MAX_OUTBOUND_MESSAGES, OP_OWNERSHIP_ASSIGNED};
use crate::error::Error;
use crate::events::{LotteryDrawn, OwnershipAssigned};
use crate::prize_index::CollectibleClient;

/// An outbound effect queued by a request.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Message {
    /// Currency transfer out of the lottery: recipient, amount.
    Pay(Address, i128),
    /// Ownership notification for a freshly minted entry: owner, index.
    AssignEntry(Address, u32),
    /// Collectible handover: prize contract, recipient.
    SendCollectible(Address, Address),
    /// Draw acknowledgment: caller, prize pool, number of winners.
    Acknowledge(Address, i128, u32),
}

/// Bounded, all-or-nothing fan-out.
///
/// The request states up front how many messages it will emit; `plan` rejects
/// anything above `MAX_OUTBOUND_MESSAGES` before the request has touched any
/// state. Messages are only queued until `dispatch`, which runs last.
pub struct Outbox<'a> {
    env: &'a Env,
    planned: u32,
    messages: Vec<Message>,
}

impl<'a> Outbox<'a> {
    pub fn plan(env: &'a Env, planned: u32) -> Result<Self, Error> {
        if planned > MAX_OUTBOUND_MESSAGES {
            return Err(Error::ResourceBudgetExceeded);
        }
        Ok(Self {
            env,
            planned,
            messages: Vec::new(env),
        })
    }

    pub fn push(&mut self, message: Message) -> Result<(), Error> {
        if self.messages.len() >= self.planned {
            return Err(Error::ResourceBudgetExceeded);
        }
        self.messages.push_back(message);
        Ok(())
    }

    /// Emits every queued message in order and returns how many were sent.
    pub fn dispatch(self, payment_token: &Address) -> u32 {
        let env = self.env;
        let lottery = env.current_contract_address();
        let token_client = token::Client::new(env, payment_token);
        let query_id = env.ledger().sequence() as u64;

        for message in self.messages.iter() {
            match message {
                Message::Pay(to, amount) => {
                    token_client.transfer(&lottery, &to, &amount);
                }
                Message::AssignEntry(owner, index) => {
                    OwnershipAssigned {
                        owner,
                        op: OP_OWNERSHIP_ASSIGNED,
                        query_id,
                        prev_owner: lottery.clone(),
                        index,
                    }
                    .publish(env);
                }
                Message::SendCollectible(prize, to) => {
                    CollectibleClient::new(env, &prize).transfer(&lottery, &to);
                }
                Message::Acknowledge(caller, prize_pool, winners) => {
                    LotteryDrawn {
                        caller,
                        message: String::from_str(env, "Successfully drawn"),
                        prize_pool,
                        winners,
                    }
                    .publish(env);
                }
            }
        }

        self.messages.len()
    }
}
