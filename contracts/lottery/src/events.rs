use soroban_sdk::{contractevent, Address, Bytes, String, Vec};

#[contractevent(topics = ["LotteryInitialized"])]
#[derive(Clone)]
pub struct LotteryInitialized {
    pub operator: Address,
    pub service_account_a: Address,
    pub service_account_b: Address,
    pub payment_token: Address,
}

#[contractevent(topics = ["LotteryStarted"])]
#[derive(Clone)]
pub struct LotteryStarted {
    pub draw_time: u64,
    pub entry_price: i128,
    pub coin_prize_count: u32,
    pub collectible_prizes: Vec<Address>,
}

#[contractevent(topics = ["TicketsPurchased"])]
#[derive(Clone)]
pub struct TicketsPurchased {
    #[topic]
    pub buyer: Address,
    pub first_index: u32,
    pub quantity: u32,
    pub total_paid: i128,
}

/// Notification to the new owner of an entry token.
#[contractevent(topics = ["OwnershipAssigned"])]
#[derive(Clone)]
pub struct OwnershipAssigned {
    #[topic]
    pub owner: Address,
    pub op: u32,
    pub query_id: u64,
    pub prev_owner: Address,
    pub index: u32,
}

/// Acknowledgment sent to whoever triggered the draw.
#[contractevent(topics = ["LotteryDrawn"])]
#[derive(Clone)]
pub struct LotteryDrawn {
    #[topic]
    pub caller: Address,
    pub message: String,
    pub prize_pool: i128,
    pub winners: u32,
}

#[contractevent(topics = ["ContentChanged"])]
#[derive(Clone)]
pub struct ContentChanged {
    pub metadata: Bytes,
}
