/// Shortest sale window accepted by `start_lottery`, in seconds.
pub const MIN_TIMER: u64 = 3_600;

/// Collectible prizes per cycle. Together with `MAX_COIN_PRIZES` this keeps a
/// draw's fan-out under `MAX_OUTBOUND_MESSAGES`.
pub const MAX_NFT_PRIZES: u32 = 50;

/// Currency prizes per cycle.
pub const MAX_COIN_PRIZES: u32 = 150;

/// Upper bound on outbound effects a single request may emit.
pub const MAX_OUTBOUND_MESSAGES: u32 = 255;

/// Messages every draw sends besides the per-prize ones:
/// two service accounts, the jackpot and the acknowledgment to the caller.
pub const DRAW_FIXED_MESSAGES: u32 = 4;

/// Balance kept back at settlement to pay for future messages
/// (0.1 of a 7-decimal asset).
pub const OPERATING_RESERVE: i128 = 1_000_000;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Shares of the winners' half of the pool. Whatever is left after the
/// jackpot and coin prizes goes to service account B.
pub const JACKPOT_SHARE_BPS: i128 = 6_000;
pub const COIN_PRIZES_SHARE_BPS: i128 = 3_000;

/// Op code carried by ownership-assignment notifications.
pub const OP_OWNERSHIP_ASSIGNED: u32 = 0x0513_8d91;

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;
