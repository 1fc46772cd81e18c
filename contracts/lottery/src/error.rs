use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- sale and draw ---
    NotActive = 401,
    InsufficientPayment = 402,
    InvalidQuantity = 403,
    InsufficientEntriesForDraw = 404,
    ResourceBudgetExceeded = 405,
    EntryNotFound = 406,

    // --- cycle configuration ---
    Unauthorized = 501,
    AlreadyActive = 502,
    TimerTooShort = 503,
    TooManyCollectiblePrizes = 504,
    TooManyCoinPrizes = 505,
    InvalidEntryPrice = 506,

    // --- contract ---
    ArithmeticOverflow = 601,
    AlreadyInitialized = 602,
    NotInitialized = 603,
}
