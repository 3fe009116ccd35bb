// Centralized Raffle Constants

// Randomness request shape
// ========================

/// Block confirmations the oracle waits for before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per round. Only the first one picks the winner.
pub const NUM_WORDS: u32 = 1;

// Capacity
// ========

/// Maximum number of entries a single round can hold.
/// The raffle account is sized for this many `Pubkey`s at creation time.
pub const MAX_ENTRANTS: usize = 200;

// Defaults (local / devnet)
// =========================

/// 0.01 SOL in lamports.
pub const DEFAULT_ENTRANCE_FEE: u64 = 10_000_000;

/// Seconds that must pass between two draws.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Compute budget granted to the oracle callback.
pub const DEFAULT_CALLBACK_GAS_LIMIT: u32 = 500_000;

/// Gas lane the oracle answers on. Irrelevant for local runs where the oracle is mocked.
pub const DEFAULT_KEY_HASH: [u8; 32] = [
    0xd8, 0x9b, 0x2b, 0xf1, 0x50, 0xe3, 0xb9, 0xe1, 0x34, 0x46, 0x98, 0x6e, 0x57, 0x1f, 0xb9,
    0xca, 0xb2, 0x4b, 0x13, 0xce, 0xa0, 0xa4, 0x3e, 0xa2, 0x0a, 0x60, 0x49, 0xa8, 0x6c, 0xc8,
    0x07, 0xcc,
];

/// Initial version for account structures.
pub const INITIAL_VERSION: u16 = 1;
