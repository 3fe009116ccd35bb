use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_CALLBACK_GAS_LIMIT, DEFAULT_ENTRANCE_FEE, DEFAULT_INTERVAL_SECS, DEFAULT_KEY_HASH,
    MAX_ENTRANTS,
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RaffleState {
    /// Accepting entries.
    #[default]
    Open,
    /// Randomness requested, waiting for the oracle callback.
    Calculating,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Raffle {
    pub authority: Pubkey,
    pub raffle_id: u64,
    pub bump: u8,

    // Fixed at initialization
    pub oracle: Pubkey,
    pub entrance_fee: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Seconds between the last settlement and the next draw.
    pub interval: u64,

    pub state: RaffleState,

    /// Entries of the current round, in arrival order. A pubkey may appear more than once.
    #[max_len(MAX_ENTRANTS)]
    pub entrants: Vec<Pubkey>,

    /// Lamports collected this round (held by the raffle account above its rent reserve).
    pub pool: u64,

    /// Some(id) exactly while state == Calculating.
    pub pending_request: Option<u64>,
    pub request_nonce: u64,

    pub last_timestamp: i64,
    pub recent_winner: Pubkey,
    pub rounds_completed: u64,

    pub created_at: i64,
    pub version: u16,
}

/// Arguments of `initialize_raffle`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleParams {
    pub oracle: Pubkey,
    pub entrance_fee: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    pub interval: u64,
}

impl RaffleParams {
    pub fn with_defaults(oracle: Pubkey, subscription_id: u64) -> Self {
        Self {
            oracle,
            entrance_fee: DEFAULT_ENTRANCE_FEE,
            key_hash: DEFAULT_KEY_HASH,
            subscription_id,
            callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT,
            interval: DEFAULT_INTERVAL_SECS,
        }
    }
}

/// Everything a client needs to render a raffle, returned by the `raffle_summary` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleSummary {
    pub state: RaffleState,
    pub entrance_fee: u64,
    pub interval: u64,
    pub entrant_count: u64,
    pub pool: u64,
    pub recent_winner: Pubkey,
    pub last_timestamp: i64,
    pub pending_request: Option<u64>,
    pub rounds_completed: u64,
    pub upkeep_needed: bool,
}
