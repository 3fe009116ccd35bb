use anchor_lang::prelude::*;

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecorded {
    pub raffle_id: u64,
    pub participant: Pubkey,
    pub amount: u64,
    pub entrant_count: u64,
    pub pool: u64,
}

/// Picked up by the oracle network. `authority` + `raffle_id` locate the raffle PDA to call back.
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWordsRequested {
    pub authority: Pubkey,
    pub raffle_id: u64,
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerPicked {
    pub raffle_id: u64,
    pub request_id: u64,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
    pub round: u64,
}
