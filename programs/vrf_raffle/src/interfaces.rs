// Capability seams between the raffle and the oracle, keeper and payout.
// On-chain adapters live in adapters.rs; tests plug in fakes.

use anchor_lang::prelude::*;

use crate::{
    events::{RandomWordsRequested, WinnerPicked},
    state::Raffle,
};

/// What the raffle asks the oracle for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub nonce: u64,
}

/// Outbound half of the oracle contract. Returns the correlation token the
/// oracle will quote back in its callback. Must not block on the answer.
pub trait RandomnessService {
    fn request_random_words(&mut self, request: &RandomnessRequest) -> Result<u64>;
}

/// Inbound half of the oracle contract, invoked by the oracle when the words are ready.
pub trait RandomnessConsumer {
    fn fulfill_random_words(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        transfer: &mut dyn PrizeTransfer,
    ) -> Result<WinnerPicked>;
}

/// Two-call contract consumed by the automation network.
pub trait AutomationTrigger {
    /// Side-effect free. May be polled at will.
    fn check_upkeep(&self, now: i64) -> bool;

    /// Re-validates `check_upkeep` before acting.
    fn perform_upkeep(
        &mut self,
        now: i64,
        service: &mut dyn RandomnessService,
    ) -> Result<RandomWordsRequested>;
}

/// Moves the prize to the winner.
///
/// `raffle` is the already-reset aggregate: anything the transfer hook can
/// reach (including a reentrant caller) sees an open, empty round.
pub trait PrizeTransfer {
    fn transfer_prize(&mut self, raffle: &Raffle, winner: &Pubkey, amount: u64) -> Result<()>;
}
