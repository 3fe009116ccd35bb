// Raffle state machine: OPEN --(perform_upkeep, due)--> CALCULATING --(fulfill)--> OPEN
//
// Each file adds one `impl Raffle` block:
//   ledger.rs     entries
//   upkeep.rs     due check
//   requestor.rs  randomness request (AutomationTrigger)
//   settlement.rs oracle callback + payout (RandomnessConsumer)

use anchor_lang::prelude::*;

use crate::{
    constants::INITIAL_VERSION,
    errors::RaffleError,
    state::{Raffle, RaffleParams, RaffleState, RaffleSummary},
};

pub mod ledger;
pub mod requestor;
pub mod settlement;
pub mod upkeep;

#[cfg(test)]
pub(crate) mod testing;

pub use upkeep::UpkeepStatus;

impl Raffle {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        raffle_id: u64,
        bump: u8,
        params: &RaffleParams,
        min_entrance_fee: u64,
        now: i64,
    ) -> Result<()> {
        require!(params.oracle != Pubkey::default(), RaffleError::OracleNotSet);
        // A prize below the rent-exempt floor cannot open a closed winner account.
        require!(
            params.entrance_fee > 0 && params.entrance_fee >= min_entrance_fee,
            RaffleError::InvalidEntranceFee
        );
        require!(params.interval > 0, RaffleError::InvalidInterval);
        require!(params.callback_gas_limit > 0, RaffleError::InvalidCallbackGasLimit);

        self.authority = authority;
        self.raffle_id = raffle_id;
        self.bump = bump;

        self.oracle = params.oracle;
        self.entrance_fee = params.entrance_fee;
        self.key_hash = params.key_hash;
        self.subscription_id = params.subscription_id;
        self.callback_gas_limit = params.callback_gas_limit;
        self.interval = params.interval;

        self.state = RaffleState::Open;
        self.entrants = Vec::new();
        self.pool = 0;
        self.pending_request = None;
        self.request_nonce = 0;

        self.last_timestamp = now;
        self.recent_winner = Pubkey::default();
        self.rounds_completed = 0;

        self.created_at = now;
        self.version = INITIAL_VERSION;

        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.state == RaffleState::Open
    }

    pub fn entrant_count(&self) -> u64 {
        self.entrants.len() as u64
    }

    pub fn entrant(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entrants.get(i))
            .copied()
            .ok_or_else(|| error!(RaffleError::EntrantIndexOutOfBounds))
    }

    pub fn summary(&self, now: i64) -> RaffleSummary {
        RaffleSummary {
            state: self.state,
            entrance_fee: self.entrance_fee,
            interval: self.interval,
            entrant_count: self.entrant_count(),
            pool: self.pool,
            recent_winner: self.recent_winner,
            last_timestamp: self.last_timestamp,
            pending_request: self.pending_request,
            rounds_completed: self.rounds_completed,
            upkeep_needed: self.is_due(now),
        }
    }
}
