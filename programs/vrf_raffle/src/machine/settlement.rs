use anchor_lang::prelude::*;

use crate::{
    errors::RaffleError,
    events::WinnerPicked,
    interfaces::{PrizeTransfer, RandomnessConsumer},
    state::{Raffle, RaffleState},
    utils::winner_index,
};

impl Raffle {
    /// Oracle callback: picks the winner, resets the round and pays out.
    ///
    /// All-or-nothing. If the payout fails the raffle is restored exactly as it
    /// was, still CALCULATING with the same pending request, so the oracle can
    /// deliver again.
    pub fn fulfill(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        transfer: &mut dyn PrizeTransfer,
    ) -> Result<WinnerPicked> {
        require_keys_eq!(*caller, self.oracle, RaffleError::Unauthorized);
        require!(
            self.pending_request == Some(request_id),
            RaffleError::UnrecognizedRequest
        );
        let word = *random_words
            .first()
            .ok_or_else(|| error!(RaffleError::InsufficientRandomWords))?;

        let index = winner_index(word, self.entrants.len())?;
        let winner = self.entrants[index];
        let prize = self.pool;
        let round = self
            .rounds_completed
            .checked_add(1)
            .ok_or_else(|| error!(RaffleError::MathOverflow))?;

        let prior = self.clone();

        // Effects before the transfer: anything reached from the payout sees a fresh open round.
        self.entrants.clear();
        self.state = RaffleState::Open;
        self.pending_request = None;
        self.last_timestamp = now;
        self.recent_winner = winner;
        self.pool = 0;
        self.rounds_completed = round;

        if let Err(e) = transfer.transfer_prize(self, &winner, prize) {
            msg!("Prize transfer of {} to {} failed: {}", prize, winner, e);
            *self = prior;
            return err!(RaffleError::TransferFailed);
        }

        msg!(
            "Raffle {} round {}: winner {} (index {}) prize {}",
            self.raffle_id,
            round,
            winner,
            index,
            prize
        );

        Ok(WinnerPicked {
            raffle_id: self.raffle_id,
            request_id,
            winner,
            winner_index: index as u64,
            prize,
            round,
        })
    }
}

impl RandomnessConsumer for Raffle {
    fn fulfill_random_words(
        &mut self,
        caller: &Pubkey,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        transfer: &mut dyn PrizeTransfer,
    ) -> Result<WinnerPicked> {
        self.fulfill(caller, request_id, random_words, now, transfer)
    }
}
