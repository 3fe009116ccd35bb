use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, REQUEST_CONFIRMATIONS},
    errors::RaffleError,
    events::RandomWordsRequested,
    interfaces::{AutomationTrigger, RandomnessRequest, RandomnessService},
    state::{Raffle, RaffleState},
};

impl Raffle {
    pub fn randomness_request(&self, nonce: u64) -> RandomnessRequest {
        RandomnessRequest {
            key_hash: self.key_hash,
            subscription_id: self.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: self.callback_gas_limit,
            num_words: NUM_WORDS,
            nonce,
        }
    }

    /// Closes the round and asks the oracle for randomness.
    /// Returns as soon as the request is recorded; the answer arrives through `fulfill`.
    pub fn trigger(
        &mut self,
        now: i64,
        service: &mut dyn RandomnessService,
    ) -> Result<RandomWordsRequested> {
        // Never trust an earlier check_upkeep read by the caller.
        let status = self.upkeep_status(now);
        if !status.upkeep_needed() {
            msg!("Upkeep not needed: {}", status);
            return Err(error!(RaffleError::UpkeepNotNeeded).with_values((status, "upkeep needed")));
        }

        let nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or_else(|| error!(RaffleError::MathOverflow))?;
        let request = self.randomness_request(nonce);

        // Close the round before the outbound call.
        let prior_nonce = self.request_nonce;
        self.state = RaffleState::Calculating;
        self.request_nonce = nonce;

        let request_id = match service.request_random_words(&request) {
            Ok(id) => id,
            Err(e) => {
                self.state = RaffleState::Open;
                self.request_nonce = prior_nonce;
                return Err(e);
            }
        };
        self.pending_request = Some(request_id);

        msg!(
            "Raffle {} calculating: request_id={} entrants={} pool={}",
            self.raffle_id,
            request_id,
            status.entrant_count,
            status.balance
        );

        Ok(RandomWordsRequested {
            authority: self.authority,
            raffle_id: self.raffle_id,
            request_id,
            key_hash: request.key_hash,
            subscription_id: request.subscription_id,
            request_confirmations: request.request_confirmations,
            callback_gas_limit: request.callback_gas_limit,
            num_words: request.num_words,
            nonce,
        })
    }
}

impl AutomationTrigger for Raffle {
    fn check_upkeep(&self, now: i64) -> bool {
        self.is_due(now)
    }

    fn perform_upkeep(
        &mut self,
        now: i64,
        service: &mut dyn RandomnessService,
    ) -> Result<RandomWordsRequested> {
        self.trigger(now, service)
    }
}
