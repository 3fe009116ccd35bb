use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ENTRANTS,
    errors::RaffleError,
    events::EntryRecorded,
    state::Raffle,
};

impl Raffle {
    /// Records one entry for `participant`. The caller moves `amount` lamports
    /// into the raffle account once this returns Ok.
    pub fn enter(&mut self, participant: Pubkey, amount: u64) -> Result<EntryRecorded> {
        require!(self.is_open(), RaffleError::NotOpen);
        require!(amount >= self.entrance_fee, RaffleError::NotEnoughFunds);
        require!(self.entrants.len() < MAX_ENTRANTS, RaffleError::RaffleFull);

        let pool = self
            .pool
            .checked_add(amount)
            .ok_or_else(|| error!(RaffleError::MathOverflow))?;

        self.entrants.push(participant);
        self.pool = pool;

        Ok(EntryRecorded {
            raffle_id: self.raffle_id,
            participant,
            amount,
            entrant_count: self.entrant_count(),
            pool,
        })
    }
}
