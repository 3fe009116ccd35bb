// On-chain implementations of the capability traits.

use anchor_lang::prelude::*;

use crate::{
    errors::RaffleError,
    interfaces::{PrizeTransfer, RandomnessRequest, RandomnessService},
    state::Raffle,
    utils::derive_request_id,
};

/// Publishes randomness requests for the off-chain oracle.
///
/// The request itself travels in the `RandomWordsRequested` event emitted by
/// `perform_upkeep`; this adapter only mints the correlation token.
pub struct EventCoordinator {
    pub consumer: Pubkey,
}

impl EventCoordinator {
    pub fn new(consumer: Pubkey) -> Self {
        Self { consumer }
    }
}

impl RandomnessService for EventCoordinator {
    fn request_random_words(&mut self, request: &RandomnessRequest) -> Result<u64> {
        Ok(derive_request_id(
            &request.key_hash,
            &self.consumer,
            request.subscription_id,
            request.nonce,
        ))
    }
}

/// Pays the prize out of the raffle PDA's lamports.
pub struct LamportTransfer<'a, 'info> {
    pub from: &'a AccountInfo<'info>,
    pub to: &'a AccountInfo<'info>,
    /// Lamports that must stay in `from` (rent-exempt minimum).
    pub reserve: u64,
}

impl<'a, 'info> LamportTransfer<'a, 'info> {
    pub fn new(from: &'a AccountInfo<'info>, to: &'a AccountInfo<'info>, reserve: u64) -> Self {
        Self { from, to, reserve }
    }
}

impl PrizeTransfer for LamportTransfer<'_, '_> {
    fn transfer_prize(&mut self, _raffle: &Raffle, winner: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*self.to.key, *winner, RaffleError::TransferFailed);
        require!(self.to.is_writable, RaffleError::TransferFailed);

        let available = self
            .from
            .lamports()
            .checked_sub(self.reserve)
            .ok_or_else(|| error!(RaffleError::TransferFailed))?;
        require!(amount <= available, RaffleError::TransferFailed);

        let from_after = self.from.lamports() - amount;
        let to_after = self
            .to
            .lamports()
            .checked_add(amount)
            .ok_or_else(|| error!(RaffleError::MathOverflow))?;

        **self.from.try_borrow_mut_lamports()? = from_after;
        **self.to.try_borrow_mut_lamports()? = to_after;

        Ok(())
    }
}
