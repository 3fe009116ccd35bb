use anchor_lang::prelude::*;

use crate::{adapters::LamportTransfer, FulfillRandomWords};

// Callback from the oracle. Tx must be signed by the raffle's registered oracle.
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let oracle = ctx.accounts.oracle.key();

    let raffle_info = ctx.accounts.raffle.to_account_info();
    let winner_info = ctx.accounts.recent_winner.to_account_info();
    let reserve = Rent::get()?.minimum_balance(raffle_info.data_len());
    let mut payout = LamportTransfer::new(&raffle_info, &winner_info, reserve);

    let picked = ctx
        .accounts
        .raffle
        .fulfill(&oracle, request_id, &random_words, now, &mut payout)?;

    emit!(picked);
    Ok(())
}
