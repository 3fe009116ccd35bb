use anchor_lang::prelude::*;

use crate::{state::RaffleParams, InitializeRaffle};

pub fn initialize_raffle(
    ctx: Context<InitializeRaffle>,
    raffle_id: u64,
    params: RaffleParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let min_entrance_fee = Rent::get()?.minimum_balance(0);

    ctx.accounts
        .raffle
        .initialize(authority, raffle_id, ctx.bumps.raffle, &params, min_entrance_fee, now)?;

    msg!(
        "Raffle {} initialized: fee={} interval={}s oracle={}",
        raffle_id,
        params.entrance_fee,
        params.interval,
        params.oracle
    );
    Ok(())
}
