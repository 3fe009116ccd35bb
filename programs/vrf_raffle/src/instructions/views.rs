use anchor_lang::prelude::*;

use crate::{state::RaffleSummary, ViewRaffle};

pub fn get_entrant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.entrant(index)
}

pub fn raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.summary(now))
}
