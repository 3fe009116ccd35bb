use anchor_lang::prelude::*;

use crate::{adapters::EventCoordinator, PerformUpkeep, ViewRaffle};

pub fn check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.is_due(now))
}

pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut coordinator = EventCoordinator::new(ctx.accounts.raffle.key());

    let requested = ctx.accounts.raffle.trigger(now, &mut coordinator)?;

    emit!(requested);
    Ok(())
}
