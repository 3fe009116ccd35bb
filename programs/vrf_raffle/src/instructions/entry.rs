use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::EnterRaffle;

pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let participant = ctx.accounts.participant.key();

    // ledger first: a rejected entry never moves lamports
    let recorded = ctx.accounts.raffle.enter(participant, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.participant.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(recorded);
    Ok(())
}
