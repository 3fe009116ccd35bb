// programs/vrf_raffle/src/contexts.rs

use anchor_lang::prelude::*;

use crate::state::Raffle;

#[derive(Accounts)]
#[instruction(raffle_id: u64)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [crate::RAFFLE_SEED, authority.key().as_ref(), raffle_id.to_le_bytes().as_ref()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED, raffle.authority.as_ref(), raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED, raffle.authority.as_ref(), raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Anyone may run upkeep (keeper network, cron, a participant).
    pub caller: Signer<'info>,
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [crate::RAFFLE_SEED, raffle.authority.as_ref(), raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Checked against `raffle.oracle` by the settlement itself.
    pub oracle: Signer<'info>,

    /// CHECK: receives the prize. Must be the entrant selected by the random word,
    /// which the payout verifies before moving any lamports.
    #[account(mut)]
    pub recent_winner: UncheckedAccount<'info>,
}

/// Read-only access for the due check and the accessors.
#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(
        seeds = [crate::RAFFLE_SEED, raffle.authority.as_ref(), raffle.raffle_id.to_le_bytes().as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}
