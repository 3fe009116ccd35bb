use anchor_lang::prelude::*;

pub mod adapters;
pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod interfaces;
pub mod machine;
pub mod state;
pub mod utils;

pub use constants::*;
pub use contexts::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("5rQb8uJ7r1Xz8JQfM5m7t3m6xKQ2cT9y2XGd4GxvNqWa");

#[program]
pub mod vrf_raffle {
    use super::*;
    use crate::instructions::{admin, entry, oracle, upkeep, views};

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        raffle_id: u64,
        params: RaffleParams,
    ) -> Result<()> {
        admin::initialize_raffle(ctx, raffle_id, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        entry::enter_raffle(ctx, amount)
    }

    // ----------------------------
    // Automation (keeper) contract
    // ----------------------------
    pub fn check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
        upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        upkeep::perform_upkeep(ctx)
    }

    // ----------------------------
    // Oracle callback
    // ----------------------------
    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        oracle::fulfill_random_words(ctx, request_id, random_words)
    }

    // views
    pub fn get_entrant(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        views::get_entrant(ctx, index)
    }

    pub fn raffle_summary(ctx: Context<ViewRaffle>) -> Result<RaffleSummary> {
        views::raffle_summary(ctx)
    }
}
