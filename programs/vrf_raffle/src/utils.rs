use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::errors::RaffleError;

// -----------------
// Seeds
// -----------------
pub const RAFFLE_SEED: &[u8] = b"raffle_v1";

const REQUEST_DOMAIN: &[u8] = b"vrf-raffle:request_v1";

// -------------------------
// Request id
// -------------------------
/// Correlation token for a randomness request. Never zero, so a zeroed
/// account field can't be mistaken for a live request.
pub fn derive_request_id(
    key_hash: &[u8; 32],
    consumer: &Pubkey,
    subscription_id: u64,
    nonce: u64,
) -> u64 {
    let h = hashv(&[
        REQUEST_DOMAIN,
        key_hash.as_ref(),
        consumer.as_ref(),
        subscription_id.to_le_bytes().as_ref(),
        nonce.to_le_bytes().as_ref(),
    ])
    .to_bytes();

    let mut id_bytes = [0u8; 8];
    id_bytes.copy_from_slice(&h[..8]);
    u64::from_le_bytes(id_bytes).max(1)
}

// -------------------------
// Winner selection
// -------------------------
pub fn winner_index(random_word: u64, entrant_count: usize) -> Result<usize> {
    let n = u64::try_from(entrant_count).map_err(|_| error!(RaffleError::MathOverflow))?;
    let idx = random_word
        .checked_rem(n)
        .ok_or_else(|| error!(RaffleError::MathOverflow))?;
    usize::try_from(idx).map_err(|_| error!(RaffleError::MathOverflow))
}

/// Seconds elapsed since `since`. A clock behind the stored timestamp counts as zero.
pub fn elapsed_secs(now: i64, since: i64) -> u64 {
    u64::try_from(now.saturating_sub(since)).unwrap_or(0)
}
