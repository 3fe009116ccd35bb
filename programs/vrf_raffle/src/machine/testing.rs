// Deterministic fakes for the raffle's external collaborators.

use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_ENTRANCE_FEE, DEFAULT_INTERVAL_SECS},
    errors::RaffleError,
    events::WinnerPicked,
    interfaces::{PrizeTransfer, RandomnessConsumer, RandomnessRequest, RandomnessService},
    state::{Raffle, RaffleParams, RaffleState},
};

pub const T0: i64 = 1_700_000_000;
pub const FEE: u64 = DEFAULT_ENTRANCE_FEE;
pub const INTERVAL: u64 = DEFAULT_INTERVAL_SECS;

/// Rent-exempt minimum of a zero-data account under default rent.
pub const MIN_FEE: u64 = 890_880;

pub fn new_raffle() -> (Raffle, RaffleParams) {
    let params = RaffleParams::with_defaults(Pubkey::new_unique(), 1);
    let mut raffle = Raffle::default();
    raffle
        .initialize(Pubkey::new_unique(), 0, 254, &params, MIN_FEE, T0)
        .expect("valid params");
    (raffle, params)
}

/// Time at which a round that started at `raffle.last_timestamp` is due.
pub fn due_at(raffle: &Raffle) -> i64 {
    raffle.last_timestamp + raffle.interval as i64
}

pub fn enter_many(raffle: &mut Raffle, n: usize) -> Vec<Pubkey> {
    (0..n)
        .map(|_| {
            let p = Pubkey::new_unique();
            raffle.enter(p, FEE).expect("entry accepted");
            p
        })
        .collect()
}

pub fn assert_raffle_err<T: std::fmt::Debug>(res: Result<T>, expected: RaffleError) {
    match res {
        Err(anchor_lang::error::Error::AnchorError(e)) => assert_eq!(
            e.error_code_number,
            u32::from(expected),
            "expected {:?}, got {}",
            expected,
            e.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

// -------------------------
// Oracle
// -------------------------

/// Hands out ids 1, 2, 3... and only fulfills requests it has seen.
pub struct MockCoordinator {
    pub identity: Pubkey,
    pub next_id: u64,
    pub requests: Vec<(u64, RandomnessRequest)>,
    pub unavailable: bool,
}

impl MockCoordinator {
    pub fn new(identity: Pubkey) -> Self {
        Self {
            identity,
            next_id: 0,
            requests: Vec::new(),
            unavailable: false,
        }
    }

    pub fn for_raffle(raffle: &Raffle) -> Self {
        Self::new(raffle.oracle)
    }

    pub fn fulfill(
        &mut self,
        raffle: &mut Raffle,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        transfer: &mut dyn PrizeTransfer,
    ) -> Result<WinnerPicked> {
        let pos = self
            .requests
            .iter()
            .position(|(id, _)| *id == request_id)
            .ok_or_else(|| error!(RaffleError::UnrecognizedRequest))?;

        let picked = raffle.fulfill_random_words(
            &self.identity,
            request_id,
            random_words,
            now,
            transfer,
        )?;
        self.requests.remove(pos);
        Ok(picked)
    }
}

impl RandomnessService for MockCoordinator {
    fn request_random_words(&mut self, request: &RandomnessRequest) -> Result<u64> {
        if self.unavailable {
            return Err(ProgramError::Custom(0xdead).into());
        }
        self.next_id += 1;
        self.requests.push((self.next_id, request.clone()));
        Ok(self.next_id)
    }
}

// -------------------------
// Payout
// -------------------------

/// What the transfer hook could see of the raffle while the prize was in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observed {
    pub state: RaffleState,
    pub entrant_count: u64,
    pub pending_request: Option<u64>,
    pub pool: u64,
    pub upkeep_needed: bool,
}

#[derive(Default)]
pub struct Bank {
    pub balances: HashMap<Pubkey, u64>,
    pub observed: Vec<Observed>,
    pub transfers: usize,
}

impl Bank {
    pub fn balance(&self, who: &Pubkey) -> u64 {
        self.balances.get(who).copied().unwrap_or(0)
    }
}

impl PrizeTransfer for Bank {
    fn transfer_prize(&mut self, raffle: &Raffle, winner: &Pubkey, amount: u64) -> Result<()> {
        self.observed.push(Observed {
            state: raffle.state,
            entrant_count: raffle.entrant_count(),
            pending_request: raffle.pending_request,
            pool: raffle.pool,
            upkeep_needed: raffle.is_due(i64::MAX),
        });
        *self.balances.entry(*winner).or_insert(0) += amount;
        self.transfers += 1;
        Ok(())
    }
}

/// Winner account that refuses lamports.
pub struct RejectingTransfer;

impl PrizeTransfer for RejectingTransfer {
    fn transfer_prize(&mut self, _raffle: &Raffle, _winner: &Pubkey, _amount: u64) -> Result<()> {
        Err(ProgramError::InsufficientFunds.into())
    }
}
