use std::fmt;

use crate::{
    state::{Raffle, RaffleState},
    utils::elapsed_secs,
};

/// Snapshot behind a due check. Each flag is one of the four conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub balance: u64,
    pub entrant_count: u64,
    pub state: RaffleState,
    pub elapsed: u64,

    pub time_passed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.time_passed && self.is_open && self.has_balance && self.has_players
    }
}

impl fmt::Display for UpkeepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "balance={} entrants={} state={:?} elapsed={}s",
            self.balance, self.entrant_count, self.state, self.elapsed
        )
    }
}

impl Raffle {
    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        let elapsed = elapsed_secs(now, self.last_timestamp);

        UpkeepStatus {
            balance: self.pool,
            entrant_count: self.entrant_count(),
            state: self.state,
            elapsed,

            time_passed: elapsed >= self.interval,
            is_open: self.state == RaffleState::Open,
            has_balance: self.pool > 0,
            has_players: !self.entrants.is_empty(),
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.upkeep_status(now).upkeep_needed()
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use super::*;
    use crate::machine::testing::*;

    fn due_raffle() -> Raffle {
        let (mut raffle, _) = new_raffle();
        enter_many(&mut raffle, 1);
        raffle
    }

    #[test]
    fn due_when_all_conditions_hold() {
        let raffle = due_raffle();
        let now = due_at(&raffle);

        let status = raffle.upkeep_status(now);
        assert!(status.time_passed && status.is_open && status.has_balance && status.has_players);
        assert!(raffle.is_due(now));
        assert!(raffle.is_due(now + 1_000));
    }

    #[test]
    fn not_due_before_interval() {
        let raffle = due_raffle();
        let now = due_at(&raffle) - 1;

        let status = raffle.upkeep_status(now);
        assert!(!status.time_passed);
        assert!(status.is_open && status.has_balance && status.has_players);
        assert!(!raffle.is_due(now));
    }

    #[test]
    fn not_due_when_calculating() {
        let mut raffle = due_raffle();
        let now = due_at(&raffle);
        let mut coordinator = MockCoordinator::for_raffle(&raffle);
        raffle.trigger(now, &mut coordinator).unwrap();

        let status = raffle.upkeep_status(now);
        assert!(!status.is_open);
        assert!(status.time_passed && status.has_balance && status.has_players);
        assert!(!raffle.is_due(now));
    }

    #[test]
    fn not_due_without_balance() {
        // Entrants present but nothing collected: only reachable by tampering with the pool.
        let mut raffle = due_raffle();
        raffle.pool = 0;
        let now = due_at(&raffle);

        let status = raffle.upkeep_status(now);
        assert!(!status.has_balance);
        assert!(status.time_passed && status.is_open && status.has_players);
        assert!(!raffle.is_due(now));
    }

    #[test]
    fn not_due_without_players() {
        // Funds present but nobody entered (e.g. lamports sent straight to the pool).
        let (mut raffle, _) = new_raffle();
        raffle.pool = FEE;
        let now = due_at(&raffle);

        let status = raffle.upkeep_status(now);
        assert!(!status.has_players);
        assert!(status.time_passed && status.is_open && status.has_balance);
        assert!(!raffle.is_due(now));
    }

    #[test]
    fn not_due_on_a_fresh_raffle() {
        let (raffle, _) = new_raffle();
        assert!(!raffle.is_due(due_at(&raffle)));
    }

    #[test]
    fn clock_behind_last_timestamp_counts_as_no_time() {
        let raffle = due_raffle();
        let status = raffle.upkeep_status(raffle.last_timestamp - 100);
        assert_eq!(status.elapsed, 0);
        assert!(!status.time_passed);
    }

    #[test]
    fn check_is_side_effect_free() {
        let raffle = due_raffle();
        let before = format!("{:?}", raffle);
        let _ = raffle.is_due(due_at(&raffle));
        let _ = raffle.upkeep_status(T0);
        assert_eq!(before, format!("{:?}", raffle));
    }

    #[test]
    fn status_display_carries_snapshot() {
        let mut raffle = due_raffle();
        raffle.enter(Pubkey::new_unique(), FEE).unwrap();
        let shown = raffle.upkeep_status(T0 + 5).to_string();
        assert_eq!(
            shown,
            format!("balance={} entrants=2 state=Open elapsed=5s", 2 * FEE)
        );
    }
}
