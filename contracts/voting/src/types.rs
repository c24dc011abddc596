use soroban_sdk::{contracttype, Address, String};

/// One day in ledger seconds.
pub const DAY_IN_SECONDS: u64 = 86_400;

/// How long a proposal accepts votes after creation.
pub const VOTING_DURATION: u64 = 3 * DAY_IN_SECONDS;

/// Ordinary proposals seeded by `initialize` after the test proposal.
pub const SEED_PROPOSAL_COUNT: u32 = 10;

/// Largest page served by `get_archived_proposals`.
pub const MAX_ARCHIVE_PAGE: u32 = 50;

// Ledgers close roughly every 5 seconds.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    NextIndex,
    ActiveList,
    ArchivedCount,
    Archived(u64),
    Proposal(u64),
    Vote(Address, u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub details: String,
    pub votes_for: u32,
    pub votes_against: u32,
    pub created_at: u64,
    pub index: u64,
    pub author: Address,
}

impl Proposal {
    /// Ledger timestamp at which voting closes.
    pub fn ends_at(&self) -> u64 {
        voting_ends_at(self.created_at)
    }

    pub fn is_active(&self, now: u64) -> bool {
        now < self.ends_at()
    }
}

/// Slot in the active listing. Carries the creation time so archival can
/// decide expiry without loading the proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveEntry {
    pub index: u64,
    pub created_at: u64,
}

impl ActiveEntry {
    pub fn is_active(&self, now: u64) -> bool {
        now < voting_ends_at(self.created_at)
    }
}

pub fn voting_ends_at(created_at: u64) -> u64 {
    created_at.saturating_add(VOTING_DURATION)
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteState {
    None = 0,
    For = 1,
    Against = 2,
}

impl VoteState {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteState::For
        } else {
            VoteState::Against
        }
    }
}
