#![no_std]

mod errors;
mod events;
mod storage;
mod types;
mod voting;

pub use errors::VotingError;
pub use types::{
    ActiveEntry, Proposal, VoteState, DAY_IN_SECONDS, MAX_ARCHIVE_PAGE, SEED_PROPOSAL_COUNT,
    VOTING_DURATION,
};
pub use voting::{VotingContract, VotingContractClient};
