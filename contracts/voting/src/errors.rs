use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Empty description or details on submission.
    InvalidInput = 3,
    /// No proposal was ever assigned this index.
    NotFound = 4,
    /// The proposal's voting window has closed.
    Expired = 5,
    AlreadyVoted = 6,
}
