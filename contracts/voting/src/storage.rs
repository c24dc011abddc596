use soroban_sdk::{Address, Env, Vec};

use crate::errors::VotingError;
use crate::types::{
    ActiveEntry, DataKey, Proposal, VoteState, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn require_initialized(env: &Env) -> Result<(), VotingError> {
    if !is_initialized(env) {
        return Err(VotingError::NotInitialized);
    }
    extend_instance(env);
    Ok(())
}

pub fn get_next_index(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextIndex)
        .unwrap_or(0)
}

pub fn set_next_index(env: &Env, next: u64) {
    env.storage().instance().set(&DataKey::NextIndex, &next);
}

// Only unarchived proposals live here, so its size tracks the open window.
pub fn get_active_list(env: &Env) -> Vec<ActiveEntry> {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveList)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_active_list(env: &Env, list: &Vec<ActiveEntry>) {
    let key = DataKey::ActiveList;
    env.storage().persistent().set(&key, list);
    extend_persistent(env, &key);
}

pub fn get_archived_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ArchivedCount)
        .unwrap_or(0)
}

/// Appends `index` to the archive, one entry per slot.
pub fn push_archived(env: &Env, index: u64) {
    let slot = get_archived_count(env);
    let key = DataKey::Archived(slot);
    env.storage().persistent().set(&key, &index);
    extend_persistent(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::ArchivedCount, &(slot + 1));
}

pub fn get_archived(env: &Env, slot: u64) -> Result<u64, VotingError> {
    let key = DataKey::Archived(slot);
    let index = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(VotingError::NotFound)?;
    extend_persistent(env, &key);
    Ok(index)
}

pub fn get_proposal(env: &Env, index: u64) -> Result<Proposal, VotingError> {
    let key = DataKey::Proposal(index);
    let proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(VotingError::NotFound)?;
    extend_persistent(env, &key);
    Ok(proposal)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.index);
    env.storage().persistent().set(&key, proposal);
    extend_persistent(env, &key);
}

pub fn get_vote(env: &Env, voter: &Address, index: u64) -> VoteState {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(voter.clone(), index))
        .unwrap_or(VoteState::None)
}

pub fn set_vote(env: &Env, voter: &Address, index: u64, state: VoteState) {
    let key = DataKey::Vote(voter.clone(), index);
    env.storage().persistent().set(&key, &state);
    extend_persistent(env, &key);
}
