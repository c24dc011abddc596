use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::errors::VotingError;
use crate::events;
use crate::storage;
use crate::types::{ActiveEntry, Proposal, VoteState, MAX_ARCHIVE_PAGE, SEED_PROPOSAL_COUNT};

/// Bytes decoded per step when checking submitted text.
const TEXT_CHUNK_LEN: u32 = 256;

const TEST_PROPOSAL: (&str, &str) = (
    "Тестовая инициатива",
    "Проверка работы голосования: проголосуйте ЗА или ПРОТИВ",
);

const SEED_PROPOSALS: [(&str, &str); SEED_PROPOSAL_COUNT as usize] = [
    ("Озеленение двора", "Высадить деревья и кустарники вдоль пешеходных дорожек"),
    ("Новая детская площадка", "Установить современное оборудование для детей от 3 до 12 лет"),
    ("Велодорожки", "Проложить велосипедную дорожку от парка до станции"),
    ("Раздельный сбор мусора", "Поставить контейнеры для пластика, стекла и бумаги"),
    ("Освещение парка", "Заменить фонари в парке на светодиодные"),
    ("Спортивная площадка", "Построить площадку для воркаута и баскетбола"),
    ("Ремонт подъездов", "Покрасить стены и заменить почтовые ящики"),
    ("Парковка", "Расширить гостевую парковку у главного входа"),
    ("Библиотека во дворе", "Установить шкаф для обмена книгами"),
    ("Субботник", "Провести весенний субботник силами жителей"),
];

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    /// Seeds the ledger with the test proposal followed by the ordinary
    /// proposals, all authored by `deployer` at the current ledger time.
    pub fn initialize(env: Env, deployer: Address) -> Result<(), VotingError> {
        deployer.require_auth();
        if storage::is_initialized(&env) {
            return Err(VotingError::AlreadyInitialized);
        }

        storage::set_initialized(&env);
        storage::set_next_index(&env, 0);
        storage::set_active_list(&env, &Vec::new(&env));
        storage::extend_instance(&env);

        let now = env.ledger().timestamp();
        let (description, details) = TEST_PROPOSAL;
        Self::create_proposal(
            &env,
            &deployer,
            String::from_str(&env, description),
            String::from_str(&env, details),
            now,
        );
        for (description, details) in SEED_PROPOSALS {
            Self::create_proposal(
                &env,
                &deployer,
                String::from_str(&env, description),
                String::from_str(&env, details),
                now,
            );
        }

        log!(&env, "ledger initialized", storage::get_next_index(&env));
        Ok(())
    }

    pub fn submit_proposal(
        env: Env,
        author: Address,
        description: String,
        details: String,
    ) -> Result<u64, VotingError> {
        author.require_auth();
        storage::require_initialized(&env)?;

        Self::validate_text(&description)?;
        Self::validate_text(&details)?;

        let now = env.ledger().timestamp();
        let index = Self::create_proposal(&env, &author, description, details, now);

        log!(&env, "proposal submitted", index, author);
        Ok(index)
    }

    /// Records a single for/against vote. The eligibility window is checked
    /// on every call, whether or not the proposal has been archived.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        index: u64,
        support: bool,
    ) -> Result<(), VotingError> {
        voter.require_auth();
        storage::require_initialized(&env)?;

        let mut proposal = storage::get_proposal(&env, index)?;
        let now = env.ledger().timestamp();
        if !proposal.is_active(now) {
            return Err(VotingError::Expired);
        }

        if storage::get_vote(&env, &voter, index) != VoteState::None {
            return Err(VotingError::AlreadyVoted);
        }

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        storage::set_vote(&env, &voter, index, VoteState::from_support(support));
        storage::set_proposal(&env, &proposal);

        events::voted(&env, index, &voter, support);
        log!(&env, "vote cast", index, voter, support);
        Ok(())
    }

    pub fn get_vote_status(env: Env, voter: Address, index: u64) -> VoteState {
        storage::get_vote(&env, &voter, index)
    }

    /// Moves every proposal whose window has closed from the active listing
    /// to the archive and returns how many were moved. Indices, counters and
    /// vote records are left untouched.
    pub fn archive_expired_proposals(env: Env) -> Result<u32, VotingError> {
        storage::require_initialized(&env)?;

        let now = env.ledger().timestamp();
        let active = storage::get_active_list(&env);
        let mut remaining = Vec::new(&env);
        let mut count: u32 = 0;

        for entry in active.iter() {
            if entry.is_active(now) {
                remaining.push_back(entry);
            } else {
                storage::push_archived(&env, entry.index);
                count += 1;
            }
        }

        if count == 0 {
            return Ok(0);
        }

        storage::set_active_list(&env, &remaining);

        events::archived(&env, count, now);
        log!(&env, "proposals archived", count, remaining.len());
        Ok(count)
    }

    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, VotingError> {
        let mut proposals = Vec::new(&env);
        for entry in storage::get_active_list(&env).iter() {
            proposals.push_back(storage::get_proposal(&env, entry.index)?);
        }
        Ok(proposals)
    }

    /// Archived proposals in archival order, starting at archive slot
    /// `start`. At most `MAX_ARCHIVE_PAGE` are returned per call.
    pub fn get_archived_proposals(
        env: Env,
        start: u64,
        limit: u32,
    ) -> Result<Vec<Proposal>, VotingError> {
        let limit = limit.min(MAX_ARCHIVE_PAGE) as u64;
        let end = storage::get_archived_count(&env).min(start.saturating_add(limit));

        let mut proposals = Vec::new(&env);
        for slot in start..end {
            let index = storage::get_archived(&env, slot)?;
            proposals.push_back(storage::get_proposal(&env, index)?);
        }
        Ok(proposals)
    }

    pub fn archived_count(env: Env) -> u64 {
        storage::get_archived_count(&env)
    }

    pub fn get_proposals_by_author(
        env: Env,
        author: Address,
    ) -> Result<Vec<Proposal>, VotingError> {
        let mut authored = Vec::new(&env);
        for proposal in Self::get_proposals(env.clone())?.iter() {
            if proposal.author == author {
                authored.push_back(proposal);
            }
        }
        Ok(authored)
    }

    pub fn get_proposal(env: Env, index: u64) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, index)
    }

    pub fn is_active(env: Env, index: u64) -> Result<bool, VotingError> {
        let proposal = storage::get_proposal(&env, index)?;
        Ok(proposal.is_active(env.ledger().timestamp()))
    }

    /// Seconds left before voting closes; zero once it has.
    pub fn time_remaining(env: Env, index: u64) -> Result<u64, VotingError> {
        let proposal = storage::get_proposal(&env, index)?;
        Ok(proposal.ends_at().saturating_sub(env.ledger().timestamp()))
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_next_index(&env)
    }

    fn create_proposal(
        env: &Env,
        author: &Address,
        description: String,
        details: String,
        now: u64,
    ) -> u64 {
        let index = storage::get_next_index(env);
        storage::set_next_index(env, index + 1);

        let proposal = Proposal {
            description,
            details,
            votes_for: 0,
            votes_against: 0,
            created_at: now,
            index,
            author: author.clone(),
        };
        storage::set_proposal(env, &proposal);

        let mut active = storage::get_active_list(env);
        active.push_back(ActiveEntry {
            index,
            created_at: now,
        });
        storage::set_active_list(env, &active);

        events::proposed(env, index, author, now);
        index
    }

    // Rejects text that is empty once Unicode whitespace is trimmed, and
    // text that is not valid UTF-8. Decodes in chunks so any length works.
    fn validate_text(text: &String) -> Result<(), VotingError> {
        let bytes = text.to_bytes();
        let len = bytes.len();

        // A UTF-8 sequence split across chunks leaves at most 3 bytes behind.
        let mut buf = [0u8; TEXT_CHUNK_LEN as usize + 3];
        let mut carry = 0usize;
        let mut offset = 0u32;
        let mut blank = true;

        while offset < len {
            let end = len.min(offset + TEXT_CHUNK_LEN);
            let filled = carry + (end - offset) as usize;
            bytes
                .slice(offset..end)
                .copy_into_slice(&mut buf[carry..filled]);
            offset = end;

            let valid_len = match core::str::from_utf8(&buf[..filled]) {
                Ok(_) => filled,
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(_) => return Err(VotingError::InvalidInput),
            };
            let decoded = core::str::from_utf8(&buf[..valid_len])
                .map_err(|_| VotingError::InvalidInput)?;
            if !decoded.trim().is_empty() {
                blank = false;
            }

            buf.copy_within(valid_len..filled, 0);
            carry = filled - valid_len;
        }

        if blank || carry != 0 {
            return Err(VotingError::InvalidInput);
        }
        Ok(())
    }
}
