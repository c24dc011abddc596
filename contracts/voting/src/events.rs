use soroban_sdk::{symbol_short, Address, Env};

pub fn proposed(env: &Env, index: u64, author: &Address, created_at: u64) {
    env.events()
        .publish((symbol_short!("proposed"), index), (author.clone(), created_at));
}

pub fn voted(env: &Env, index: u64, voter: &Address, support: bool) {
    env.events()
        .publish((symbol_short!("voted"), index), (voter.clone(), support));
}

pub fn archived(env: &Env, count: u32, now: u64) {
    env.events()
        .publish((symbol_short!("archived"),), (count, now));
}
