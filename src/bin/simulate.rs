//! Economy simulator CLI.
//!
//! Plays a scripted day against the real session: active collection with a
//! greedy upgrade strategy, periodic saves, then an offline stretch and a
//! reload to show the welcome-back reconciliation.
//!
//! Usage:
//!   cargo run --bin simulate -- [HOURS_ACTIVE] [HOURS_OFFLINE]
//!
//! Defaults to 8 hours of active play and 16 hours offline.

use paperboat::achievements::get_achievement_def;
use paperboat::build_info::{BUILD_COMMIT, BUILD_DATE};
use paperboat::clock::ManualClock;
use paperboat::core::catalog::{upgrade_cost, UpgradeId};
use paperboat::core::constants::AUTOSAVE_INTERVAL_SECONDS;
use paperboat::persistence::MemoryStore;
use paperboat::{CurrencyKind, Session};
use std::env;
use std::sync::Arc;

// Active-play pickup cadence, mirroring the spawn intervals of the live game
const DROP_INTERVAL_SECONDS: i64 = 2;
const LEAF_INTERVAL_SECONDS: i64 = 8;
const PEARL_INTERVAL_SECONDS: i64 = 10;

const SIM_EPOCH: i64 = 1_750_000_000;

fn main() {
    let args: Vec<String> = env::args().collect();
    let hours_active: i64 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(8);
    let hours_offline: i64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(16);

    println!("=== paperboat economy simulation ({BUILD_COMMIT}, {BUILD_DATE}) ===");
    println!("active: {hours_active}h, offline: {hours_offline}h");
    println!();

    let clock = ManualClock::new(SIM_EPOCH);
    let store = Arc::new(MemoryStore::new());

    let mut session = Session::load(clock.clone(), Box::new(Arc::clone(&store)), None);
    let daily = session.claim_daily_reward();
    println!("daily reward: +{daily} drops");

    for second in 0..hours_active * 3_600 {
        clock.advance(1);
        session.on_play_tick();

        if second % DROP_INTERVAL_SECONDS == 0 {
            session.collect(CurrencyKind::Drop, 1);
        }
        if second % LEAF_INTERVAL_SECONDS == 0 {
            session.collect(CurrencyKind::Leaf, 1);
        }
        if second % PEARL_INTERVAL_SECONDS == 0 {
            session.collect(CurrencyKind::Pearl, 1);
        }

        // Greedy strategy: once a minute, buy the cheapest affordable upgrade
        if second % 60 == 0 {
            buy_cheapest(&mut session);
        }

        if second % AUTOSAVE_INTERVAL_SECONDS as i64 == 0 {
            session.on_save_tick();
        }
    }

    for id in session.take_unlock_events() {
        if let Some(def) = get_achievement_def(id) {
            println!("achievement: {} (+{} drops)", def.name, def.reward);
        }
    }

    println!();
    println!("--- after {hours_active}h of play ---");
    print_summary(&session);

    session.save();
    drop(session);

    clock.advance(hours_offline * 3_600);
    let mut session = Session::load(clock.clone(), Box::new(Arc::clone(&store)), None);

    println!();
    println!("--- back after {hours_offline}h away ---");
    match session.take_welcome_back() {
        Some(welcome) => println!(
            "welcome back: +{} drops for {:.0} minutes offline",
            welcome.earnings, welcome.minutes_offline
        ),
        None => println!("welcome back: nothing earned"),
    }
    print_summary(&session);

    if session.state().can_prestige() {
        let points = session.perform_prestige();
        println!();
        println!("prestige! +{points} points (level {})", session.state().prestige.level);
        print_summary(&session);
    }
}

fn buy_cheapest(session: &mut Session<ManualClock>) {
    loop {
        let cheapest = UpgradeId::ALL
            .iter()
            .copied()
            .min_by_key(|id| upgrade_cost(*id, session.state().upgrades.level(*id)).drops);
        let Some(id) = cheapest else { break };
        if !session.purchase_upgrade(id) {
            break;
        }
    }
}

fn print_summary(session: &Session<ManualClock>) {
    let state = session.state();
    println!(
        "balance: {} drops, {} pearls, {} leaves",
        state.currencies.drops, state.currencies.pearls, state.currencies.leaves
    );
    println!(
        "lifetime: {} drops, {} pearls, {} leaves",
        state.lifetime.drops, state.lifetime.pearls, state.lifetime.leaves
    );
    println!(
        "upgrades: speed {}, radius {}, rate {}, collector {} ({} purchases)",
        state.upgrades.speed,
        state.upgrades.radius,
        state.upgrades.rate,
        state.upgrades.collector,
        state.upgrades_purchased
    );
    println!(
        "achievements: {} unlocked, prestige level {}",
        state.achievements.unlocked_count(),
        state.prestige.level
    );
}
