//! Integration tests for the card engine over real SQLite storage.
//!
//! These tests verify that ledger state written by one engine instance is
//! picked up by the next, simulating app restarts and day rollovers.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use stride_core::{
    Card, CardEngine, Clock, Database, DeviceStatusProvider, EngineConfig, MilestoneEvent,
    MilestoneProvider, ShieldProvider, StreakProvider,
};

#[derive(Clone, Default)]
struct Streak {
    current: u32,
    longest: u32,
}

impl StreakProvider for Streak {
    fn current_streak_length(&self) -> u32 {
        self.current
    }
    fn longest_streak_length(&self) -> u32 {
        self.longest
    }
}

#[derive(Clone, Default)]
struct NoShield;

impl ShieldProvider for NoShield {
    fn was_auto_deployed_overnight(&self) -> bool {
        false
    }
    fn acknowledge_auto_deploy(&mut self) {}
    fn available_shield_count(&self) -> u32 {
        0
    }
    fn next_refill_label(&self) -> String {
        String::new()
    }
}

#[derive(Clone, Default)]
struct Milestones(Rc<RefCell<Vec<MilestoneEvent>>>);

impl MilestoneProvider for Milestones {
    fn pop_next_contextual_event(&mut self) -> Option<MilestoneEvent> {
        let mut queue = self.0.borrow_mut();
        if queue.is_empty() {
            None
        } else {
            Some(queue.remove(0))
        }
    }
}

#[derive(Clone)]
struct Device {
    companion_reachable: bool,
}

impl DeviceStatusProvider for Device {
    fn remaining_free_uses(&self, _feature: &str) -> Option<u32> {
        None
    }
    fn is_companion_reachable(&self) -> bool {
        self.companion_reachable
    }
}

#[derive(Clone)]
struct FixedClock(Rc<RefCell<NaiveDateTime>>);

impl FixedClock {
    fn at(datetime: NaiveDateTime) -> Self {
        Self(Rc::new(RefCell::new(datetime)))
    }
    fn advance_seconds(&self, secs: i64) {
        let next = *self.0.borrow() + Duration::seconds(secs);
        *self.0.borrow_mut() = next;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.borrow()
    }
}

/// Tuesday morning with nothing notable going on.
fn quiet_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn engine_over(dir: &TempDir, clock: FixedClock, streak: Streak, reachable: bool) -> CardEngine {
    let db = Database::open_at(&dir.path().join("stride.db")).unwrap();
    CardEngine::new(
        Box::new(streak),
        Box::new(NoShield),
        Box::new(Milestones::default()),
        Box::new(Device {
            companion_reachable: reachable,
        }),
        Box::new(db),
        Box::new(clock),
        EngineConfig {
            tip_seed: Some(5),
            ..Default::default()
        },
    )
}

#[test]
fn test_show_cap_survives_restart() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock::at(quiet_morning());

    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), false);
    assert_eq!(engine.evaluate(10_000, 100), Card::TryWatchSync);
    drop(engine);

    // Same day, new process: the persisted show count keeps the card capped.
    clock.advance_seconds(60);
    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), false);
    assert!(matches!(engine.evaluate(10_000, 100), Card::Tip { .. }));
}

#[test]
fn test_acted_upon_survives_restart() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock::at(quiet_morning());
    let streak = Streak {
        current: 0,
        longest: 12,
    };

    let mut engine = engine_over(&dir, clock.clone(), streak.clone(), true);
    let card = engine.evaluate(10_000, 100);
    assert_eq!(card, Card::WelcomeBack);
    engine.mark_acted_upon(&card);
    drop(engine);

    clock.advance_seconds(60);
    let mut engine = engine_over(&dir, clock.clone(), streak, true);
    assert!(
        matches!(engine.evaluate(10_000, 100), Card::Tip { .. }),
        "acted-upon card must stay suppressed after restart"
    );
}

#[test]
fn test_day_rollover_reopens_cards() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock::at(quiet_morning());

    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), false);
    assert_eq!(engine.evaluate(10_000, 100), Card::TryWatchSync);
    drop(engine);

    // Next local day: the automatic reset clears the cap.
    clock.advance_seconds(24 * 3600);
    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), false);
    assert_eq!(engine.evaluate(10_000, 100), Card::TryWatchSync);
}

#[test]
fn test_recency_survives_restart() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock::at(quiet_morning());

    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), true);
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(engine.refresh_session_tip().id);
    }
    drop(engine);

    // A fresh engine over the same store keeps avoiding those tips.
    let mut engine = engine_over(&dir, clock, Streak::default(), true);
    for _ in 0..5 {
        let tip = engine.refresh_session_tip();
        assert!(
            !seen.contains(&tip.id),
            "tip {} repeated across restart despite recency ledger",
            tip.id
        );
        seen.push(tip.id);
    }
}

#[test]
fn test_explicit_reset_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let clock = FixedClock::at(quiet_morning());

    let mut engine = engine_over(&dir, clock.clone(), Streak::default(), false);
    assert_eq!(engine.evaluate(10_000, 100), Card::TryWatchSync);

    engine.perform_daily_reset();
    engine.perform_daily_reset();

    clock.advance_seconds(60);
    assert_eq!(
        engine.evaluate(10_000, 100),
        Card::TryWatchSync,
        "reset must reopen the capped card"
    );
}
