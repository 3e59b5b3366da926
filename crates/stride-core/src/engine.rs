//! Engagement card selection engine.
//!
//! On every request the engine picks exactly one card to show, walking a
//! fixed three-tier priority ladder: urgent prompts first, contextual
//! prompts second, and a rotating generic tip as the guaranteed fallback.
//! Selection is throttled by a short cooldown so bursts of UI-driven calls
//! cannot flip the displayed card, and per-card daily show caps plus an
//! acted-upon set keep nudges from repeating within one local day.
//!
//! The engine owns no domain state of its own: streaks, shields, milestones
//! and device status are injected as read-only providers, the wall clock is
//! injected for deterministic tests, and the two persisted ledgers live
//! behind a key-value store boundary.
//!
//! ## Ordering contract
//!
//! Candidates are checked in a fixed, hand-ordered sequence, not by a
//! computed score: the product intent is an explicit hierarchy of urgency.
//! Ties break by declaration order, and that order is observable behavior.
//!
//! ## Concurrency
//!
//! Designed for a single logical owner on one execution context. To share
//! across threads, wrap the engine in a mutex; `evaluate`,
//! `mark_acted_upon` and `perform_daily_reset` all read-modify-write the
//! same ledgers.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Weekday};

use crate::card::Card;
use crate::catalog::{self, TipRecord};
use crate::clock::Clock;
use crate::ledger::{FrequencyLedger, FREQUENCY_LEDGER_KEY, RECENCY_LEDGER_KEY};
use crate::providers::{
    DeviceStatusProvider, MilestoneProvider, ShieldProvider, StreakProvider, FEATURE_INSIGHTS,
};
use crate::storage::{EngineConfig, KvStore};
use crate::tips::TipSelector;

/// The card selection engine. See the module docs for the selection model.
pub struct CardEngine {
    streak: Box<dyn StreakProvider>,
    shield: Box<dyn ShieldProvider>,
    milestones: Box<dyn MilestoneProvider>,
    device: Box<dyn DeviceStatusProvider>,
    store: Box<dyn KvStore>,
    clock: Box<dyn Clock>,
    config: EngineConfig,
    frequency: FrequencyLedger,
    tips: TipSelector,
    session_tip: Option<TipRecord>,
    current: Option<Card>,
    last_evaluation: Option<NaiveDateTime>,
}

impl CardEngine {
    /// Build an engine, loading the persisted ledgers from `store`.
    ///
    /// Missing or unreadable stored ledgers load as empty; the next write
    /// reconciles storage with memory.
    pub fn new(
        streak: Box<dyn StreakProvider>,
        shield: Box<dyn ShieldProvider>,
        milestones: Box<dyn MilestoneProvider>,
        device: Box<dyn DeviceStatusProvider>,
        store: Box<dyn KvStore>,
        clock: Box<dyn Clock>,
        config: EngineConfig,
    ) -> Self {
        let frequency = store
            .get(FREQUENCY_LEDGER_KEY)
            .ok()
            .flatten()
            .map(|json| FrequencyLedger::from_json(&json))
            .unwrap_or_default();
        let recency = store
            .get(RECENCY_LEDGER_KEY)
            .ok()
            .flatten()
            .map(|json| crate::ledger::RecencyLedger::from_json(&json))
            .unwrap_or_default();
        let tips = TipSelector::new(
            recency,
            config.recency_capacity,
            config.recency_strict_window,
            config.tip_seed,
        );

        Self {
            streak,
            shield,
            milestones,
            device,
            store,
            clock,
            config,
            frequency,
            tips,
            session_tip: None,
            current: None,
            last_evaluation: None,
        }
    }

    /// Select the card to display. Total: always returns a card.
    ///
    /// Within the cooldown window the previously selected card is returned
    /// unchanged and the ladder does not run (no daily-reset check, no
    /// milestone pops). Otherwise the daily reset is applied if the local
    /// date rolled over, the ladder runs, and the show count for the
    /// selected key is incremented if the card changed.
    pub fn evaluate(&mut self, daily_goal: u32, current_steps: u32) -> Card {
        self.run(daily_goal, current_steps, false)
    }

    /// Like [`evaluate`], but forces the cooldown gate open. For explicit
    /// recomputation such as pull-to-refresh.
    ///
    /// [`evaluate`]: CardEngine::evaluate
    pub fn refresh(&mut self, daily_goal: u32, current_steps: u32) -> Card {
        self.run(daily_goal, current_steps, true)
    }

    /// Suppress this card's key for the rest of the local day after the
    /// user engaged with it. Persisted immediately.
    pub fn mark_acted_upon(&mut self, card: &Card) {
        self.frequency.mark_acted_upon(&card.key());
        self.persist_frequency();
    }

    /// Clear show counts and the acted-upon set, stamping today's local
    /// date. Idempotent. Runs automatically on the first evaluation after
    /// midnight; exposed for callers that detect a day rollover while the
    /// app was suspended.
    pub fn perform_daily_reset(&mut self) {
        let today = self.clock.now().date();
        self.frequency.reset_for(today);
        self.persist_frequency();
    }

    /// Re-draw the session tip. Intended to be called once per app
    /// foreground so the fallback varies across sessions but stays fixed
    /// within one.
    pub fn refresh_session_tip(&mut self) -> TipRecord {
        let tip = self.draw_tip();
        self.session_tip = Some(tip.clone());
        tip
    }

    /// The most recently selected card, if any evaluation has run.
    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    fn run(&mut self, daily_goal: u32, current_steps: u32, force: bool) -> Card {
        let now = self.clock.now();

        if !force {
            if let (Some(last), Some(current)) = (self.last_evaluation, &self.current) {
                if now - last < Duration::seconds(self.config.cooldown_seconds) {
                    return current.clone();
                }
            }
        }
        self.last_evaluation = Some(now);

        if self.frequency.needs_reset(now.date()) {
            self.frequency.reset_for(now.date());
            self.persist_frequency();
        }

        let card = self.select(daily_goal, current_steps, now);

        // Count a show only when the displayed card actually changes, so
        // re-rendering the same card does not burn its daily budget.
        let changed = self.current.as_ref().map(|c| c.key()) != Some(card.key());
        if changed {
            self.frequency.record_shown(&card.key());
            self.persist_frequency();
        }

        self.current = Some(card.clone());
        card
    }

    /// Walk the ladder in declaration order; first eligible candidate wins.
    fn select(&mut self, daily_goal: u32, current_steps: u32, now: NaiveDateTime) -> Card {
        let goal_met = current_steps >= daily_goal;
        let steps_remaining = daily_goal.saturating_sub(current_steps);
        let hour = now.hour();
        let weekday = now.weekday();

        // Tier 1: urgent.
        if hour >= self.config.streak_risk_hour
            && !goal_met
            && self.streak.current_streak_length() >= 1
        {
            let card = Card::StreakAtRisk { steps_remaining };
            if self.eligible(&card) {
                return card;
            }
        }

        if self.shield.was_auto_deployed_overnight() {
            let card = Card::ShieldDeployed {
                remaining_shields: self.shield.available_shield_count(),
                next_refill_label: self.shield.next_refill_label(),
            };
            if self.eligible(&card) {
                self.shield.acknowledge_auto_deploy();
                return card;
            }
        }

        if self.streak.current_streak_length() == 0 && self.streak.longest_streak_length() > 0 {
            let card = Card::WelcomeBack;
            if self.eligible(&card) {
                return card;
            }
        }

        // Tier 2: contextual.
        if hour >= self.config.evening_hour && !goal_met && daily_goal > 0 {
            let ratio = current_steps as f64 / daily_goal as f64;
            if ratio >= self.config.almost_there_ratio && ratio < 1.0 {
                let card = Card::AlmostThere { steps_remaining };
                if self.eligible(&card) {
                    return card;
                }
            }
        }

        // Destructive read: the event leaves the provider's queue even if
        // the card is then suppressed by the gate.
        if let Some(event) = self.milestones.pop_next_contextual_event() {
            let card = Card::MilestoneCelebration { event };
            if self.eligible(&card) {
                return card;
            }
        }

        if let Some(remaining_uses) = self.device.remaining_free_uses(FEATURE_INSIGHTS) {
            if remaining_uses > 0 {
                let card = Card::TryInsights { remaining_uses };
                if self.eligible(&card) {
                    return card;
                }
            }
        }

        if !self.device.is_companion_reachable() {
            let card = Card::TryWatchSync;
            if self.eligible(&card) {
                return card;
            }
        }

        if weekday == Weekday::Mon {
            let card = Card::NewWeekNewGoal;
            if self.eligible(&card) {
                return card;
            }
        }

        if weekday == Weekday::Sat || weekday == Weekday::Sun {
            let card = Card::WeekendReminder;
            if self.eligible(&card) {
                return card;
            }
        }

        if hour >= self.config.evening_hour && !goal_met {
            let card = Card::EveningNudge { steps_remaining };
            if self.eligible(&card) {
                return card;
            }
        }

        // Tier 3: the session tip, always eligible.
        Card::Tip {
            tip: self.session_tip(),
        }
    }

    /// Shared gate for tier-1/2 candidates: not acted upon today and still
    /// under the daily show cap. Tier-3 tips are uncapped.
    fn eligible(&self, card: &Card) -> bool {
        let key = card.key();
        if self.frequency.is_acted_upon(&key) {
            return false;
        }
        match card.daily_cap() {
            Some(_) => self.frequency.shows(&key) < self.config.daily_show_cap,
            None => true,
        }
    }

    fn session_tip(&mut self) -> TipRecord {
        if self.session_tip.is_none() {
            self.session_tip = Some(self.draw_tip());
        }
        self.session_tip
            .clone()
            .unwrap_or_else(|| catalog::tip_by_index(0))
    }

    fn draw_tip(&mut self) -> TipRecord {
        let tip = self.tips.pick_random_tip();
        self.persist_recency();
        tip
    }

    // Best-effort writes: on failure the in-memory ledger stays
    // authoritative and the next successful write reconciles storage.
    fn persist_frequency(&mut self) {
        if let Ok(json) = serde_json::to_string(&self.frequency) {
            let _ = self.store.set(FREQUENCY_LEDGER_KEY, &json);
        }
    }

    fn persist_recency(&mut self) {
        if let Ok(json) = serde_json::to_string(self.tips.recency()) {
            let _ = self.store.set(RECENCY_LEDGER_KEY, &json);
        }
    }
}
