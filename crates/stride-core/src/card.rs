//! Engagement card model.
//!
//! A `Card` is a single contextual prompt chosen for display. Every card
//! belongs to exactly one priority tier and carries a stable key that is
//! independent of its payload, so frequency accounting treats two
//! `AlmostThere` cards with different step counts as the same nudge.

use serde::{Deserialize, Serialize};

use crate::catalog::TipRecord;

/// Priority class of a card. Lower tier always wins during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTier {
    /// Tier 1: time-critical prompts (streak about to break, shield spent).
    Urgent,
    /// Tier 2: situational prompts (milestones, upsells, day-of-week).
    Contextual,
    /// Tier 3: generic motivational tip, the guaranteed fallback.
    Fallback,
}

impl CardTier {
    /// Numeric tier value (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            CardTier::Urgent => 1,
            CardTier::Contextual => 2,
            CardTier::Fallback => 3,
        }
    }
}

/// A milestone event handed over by the milestone provider.
///
/// `kind` is a stable snake_case identifier for the milestone family
/// (e.g. `total_steps_100k`) and feeds the card key, so distinct milestone
/// families are frequency-capped independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    pub kind: String,
    pub title: String,
    pub detail: String,
}

/// One engagement card, ready for the UI to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "card")]
pub enum Card {
    // Tier 1
    /// Goal unmet late in the day while an active streak is on the line.
    StreakAtRisk { steps_remaining: u32 },
    /// A streak shield was consumed overnight on the user's behalf.
    ShieldDeployed {
        remaining_shields: u32,
        next_refill_label: String,
    },
    /// Streak broken (current zero, longest positive); re-engagement prompt.
    WelcomeBack,

    // Tier 2
    /// Goal within reach this evening (progress in [0.5, 1.0)).
    AlmostThere { steps_remaining: u32 },
    /// A freshly reached milestone worth celebrating.
    MilestoneCelebration { event: MilestoneEvent },
    /// Upsell for the gated insights feature while free uses remain.
    TryInsights { remaining_uses: u32 },
    /// No companion watch paired or reachable.
    TryWatchSync,
    /// Monday: suggest reviewing the weekly goal.
    NewWeekNewGoal,
    /// Saturday/Sunday activity reminder.
    WeekendReminder,
    /// Catch-all evening prompt when the goal is still open.
    EveningNudge { steps_remaining: u32 },

    // Tier 3
    /// Generic motivational tip from the compiled-in catalog.
    Tip { tip: TipRecord },
}

impl Card {
    /// The card's priority tier. Fixed per case, never derived from payload.
    pub fn tier(&self) -> CardTier {
        match self {
            Card::StreakAtRisk { .. } | Card::ShieldDeployed { .. } | Card::WelcomeBack => {
                CardTier::Urgent
            }
            Card::AlmostThere { .. }
            | Card::MilestoneCelebration { .. }
            | Card::TryInsights { .. }
            | Card::TryWatchSync
            | Card::NewWeekNewGoal
            | Card::WeekendReminder
            | Card::EveningNudge { .. } => CardTier::Contextual,
            Card::Tip { .. } => CardTier::Fallback,
        }
    }

    /// Stable, payload-independent identity used for frequency accounting.
    ///
    /// Two cards of the same case always share a key; milestone and tip
    /// cards additionally fold in their family/catalog id so distinct
    /// milestones and tips are tracked separately.
    pub fn key(&self) -> String {
        match self {
            Card::StreakAtRisk { .. } => "streak_at_risk".to_string(),
            Card::ShieldDeployed { .. } => "shield_deployed".to_string(),
            Card::WelcomeBack => "welcome_back".to_string(),
            Card::AlmostThere { .. } => "almost_there".to_string(),
            Card::MilestoneCelebration { event } => format!("milestone_{}", event.kind),
            Card::TryInsights { .. } => "try_insights".to_string(),
            Card::TryWatchSync => "try_watch_sync".to_string(),
            Card::NewWeekNewGoal => "new_week_new_goal".to_string(),
            Card::WeekendReminder => "weekend_reminder".to_string(),
            Card::EveningNudge { .. } => "evening_nudge".to_string(),
            Card::Tip { tip } => format!("tip_{}", tip.id),
        }
    }

    /// Maximum shows per local day for this card, `None` meaning uncapped.
    ///
    /// Tier-3 tips must stay uncapped: they are the fallback that guarantees
    /// `evaluate` always has something to return.
    pub fn daily_cap(&self) -> Option<u32> {
        match self.tier() {
            CardTier::Urgent | CardTier::Contextual => Some(1),
            CardTier::Fallback => None,
        }
    }
}
