//! External state providers consumed by the card engine.
//!
//! The engine reads four small state machines it does not own: streak
//! status, shield inventory, the milestone queue, and device/feature usage.
//! All reads are total - a provider that cannot produce a value must return
//! a safe default (zero streak, empty queue) rather than fail, which is why
//! none of these methods return `Result`.

use crate::card::MilestoneEvent;

/// Feature id for the usage-gated insights feature.
pub const FEATURE_INSIGHTS: &str = "insights";

/// Read-only view of the user's streak state.
pub trait StreakProvider {
    /// Length of the currently active streak, 0 if none.
    fn current_streak_length(&self) -> u32;
    /// All-time longest streak, 0 if the user never started one.
    fn longest_streak_length(&self) -> u32;
}

/// View of the streak-shield inventory.
pub trait ShieldProvider {
    /// One-shot flag: a shield was auto-deployed overnight to save the
    /// streak. Stays raised until [`acknowledge_auto_deploy`] clears it.
    ///
    /// [`acknowledge_auto_deploy`]: ShieldProvider::acknowledge_auto_deploy
    fn was_auto_deployed_overnight(&self) -> bool;
    /// Clear the overnight auto-deploy flag. Called by the engine once the
    /// shield card has been selected for display.
    fn acknowledge_auto_deploy(&mut self);
    fn available_shield_count(&self) -> u32;
    /// Human-readable label for the next shield refill ("in 3 days").
    fn next_refill_label(&self) -> String;
}

/// Queue of pending milestone celebrations.
pub trait MilestoneProvider {
    /// Pop the next contextual milestone event, if any.
    ///
    /// This is a destructive read: the event is removed from the queue even
    /// if the resulting card is then suppressed by the frequency gate. The
    /// engine only calls this when the milestone rung of the ladder is
    /// actually reached, never on cooldown-gated calls.
    fn pop_next_contextual_event(&mut self) -> Option<MilestoneEvent>;
}

/// Device connectivity and gated-feature usage.
pub trait DeviceStatusProvider {
    /// Remaining free uses of a gated feature, `None` if the feature is
    /// unknown or not gated for this user.
    fn remaining_free_uses(&self, feature: &str) -> Option<u32>;
    /// Whether a companion watch is paired and reachable.
    fn is_companion_reachable(&self) -> bool;
}
