//! # Stride Core Library
//!
//! This library provides the engagement-card selection engine for the
//! Stride habit tracker. On every request it picks exactly one contextual
//! card to show the user, chosen from a three-tier priority ladder, subject
//! to per-card daily frequency caps, an evaluation cooldown, and a
//! deterministic-but-rotating fallback pool of generic tips. It is an
//! in-process library; the UI layer is its only client.
//!
//! ## Architecture
//!
//! - **Card Engine**: fixed-order priority ladder with a cooldown gate and
//!   a self-healing local-day reset
//! - **Ledgers**: persisted per-day show counts / acted-upon set and a
//!   bounded recent-tip history
//! - **Storage**: SQLite-backed key-value store and TOML-based configuration
//! - **Providers**: injected read-only views of streak, shield, milestone
//!   and device state owned elsewhere
//!
//! ## Key Components
//!
//! - [`CardEngine`]: the selection engine
//! - [`Card`]: the closed set of displayable cards
//! - [`Database`]: durable key-value persistence
//! - [`Config`]: application configuration management

pub mod card;
pub mod catalog;
pub mod clock;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod providers;
pub mod storage;
pub mod tips;

pub use card::{Card, CardTier, MilestoneEvent};
pub use catalog::TipRecord;
pub use clock::{Clock, SystemClock};
pub use engine::CardEngine;
pub use error::{ConfigError, CoreError, StorageError};
pub use ledger::{FrequencyLedger, RecencyLedger};
pub use providers::{
    DeviceStatusProvider, MilestoneProvider, ShieldProvider, StreakProvider, FEATURE_INSIGHTS,
};
pub use storage::{Config, Database, EngineConfig, KvStore, MemoryStore};
pub use tips::TipSelector;
