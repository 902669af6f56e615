//! Worker job definitions for background task processing.
//!
//! This module defines the `WorkerJob` enum representing all types of background jobs that
//! can be dispatched to the worker queue. Jobs are serialized to JSON for Redis storage and
//! deserialized by worker handlers for processing. Each job variant contains the minimal
//! data needed to perform the task (the row id to act on).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types for marketplace lifecycle maintenance.
///
/// Each variant represents a task the cron scheduler enqueues to the Redis-backed
/// worker queue after a scan finds rows whose deadline has passed. Handlers re-check
/// the row's state before acting, so a job that arrives late or twice is harmless.
///
/// # Job Types
/// - `ReleaseOffer` - Release a confirmed offer once its dispute window has lapsed
/// - `ExpireSubscription` - Expire a VIP subscription past its paid period
/// - `DeactivateAd` - Deactivate a private ad past its expiry date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkerJob {
    /// Release the escrowed payment for a confirmed offer whose dispute window
    /// has lapsed without a dispute being raised.
    ReleaseOffer {
        /// Offer row id to release.
        offer_id: i32,
    },

    /// Expire a VIP subscription whose paid period has run out.
    ExpireSubscription {
        /// Subscription row id to expire.
        subscription_id: i32,
    },

    /// Deactivate a private ad that has passed its expiry date.
    DeactivateAd {
        /// Ad row id to deactivate.
        ad_id: i32,
    },
}

/// Human-readable job representation for worker logging.
impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
