//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types, making it easier to work with entities
//! without importing from the generated `entity` crate directly.

/// Type alias for a Velvet user account record.
pub type UserModel = entity::velvet_user::Model;

/// Type alias for a web push subscription record.
pub type PushSubscriptionModel = entity::push_subscription::Model;

/// Type alias for a private ad listing record.
pub type PrivateAdModel = entity::private_ad::Model;

/// Type alias for a private offer record moving through the booking lifecycle.
pub type PrivateOfferModel = entity::private_offer::Model;

/// Type alias for a dating profile page record.
pub type DatingPageModel = entity::dating_page::Model;

/// Type alias for a single directional swipe record.
pub type DatingSwipeModel = entity::dating_swipe::Model;

/// Type alias for a reciprocal dating match record.
pub type DatingMatchModel = entity::dating_match::Model;

/// Type alias for a VIP subscription page record.
pub type VipPageModel = entity::vip_page::Model;

/// Type alias for a VIP page content post record.
pub type VipContentModel = entity::vip_content::Model;

/// Type alias for a VIP page subscription record.
pub type VipSubscriptionModel = entity::vip_subscription::Model;

/// Type alias for a livestream channel page record.
pub type LiveStreamPageModel = entity::live_stream_page::Model;

/// Type alias for a single broadcast record on a livestream channel.
pub type LiveStreamModel = entity::live_stream::Model;

/// Type alias for an event listing record.
pub type EventModel = entity::event::Model;

/// Type alias for a job listing record.
pub type JobModel = entity::job::Model;

/// Type alias for a job application record.
pub type JobApplicationModel = entity::job_application::Model;

/// Type alias for a two-party conversation record.
pub type ChatModel = entity::chat::Model;

/// Type alias for a single chat message record.
pub type ChatMessageModel = entity::chat_message::Model;
