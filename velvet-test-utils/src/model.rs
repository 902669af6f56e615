//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main velvet crate
//! to ensure consistency across tests.

/// Type alias for the user database model.
pub type UserModel = entity::velvet_user::Model;

/// Type alias for the push subscription database model.
pub type PushSubscriptionModel = entity::push_subscription::Model;

/// Type alias for the private ad database model.
pub type PrivateAdModel = entity::private_ad::Model;

/// Type alias for the private offer database model.
pub type PrivateOfferModel = entity::private_offer::Model;

/// Type alias for the dating page database model.
pub type DatingPageModel = entity::dating_page::Model;

/// Type alias for the dating swipe database model.
pub type DatingSwipeModel = entity::dating_swipe::Model;

/// Type alias for the chat database model.
pub type ChatModel = entity::chat::Model;

/// Type alias for the chat message database model.
pub type ChatMessageModel = entity::chat_message::Model;

/// Type alias for the VIP page database model.
pub type VipPageModel = entity::vip_page::Model;

/// Type alias for the VIP content database model.
pub type VipContentModel = entity::vip_content::Model;

/// Type alias for the VIP subscription database model.
pub type VipSubscriptionModel = entity::vip_subscription::Model;

/// Type alias for the livestream channel page database model.
pub type LiveStreamPageModel = entity::live_stream_page::Model;

/// Type alias for the livestream database model.
pub type LiveStreamModel = entity::live_stream::Model;

/// Type alias for the event database model.
pub type EventModel = entity::event::Model;

/// Type alias for the job posting database model.
pub type JobModel = entity::job::Model;

/// Type alias for the job application database model.
pub type JobApplicationModel = entity::job_application::Model;
