pub use super::chat::Entity as Chat;
pub use super::chat_message::Entity as ChatMessage;
pub use super::dating_match::Entity as DatingMatch;
pub use super::dating_page::Entity as DatingPage;
pub use super::dating_swipe::Entity as DatingSwipe;
pub use super::event::Entity as Event;
pub use super::job::Entity as Job;
pub use super::job_application::Entity as JobApplication;
pub use super::live_stream::Entity as LiveStream;
pub use super::live_stream_page::Entity as LiveStreamPage;
pub use super::private_ad::Entity as PrivateAd;
pub use super::private_offer::Entity as PrivateOffer;
pub use super::push_subscription::Entity as PushSubscription;
pub use super::velvet_user::Entity as VelvetUser;
pub use super::vip_content::Entity as VipContent;
pub use super::vip_page::Entity as VipPage;
pub use super::vip_subscription::Entity as VipSubscription;
