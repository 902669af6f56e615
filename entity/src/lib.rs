pub mod prelude;

pub mod chat;
pub mod chat_message;
pub mod dating_match;
pub mod dating_page;
pub mod dating_swipe;
pub mod event;
pub mod job;
pub mod job_application;
pub mod live_stream;
pub mod live_stream_page;
pub mod private_ad;
pub mod private_offer;
pub mod push_subscription;
pub mod velvet_user;
pub mod vip_content;
pub mod vip_page;
pub mod vip_subscription;
