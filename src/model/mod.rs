pub mod ad;
pub mod api;
pub mod chat;
pub mod dating;
pub mod event;
pub mod job;
pub mod live;
pub mod offer;
pub mod user;
pub mod vip;
