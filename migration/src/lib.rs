pub use sea_orm_migration::prelude::*;

mod m20260815_000001_velvet_user;
mod m20260815_000002_push_subscription;
mod m20260815_000003_private_ad;
mod m20260815_000004_private_offer;
mod m20260815_000005_dating_page;
mod m20260815_000006_dating_swipe;
mod m20260815_000007_chat;
mod m20260815_000008_dating_match;
mod m20260815_000009_vip_page;
mod m20260815_000010_vip_content;
mod m20260815_000011_vip_subscription;
mod m20260815_000012_live_stream_page;
mod m20260815_000013_live_stream;
mod m20260815_000014_event;
mod m20260815_000015_job;
mod m20260815_000016_job_application;
mod m20260815_000017_chat_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_velvet_user::Migration),
            Box::new(m20260815_000002_push_subscription::Migration),
            Box::new(m20260815_000003_private_ad::Migration),
            Box::new(m20260815_000004_private_offer::Migration),
            Box::new(m20260815_000005_dating_page::Migration),
            Box::new(m20260815_000006_dating_swipe::Migration),
            Box::new(m20260815_000007_chat::Migration),
            Box::new(m20260815_000008_dating_match::Migration),
            Box::new(m20260815_000009_vip_page::Migration),
            Box::new(m20260815_000010_vip_content::Migration),
            Box::new(m20260815_000011_vip_subscription::Migration),
            Box::new(m20260815_000012_live_stream_page::Migration),
            Box::new(m20260815_000013_live_stream::Migration),
            Box::new(m20260815_000014_event::Migration),
            Box::new(m20260815_000015_job::Migration),
            Box::new(m20260815_000016_job_application::Migration),
            Box::new(m20260815_000017_chat_message::Migration),
        ]
    }
}
