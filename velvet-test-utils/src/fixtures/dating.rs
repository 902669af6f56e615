//! Dating page and swipe fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, model::DatingPageModel, model::DatingSwipeModel, TestSetup};

impl TestSetup {
    pub fn dating<'a>(&'a mut self) -> DatingFixtures<'a> {
        DatingFixtures { setup: self }
    }
}

pub struct DatingFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> DatingFixtures<'a> {
    pub async fn insert_page(
        &self,
        user_id: i32,
        city: &str,
    ) -> Result<DatingPageModel, TestError> {
        Ok(
            entity::prelude::DatingPage::insert(entity::dating_page::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                display_name: ActiveValue::Set(format!("page_{user_id}")),
                age: ActiveValue::Set(28),
                gender: ActiveValue::Set("woman".to_string()),
                seeking: ActiveValue::Set("man".to_string()),
                bio: ActiveValue::Set("Coffee first, then we'll see.".to_string()),
                city: ActiveValue::Set(city.to_string()),
                photo_url: ActiveValue::Set(None),
                active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_swipe(
        &self,
        swiper_page_id: i32,
        target_page_id: i32,
        liked: bool,
    ) -> Result<DatingSwipeModel, TestError> {
        Ok(
            entity::prelude::DatingSwipe::insert(entity::dating_swipe::ActiveModel {
                swiper_page_id: ActiveValue::Set(swiper_page_id),
                target_page_id: ActiveValue::Set(target_page_id),
                liked: ActiveValue::Set(liked),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn deactivate_page(&self, page_id: i32) -> Result<(), TestError> {
        entity::dating_page::ActiveModel {
            id: ActiveValue::Set(page_id),
            active: ActiveValue::Set(false),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }
}
