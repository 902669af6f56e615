//! User and push subscription fixture utilities.
//!
//! This module provides methods for creating user-related test fixtures. The
//! password hash on fixture users is a placeholder; tests that exercise real
//! credential checks register through the auth service instead.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PushSubscriptionModel, model::UserModel, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        let display_name = email
            .split('@')
            .next()
            .unwrap_or("user")
            .to_string();

        Ok(
            entity::prelude::VelvetUser::insert(entity::velvet_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set("$argon2id$not-a-real-hash".to_string()),
                display_name: ActiveValue::Set(display_name),
                city: ActiveValue::Set(None),
                bio: ActiveValue::Set(None),
                avatar_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_push_subscription(
        &self,
        user_id: i32,
        endpoint: &str,
    ) -> Result<PushSubscriptionModel, TestError> {
        Ok(entity::prelude::PushSubscription::insert(
            entity::push_subscription::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                endpoint: ActiveValue::Set(endpoint.to_string()),
                p256dh: ActiveValue::Set("p256dh_key".to_string()),
                auth: ActiveValue::Set("auth_secret".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
