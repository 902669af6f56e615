//! User service layer.
//!
//! This module contains business logic for user profile management and web
//! push subscription registration.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{PushSubscriptionDto, UpdateProfileDto, UserDto},
    server::{
        data::user::{push_subscription::PushSubscriptionRepository, UserRepository},
        error::Error,
        model::db::PushSubscriptionModel,
    },
};

/// Service for managing user profiles and push subscriptions.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get(user_id).await?.map(UserDto::from))
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile updated
    /// - `Err(Error::ValidationError)` - Display name out of bounds
    /// - `Err(Error::NotFound)` - User no longer exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<UserDto, Error> {
        if let Some(display_name) = &update.display_name {
            let display_name_length = display_name.chars().count();
            if !(2..=64).contains(&display_name_length) {
                return Err(Error::ValidationError(
                    "Display name must be between 2 and 64 characters".to_string(),
                ));
            }
        }

        let user_repo = UserRepository::new(self.db);

        match user_repo.update_profile(user_id, update).await? {
            Some(user) => Ok(user.into()),
            None => Err(Error::NotFound("User not found".to_string())),
        }
    }

    /// Registers a browser push endpoint for the user.
    ///
    /// Re-registering a known endpoint re-binds it to the current user, which
    /// covers a browser whose profile switched accounts.
    pub async fn subscribe_push(
        &self,
        user_id: i32,
        subscription: PushSubscriptionDto,
    ) -> Result<PushSubscriptionModel, Error> {
        if subscription.endpoint.is_empty() {
            return Err(Error::ValidationError(
                "Push endpoint must not be empty".to_string(),
            ));
        }

        let subscription_repo = PushSubscriptionRepository::new(self.db);

        let subscription = subscription_repo
            .upsert(
                user_id,
                subscription.endpoint,
                subscription.p256dh,
                subscription.auth,
            )
            .await?;

        Ok(subscription)
    }

    /// Removes the user's registration for a push endpoint; removing an
    /// unknown endpoint is a no-op.
    pub async fn unsubscribe_push(&self, user_id: i32, endpoint: &str) -> Result<(), Error> {
        let subscription_repo = PushSubscriptionRepository::new(self.db);

        subscription_repo
            .delete_by_endpoint(user_id, endpoint)
            .await?;

        Ok(())
    }
}
