pub mod push_subscription;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::user::UpdateProfileDto;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user account
    ///
    /// The password must already be hashed; repositories never see plaintext
    /// credentials.
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        display_name: String,
    ) -> Result<entity::velvet_user::Model, DbErr> {
        let user = entity::velvet_user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            display_name: ActiveValue::Set(display_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::velvet_user::Model>, DbErr> {
        entity::prelude::VelvetUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::velvet_user::Model>, DbErr> {
        entity::prelude::VelvetUser::find()
            .filter(entity::velvet_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates the profile fields of an existing user
    ///
    /// Only fields present in the update are changed; absent fields keep their
    /// current value.
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: UpdateProfileDto,
    ) -> Result<Option<entity::velvet_user::Model>, DbErr> {
        let user = match entity::prelude::VelvetUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(display_name) = update.display_name {
            user_am.display_name = ActiveValue::Set(display_name);
        }
        if let Some(city) = update.city {
            user_am.city = ActiveValue::Set(Some(city));
        }
        if let Some(bio) = update.bio {
            user_am.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(avatar_url) = update.avatar_url {
            user_am.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
