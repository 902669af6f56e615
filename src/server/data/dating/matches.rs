use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a match between two pages and the chat opened for it
    ///
    /// The pair is stored with the lower page ID first so the unique index
    /// holds regardless of which side swiped last.
    pub async fn create(
        &self,
        page_one_id: i32,
        page_two_id: i32,
        chat_id: i32,
    ) -> Result<entity::dating_match::Model, DbErr> {
        let (page_a_id, page_b_id) = if page_one_id < page_two_id {
            (page_one_id, page_two_id)
        } else {
            (page_two_id, page_one_id)
        };

        let dating_match = entity::dating_match::ActiveModel {
            page_a_id: ActiveValue::Set(page_a_id),
            page_b_id: ActiveValue::Set(page_b_id),
            chat_id: ActiveValue::Set(chat_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        dating_match.insert(self.db).await
    }

    /// Lists every match a page is part of, newest first
    pub async fn list_for_page(
        &self,
        page_id: i32,
    ) -> Result<Vec<entity::dating_match::Model>, DbErr> {
        entity::prelude::DatingMatch::find()
            .filter(
                Condition::any()
                    .add(entity::dating_match::Column::PageAId.eq(page_id))
                    .add(entity::dating_match::Column::PageBId.eq(page_id)),
            )
            .order_by_desc(entity::dating_match::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
