//! Dating vertical service layer.
//!
//! This module contains business logic for dating profiles, the discover
//! feed, and the swipe/match flow. A match is two reciprocal likes; the
//! match row and its chat are created together in one transaction.

use entity::chat::ChatOrigin;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::dating::{DatingPageDto, DiscoverQuery, MatchDto, SwipeDto, SwipeResultDto, UpsertDatingPageDto},
    server::{
        data::{
            chat::ChatRepository,
            dating::{matches::MatchRepository, page::DatingPageRepository, swipe::SwipeRepository},
        },
        error::Error,
    },
};

const DEFAULT_DISCOVER_LIMIT: u64 = 20;
const MAX_DISCOVER_LIMIT: u64 = 50;

/// Service for dating profiles and the swipe/match flow.
pub struct DatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatingService<'a> {
    /// Creates a new instance of DatingService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the user's dating profile.
    ///
    /// # Returns
    /// - `Ok((DatingPageDto, true))` - Profile created
    /// - `Ok((DatingPageDto, false))` - Existing profile updated
    /// - `Err(Error::ValidationError)` - Age or display name out of bounds
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upsert_page(
        &self,
        user_id: i32,
        page: UpsertDatingPageDto,
    ) -> Result<(DatingPageDto, bool), Error> {
        if !(18..=120).contains(&page.age) {
            return Err(Error::ValidationError(
                "Age must be between 18 and 120".to_string(),
            ));
        }
        let name_length = page.display_name.chars().count();
        if !(2..=64).contains(&name_length) {
            return Err(Error::ValidationError(
                "Display name must be between 2 and 64 characters".to_string(),
            ));
        }

        let page_repo = DatingPageRepository::new(self.db);

        match page_repo.get_by_user(user_id).await? {
            Some(existing) => {
                let updated = page_repo.update(existing, page).await?;
                Ok((updated.into(), false))
            }
            None => {
                let created = page_repo.create(user_id, page).await?;
                Ok((created.into(), true))
            }
        }
    }

    /// Fetches the user's own dating profile.
    pub async fn get_own_page(&self, user_id: i32) -> Result<DatingPageDto, Error> {
        let page_repo = DatingPageRepository::new(self.db);

        match page_repo.get_by_user(user_id).await? {
            Some(page) => Ok(page.into()),
            None => Err(Error::NotFound("Dating page not found".to_string())),
        }
    }

    /// Lists candidate profiles the user has not swiped on yet.
    ///
    /// Browsing requires an own dating page; users without one get a 404.
    pub async fn discover(
        &self,
        user_id: i32,
        query: DiscoverQuery,
    ) -> Result<Vec<DatingPageDto>, Error> {
        let page_repo = DatingPageRepository::new(self.db);
        let Some(own_page) = page_repo.get_by_user(user_id).await? else {
            return Err(Error::NotFound(
                "Create a dating page to browse profiles".to_string(),
            ));
        };

        let limit = query
            .limit
            .unwrap_or(DEFAULT_DISCOVER_LIMIT)
            .clamp(1, MAX_DISCOVER_LIMIT);

        let swipe_repo = SwipeRepository::new(self.db);
        let swiped_page_ids = swipe_repo.list_target_ids(own_page.id).await?;

        let pages = page_repo
            .discover(own_page.id, swiped_page_ids, query.city, limit)
            .await?;

        Ok(pages.into_iter().map(DatingPageDto::from).collect())
    }

    /// Records a swipe and resolves it into a match on a reciprocal like.
    ///
    /// The chat and the match row are written in one transaction so a match
    /// never exists without its conversation.
    ///
    /// # Returns
    /// - `Ok(SwipeResultDto)` - Swipe recorded; `matched` is true on a reciprocal like
    /// - `Err(Error::NotFound)` - Caller has no dating page, or the target does not exist
    /// - `Err(Error::ValidationError)` - Caller swiped their own page
    /// - `Err(Error::Conflict)` - Caller already swiped this target
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn swipe(&self, user_id: i32, swipe: SwipeDto) -> Result<SwipeResultDto, Error> {
        let page_repo = DatingPageRepository::new(self.db);
        let Some(own_page) = page_repo.get_by_user(user_id).await? else {
            return Err(Error::NotFound(
                "Create a dating page before swiping".to_string(),
            ));
        };

        if swipe.target_page_id == own_page.id {
            return Err(Error::ValidationError(
                "You cannot swipe on your own page".to_string(),
            ));
        }

        let Some(target) = page_repo.get(swipe.target_page_id).await? else {
            return Err(Error::NotFound("Dating page not found".to_string()));
        };

        let swipe_repo = SwipeRepository::new(self.db);
        if swipe_repo.get_pair(own_page.id, target.id).await?.is_some() {
            return Err(Error::Conflict(
                "You already swiped on this page".to_string(),
            ));
        }

        swipe_repo.create(own_page.id, target.id, swipe.liked).await?;

        // A pass never matches, even against a waiting like.
        if !swipe.liked {
            return Ok(SwipeResultDto {
                matched: false,
                match_result: None,
            });
        }

        let reciprocal_like = swipe_repo
            .get_pair(target.id, own_page.id)
            .await?
            .map(|reciprocal| reciprocal.liked)
            .unwrap_or(false);
        if !reciprocal_like {
            return Ok(SwipeResultDto {
                matched: false,
                match_result: None,
            });
        }

        let txn = self.db.begin().await?;

        let chat_repo = ChatRepository::new(&txn);
        let chat = match chat_repo
            .get_by_pair(user_id, target.user_id, ChatOrigin::Match)
            .await?
        {
            Some(chat) => chat,
            None => {
                chat_repo
                    .create(user_id, target.user_id, ChatOrigin::Match)
                    .await?
            }
        };

        let match_repo = MatchRepository::new(&txn);
        let match_row = match_repo.create(own_page.id, target.id, chat.id).await?;

        txn.commit().await?;

        Ok(SwipeResultDto {
            matched: true,
            match_result: Some(MatchDto {
                id: match_row.id,
                chat_id: match_row.chat_id,
                page: target.into(),
                created_at: match_row.created_at,
            }),
        })
    }

    /// Lists the user's matches, newest first, with the counterpart page.
    pub async fn list_matches(&self, user_id: i32) -> Result<Vec<MatchDto>, Error> {
        let page_repo = DatingPageRepository::new(self.db);
        let Some(own_page) = page_repo.get_by_user(user_id).await? else {
            return Err(Error::NotFound("Dating page not found".to_string()));
        };

        let match_repo = MatchRepository::new(self.db);
        let match_rows = match_repo.list_for_page(own_page.id).await?;

        let mut matches = Vec::with_capacity(match_rows.len());
        for match_row in match_rows {
            let counterpart_id = if match_row.page_a_id == own_page.id {
                match_row.page_b_id
            } else {
                match_row.page_a_id
            };

            let Some(counterpart) = page_repo.get(counterpart_id).await? else {
                return Err(Error::InternalError(format!(
                    "Match ID {} references missing page ID {}",
                    match_row.id, counterpart_id
                )));
            };

            matches.push(MatchDto {
                id: match_row.id,
                chat_id: match_row.chat_id,
                page: counterpart.into(),
                created_at: match_row.created_at,
            });
        }

        Ok(matches)
    }
}
