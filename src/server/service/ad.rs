//! Private ad service layer.
//!
//! This module contains business logic for escort listing management: listing
//! creation with a rolling expiry, visibility rules for inactive ads, and the
//! deletion guard that keeps ads with open offers alive.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::ad::{AdListQuery, CreatePrivateAdDto, PrivateAdDto, UpdatePrivateAdDto},
    server::{
        data::{ad::AdRepository, offer::OfferRepository},
        error::Error,
    },
};

/// Days a listing stays up before the expiry scan deactivates it. Creating
/// or editing an ad restarts the clock.
const LISTING_TTL_DAYS: i64 = 30;

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 50;

/// Service for managing private ad listings.
pub struct AdService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdService<'a> {
    /// Creates a new instance of AdService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing owned by the acting user.
    ///
    /// # Returns
    /// - `Ok(PrivateAdDto)` - Listing created, expiring in 30 days
    /// - `Err(Error::ValidationError)` - Title, description, or price out of bounds
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_ad(
        &self,
        owner_id: i32,
        ad: CreatePrivateAdDto,
    ) -> Result<PrivateAdDto, Error> {
        validate_ad_fields(&ad.title, &ad.description, ad.price_hour_cents)?;

        let ad_repo = AdRepository::new(self.db);
        let expires_at = Utc::now().naive_utc() + Duration::days(LISTING_TTL_DAYS);

        let ad = ad_repo.create(owner_id, ad, expires_at).await?;

        Ok(ad.into())
    }

    /// Lists active ads for the public browse view.
    pub async fn list_ads(&self, query: AdListQuery) -> Result<Vec<PrivateAdDto>, Error> {
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page = query.page.unwrap_or(0);

        let ad_repo = AdRepository::new(self.db);
        let ads = ad_repo
            .list_active(query.city, query.category, per_page, page * per_page)
            .await?;

        Ok(ads.into_iter().map(PrivateAdDto::from).collect())
    }

    /// Fetches a single ad.
    ///
    /// Inactive ads are only visible to their owner; everyone else gets the
    /// same 404 a missing ad produces.
    pub async fn get_ad(&self, ad_id: i32, viewer_id: i32) -> Result<PrivateAdDto, Error> {
        let ad_repo = AdRepository::new(self.db);

        let ad = match ad_repo.get(ad_id).await? {
            Some(ad) => ad,
            None => return Err(Error::NotFound("Ad not found".to_string())),
        };

        if !ad.active && ad.owner_id != viewer_id {
            return Err(Error::NotFound("Ad not found".to_string()));
        }

        Ok(ad.into())
    }

    /// Lists every ad the user owns, including inactive and expired ones.
    pub async fn list_own_ads(&self, owner_id: i32) -> Result<Vec<PrivateAdDto>, Error> {
        let ad_repo = AdRepository::new(self.db);
        let ads = ad_repo.list_by_owner(owner_id).await?;

        Ok(ads.into_iter().map(PrivateAdDto::from).collect())
    }

    /// Applies an edit to an owned ad and restarts its 30-day expiry clock.
    ///
    /// # Returns
    /// - `Ok(PrivateAdDto)` - Listing updated
    /// - `Err(Error::ValidationError)` - Edited fields out of bounds
    /// - `Err(Error::NotFound)` - Ad missing or owned by someone else
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_ad(
        &self,
        owner_id: i32,
        ad_id: i32,
        update: UpdatePrivateAdDto,
    ) -> Result<PrivateAdDto, Error> {
        let ad_repo = AdRepository::new(self.db);

        let ad = match ad_repo.get(ad_id).await? {
            Some(ad) if ad.owner_id == owner_id => ad,
            _ => return Err(Error::NotFound("Ad not found".to_string())),
        };

        let title = update.title.as_deref().unwrap_or(&ad.title);
        let description = update.description.as_deref().unwrap_or(&ad.description);
        let price_hour_cents = update.price_hour_cents.unwrap_or(ad.price_hour_cents);
        validate_ad_fields(title, description, price_hour_cents)?;

        let expires_at = Utc::now().naive_utc() + Duration::days(LISTING_TTL_DAYS);
        let ad = ad_repo.update(ad, update, expires_at).await?;

        Ok(ad.into())
    }

    /// Deletes an owned ad.
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted
    /// - `Err(Error::NotFound)` - Ad missing or owned by someone else
    /// - `Err(Error::Conflict)` - Offers on the ad are still in flight
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_ad(&self, owner_id: i32, ad_id: i32) -> Result<(), Error> {
        let ad_repo = AdRepository::new(self.db);

        let ad = match ad_repo.get(ad_id).await? {
            Some(ad) if ad.owner_id == owner_id => ad,
            _ => return Err(Error::NotFound("Ad not found".to_string())),
        };

        let offer_repo = OfferRepository::new(self.db);
        let open_offers = offer_repo.count_open_by_ad(ad.id).await?;
        if open_offers > 0 {
            return Err(Error::Conflict(
                "Ad still has offers in flight".to_string(),
            ));
        }

        ad_repo.delete(ad.id).await?;

        Ok(())
    }

    /// Worker-side expiry: flips an ad inactive once its expiry has passed.
    ///
    /// The scan that enqueued the job ran earlier, so the row is re-checked
    /// here; an ad renewed or deleted in the meantime is left alone.
    pub async fn deactivate_expired(&self, ad_id: i32) -> Result<(), Error> {
        let ad_repo = AdRepository::new(self.db);

        let ad = match ad_repo.get(ad_id).await? {
            Some(ad) => ad,
            None => {
                tracing::debug!("Ad ID {} no longer exists, skipping deactivation", ad_id);
                return Ok(());
            }
        };

        if !ad.active {
            return Ok(());
        }
        if ad.expires_at > Utc::now().naive_utc() {
            tracing::debug!("Ad ID {} was renewed, skipping deactivation", ad_id);
            return Ok(());
        }

        ad_repo.deactivate(ad).await?;

        Ok(())
    }
}

fn validate_ad_fields(title: &str, description: &str, price_hour_cents: i64) -> Result<(), Error> {
    let title_length = title.chars().count();
    if !(3..=120).contains(&title_length) {
        return Err(Error::ValidationError(
            "Title must be between 3 and 120 characters".to_string(),
        ));
    }

    if description.chars().count() > 8000 {
        return Err(Error::ValidationError(
            "Description must be at most 8000 characters".to_string(),
        ));
    }

    if price_hour_cents <= 0 {
        return Err(Error::ValidationError(
            "Price must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
