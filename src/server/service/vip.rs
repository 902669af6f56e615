//! VIP page service layer.
//!
//! This module contains business logic for creator subscription pages:
//! handle validation, content gating for non-subscribers, and the
//! subscription lifecycle (subscribe, extend, cancel, expire). Payment
//! collection is delegated; a subscription here only tracks the paid
//! period.

use chrono::{Duration, Utc};
use entity::vip_subscription::SubscriptionStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::vip::{
        ContentListQuery, CreateVipContentDto, CreateVipPageDto, UpdateVipPageDto, VipContentDto,
        VipPageDetailDto, VipPageDto, VipSubscriptionDto,
    },
    server::{
        data::vip::{
            content::VipContentRepository, page::VipPageRepository,
            subscription::VipSubscriptionRepository,
        },
        error::Error,
        model::db::VipSubscriptionModel,
    },
};

/// Days of access granted per subscription payment.
const SUBSCRIPTION_PERIOD_DAYS: i64 = 30;

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 50;

/// Whether a subscription row still grants access to gated content.
///
/// A cancelled subscription keeps access until its paid period runs out;
/// only an expired one (or a lapsed period the expiry scan has not flipped
/// yet) loses it.
fn holds_paid_access(subscription: &VipSubscriptionModel) -> bool {
    subscription.status != SubscriptionStatus::Expired
        && subscription.current_period_end > Utc::now().naive_utc()
}

fn validate_handle(handle: &str) -> Result<(), Error> {
    let length = handle.chars().count();
    if !(3..=32).contains(&length)
        || !handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(Error::ValidationError(
            "Handle must be 3 to 32 characters of a-z, 0-9, or underscore".to_string(),
        ));
    }

    Ok(())
}

/// Service for VIP pages, their content, and subscriptions.
pub struct VipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VipService<'a> {
    /// Creates a new instance of VipService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user's VIP page.
    ///
    /// # Returns
    /// - `Ok(VipPageDto)` - Page created
    /// - `Err(Error::ValidationError)` - Handle malformed or price not positive
    /// - `Err(Error::Conflict)` - User already has a page or the handle is taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_page(
        &self,
        owner_id: i32,
        page: CreateVipPageDto,
    ) -> Result<VipPageDto, Error> {
        validate_handle(&page.handle)?;
        if page.monthly_price_cents <= 0 {
            return Err(Error::ValidationError(
                "Price must be greater than zero".to_string(),
            ));
        }

        let page_repo = VipPageRepository::new(self.db);

        if page_repo.get_by_owner(owner_id).await?.is_some() {
            return Err(Error::Conflict(
                "You already have a VIP page".to_string(),
            ));
        }
        if page_repo.get_by_handle(&page.handle).await?.is_some() {
            return Err(Error::Conflict("Handle is already taken".to_string()));
        }

        let page = page_repo.create(owner_id, page).await?;

        Ok(page.into())
    }

    /// Updates the user's VIP page. The handle is immutable.
    pub async fn update_page(
        &self,
        owner_id: i32,
        update: UpdateVipPageDto,
    ) -> Result<VipPageDto, Error> {
        if let Some(price) = update.monthly_price_cents {
            if price <= 0 {
                return Err(Error::ValidationError(
                    "Price must be greater than zero".to_string(),
                ));
            }
        }

        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_owner(owner_id).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        let page = page_repo.update(page, update).await?;

        Ok(page.into())
    }

    /// Fetches the public view of a page by handle.
    pub async fn get_page_detail(
        &self,
        handle: &str,
        viewer_id: i32,
    ) -> Result<VipPageDetailDto, Error> {
        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_handle(handle).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        let content_repo = VipContentRepository::new(self.db);
        let content_count = content_repo.count_by_page(page.id).await?;

        let subscription_repo = VipSubscriptionRepository::new(self.db);
        let subscribed = subscription_repo
            .get_pair(page.id, viewer_id)
            .await?
            .map(|subscription| holds_paid_access(&subscription))
            .unwrap_or(false);

        Ok(VipPageDetailDto {
            page: page.into(),
            content_count,
            subscribed,
        })
    }

    /// Posts content to the user's own page.
    pub async fn create_content(
        &self,
        owner_id: i32,
        content: CreateVipContentDto,
    ) -> Result<VipContentDto, Error> {
        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_owner(owner_id).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        let content_repo = VipContentRepository::new(self.db);
        let content = content_repo.create(page.id, content).await?;

        Ok(content.into())
    }

    /// Deletes a post from the user's own page.
    ///
    /// Posts on other pages produce the same 404 a missing post does.
    pub async fn delete_content(&self, owner_id: i32, content_id: i32) -> Result<(), Error> {
        let content_repo = VipContentRepository::new(self.db);
        let Some(content) = content_repo.get(content_id).await? else {
            return Err(Error::NotFound("Content not found".to_string()));
        };

        let page_repo = VipPageRepository::new(self.db);
        let owns_page = page_repo
            .get(content.page_id)
            .await?
            .map(|page| page.owner_id == owner_id)
            .unwrap_or(false);
        if !owns_page {
            return Err(Error::NotFound("Content not found".to_string()));
        }

        content_repo.delete(content.id).await?;

        Ok(())
    }

    /// Lists a page's posts, newest first, gated by the viewer's access.
    ///
    /// The owner and holders of an unexpired subscription see everything;
    /// everyone else sees preview posts only.
    pub async fn list_content(
        &self,
        handle: &str,
        viewer_id: i32,
        query: ContentListQuery,
    ) -> Result<Vec<VipContentDto>, Error> {
        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_handle(handle).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        let has_access = if page.owner_id == viewer_id {
            true
        } else {
            let subscription_repo = VipSubscriptionRepository::new(self.db);
            subscription_repo
                .get_pair(page.id, viewer_id)
                .await?
                .map(|subscription| holds_paid_access(&subscription))
                .unwrap_or(false)
        };

        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page_number = query.page.unwrap_or(0);

        let content_repo = VipContentRepository::new(self.db);
        let posts = content_repo
            .list_by_page(page.id, !has_access, per_page, page_number * per_page)
            .await?;

        Ok(posts.into_iter().map(VipContentDto::from).collect())
    }

    /// Subscribes the user to a page for 30 days.
    ///
    /// Re-subscribing before the period runs out extends it by 30 days from
    /// its current end and reactivates a cancelled subscription; after the
    /// period has lapsed a fresh 30-day period starts.
    ///
    /// # Returns
    /// - `Ok(VipSubscriptionDto)` - Subscription created, extended, or restarted
    /// - `Err(Error::NotFound)` - No page with that handle
    /// - `Err(Error::ValidationError)` - Caller owns the page
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn subscribe(
        &self,
        subscriber_id: i32,
        handle: &str,
    ) -> Result<VipSubscriptionDto, Error> {
        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_handle(handle).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        if page.owner_id == subscriber_id {
            return Err(Error::ValidationError(
                "You cannot subscribe to your own page".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();
        let period = Duration::days(SUBSCRIPTION_PERIOD_DAYS);

        let subscription_repo = VipSubscriptionRepository::new(self.db);
        let subscription = match subscription_repo.get_pair(page.id, subscriber_id).await? {
            None => {
                subscription_repo
                    .create(page.id, subscriber_id, now + period)
                    .await?
            }
            Some(subscription) => {
                let period_end = if subscription.current_period_end > now {
                    subscription.current_period_end + period
                } else {
                    now + period
                };
                subscription_repo
                    .update(subscription, SubscriptionStatus::Active, period_end)
                    .await?
            }
        };

        Ok(VipSubscriptionDto::from_subscription(subscription, page))
    }

    /// Cancels the user's subscription to a page.
    ///
    /// Access runs to the end of the paid period; the expiry scan flips the
    /// row to expired once that passes.
    pub async fn unsubscribe(
        &self,
        subscriber_id: i32,
        handle: &str,
    ) -> Result<VipSubscriptionDto, Error> {
        let page_repo = VipPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_handle(handle).await? else {
            return Err(Error::NotFound("VIP page not found".to_string()));
        };

        let subscription_repo = VipSubscriptionRepository::new(self.db);
        let Some(subscription) = subscription_repo.get_pair(page.id, subscriber_id).await? else {
            return Err(Error::NotFound("Subscription not found".to_string()));
        };

        if subscription.status == SubscriptionStatus::Expired {
            return Err(Error::Conflict(
                "Subscription has already expired".to_string(),
            ));
        }

        let period_end = subscription.current_period_end;
        let subscription = subscription_repo
            .update(subscription, SubscriptionStatus::Cancelled, period_end)
            .await?;

        Ok(VipSubscriptionDto::from_subscription(subscription, page))
    }

    /// Lists the user's subscriptions with their pages, newest first.
    pub async fn list_subscriptions(
        &self,
        subscriber_id: i32,
    ) -> Result<Vec<VipSubscriptionDto>, Error> {
        let subscription_repo = VipSubscriptionRepository::new(self.db);
        let subscriptions = subscription_repo.list_by_subscriber(subscriber_id).await?;

        Ok(subscriptions
            .into_iter()
            .filter_map(|(subscription, page)| {
                page.map(|page| VipSubscriptionDto::from_subscription(subscription, page))
            })
            .collect())
    }

    /// Worker-side expiry: flips a subscription to expired once its paid
    /// period has lapsed.
    ///
    /// The scan that enqueued the job ran earlier, so the row is re-checked
    /// here; a subscription renewed in the meantime is left alone.
    pub async fn expire_subscription(&self, subscription_id: i32) -> Result<(), Error> {
        let subscription_repo = VipSubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get(subscription_id).await? else {
            tracing::debug!(
                "Subscription ID {} no longer exists, skipping expiry",
                subscription_id
            );
            return Ok(());
        };

        if subscription.status == SubscriptionStatus::Expired {
            return Ok(());
        }
        if subscription.current_period_end > Utc::now().naive_utc() {
            tracing::debug!(
                "Subscription ID {} was renewed, skipping expiry",
                subscription.id
            );
            return Ok(());
        }

        let period_end = subscription.current_period_end;
        subscription_repo
            .update(subscription, SubscriptionStatus::Expired, period_end)
            .await?;

        Ok(())
    }
}
