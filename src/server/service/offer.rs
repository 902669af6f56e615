//! Offer lifecycle service layer.
//!
//! This module contains business logic for the escrow-like booking flow on
//! private ads. Each transition is its own method performing one status
//! change: load the offer, authorize the acting party, verify the source
//! status, apply a single update. There is no shared state machine object;
//! the database row is the only state.

use chrono::{Duration, Utc};
use entity::private_offer::OfferStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::offer::{CreateOfferDto, OfferDto, OfferListQuery},
    server::{
        data::{ad::AdRepository, offer::OfferRepository},
        error::{offer::OfferError, Error},
        integration::PushClient,
        model::db::PrivateOfferModel,
        service::notify,
    },
};

/// Hours after completion during which the client can still open a dispute.
/// Once the window passes the auto-release scan pays the provider out.
pub const DISPUTE_WINDOW_HOURS: i64 = 48;

/// Which side of a booking is expected to perform a transition.
enum ActingParty {
    Client,
    Provider,
}

/// Service for the private ad booking lifecycle.
pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
    push: &'a PushClient,
}

impl<'a> OfferService<'a> {
    /// Creates a new instance of OfferService.
    pub fn new(db: &'a DatabaseConnection, push: &'a PushClient) -> Self {
        Self { db, push }
    }

    /// Creates an offer against an active ad on behalf of a client.
    ///
    /// # Returns
    /// - `Ok(OfferDto)` - Offer created in the initial status
    /// - `Err(Error::ValidationError)` - Price, start time, or duration out of bounds
    /// - `Err(Error::NotFound)` - Ad missing or inactive
    /// - `Err(Error::OfferError)` - Client owns the ad
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_offer(
        &self,
        client_id: i32,
        ad_id: i32,
        offer: CreateOfferDto,
    ) -> Result<OfferDto, Error> {
        if offer.price_cents <= 0 {
            return Err(Error::ValidationError(
                "Price must be greater than zero".to_string(),
            ));
        }
        if offer.starts_at <= Utc::now().naive_utc() {
            return Err(Error::ValidationError(
                "Start time must be in the future".to_string(),
            ));
        }
        if !(15..=1440).contains(&offer.duration_minutes) {
            return Err(Error::ValidationError(
                "Duration must be between 15 minutes and 24 hours".to_string(),
            ));
        }

        let ad_repo = AdRepository::new(self.db);
        let ad = match ad_repo.get(ad_id).await? {
            Some(ad) if ad.active => ad,
            _ => return Err(Error::NotFound("Ad not found".to_string())),
        };

        if ad.owner_id == client_id {
            return Err(Error::OfferError(OfferError::OwnAd));
        }

        let offer_repo = OfferRepository::new(self.db);
        let offer = offer_repo.create(ad.id, client_id, offer).await?;

        Ok(OfferDto::from_offer(offer, ad.owner_id))
    }

    /// Provider accepts an open offer, notionally placing the funds in escrow.
    pub async fn accept_offer(&self, provider_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, _) = self
            .transition(
                provider_id,
                offer_id,
                "accepted",
                ActingParty::Provider,
                &[OfferStatus::Offer],
                OfferStatus::Pending,
            )
            .await?;

        notify::push_to_user(
            self.db,
            self.push,
            offer.client_id,
            "Offer accepted",
            "The provider accepted your offer and the booking is now pending.",
        )
        .await;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Provider declines an open offer.
    pub async fn reject_offer(&self, provider_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, _) = self
            .transition(
                provider_id,
                offer_id,
                "rejected",
                ActingParty::Provider,
                &[OfferStatus::Offer],
                OfferStatus::Rejected,
            )
            .await?;

        notify::push_to_user(
            self.db,
            self.push,
            offer.client_id,
            "Offer rejected",
            "The provider rejected your offer.",
        )
        .await;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Client withdraws an offer before the booking is completed.
    ///
    /// Allowed from the open and pending statuses; escrowed funds are
    /// notionally refunded.
    pub async fn cancel_offer(&self, client_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, provider_id) = self
            .transition(
                client_id,
                offer_id,
                "cancelled",
                ActingParty::Client,
                &[OfferStatus::Offer, OfferStatus::Pending],
                OfferStatus::Cancelled,
            )
            .await?;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Provider marks a pending booking as carried out.
    ///
    /// Stamps `completed_at`, which opens the dispute window for the client.
    pub async fn complete_offer(&self, provider_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, _) = self
            .transition(
                provider_id,
                offer_id,
                "completed",
                ActingParty::Provider,
                &[OfferStatus::Pending],
                OfferStatus::Confirmed,
            )
            .await?;

        notify::push_to_user(
            self.db,
            self.push,
            offer.client_id,
            "Booking completed",
            &format!(
                "The provider marked the booking as completed. You have {} hours to raise a dispute.",
                DISPUTE_WINDOW_HOURS
            ),
        )
        .await;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Client disputes a completed booking, freezing the escrowed funds.
    ///
    /// Only accepted while the dispute window is open; afterwards the funds
    /// belong to the provider and the request is rejected with a conflict.
    pub async fn dispute_offer(&self, client_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, provider_id) = self.get_for_party(offer_id, client_id).await?;

        if offer.client_id != client_id || offer.status != OfferStatus::Confirmed {
            return Err(Error::OfferError(OfferError::InvalidTransition {
                status: offer.status.to_value(),
                action: "disputed",
            }));
        }

        let Some(completed_at) = offer.completed_at else {
            return Err(Error::InternalError(format!(
                "Confirmed offer ID {} has no completion timestamp",
                offer.id
            )));
        };
        if Utc::now().naive_utc() >= completed_at + Duration::hours(DISPUTE_WINDOW_HOURS) {
            return Err(Error::OfferError(OfferError::DisputeWindowClosed {
                offer_id: offer.id,
                window_hours: DISPUTE_WINDOW_HOURS,
            }));
        }

        let offer_repo = OfferRepository::new(self.db);
        let offer = offer_repo.apply_status(offer, OfferStatus::Disputed).await?;

        notify::push_to_user(
            self.db,
            self.push,
            provider_id,
            "Offer disputed",
            "The client disputed the booking. Support will review it.",
        )
        .await;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Client releases the escrowed funds to the provider early.
    ///
    /// Waiting out the dispute window has the same effect; this just skips
    /// the wait.
    pub async fn release_offer(&self, client_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, provider_id) = self
            .transition(
                client_id,
                offer_id,
                "released",
                ActingParty::Client,
                &[OfferStatus::Confirmed],
                OfferStatus::Released,
            )
            .await?;

        notify::push_to_user(
            self.db,
            self.push,
            provider_id,
            "Funds released",
            "The client released the funds for your booking.",
        )
        .await;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Worker-side release once the dispute window has passed.
    ///
    /// The status is re-checked here so a dispute that won the race against
    /// the scan is never overwritten. A vanished or already-resolved offer
    /// is skipped silently.
    pub async fn auto_release(&self, offer_id: i32) -> Result<(), Error> {
        let offer_repo = OfferRepository::new(self.db);

        let Some((offer, ad)) = offer_repo.get_with_ad(offer_id).await? else {
            tracing::debug!("Offer ID {} no longer exists, skipping release", offer_id);
            return Ok(());
        };
        let Some(ad) = ad else {
            return Err(Error::InternalError(format!(
                "Offer ID {} has no ad row",
                offer.id
            )));
        };

        if offer.status != OfferStatus::Confirmed {
            tracing::debug!(
                "Offer ID {} left the confirmed status, skipping release",
                offer.id
            );
            return Ok(());
        }

        let offer = offer_repo.apply_status(offer, OfferStatus::Released).await?;

        let body = "The dispute window closed and the booking funds were released.";
        notify::push_to_user(self.db, self.push, offer.client_id, "Funds released", body).await;
        notify::push_to_user(self.db, self.push, ad.owner_id, "Funds released", body).await;

        Ok(())
    }

    /// Fetches a single offer for one of its parties.
    pub async fn get_offer(&self, user_id: i32, offer_id: i32) -> Result<OfferDto, Error> {
        let (offer, provider_id) = self.get_for_party(offer_id, user_id).await?;

        Ok(OfferDto::from_offer(offer, provider_id))
    }

    /// Lists the user's offers, newest first.
    ///
    /// The `client` role lists offers the user created, the `provider` role
    /// lists offers received on the user's ads. Defaults to `client`.
    pub async fn list_offers(
        &self,
        user_id: i32,
        query: OfferListQuery,
    ) -> Result<Vec<OfferDto>, Error> {
        let status = match query.status.as_deref() {
            Some(value) => Some(OfferStatus::try_from_value(&value.to_string()).map_err(
                |_| Error::ValidationError(format!("Unknown offer status: {value}")),
            )?),
            None => None,
        };

        let offer_repo = OfferRepository::new(self.db);
        let offers = match query.role.as_deref() {
            None | Some("client") => offer_repo.list_by_client(user_id, status).await?,
            Some("provider") => offer_repo.list_by_provider(user_id, status).await?,
            Some(other) => {
                return Err(Error::ValidationError(format!(
                    "Unknown offer role: {other}"
                )))
            }
        };

        Ok(offers
            .into_iter()
            .filter_map(|(offer, ad)| ad.map(|ad| OfferDto::from_offer(offer, ad.owner_id)))
            .collect())
    }

    /// Loads an offer for a user who must be one of its two parties.
    ///
    /// Returns the offer together with the provider's user ID, which lives
    /// on the ad row. Non-parties get the same 404 a missing offer produces.
    async fn get_for_party(
        &self,
        offer_id: i32,
        user_id: i32,
    ) -> Result<(PrivateOfferModel, i32), Error> {
        let offer_repo = OfferRepository::new(self.db);

        let Some((offer, ad)) = offer_repo.get_with_ad(offer_id).await? else {
            return Err(Error::NotFound("Offer not found".to_string()));
        };
        let Some(ad) = ad else {
            return Err(Error::InternalError(format!(
                "Offer ID {} has no ad row",
                offer.id
            )));
        };

        if offer.client_id != user_id && ad.owner_id != user_id {
            return Err(Error::NotFound("Offer not found".to_string()));
        }

        Ok((offer, ad.owner_id))
    }

    /// Shared transition body: authorize the acting party, verify the source
    /// status, apply the single status update.
    async fn transition(
        &self,
        user_id: i32,
        offer_id: i32,
        action: &'static str,
        acting_party: ActingParty,
        sources: &[OfferStatus],
        target: OfferStatus,
    ) -> Result<(PrivateOfferModel, i32), Error> {
        let (offer, provider_id) = self.get_for_party(offer_id, user_id).await?;

        let authorized = match acting_party {
            ActingParty::Client => offer.client_id == user_id,
            ActingParty::Provider => provider_id == user_id,
        };
        if !authorized || !sources.contains(&offer.status) {
            return Err(Error::OfferError(OfferError::InvalidTransition {
                status: offer.status.to_value(),
                action,
            }));
        }

        let offer_repo = OfferRepository::new(self.db);
        let offer = offer_repo.apply_status(offer, target).await?;

        Ok((offer, provider_id))
    }
}
