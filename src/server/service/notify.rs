//! Best-effort push notification fan-out.
//!
//! Offer transitions and chat messages notify users through the web push
//! relay. Delivery is never load-bearing: a failed push is logged and
//! swallowed so the operation that triggered it still succeeds.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::push_subscription::PushSubscriptionRepository, integration::PushClient,
};

/// Sends a notification to every push subscription a user has registered.
pub async fn push_to_user(
    db: &DatabaseConnection,
    push: &PushClient,
    user_id: i32,
    title: &str,
    body: &str,
) {
    let subscription_repo = PushSubscriptionRepository::new(db);

    let subscriptions = match subscription_repo.get_by_user(user_id).await {
        Ok(subscriptions) => subscriptions,
        Err(e) => {
            tracing::warn!(
                "Failed to load push subscriptions for user ID {}: {}",
                user_id,
                e
            );
            return;
        }
    };

    for subscription in subscriptions {
        if let Err(e) = push.send(&subscription, title, body).await {
            tracing::warn!(
                "Failed to push notification to user ID {} endpoint {}: {}",
                user_id,
                subscription.endpoint,
                e
            );
        }
    }
}
