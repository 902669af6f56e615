use sea_orm::entity::prelude::*;

/// Lifecycle of a booking offer between a client and an ad owner.
///
/// Offers move forward one step at a time: `Offer` -> `Pending` ->
/// `Confirmed` -> `Released`, with `Disputed` as a detour out of
/// `Confirmed` and `Rejected`/`Cancelled` as early exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OfferStatus {
    #[sea_orm(string_value = "offer")]
    Offer,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "disputed")]
    Disputed,
    #[sea_orm(string_value = "released")]
    Released,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OfferStatus {
    /// Terminal statuses no longer count against an ad's open bookings.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OfferStatus::Released | OfferStatus::Rejected | OfferStatus::Cancelled
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "private_offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ad_id: i32,
    pub client_id: i32,
    pub status: OfferStatus,
    pub price_cents: i64,
    pub starts_at: DateTime,
    pub duration_minutes: i32,
    pub location: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub completed_at: Option<DateTime>,
    pub resolved_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::private_ad::Entity",
        from = "Column::AdId",
        to = "super::private_ad::Column::Id"
    )]
    Ad,
    #[sea_orm(
        belongs_to = "super::velvet_user::Entity",
        from = "Column::ClientId",
        to = "super::velvet_user::Column::Id"
    )]
    Client,
}

impl Related<super::private_ad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
