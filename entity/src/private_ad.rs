use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "private_ad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub city: String,
    pub price_hour_cents: i64,
    pub cover_url: Option<String>,
    pub active: bool,
    pub expires_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::velvet_user::Entity",
        from = "Column::OwnerId",
        to = "super::velvet_user::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::private_offer::Entity")]
    PrivateOffer,
}

impl Related<super::velvet_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::private_offer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrivateOffer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
