use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vip_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub owner_id: i32,
    #[sea_orm(unique)]
    pub handle: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub monthly_price_cents: i64,
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
    #[sea_orm(has_many = "super::vip_content::Entity")]
    VipContent,
    #[sea_orm(has_many = "super::vip_subscription::Entity")]
    VipSubscription,
}

impl Related<super::velvet_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::vip_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VipContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
