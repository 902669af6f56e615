use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "live_stream_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub owner_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
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
    #[sea_orm(has_many = "super::live_stream::Entity")]
    LiveStream,
}

impl Related<super::velvet_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::live_stream::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LiveStream.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
