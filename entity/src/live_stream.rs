use sea_orm::entity::prelude::*;

/// A broadcast on a channel. Live while `ended_at` is null; the media
/// itself runs through the SFU room named by `room_name`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "live_stream")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_id: i32,
    #[sea_orm(unique)]
    pub room_name: String,
    pub title: String,
    pub started_at: DateTime,
    pub ended_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::live_stream_page::Entity",
        from = "Column::PageId",
        to = "super::live_stream_page::Column::Id"
    )]
    Page,
}

impl Related<super::live_stream_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
