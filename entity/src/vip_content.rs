use sea_orm::entity::prelude::*;

/// A post on a VIP page. Preview posts are visible to everyone, the
/// rest only to the owner and current subscribers.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vip_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub media_url: Option<String>,
    pub preview: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vip_page::Entity",
        from = "Column::PageId",
        to = "super::vip_page::Column::Id"
    )]
    Page,
}

impl Related<super::vip_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
