use sea_orm::entity::prelude::*;

/// Reciprocal like between two dating pages, stored with `page_a_id <
/// page_b_id` so a pair can only match once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dating_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_a_id: i32,
    pub page_b_id: i32,
    pub chat_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dating_page::Entity",
        from = "Column::PageAId",
        to = "super::dating_page::Column::Id"
    )]
    PageA,
    #[sea_orm(
        belongs_to = "super::dating_page::Entity",
        from = "Column::PageBId",
        to = "super::dating_page::Column::Id"
    )]
    PageB,
    #[sea_orm(
        belongs_to = "super::chat::Entity",
        from = "Column::ChatId",
        to = "super::chat::Column::Id"
    )]
    Chat,
}

impl ActiveModelBehavior for ActiveModel {}
