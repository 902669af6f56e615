use sea_orm::entity::prelude::*;

/// One page's verdict on another, recorded at most once per direction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dating_swipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub swiper_page_id: i32,
    pub target_page_id: i32,
    pub liked: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dating_page::Entity",
        from = "Column::SwiperPageId",
        to = "super::dating_page::Column::Id"
    )]
    Swiper,
    #[sea_orm(
        belongs_to = "super::dating_page::Entity",
        from = "Column::TargetPageId",
        to = "super::dating_page::Column::Id"
    )]
    Target,
}

impl ActiveModelBehavior for ActiveModel {}
