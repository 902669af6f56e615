use sea_orm::entity::prelude::*;

/// How a chat came to exist. A user pair can hold one chat per origin,
/// so matching someone you already message keeps the histories apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ChatOrigin {
    #[sea_orm(string_value = "direct")]
    Direct,
    #[sea_orm(string_value = "match")]
    Match,
}

/// Conversation between two users, stored with `user_a_id < user_b_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_a_id: i32,
    pub user_b_id: i32,
    pub origin: ChatOrigin,
    pub last_message_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::velvet_user::Entity",
        from = "Column::UserAId",
        to = "super::velvet_user::Column::Id"
    )]
    UserA,
    #[sea_orm(
        belongs_to = "super::velvet_user::Entity",
        from = "Column::UserBId",
        to = "super::velvet_user::Column::Id"
    )]
    UserB,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
