use sea_orm::entity::prelude::*;

/// Primary key of the one and only settings row.
pub const GLOBAL_SETTINGS_ID: i32 = 1;

/// Deployment-wide settings, stored as a single row keyed by [`GLOBAL_SETTINGS_ID`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "global_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub global_gifs_per_hour: i64,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
