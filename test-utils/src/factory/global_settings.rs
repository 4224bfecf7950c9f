//! Global settings factory for seeding the singleton settings row.

use chrono::Utc;
use entity::global_settings::GLOBAL_SETTINGS_ID;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the singleton settings row with the given GIF-per-hour total.
///
/// # Arguments
/// - `db` - Database connection
/// - `global_gifs_per_hour` - Budget total to seed
///
/// # Returns
/// - `Ok(entity::global_settings::Model)` - Created settings row
/// - `Err(DbErr)` - Database error during insert, including a duplicate row
pub async fn create_global_settings(
    db: &DatabaseConnection,
    global_gifs_per_hour: i64,
) -> Result<entity::global_settings::Model, DbErr> {
    entity::global_settings::ActiveModel {
        id: ActiveValue::Set(GLOBAL_SETTINGS_ID),
        global_gifs_per_hour: ActiveValue::Set(global_gifs_per_hour),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
