//! Global settings repository.
//!
//! The settings table holds exactly one row, keyed by `GLOBAL_SETTINGS_ID`. Creation is
//! an insert that does nothing on a primary key conflict, so two processes bootstrapping
//! at the same time both end up reading the same row and neither overwrites a total that
//! is already stored.

use chrono::Utc;
use entity::global_settings::GLOBAL_SETTINGS_ID;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::settings::GlobalSettings,
};

pub struct GlobalSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlobalSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings row if it exists.
    pub async fn get(&self) -> Result<Option<GlobalSettings>, DbErr> {
        let entity = entity::prelude::GlobalSettings::find_by_id(GLOBAL_SETTINGS_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(GlobalSettings::from_entity))
    }

    /// Inserts the settings row with a zero total unless it already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was created by this call
    /// - `Ok(false)` - The row already existed and was left untouched
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_absent(&self) -> Result<bool, DbErr> {
        let model = entity::global_settings::ActiveModel {
            id: ActiveValue::Set(GLOBAL_SETTINGS_ID),
            global_gifs_per_hour: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        let result = entity::prelude::GlobalSettings::insert(model)
            .on_conflict(
                OnConflict::column(entity::global_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await;

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Gets the settings row, creating it first if needed.
    ///
    /// # Returns
    /// - `Ok(GlobalSettings)` - The one settings row
    /// - `Err(AppError::InternalErr)` - Row still missing after the insert
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_or_create(&self) -> Result<GlobalSettings, AppError> {
        if let Some(settings) = self.get().await? {
            return Ok(settings);
        }

        if self.create_if_absent().await? {
            tracing::info!("Global settings row was missing, created it with a zero GIF total");
        }

        self.get()
            .await?
            .ok_or_else(|| InternalError::MissingGlobalSettings.into())
    }

    /// Overwrites the stored GIF-per-hour total.
    ///
    /// # Returns
    /// - `Ok(GlobalSettings)` - The updated row
    /// - `Err(DbErr)` - Database error, including a missing row
    pub async fn set_total(&self, global_gifs_per_hour: i64) -> Result<GlobalSettings, DbErr> {
        let entity = entity::global_settings::ActiveModel {
            id: ActiveValue::Set(GLOBAL_SETTINGS_ID),
            global_gifs_per_hour: ActiveValue::Set(global_gifs_per_hour),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(GlobalSettings::from_entity(entity))
    }
}
