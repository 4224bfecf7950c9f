use crate::server::{data::global_settings::GlobalSettingsRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod set_total;
