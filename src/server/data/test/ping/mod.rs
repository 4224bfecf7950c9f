use crate::server::{
    data::ping::PingRepository,
    error::AppError,
    model::ping::{PingKind, UpsertPingParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get;
mod get_all_active;
mod upsert;
