use crate::server::data::store::{StoreDataSource, StoreRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_store_by_id;
