use crate::server::{
    data::category::{CategoryDataSource, CategoryRepository},
    error::category::CategoryError,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_by_id;
mod get_by_title;
mod update;
