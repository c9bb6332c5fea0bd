//! Database repository layer.
//!
//! Each submodule declares a repository contract (an `async_trait` trait the service layer
//! depends on) and a data source implementing it over a SeaORM connection. Data sources use
//! entity models internally and hand back domain models, so the layers above never see
//! persistence types.

pub mod category;
pub mod store;
