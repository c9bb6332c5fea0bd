use storefront::server::{
    config::Config,
    data::category::CategoryDataSource,
    error::AppError,
    service::category::CategoryService,
    startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storefront");

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let categories = CategoryService::new(CategoryDataSource::new(&db))
        .get_all()
        .await?;

    tracing::info!("{} categories available", categories.len());

    Ok(())
}
