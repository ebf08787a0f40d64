mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use credit_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
