mod cli;
mod generate;
mod render;

use synergy_select::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
