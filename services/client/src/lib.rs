mod apply;
mod cli;

use quickflow::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
