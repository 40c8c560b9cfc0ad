use lambda_runtime::{service_fn, Error};

mod errors;
mod handler;
mod logging;

use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(LogFormat::from_env());

    let func = service_fn(handler::function_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
