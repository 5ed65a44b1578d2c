use hellodevopsprofunction::{function_handler, logging};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(&logging::LogConfig::from_env());

    let func = service_fn(function_handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
