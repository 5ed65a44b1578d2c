// Runs the handler once outside Lambda and prints what it returned.
//
//   cargo run --bin local                 # built-in sample request
//   cargo run --bin local -- event.json   # event read from a file

use hellodevopsprofunction::{handle, logging};
use lambda_runtime::Error;
use serde_json::{json, Value};
use std::{env, fs};

fn sample_event() -> Value {
    json!({
        "httpMethod": "GET",
        "path": "/hello",
        "headers": {
            "User-Agent": "TestClient/1.0"
        }
    })
}

fn main() -> Result<(), Error> {
    logging::init(&logging::LogConfig::from_env());

    let event = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => sample_event(),
    };

    let result = handle(&event);
    println!("Test result: {}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
