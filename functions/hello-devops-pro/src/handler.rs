use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, info_span};

use crate::error::ProcessingError;
use crate::request::Request;
use crate::response::{GreetingBody, RequestDetails, Response, DEPLOYMENT_INFO, GREETING};

/// Runtime entry point. Always answers with a proxy response; failures are
/// already folded into a 500 by [`handle`].
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);
    let _guard = span.enter();

    Ok(handle(&event.payload))
}

/// Maps one event to one response.
pub fn handle(event: &Value) -> Response {
    info!("Received event: {event}");

    match greet(event) {
        Ok(response) => response,
        Err(err) => {
            error!("Error processing request: {err}");
            Response::internal_error(&err)
        }
    }
}

fn greet(event: &Value) -> Result<Response, ProcessingError> {
    let request = Request::from_event(event)?;

    let body = GreetingBody {
        message: GREETING,
        status: "success",
        request_details: RequestDetails {
            http_method: request.http_method(),
            path: request.path(),
            user_agent: request.user_agent(),
        },
        deployment_info: DEPLOYMENT_INFO,
    };

    Response::ok(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn body(response: &Response) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn log_lines(f: impl FnOnce()) -> Vec<String> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn echoes_request_details() {
        let response = handle(&json!({
            "httpMethod": "GET",
            "path": "/hello",
            "headers": { "User-Agent": "TestClient/1.0" }
        }));

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response)["request_details"],
            json!({
                "http_method": "GET",
                "path": "/hello",
                "user_agent": "TestClient/1.0"
            })
        );
    }

    #[test]
    fn empty_event_gets_defaults() {
        let response = handle(&json!({}));

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response)["request_details"],
            json!({ "http_method": "GET", "path": "/", "user_agent": "Unknown" })
        );
    }

    #[test]
    fn bad_event_is_500() {
        let response = handle(&json!({ "path": ["not", "a", "string"] }));

        assert_eq!(response.status_code, 500);
        assert!(!response.headers.contains_key("Access-Control-Allow-Origin"));

        let body = body(&response);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"].is_string());
    }

    #[test]
    fn logs_event_once_on_success() {
        let lines = log_lines(|| {
            handle(&json!({ "path": "/hello" }));
        });

        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains(r#"Received event: {"path":"/hello"}"#));
    }

    #[test]
    fn logs_error_on_failure() {
        let lines = log_lines(|| {
            handle(&json!({ "httpMethod": 42 }));
        });

        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].contains("INFO") && lines[0].contains("Received event"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("Error processing request: invalid type"));
    }

    #[tokio::test]
    async fn runtime_adapter_never_errors() {
        let event = LambdaEvent::new(json!({ "headers": 7 }), Context::default());
        let response = function_handler(event).await.unwrap();

        assert_eq!(response.status_code, 500);
    }

    #[tokio::test]
    async fn runtime_adapter_greets() {
        let event = LambdaEvent::new(json!({ "path": "/hello" }), Context::default());
        let response = function_handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response)["request_details"]["path"], "/hello");
    }
}
