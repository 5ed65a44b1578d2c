use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ProcessingError;

pub const GREETING: &str = "Hello DevOps Pro!";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// What the proxy integration expects back: a status code, flat headers and
/// a body that is already a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    pub fn ok(body: &GreetingBody<'_>) -> Result<Self, ProcessingError> {
        let body = serde_json::to_string(body).map_err(ProcessingError::Serialize)?;

        Ok(Self {
            status_code: 200,
            headers: headers(&[
                ("Content-Type", "application/json"),
                ("Access-Control-Allow-Origin", "*"),
            ]),
            body,
        })
    }

    pub fn internal_error(err: &ProcessingError) -> Self {
        let detail = err.to_string();
        let body = ErrorBody {
            message: INTERNAL_SERVER_ERROR,
            error: &detail,
        };

        // The error path must not fail itself.
        let body = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(r#"{{"message":"{INTERNAL_SERVER_ERROR}","error":"unknown"}}"#)
        });

        Self {
            status_code: 500,
            headers: headers(&[("Content-Type", "application/json")]),
            body,
        }
    }
}

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct GreetingBody<'a> {
    pub message: &'a str,
    pub status: &'a str,
    pub request_details: RequestDetails<'a>,
    pub deployment_info: DeploymentInfo,
}

#[derive(Debug, Serialize)]
pub struct RequestDetails<'a> {
    pub http_method: &'a str,
    pub path: &'a str,
    pub user_agent: &'a str,
}

/// Fixed description of how this function gets built and shipped.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeploymentInfo {
    pub pipeline: &'static str,
    pub build_system: &'static str,
    pub function: &'static str,
}

pub const DEPLOYMENT_INFO: DeploymentInfo = DeploymentInfo {
    pipeline: "AWS CodePipeline",
    build_system: "AWS CodeBuild",
    function: "hello-devops-pro-lambda",
};

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub message: &'a str,
    pub error: &'a str,
}
