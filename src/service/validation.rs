//! Required-field checks for record bodies.

use crate::error::AppError;
use crate::model::NewUser;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// `username` and `email` must both be present, non-empty strings.
    pub fn new_user(body: &Map<String, Value>) -> Result<NewUser, AppError> {
        let username = non_empty_str(body.get("username"));
        let email = non_empty_str(body.get("email"));
        match (username, email) {
            (Some(username), Some(email)) => Ok(NewUser {
                username: username.to_string(),
                email: email.to_string(),
            }),
            _ => Err(AppError::Validation("Username and Email are required".into())),
        }
    }

    /// Record id for a delete. Absent or falsy values (null, false, 0, "") count as missing.
    pub fn record_id(body: &Map<String, Value>) -> Result<i64, AppError> {
        let missing = || AppError::Validation("No record ID provided".into());
        match body.get("id") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(missing()),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => Err(missing()),
                Some(id) => Ok(id),
                None => Err(AppError::Validation(format!("id must be an integer, got {}", n))),
            },
            Some(Value::String(s)) if s.is_empty() => Err(missing()),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::Validation(format!("id must be an integer, got '{}'", s))),
            Some(other) => Err(AppError::Validation(format!("id must be an integer, got {}", other))),
        }
    }
}

fn non_empty_str(v: Option<&Value>) -> Option<&str> {
    v.and_then(Value::as_str).filter(|s| !s.is_empty())
}
