//! Convert serde_json::Value to types that sqlx can bind.

use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query. Converts from serde_json::Value.
#[derive(Clone, Debug, PartialEq)]
pub enum SqliteBindValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    /// Arrays and objects, stored as their JSON text.
    Json(String),
}

impl SqliteBindValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => SqliteBindValue::Null,
            Value::Bool(b) => SqliteBindValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqliteBindValue::I64(i)
                } else {
                    SqliteBindValue::F64(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => SqliteBindValue::String(s.clone()),
            Value::Array(_) | Value::Object(_) => SqliteBindValue::Json(v.to_string()),
        }
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            SqliteBindValue::Null => <Option<i64> as Encode<Sqlite>>::encode_by_ref(&None, buf),
            SqliteBindValue::Bool(b) => <bool as Encode<Sqlite>>::encode_by_ref(b, buf),
            SqliteBindValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::F64(n) => <f64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::String(s) | SqliteBindValue::Json(s) => {
                <String as Encode<Sqlite>>::encode_by_ref(s, buf)
            }
        }
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_scalars_map_to_storage_classes() {
        assert_eq!(SqliteBindValue::from_json(&json!(null)), SqliteBindValue::Null);
        assert_eq!(SqliteBindValue::from_json(&json!(true)), SqliteBindValue::Bool(true));
        assert_eq!(SqliteBindValue::from_json(&json!(42)), SqliteBindValue::I64(42));
        assert_eq!(SqliteBindValue::from_json(&json!(1.5)), SqliteBindValue::F64(1.5));
        assert_eq!(
            SqliteBindValue::from_json(&json!("x")),
            SqliteBindValue::String("x".into())
        );
    }

    #[test]
    fn nested_values_are_stored_as_json_text() {
        assert_eq!(
            SqliteBindValue::from_json(&json!({"a": [1, 2]})),
            SqliteBindValue::Json(r#"{"a":[1,2]}"#.into())
        );
    }
}
