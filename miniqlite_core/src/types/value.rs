use std::fmt;

use crate::error::{DbError, DbResult};
use crate::types::datatype::DataType;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_to_string(self))
    }
}

/// Converts a literal into a cell of the given type.
pub fn parse_value(dtype: DataType, column: &str, token: &str) -> DbResult<Value> {
    let mismatch = || DbError::TypeMismatch {
        column: column.to_string(),
        expected: dtype,
        value: token.to_string(),
    };
    match dtype {
        DataType::Int => token.parse::<i64>().map(Value::Int).map_err(|_| mismatch()),
        DataType::Float => {
            let n: f64 = token.parse().map_err(|_| mismatch())?;
            if !n.is_finite() {
                return Err(mismatch());
            }
            Ok(Value::Float(n))
        }
        DataType::Text => Ok(Value::Text(token.to_string())),
    }
}

/// Canonical rendering. Parsing it back with the same type yields an equal value.
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::Int(n) => n.to_string(),
        Value::Text(s) => s.clone(),
        Value::Float(n) => n.to_string(),
    }
}
