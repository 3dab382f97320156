use super::config::{PHOTO_URL_PREFIX, PHOTO_URL_SUFFIX};
use super::error::SchemaError;
use serde_json::{Map, Value};

pub const NIM_KEY: &str = "nim";
pub const PHOTO_KEY: &str = "foto";

/// A record of the `membersList`, all its fields are kept as they were parsed
#[derive(Debug, PartialEq)]
pub struct Member<'a> {
    index: usize,
    fields: &'a mut Map<String, Value>,
}

impl<'a> Member<'a> {
    /// `index` is the position of the member in the list, it is only used to report errors
    pub fn from_value(index: usize, value: &'a mut Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(fields) => Ok(Self { index, fields }),
            _ => Err(SchemaError::MemberNotObject { index }),
        }
    }

    /// The student number as text, a numeric `nim` is written as its JSON number
    pub fn nim(&self) -> Result<String, SchemaError> {
        match self.fields.get(NIM_KEY) {
            Some(Value::String(nim)) => Ok(nim.clone()),
            Some(Value::Number(nim)) => Ok(nim.to_string()),
            Some(_) => Err(SchemaError::InvalidNim { index: self.index }),
            None => Err(SchemaError::MissingNim { index: self.index }),
        }
    }

    /// Overwrite the `foto` field, it keeps its position when it already exists
    pub fn set_photo(&mut self, url: String) {
        self.fields.insert(PHOTO_KEY.to_string(), Value::String(url));
    }
}

pub fn photo_url(nim: &str) -> String {
    format!("{PHOTO_URL_PREFIX}{nim}{PHOTO_URL_SUFFIX}")
}
