//! Response shaping: one parsed record list, two ways to hand it out.
//!
//! Every JSON body is first parsed into a `Vec<Record>`. `Format::Json` returns those
//! records as-is, `Format::Object` deserializes each record into the endpoint's typed
//! model. Both views therefore always have the same length. `Format::Csv` skips parsing
//! entirely and returns the body text unmodified.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::TiingoError;

/// A single response entry with field names exactly as the API sent them (`adjClose`, `assetType`, ...).
pub type Record = serde_json::Map<String, Value>;

/// The shape a caller wants a response in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// A sequence of raw field mappings ([`Record`]).
    #[default]
    Json,
    /// The response body as CSV text. Only honored by endpoints that can produce CSV.
    Csv,
    /// A sequence of typed value-objects exposing the same fields as the mappings.
    Object,
}

impl Format {
    /// The value of the `format` query parameter for endpoints that accept one.
    pub const fn wire_format(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::Object => "json",
        }
    }

    /// The `Accept` header matching this format.
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json | Self::Object => "application/json",
        }
    }
}

/// A decoded API response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T> {
    /// Raw field mappings (`Format::Json`).
    Records(Vec<Record>),
    /// Unmodified CSV text (`Format::Csv`).
    Csv(String),
    /// Typed value-objects (`Format::Object`).
    Objects(Vec<T>),
}

impl<T> Response<T> {
    /// Number of entries. For CSV this counts data rows, excluding the header and blank lines.
    pub fn len(&self) -> usize {
        match self {
            Self::Records(r) => r.len(),
            Self::Objects(o) => o.len(),
            Self::Csv(text) => text
                .lines()
                .filter(|l| !l.trim().is_empty())
                .count()
                .saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The records, if this is a `Records` response.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Self::Records(r) => Some(r.as_slice()),
            _ => None,
        }
    }

    /// The typed objects, if this is an `Objects` response.
    pub fn objects(&self) -> Option<&[T]> {
        match self {
            Self::Objects(o) => Some(o.as_slice()),
            _ => None,
        }
    }

    /// The CSV text, if this is a `Csv` response.
    pub fn csv(&self) -> Option<&str> {
        match self {
            Self::Csv(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Consumes the response, returning the records.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Data` if the response has a different shape.
    pub fn into_records(self) -> Result<Vec<Record>, TiingoError> {
        match self {
            Self::Records(r) => Ok(r),
            _ => Err(TiingoError::Data("response is not in record form".into())),
        }
    }

    /// Consumes the response, returning the typed objects.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Data` if the response has a different shape.
    pub fn into_objects(self) -> Result<Vec<T>, TiingoError> {
        match self {
            Self::Objects(o) => Ok(o),
            _ => Err(TiingoError::Data("response is not in object form".into())),
        }
    }
}

/// Decodes a successful response body in the requested format.
///
/// # Errors
///
/// Returns `TiingoError::Json` if the body is not valid JSON or a record does not fit `T`,
/// and `TiingoError::Data` if the JSON is neither an object nor an array of objects.
pub fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &[u8],
    fmt: Format,
) -> Result<Response<T>, TiingoError> {
    if fmt == Format::Csv {
        return Ok(Response::Csv(String::from_utf8_lossy(body).into_owned()));
    }
    let records = parse_records(endpoint, body)?;
    shape(endpoint, records, fmt)
}

/// Parses a JSON body into records. A lone object becomes a single record; `null` and
/// blank bodies become an empty list.
pub(crate) fn parse_records(endpoint: &'static str, body: &[u8]) -> Result<Vec<Record>, TiingoError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|source| TiingoError::Json { endpoint, source })?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(TiingoError::Data(format!(
                    "{endpoint}: expected an array of objects, found element {other}"
                ))),
            })
            .collect(),
        other => Err(TiingoError::Data(format!(
            "{endpoint}: expected an object or array, found {other}"
        ))),
    }
}

/// Hands parsed records out in the requested shape. CSV is rendered by callers beforehand,
/// so `Format::Csv` falls through to records here.
pub(crate) fn shape<T: DeserializeOwned>(
    endpoint: &'static str,
    records: Vec<Record>,
    fmt: Format,
) -> Result<Response<T>, TiingoError> {
    match fmt {
        Format::Object => records
            .into_iter()
            .map(|r| {
                serde_json::from_value(Value::Object(r))
                    .map_err(|source| TiingoError::Json { endpoint, source })
            })
            .collect::<Result<Vec<T>, _>>()
            .map(Response::Objects),
        Format::Json | Format::Csv => Ok(Response::Records(records)),
    }
}
