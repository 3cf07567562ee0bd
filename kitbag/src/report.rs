//! # JSON Reports
//!
//! Available with the `serde` feature. A [`DataContainer`] serializes as a map
//! from field name to field value in declared order; repeated names are
//! written as repeated keys.
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use kitbag::container::DataContainer;
//! use kitbag::report::to_json;
//!
//! let mut record = DataContainer::<(i32, String)>::new(["Age", "Name"]).unwrap();
//! record.set_field::<0>(30);
//! record.set_field::<1>("Alice".to_string());
//!
//! assert_eq!(to_json(&record, false).unwrap(), r#"{"Age":30,"Name":"Alice"}"#);
//! # }
//! ```

use crate::container::{DataContainer, FieldSet};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::{error::Error, fmt::Display, io::Write};

/// Field sets whose every field implements [`Serialize`].
pub trait SerializeFields: FieldSet {
    fn serialize_fields<Map: SerializeMap>(container: &DataContainer<Self>, map: &mut Map) -> Result<(), Map::Error>;
}

impl<F: SerializeFields> Serialize for DataContainer<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.size()))?;
        F::serialize_fields(self, &mut map)?;
        map.end()
    }
}

#[derive(Debug)]
pub enum ReportErrors {
    Json(serde_json::Error),
}

impl Display for ReportErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "Couldn't encode the report: {}", e),
        }
    }
}

impl Error for ReportErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ReportErrors {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Encodes `value` as a JSON string, indented when `pretty` is set.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, ReportErrors> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Writes `value` as one line of JSON.
pub fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<(), ReportErrors> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}
