//! Root documents.
//!
//! A root document is a JSON object holding the root set descriptor under the
//! `keys` field and one object per root, keyed by the root index:
//!
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Only the keys `"1"` to `"n"` are read, any other key is ignored.
use std::{collections::BTreeMap, fmt, io::Read, num::IntErrorKind};

use num_bigint::BigInt;
use serde::{de, Deserialize};
use serde_json::Value;

use crate::{
    assembler::{Assembler, DecodedRoot, RootEntry, RootSetDescriptor},
    common::logger::get_logger,
    errors::Error,
};

/// A parsed root document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// The root set descriptor.
    pub descriptor: RootSetDescriptor,
    /// Root entries with indices in `1..=n`, by index.
    pub entries: BTreeMap<u64, RootEntry>,
}

#[derive(Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    roots: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawKeys {
    n: i64,
    k: i64,
}

#[derive(Deserialize)]
struct RawRoot {
    base: Base,
    value: String,
}

/// A base given either as an integer or as a decimal numeral string.
///
/// Integers beyond the range of `i64` saturate, range checking is left to
/// the decoder.
struct Base(i64);

impl<'de> Deserialize<'de> for Base {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct BaseVisitor;

        impl<'de> de::Visitor<'de> for BaseVisitor {
            type Value = Base;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("integer or decimal string expected")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Base, E>
            where
                E: de::Error,
            {
                Ok(Base(i64::try_from(value).unwrap_or(i64::MAX)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Base, E>
            where
                E: de::Error,
            {
                Ok(Base(value))
            }

            fn visit_str<E>(self, data: &str) -> Result<Base, E>
            where
                E: de::Error,
            {
                match data.trim().parse::<i64>() {
                    Ok(value) => Ok(Base(value)),
                    Err(e) => match e.kind() {
                        IntErrorKind::PosOverflow => Ok(Base(i64::MAX)),
                        IntErrorKind::NegOverflow => Ok(Base(i64::MIN)),
                        _ => Err(E::custom(format!("invalid base '{}': {}", data, e))),
                    },
                }
            }
        }

        deserializer.deserialize_any(BaseVisitor)
    }
}

impl Document {
    /// Parses a root document from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, Error> {
        let raw: RawDocument = serde_json::from_str(data)?;
        Self::from_raw(raw)
    }

    /// Parses a root document from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, Error> {
        let logger = get_logger("document");
        let descriptor = RootSetDescriptor::new(raw.keys.n, raw.keys.k)?;

        let mut entries = BTreeMap::new();
        for (key, root) in raw.roots {
            let index = match parse_index(&key) {
                Some(index) if index <= descriptor.n() => index,
                _ => {
                    debug!(logger, "ignoring key"; "key" => key.as_str());
                    continue;
                }
            };
            let root: RawRoot = serde_json::from_value(root)?;
            entries.insert(index, RootEntry::new(index, root.base.0, root.value));
        }

        Ok(Self {
            descriptor,
            entries,
        })
    }

    /// Returns the roots selected for the constant term.
    pub fn select_roots(&self) -> Result<Vec<DecodedRoot>, Error> {
        Assembler::new(self.descriptor).select_roots(&self.entries)
    }

    /// Computes the constant term of the polynomial described by the document.
    pub fn constant_term(&self) -> Result<BigInt, Error> {
        Assembler::new(self.descriptor).constant_term(&self.entries)
    }
}

/// Parses a root index, which must be a positive decimal integer without
/// leading zeros.
fn parse_index(key: &str) -> Option<u64> {
    if key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u64>().ok()
}
