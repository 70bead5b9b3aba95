//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const OPENING_DELIMITER: &str = "---";
const CLOSING_DELIMITERS: [&str; 2] = ["---", "..."];

/// Why a header block could not be read
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("opening `---` has no matching closing delimiter")]
    Unclosed,

    #[error("header block is not a key/value mapping")]
    NotAMapping,

    #[error("key {0} is not a scalar")]
    NonScalarKey(String),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Accepts a plain scalar (string, number or bool) as its textual form
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or boolean")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Metadata declared in a post's front-matter.
///
/// `title`, `date` and `author` are typed; every other key is kept as-is in
/// `extra`, in the order it was declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostMetadata {
    /// Parse front-matter from file content.
    /// Returns (metadata, body). A file that does not open with `---` has no
    /// front-matter: the metadata is empty and the body is the whole file.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        match split(content)? {
            Some((header, body)) => Ok((Self::from_yaml(header)?, body)),
            None => Ok((Self::default(), content)),
        }
    }

    fn from_yaml(header: &str) -> Result<Self, FrontMatterError> {
        if header.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_yaml::from_str::<serde_yaml::Value>(header)? {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(mapping) => {
                let mapping = stringify_keys(mapping)?;
                Ok(serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))?)
            }
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Look up a custom field
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.extra.get(key)
    }

    /// Parse the `date` field into a calendar timestamp
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.date().and_then(parse_date_string)
    }
}

/// Rewrite number, bool and null keys as text so they land in `extra`
fn stringify_keys(mapping: serde_yaml::Mapping) -> Result<serde_yaml::Mapping, FrontMatterError> {
    use serde_yaml::Value;

    let mut out = serde_yaml::Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            other => {
                let shown = serde_yaml::to_string(&other).unwrap_or_default();
                return Err(FrontMatterError::NonScalarKey(shown.trim().to_string()));
            }
        };
        out.insert(Value::String(key), value);
    }
    Ok(out)
}

/// Split content into (header, body) around the delimited block.
///
/// The body starts right after the closing delimiter's line ending and is
/// otherwise untouched.
fn split(content: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == OPENING_DELIMITER => {
            let header_start = first.len();
            let mut offset = header_start;
            for line in lines {
                if CLOSING_DELIMITERS.contains(&line.trim_end()) {
                    let header = &content[header_start..offset];
                    let body = &content[offset + line.len()..];
                    return Ok(Some((header, body)));
                }
                offset += line.len();
            }
            Err(FrontMatterError::Unclosed)
        }
        _ => Ok(None),
    }
}

/// Parse a date string in the formats posts are written with.
/// Numeric fields may be unpadded (`2024-3-5`).
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // `2024-01-15 10:30:00 +09:00`, as Hexo writes them
    for fmt in ["%Y-%m-%d %H:%M:%S %:z", "%Y/%m/%d %H:%M:%S %:z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}
