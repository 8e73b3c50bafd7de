use std::fmt;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::error::ConfigError;

/// Value of a single program argument.
///
/// The variant decides how the argument is rendered on the command line:
/// flags are emitted bare, text and other values as `--name=value`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Flag(bool),
    Text(String),
    Other(String),
}

impl ArgumentValue {
    /// Builds an [`ArgumentValue::Other`] from any printable value.
    pub fn other<T: fmt::Display>(value: T) -> Self {
        ArgumentValue::Other(value.to_string())
    }

    fn write_fragment(&self, name: &str, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgumentValue::Flag(true) => write!(f, " --{name}"),
            ArgumentValue::Flag(false) => Ok(()),
            ArgumentValue::Text(text) if text.is_empty() => Ok(()),
            ArgumentValue::Text(value) | ArgumentValue::Other(value) => {
                write!(f, " --{name}={value}")
            }
        }
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Flag(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::Text(value.to_string())
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::Text(value)
    }
}

macro_rules! impl_other_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgumentValue {
                fn from(value: $ty) -> Self {
                    ArgumentValue::other(value)
                }
            }
        )*
    };
}

impl_other_from!(i32, i64, u32, u64, usize, f32, f64);

/// Program arguments keyed by name, kept in insertion order.
///
/// Its [`fmt::Display`] implementation is the serialized command line fragment,
/// every argument prefixed by a single space.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct ArgumentsMap(Vec<(String, ArgumentValue)>);

impl ArgumentsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing name keeps its position.
    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<ArgumentValue>,
    {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, current)) => *current = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends every entry of `other`, overriding values of names already present.
    pub fn extend(&mut self, other: ArgumentsMap) {
        other
            .0
            .into_iter()
            .for_each(|(name, value)| self.insert(name, value));
    }

    /// Parses a command line assignment: `NAME=VALUE` is a text argument and a
    /// bare `NAME` is an enabled flag.
    pub fn parse_assignment(raw: &str) -> Result<(String, ArgumentValue), ConfigError> {
        let (name, value) = match raw.split_once('=') {
            Some((name, value)) => (name, ArgumentValue::from(value)),
            None => (raw, ArgumentValue::Flag(true)),
        };
        if name.is_empty() {
            return Err(ConfigError::InvalidAssignment(raw.to_string()));
        }
        Ok((name.to_string(), value))
    }
}

impl fmt::Display for ArgumentsMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|(name, value)| value.write_fragment(name, f))
    }
}

impl<N, V> FromIterator<(N, V)> for ArgumentsMap
where
    N: Into<String>,
    V: Into<ArgumentValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut args = ArgumentsMap::new();
        iter.into_iter()
            .for_each(|(name, value)| args.insert(name, value));
        args
    }
}

impl TryFrom<Mapping> for ArgumentsMap {
    type Error = ConfigError;

    fn try_from(mapping: Mapping) -> Result<Self, Self::Error> {
        let mut args = ArgumentsMap::new();
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => return Err(ConfigError::InvalidArgumentName(format!("{other:?}"))),
            };
            let value = match value {
                Value::Bool(flag) => ArgumentValue::Flag(flag),
                Value::String(text) => ArgumentValue::Text(text),
                Value::Number(number) => ArgumentValue::other(number),
                unsupported => {
                    return Err(ConfigError::UnsupportedArgument(
                        name,
                        format!("{unsupported:?}"),
                    ))
                }
            };
            args.insert(name, value);
        }
        Ok(args)
    }
}
