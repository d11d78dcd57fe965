#![deny(missing_docs)]

//! # Discovery Shapes
//!
//! Borrowed, typed views over the untyped JSON served by `/wp-json`.
//!
//! WordPress does not guarantee the shape of route metadata, so every view is
//! built by matching on [`Shape`] and degrades to an empty or default value
//! instead of failing.

use serde_json::{Map, Value};

/// Structural classification of an arbitrary JSON value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A JSON object.
    Mapping(&'a Map<String, Value>),
    /// A JSON array.
    Sequence(&'a [Value]),
    /// `null`, booleans, numbers and strings.
    Scalar(&'a Value),
}

impl<'a> From<&'a Value> for Shape<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Shape::Mapping(map),
            Value::Array(items) => Shape::Sequence(items),
            other => Shape::Scalar(other),
        }
    }
}

/// A route entry that carries an `endpoints` key.
#[derive(Debug, Clone, Copy)]
pub struct RouteMetadata<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> RouteMetadata<'a> {
    /// Returns a view when `value` is a mapping with an `endpoints` key.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match Shape::from(value) {
            Shape::Mapping(raw) if raw.contains_key("endpoints") => Some(Self { raw }),
            _ => None,
        }
    }

    /// Route-level description, shared by every operation of the route.
    pub fn description(&self) -> &'a str {
        self.raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Mapping-shaped entries of the `endpoints` sequence, in order.
    pub fn endpoints(&self) -> impl Iterator<Item = EndpointEntry<'a>> + 'a {
        let items: &'a [Value] = match self.raw.get("endpoints").map(Shape::from) {
            Some(Shape::Sequence(items)) => items,
            _ => &[],
        };
        items.iter().filter_map(|item| match Shape::from(item) {
            Shape::Mapping(raw) => Some(EndpointEntry { raw }),
            _ => None,
        })
    }
}

/// One WordPress endpoint: a method set sharing an argument schema.
#[derive(Debug, Clone, Copy)]
pub struct EndpointEntry<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> EndpointEntry<'a> {
    /// Wraps an endpoint object.
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self { raw }
    }

    /// Declared HTTP method names, as written (case is not normalised here).
    ///
    /// Accepts a sequence of strings or the keys of a mapping; anything else
    /// is treated as an empty set.
    pub fn methods(&self) -> Vec<&'a str> {
        match self.raw.get("methods").map(Shape::from) {
            Some(Shape::Sequence(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|m| !m.is_empty())
                .collect(),
            Some(Shape::Mapping(map)) => map
                .keys()
                .map(String::as_str)
                .filter(|m| !m.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Declared arguments in mapping order.
    pub fn args(&self) -> impl Iterator<Item = (&'a str, ArgSpec<'a>)> + 'a {
        let args = match self.raw.get("args").map(Shape::from) {
            Some(Shape::Mapping(map)) => Some(map),
            _ => None,
        };
        args.into_iter()
            .flat_map(|map| map.iter())
            .map(|(name, spec)| (name.as_str(), ArgSpec::new(spec)))
    }
}

/// Argument schema as declared by WordPress. Non-mapping values act as all-defaults.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec<'a> {
    raw: Option<&'a Map<String, Value>>,
}

impl<'a> ArgSpec<'a> {
    /// Fallback JSON Schema type.
    pub const DEFAULT_TYPE: &'static str = "string";

    /// Wraps any JSON value.
    pub fn new(value: &'a Value) -> Self {
        let raw = match Shape::from(value) {
            Shape::Mapping(map) => Some(map),
            _ => None,
        };
        Self { raw }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.raw.and_then(|map| map.get(key))
    }

    /// The declared type, or the first entry of a type union.
    pub fn schema_type(&self) -> &'a str {
        let declared = match self.field("type").map(Shape::from) {
            Some(Shape::Scalar(Value::String(ty))) => Some(ty.as_str()),
            Some(Shape::Sequence(types)) => types.first().and_then(Value::as_str),
            _ => None,
        };
        declared.unwrap_or(Self::DEFAULT_TYPE)
    }

    /// The `enum` value, verbatim.
    pub fn enum_values(&self) -> Option<&'a Value> {
        self.field("enum")
    }

    /// `required`, when it is a boolean.
    pub fn required(&self) -> bool {
        self.field("required")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// `description`, when it is a string.
    pub fn description(&self) -> &'a str {
        self.field("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}
