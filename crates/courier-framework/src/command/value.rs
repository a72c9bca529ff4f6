//! Bound argument values.

use courier_core::{Channel, Emoji, MinimalChannel, MinimalUser, PartialEmoji, Role, Snowflake, User};

use super::param::ParamType;
use crate::error::ConversionError;

/// A single bound argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Id(Snowflake),
    Channel(MinimalChannel),
    ResolvedChannel(Channel),
    Role(Role),
    Emoji(PartialEmoji),
    ResolvedEmoji(Emoji),
    User(MinimalUser),
    ResolvedUser(User),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Id(_) => "id",
            Self::Channel(_) => "channel reference",
            Self::ResolvedChannel(_) => "channel",
            Self::Role(_) => "role",
            Self::Emoji(_) => "emoji reference",
            Self::ResolvedEmoji(_) => "emoji",
            Self::User(_) => "user reference",
            Self::ResolvedUser(_) => "user",
        }
    }

    /// Returns the identifier carried by id and entity values.
    pub fn id(&self) -> Option<Snowflake> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Channel(c) => Some(c.id),
            Self::ResolvedChannel(c) => Some(c.id),
            Self::Role(r) => Some(r.id),
            Self::Emoji(e) => Some(e.id),
            Self::ResolvedEmoji(e) => Some(e.id),
            Self::User(u) => Some(u.id),
            Self::ResolvedUser(u) => Some(u.id),
            _ => None,
        }
    }

    /// Returns `true` if the value already has the shape `ty` asks for.
    pub fn satisfies(&self, ty: ParamType) -> bool {
        matches!(
            (self, ty),
            (Self::Text(_), ParamType::Text)
                | (Self::Integer(_), ParamType::Integer)
                | (Self::Float(_), ParamType::Float)
                | (Self::Boolean(_), ParamType::Boolean)
                | (Self::Id(_), ParamType::Id)
                | (Self::Channel(_), ParamType::Channel { resolved: false })
                | (Self::ResolvedChannel(_), ParamType::Channel { resolved: true })
                | (Self::Role(_), ParamType::Role)
                | (Self::Emoji(_), ParamType::Emoji { resolved: false })
                | (Self::ResolvedEmoji(_), ParamType::Emoji { resolved: true })
                | (Self::User(_), ParamType::User { resolved: false })
                | (Self::ResolvedUser(_), ParamType::User { resolved: true })
        )
    }

    /// Converts a value into `ty`, returning it unchanged if it already fits.
    ///
    /// Only bare identifiers convert: into text, integers and floats.
    pub fn convert(self, ty: ParamType) -> Result<Value, ConversionError> {
        if self.satisfies(ty) {
            return Ok(self);
        }
        match (self, ty) {
            (Self::Id(id), ParamType::Text) => Ok(Self::Text(id.to_string())),
            (Self::Id(id), ParamType::Integer) => i64::try_from(id.get())
                .map(Self::Integer)
                .map_err(|_| ConversionError::IdOverflow(id)),
            (Self::Id(id), ParamType::Float) => Ok(Self::Float(id.get() as f64)),
            (value, ty) => Err(ConversionError::Incompatible {
                from: value.type_name(),
                to: ty.name(),
            }),
        }
    }
}

/// Extracts a concrete Rust type from a bound [`Value`].
///
/// Lightweight reference types also accept their resolved counterpart, so a
/// command asking for a [`MinimalChannel`] works whether the parameter was
/// declared resolved or not.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for Snowflake {
    fn from_value(value: &Value) -> Option<Self> {
        value.id()
    }
}

impl FromValue for MinimalChannel {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Channel(c) => Some(*c),
            Value::ResolvedChannel(c) => Some(c.to_minimal()),
            _ => None,
        }
    }
}

impl FromValue for Channel {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ResolvedChannel(c) => Some(c.clone()),
            _ => None,
        }
    }
}

impl FromValue for Role {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Role(r) => Some(r.clone()),
            _ => None,
        }
    }
}

impl FromValue for PartialEmoji {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Emoji(e) => Some(e.clone()),
            Value::ResolvedEmoji(e) => Some(e.to_partial()),
            _ => None,
        }
    }
}

impl FromValue for Emoji {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ResolvedEmoji(e) => Some(e.clone()),
            _ => None,
        }
    }
}

impl FromValue for MinimalUser {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::User(u) => Some(*u),
            Value::ResolvedUser(u) => Some(u.to_minimal()),
            _ => None,
        }
    }
}

impl FromValue for User {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ResolvedUser(u) => Some(u.clone()),
            _ => None,
        }
    }
}

/// The arguments bound for one invocation, in declaration order.
///
/// Optional parameters are never bound, so looking them up yields `None`.
///
/// ```rust,ignore
/// let count: i64 = args.get("count").unwrap_or(1);
/// let reason = args.get::<String>("reason");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: Value) {
        self.values.push((name.into(), value));
    }

    /// Returns the named argument converted to `T`.
    pub fn get<T: FromValue>(&self, name: &str) -> Option<T> {
        self.value(name).and_then(T::from_value)
    }

    /// Returns the raw bound value.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_converts_to_primitives() {
        let id = Value::Id(Snowflake::new(123_456_789_012_345_678));
        assert_eq!(
            id.clone().convert(ParamType::Text).unwrap(),
            Value::Text("123456789012345678".into())
        );
        assert_eq!(
            id.clone().convert(ParamType::Integer).unwrap(),
            Value::Integer(123_456_789_012_345_678)
        );
        assert!(matches!(
            id.convert(ParamType::Boolean),
            Err(ConversionError::Incompatible { from: "id", to: "boolean" })
        ));
    }

    #[test]
    fn test_id_integer_overflow() {
        let id = Value::Id(Snowflake::new(u64::MAX));
        assert_eq!(
            id.convert(ParamType::Integer),
            Err(ConversionError::IdOverflow(Snowflake::new(u64::MAX)))
        );
    }

    #[test]
    fn test_satisfying_value_is_unchanged() {
        let role = Value::Role(Role::new(Snowflake::new(1), "mods"));
        assert_eq!(role.clone().convert(ParamType::Role).unwrap(), role);
    }

    #[test]
    fn test_lightweight_accepts_resolved() {
        let value = Value::ResolvedChannel(Channel::new(Snowflake::new(4), "general"));
        assert_eq!(
            MinimalChannel::from_value(&value),
            Some(MinimalChannel::new(Snowflake::new(4)))
        );
        assert_eq!(Snowflake::from_value(&value), Some(Snowflake::new(4)));
        assert!(Role::from_value(&value).is_none());
    }

    #[test]
    fn test_arguments_lookup() {
        let mut args = Arguments::new();
        args.push("count", Value::Integer(3));
        args.push("reason", Value::Text("spam".into()));

        assert_eq!(args.len(), 2);
        assert_eq!(args.get::<i64>("count"), Some(3));
        assert_eq!(args.get::<String>("reason").as_deref(), Some("spam"));
        assert_eq!(args.get::<bool>("count"), None);
        assert!(!args.contains("missing"));

        let names: Vec<_> = args.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["count", "reason"]);
    }
}
