//! Parameter declarations.

use std::fmt;

/// The kinds of chat entity a reference token can denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Channel,
    Role,
    Emoji,
    User,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Emoji => "emoji",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The semantic type a parameter binds to.
///
/// Reference kinds carry a `resolved` capability flag: `false` accepts a
/// lightweight reference built from the token alone, `true` demands the live
/// entity from the store and therefore requires caching. Roles have no
/// lightweight form and always resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Free text, passed through unchanged.
    Text,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// `true` or `false`, case-insensitive.
    Boolean,
    /// A bare identifier; any reference token yields its id.
    Id,
    Channel { resolved: bool },
    Role,
    Emoji { resolved: bool },
    User { resolved: bool },
}

impl ParamType {
    /// Returns the entity kind for reference types.
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            Self::Channel { .. } => Some(EntityKind::Channel),
            Self::Role => Some(EntityKind::Role),
            Self::Emoji { .. } => Some(EntityKind::Emoji),
            Self::User { .. } => Some(EntityKind::User),
            _ => None,
        }
    }

    /// Returns `true` if binding needs a live entity from the store.
    pub fn requires_resolved(self) -> bool {
        match self {
            Self::Channel { resolved } | Self::Emoji { resolved } | Self::User { resolved } => {
                resolved
            }
            Self::Role => true,
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Id => "id",
            Self::Channel { resolved: false } => "channel reference",
            Self::Channel { resolved: true } => "channel",
            Self::Role => "role",
            Self::Emoji { resolved: false } => "emoji reference",
            Self::Emoji { resolved: true } => "emoji",
            Self::User { resolved: false } => "user reference",
            Self::User { resolved: true } => "user",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One declared command parameter.
///
/// Descriptors are created by
/// [`CommandDescriptorBuilder`](super::CommandDescriptorBuilder) and keep
/// their declaration order for the lifetime of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    ty: ParamType,
    optional: bool,
    last_positional: bool,
}

impl ParameterDescriptor {
    pub(crate) fn new(name: impl Into<String>, ty: ParamType, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            optional,
            last_positional: false,
        }
    }

    pub(crate) fn mark_last(&mut self) {
        self.last_positional = self.ty == ParamType::Text;
    }

    /// The parameter name, used for error reporting and argument lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> ParamType {
        self.ty
    }

    /// Optional parameters are never bound from the token stream.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// `true` iff this is the final declared parameter and it is text.
    pub fn is_last_positional(&self) -> bool {
        self.last_positional
    }
}
