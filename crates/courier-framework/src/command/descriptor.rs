//! Command descriptors.

use std::sync::Arc;

use super::param::{ParamType, ParameterDescriptor};
use super::traits::Command;

/// Produces a fresh command instance for every invocation.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// The immutable description of a registered command.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    params: Vec<ParameterDescriptor>,
    factory: CommandFactory,
}

impl CommandDescriptor {
    /// Starts declaring a command with the given name.
    pub fn builder(name: impl Into<String>) -> CommandDescriptorBuilder {
        CommandDescriptorBuilder {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameters, in binding order.
    pub fn params(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    /// Creates a new command instance.
    pub fn instantiate(&self) -> Box<dyn Command> {
        (self.factory)()
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CommandDescriptor`].
///
/// ```rust,ignore
/// let kick = CommandDescriptor::builder("kick")
///     .param("user", ParamType::User { resolved: false })
///     .param("reason", ParamType::Text)
///     .build(Kick::default);
/// ```
#[derive(Debug)]
pub struct CommandDescriptorBuilder {
    name: String,
    params: Vec<ParameterDescriptor>,
}

impl CommandDescriptorBuilder {
    /// Declares a required parameter.
    pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push(ParameterDescriptor::new(name, ty, false));
        self
    }

    /// Declares an optional parameter.
    ///
    /// Optional parameters are skipped by the binder and never receive a
    /// token; they still count toward the maximum number of arguments.
    pub fn optional(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push(ParameterDescriptor::new(name, ty, true));
        self
    }

    /// Finishes the descriptor with a factory for the command type.
    pub fn build<C, F>(mut self, factory: F) -> CommandDescriptor
    where
        C: Command + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        if let Some(last) = self.params.last_mut() {
            last.mark_last();
        }
        CommandDescriptor {
            name: self.name,
            params: self.params,
            factory: Arc::new(move || Box::new(factory()) as Box<dyn Command>),
        }
    }
}
