//! The command registry.
//!
//! Built once during startup and never mutated afterwards. The dispatcher
//! holds it behind an `Arc`, so concurrent dispatches share it without
//! locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::command::CommandDescriptor;
use crate::error::{RegistryError, RegistryResult};

/// Maps command names to their descriptors.
#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of descriptors.
    pub fn from_descriptors<I>(descriptors: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = CommandDescriptor>,
    {
        descriptors
            .into_iter()
            .try_fold(Self::new(), |registry, descriptor| registry.with(descriptor))
    }

    /// Registers a command.
    ///
    /// Names are unique; registering a second command under an existing name
    /// fails and leaves the registry unchanged.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> RegistryResult<()> {
        let name = descriptor.name();
        if name.is_empty() || name.contains(' ') {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.commands.contains_key(name) {
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }

        debug!(
            command = name,
            params = descriptor.params().len(),
            "Registered command"
        );
        self.commands
            .insert(name.to_string(), Arc::new(descriptor));
        Ok(())
    }

    /// Registers a command (builder pattern).
    pub fn with(mut self, descriptor: CommandDescriptor) -> RegistryResult<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<CommandDescriptor>> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Arguments, Command, ParamType};
    use async_trait::async_trait;

    struct Noop;

    #[async_trait]
    impl Command for Noop {
        async fn execute(&mut self, _args: Arguments) {}
    }

    fn descriptor(name: &str) -> CommandDescriptor {
        CommandDescriptor::builder(name)
            .param("text", ParamType::Text)
            .build(|| Noop)
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = CommandRegistry::from_descriptors([descriptor("ping"), descriptor("echo")])
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("ping"));
        assert_eq!(registry.get("echo").unwrap().name(), "echo");
        assert!(registry.get("missing").is_none());

        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["echo", "ping"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut registry = CommandRegistry::new();
        registry.register(descriptor("ping")).unwrap();
        let err = registry.register(descriptor("ping")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCommand("ping".into()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(matches!(
            CommandRegistry::new().with(descriptor("")),
            Err(RegistryError::InvalidName(_))
        ));
        assert!(matches!(
            CommandRegistry::new().with(descriptor("two words")),
            Err(RegistryError::InvalidName(_))
        ));
    }
}
