// file: src/dispatch/registry.rs
// version: 1.0.0
// guid: 3a5c7e9b-1d2f-4a4c-b6e8-0f2a4c6e8b1d

//! Name to command group mapping, built once at startup

use super::{groups::CATALOGUE, CommandGroup, Dispatcher};
use crate::error::{DispatchError, Result};
use crate::executor::CommandExecutor;
use crate::output::InvocationResult;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registered command groups keyed by base name
#[derive(Default)]
pub struct Registry {
    groups: BTreeMap<String, Box<dyn CommandGroup>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalogue group, all sharing `executor`
    pub fn with_defaults(executor: Arc<dyn CommandExecutor>) -> Self {
        let mut registry = Self::new();
        for spec in CATALOGUE {
            registry.register(Dispatcher::from_spec(spec, Arc::clone(&executor)));
        }
        registry
    }

    /// Add a group, returning the one it replaces
    pub fn register<G>(&mut self, group: G) -> Option<Box<dyn CommandGroup>>
    where
        G: CommandGroup + 'static,
    {
        self.groups.insert(group.base().to_string(), Box::new(group))
    }

    pub fn get(&self, name: &str) -> Option<&dyn CommandGroup> {
        self.groups.get(name).map(|group| group.as_ref())
    }

    /// Groups in name order
    pub fn groups(&self) -> impl Iterator<Item = &dyn CommandGroup> {
        self.groups.values().map(|group| group.as_ref())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolve `group` and invoke its subcommand
    pub async fn invoke(
        &self,
        group: &str,
        subcommand: &str,
        arguments: &[String],
    ) -> Result<InvocationResult> {
        let target = self
            .get(group)
            .ok_or_else(|| DispatchError::UnknownGroup(group.to_string()))?;
        target.invoke(subcommand, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::RecordingExecutor;

    #[tokio::test]
    async fn test_invoke_resolves_group() {
        let executor = RecordingExecutor::new();
        let registry = Registry::with_defaults(executor.clone());

        registry
            .invoke("environment", "create", &["--name=dev".to_string()])
            .await
            .unwrap();

        assert_eq!(executor.calls(), ["environment create --name=dev"]);
    }

    #[tokio::test]
    async fn test_unknown_group() {
        let executor = RecordingExecutor::new();
        let registry = Registry::with_defaults(executor.clone());

        let result = registry.invoke("spaceship", "launch", &[]).await;

        assert!(matches!(result, Err(DispatchError::UnknownGroup(name)) if name == "spaceship"));
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn test_defaults_cover_catalogue_in_order() {
        let registry = Registry::with_defaults(RecordingExecutor::new());

        assert_eq!(registry.len(), CATALOGUE.len());
        let names: Vec<&str> = registry.groups().map(|g| g.base()).collect();
        let expected: Vec<&str> = CATALOGUE.iter().map(|spec| spec.base).collect();
        assert_eq!(names, expected);
        assert!(registry.get("environment").unwrap().documents("sc_params"));
    }

    #[test]
    fn test_register_replaces_group() {
        let executor = RecordingExecutor::new();
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        assert!(registry
            .register(Dispatcher::new("environment", executor.clone()))
            .is_none());
        let previous = registry.register(
            Dispatcher::new("environment", executor.clone()).with_subcommand("list", "List."),
        );

        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("environment").unwrap().subcommands().len(), 1);
    }
}
