use std::{collections::BTreeMap, fmt};

use super::{Component, ComponentError};

/// Options passed to a [`Factory`] when building a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentOptions {
    /// Selects `low_speed` rather than `cruise` aerodynamic variables.
    pub low_speed_aero: bool,
}

/// Builds a boxed component from options.
pub type Factory = fn(&ComponentOptions) -> Box<dyn Component>;

/// Maps symbolic submodel keys to component factories.
///
/// Registering a factory under an existing key replaces the previous one,
/// which lets callers swap in alternative implementations of a submodel.
#[derive(Clone, Default)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `key`, returning the factory it replaces.
    pub fn register(&mut self, key: impl Into<String>, factory: Factory) -> Option<Factory> {
        self.factories.insert(key.into(), factory)
    }

    /// Builds the component registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::UnknownSubmodel`] if nothing is registered under `key`.
    pub fn build(
        &self,
        key: &str,
        options: &ComponentOptions,
    ) -> Result<Box<dyn Component>, ComponentError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| ComponentError::UnknownSubmodel { key: key.into() })?;
        Ok(factory(options))
    }

    /// Returns `true` if a factory is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
