use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::types::TypeInfo;

/// Computes a base prefix for a concrete type.
///
/// Receives the type that was asked about, not the ancestor the rule was
/// registered for.
pub type PrefixFn = Arc<dyn Fn(&TypeInfo) -> Option<String> + Send + Sync>;

/// Base-prefix rules keyed by the exact type they were registered for.
///
/// Registering a rule for a type that already has one replaces it in place.
#[derive(Clone, Default)]
pub struct BasePrefixes {
    rules: Vec<(String, PrefixFn)>,
}

impl BasePrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, rule: PrefixFn) {
        let type_name = type_name.into();
        match self.rules.iter_mut().find(|(name, _)| *name == type_name) {
            Some(existing) => existing.1 = rule,
            None => self.rules.push((type_name, rule)),
        }
    }

    /// The rule registered for exactly `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&PrefixFn> {
        self.rules
            .iter()
            .find(|(name, _)| name == type_name)
            .map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Debug for BasePrefixes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list()
            .entries(self.rules.iter().map(|(name, _)| name))
            .finish()
    }
}
