//! Case registry: explicit, ordered storage of named cases.
//!
//! Registry invariant: a registry is built once during a declaration phase,
//! then read-only through expansion and running. It is an ordinary value with
//! an explicit lifecycle; never a global. Names are unique within a registry,
//! and registration order is preserved because it drives report ordering.

use std::collections::HashMap;

use crate::case::Case;
use crate::errors::CaseError;

#[derive(Default)]
pub struct Registry {
    cases: Vec<Case>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a case keyed by its name. Registering an already-taken name
    /// fails without modifying the registry.
    pub fn register(&mut self, case: Case) -> Result<(), CaseError> {
        if self.index.contains_key(&case.name) {
            return Err(CaseError::DuplicateCase {
                name: case.name.clone(),
            });
        }
        self.index.insert(case.name.clone(), self.cases.len());
        self.cases.push(case);
        Ok(())
    }

    /// Restartable iteration over all cases in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.cases.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Case> {
        self.index.get(name).map(|&i| &self.cases[i])
    }

    /// Looks up a case by name, failing with the known-name list when the
    /// name is not registered.
    pub fn select(&self, name: &str) -> Result<&Case, CaseError> {
        self.get(name).ok_or_else(|| CaseError::CaseNotFound {
            name: name.to_string(),
            known: self.names().iter().map(|n| n.to_string()).collect(),
        })
    }

    /// Registered case names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Bindings;
    use crate::fault::Fault;

    fn noop(_args: &Bindings) -> Result<(), Fault> {
        Ok(())
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut registry = Registry::new();
        for name in ["c", "a", "b"] {
            registry.register(Case::new(name, noop)).unwrap();
        }
        assert_eq!(registry.names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn duplicate_name_is_rejected_and_registry_unchanged() {
        let mut registry = Registry::new();
        registry.register(Case::new("twice", noop)).unwrap();
        let err = registry.register(Case::new("twice", noop)).unwrap_err();
        assert!(matches!(err, CaseError::DuplicateCase { name } if name == "twice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn select_unknown_name_lists_known_cases() {
        let mut registry = Registry::new();
        registry.register(Case::new("present", noop)).unwrap();
        let err = registry.select("absent").unwrap_err();
        match err {
            CaseError::CaseNotFound { name, known } => {
                assert_eq!(name, "absent");
                assert_eq!(known, vec!["present".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn iteration_is_restartable() {
        let mut registry = Registry::new();
        registry.register(Case::new("one", noop)).unwrap();
        registry.register(Case::new("two", noop)).unwrap();
        assert_eq!(registry.iter().count(), 2);
        assert_eq!(registry.iter().count(), 2);
    }
}
