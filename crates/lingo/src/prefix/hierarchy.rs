use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use crate::types::{ENUM_TYPE, TypeInfo};

/// Registered model types and their supertypes.
///
/// Types that were never registered are treated as plain classes without a
/// base type.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    types: HashMap<String, TypeInfo>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type, replacing an earlier registration of the same name.
    pub fn register(&mut self, info: TypeInfo) {
        self.types.insert(info.name().to_string(), info);
    }

    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    /// The registered description of `name`, or a bare class description.
    pub fn describe(&self, name: &str) -> Cow<'_, TypeInfo> {
        match self.types.get(name) {
            Some(info) => Cow::Borrowed(info),
            None => Cow::Owned(TypeInfo::class(name)),
        }
    }

    /// The supertype of `name`, if any.
    pub fn supertype(&self, name: &str) -> Option<&str> {
        self.types.get(name).and_then(TypeInfo::base)
    }

    /// Walks from `name` up through its supertypes, most-derived first.
    ///
    /// Enum types end with the implicit [`ENUM_TYPE`] ancestor.
    pub fn ancestors<'a>(&'a self, name: &'a str) -> Ancestors<'a> {
        Ancestors {
            hierarchy: self,
            next: Some(name),
            enum_pending: self.types.get(name).is_some_and(TypeInfo::is_enum),
            visited: HashSet::new(),
        }
    }
}

/// Iterator returned by [`TypeHierarchy::ancestors`].
///
/// Stops when a supertype chain loops back on itself.
#[derive(Debug)]
pub struct Ancestors<'a> {
    hierarchy: &'a TypeHierarchy,
    next: Option<&'a str>,
    enum_pending: bool,
    visited: HashSet<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if let Some(current) = self.next.take() {
            if self.visited.insert(current) {
                self.next = self.hierarchy.supertype(current);
                return Some(current);
            }
        }

        if self.enum_pending {
            self.enum_pending = false;
            if !self.visited.contains(ENUM_TYPE) {
                self.visited.insert(ENUM_TYPE);
                return Some(ENUM_TYPE);
            }
        }

        None
    }
}
