use std::collections::HashMap;

use super::non_blank;

/// Explicit prefix overrides for types and their members.
///
/// A type-level override replaces the computed prefix of the type. A
/// member-level override replaces the prefix of one property; if it starts
/// with the separator it is appended to the container's prefix instead.
/// Blank overrides behave exactly like absent ones.
#[derive(Debug, Clone, Default)]
pub struct PrefixOverrides {
    types: HashMap<String, String>,
    members: HashMap<(String, String), String>,
}

impl PrefixOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type_prefix(&mut self, type_name: impl Into<String>, prefix: impl Into<String>) {
        self.types.insert(type_name.into(), prefix.into());
    }

    pub fn set_member_prefix(
        &mut self,
        type_name: impl Into<String>,
        member: impl Into<String>,
        prefix: impl Into<String>,
    ) {
        self.members
            .insert((type_name.into(), member.into()), prefix.into());
    }

    /// The override declared directly on `type_name`, if not blank.
    pub fn type_prefix(&self, type_name: &str) -> Option<&str> {
        non_blank(self.types.get(type_name).map(String::as_str))
    }

    /// The override declared on `member` of `type_name`, if not blank.
    pub fn member_prefix(&self, type_name: &str, member: &str) -> Option<&str> {
        let key = (type_name.to_string(), member.to_string());
        non_blank(self.members.get(&key).map(String::as_str))
    }
}
