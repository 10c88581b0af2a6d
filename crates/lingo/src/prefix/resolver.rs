use crate::options::LingoOptions;

use super::{BasePrefixes, PrefixOverrides, SEPARATOR, TypeHierarchy, compose, non_blank, suffix};

/// Computes effective prefixes for types, properties and enum values.
///
/// Precedence, highest first:
/// 1. a member override that does not start with the separator, used verbatim;
/// 2. a member override starting with the separator, appended to the
///    container's prefix;
/// 3. the first base-prefix rule found walking the type's ancestors;
/// 4. the convention fallback (`fields_prefix` plus the member name).
#[derive(Debug, Clone, Copy)]
pub struct PrefixResolver<'a> {
    base_prefixes: &'a BasePrefixes,
    hierarchy: &'a TypeHierarchy,
    overrides: &'a PrefixOverrides,
    fields_prefix: &'a str,
}

impl<'a> PrefixResolver<'a> {
    pub fn new(options: &'a LingoOptions) -> Self {
        Self {
            base_prefixes: options.base_prefixes(),
            hierarchy: options.types(),
            overrides: options.overrides(),
            fields_prefix: options.fields_prefix(),
        }
    }

    /// Resolve the base prefix for a type.
    ///
    /// Walks the ancestors of `type_name` and invokes the first registered
    /// rule with the concrete type. Unless the rule's result already ends with
    /// the separator, `name` is appended as a final segment. Returns `None`
    /// when nothing at all could be produced.
    pub fn base_prefix(&self, type_name: Option<&str>, name: Option<&str>) -> Option<String> {
        let mut prefix = None;

        if let Some(type_name) = type_name {
            let concrete = self.hierarchy.describe(type_name);
            for ancestor in self.hierarchy.ancestors(type_name) {
                if let Some(rule) = self.base_prefixes.get(ancestor) {
                    prefix = rule(&*concrete);
                    break;
                }
            }
        }

        let prefix = match non_blank(prefix.as_deref()) {
            Some(p) if p.ends_with(SEPARATOR) => p.to_string(),
            other => format!("{}{}", suffix(other), name.unwrap_or_default()),
        };

        (!prefix.is_empty()).then_some(prefix)
    }

    /// The override declared on `type_name` or inherited from an ancestor.
    pub fn type_override(&self, type_name: &str) -> Option<&'a str> {
        self.hierarchy
            .ancestors(type_name)
            .find_map(|ancestor| self.overrides.type_prefix(ancestor))
    }

    /// The override declared on `member`, looked up on `type_name` and then
    /// on its ancestors.
    pub fn member_override(&self, type_name: &str, member: &str) -> Option<&'a str> {
        self.hierarchy
            .ancestors(type_name)
            .find_map(|ancestor| self.overrides.member_prefix(ancestor, member))
    }

    /// The prefix of a model type: its override, or its base prefix with the
    /// type name appended.
    pub fn type_prefix(&self, type_name: &str) -> Option<String> {
        match self.type_override(type_name) {
            Some(prefix) => Some(prefix.to_string()),
            None => self.base_prefix(Some(type_name), Some(type_name)),
        }
    }

    /// The prefix of a property declared on `container`.
    ///
    /// ```
    /// use lingo::{Lingo, LingoOptions, TypeInfo};
    ///
    /// let mut options = LingoOptions::default();
    /// options.add_base_prefix_str("Entity", "Models");
    /// options.register_type(TypeInfo::class("Order").with_base("Entity"));
    ///
    /// let lingo = Lingo::new(options);
    /// let resolver = lingo.prefix_resolver();
    /// assert_eq!(resolver.property_prefix(Some("Order"), "Total"), "Models.Order.Fields.Total");
    /// ```
    pub fn property_prefix(&self, container: Option<&str>, property: &str) -> String {
        let member = container.and_then(|c| self.member_override(c, property));

        if let Some(prefix) = member.filter(|p| !p.starts_with(SEPARATOR)) {
            return prefix.to_string();
        }

        let container_prefix = container
            .and_then(|c| self.type_prefix(c))
            .unwrap_or_default();
        let property_prefix = match member {
            Some(prefix) => prefix.to_string(),
            None => format!("{}{property}", suffix(Some(self.fields_prefix))),
        };

        compose(&container_prefix, &property_prefix)
    }

    /// The key of one enum value: `<type prefix>.Values.<field>`.
    pub fn enum_value_key(&self, enum_type: &str, field: &str) -> String {
        let type_prefix = self.type_prefix(enum_type);
        format!("{}Values{SEPARATOR}{field}", suffix(type_prefix.as_deref()))
    }
}
