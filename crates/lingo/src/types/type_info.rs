use std::fmt::{Display, Formatter, Result as FmtResult};

/// Name of the implicit ancestor shared by every [`TypeKind::Enum`] type.
///
/// Base-prefix rules registered for this name apply to all enums.
pub const ENUM_TYPE: &str = "Enum";

/// Whether a model type is a regular type or an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    #[default]
    Class,
    Enum,
}

/// Describes a model type for prefix resolution.
///
/// Types are identified by name. The optional `base` names the direct
/// supertype, which lets prefix rules and overrides be inherited without
/// any runtime reflection.
///
/// # Example
///
/// ```
/// use lingo::TypeInfo;
///
/// let order = TypeInfo::class("Order").with_base("Entity");
/// assert_eq!(order.name(), "Order");
/// assert_eq!(order.base(), Some("Entity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: String,
    base: Option<String>,
    kind: TypeKind,
}

impl TypeInfo {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            kind: TypeKind::Class,
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            kind: TypeKind::Enum,
        }
    }

    /// Sets the direct supertype.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}
