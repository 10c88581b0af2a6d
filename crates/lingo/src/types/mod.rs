mod entry;
mod type_info;

pub use entry::{TextFormat, TranslationEntry};
pub use type_info::{ENUM_TYPE, TypeInfo, TypeKind};
