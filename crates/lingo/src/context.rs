//! Per-thread current language.
//!
//! Registry calls that do not name a language use the language set here
//! for the calling thread, falling back to the configured default.

use std::cell::RefCell;

thread_local! {
    static CURRENT_LANGUAGE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Sets the current language for this thread.
pub fn set_current_language(language: impl Into<String>) {
    CURRENT_LANGUAGE.with(|current| *current.borrow_mut() = Some(language.into()));
}

/// Clears the current language for this thread.
pub fn clear_current_language() {
    CURRENT_LANGUAGE.with(|current| *current.borrow_mut() = None);
}

/// Returns the current language of this thread, if one is set.
pub fn current_language() -> Option<String> {
    CURRENT_LANGUAGE.with(|current| current.borrow().clone())
}

/// Sets the current language until the returned guard is dropped, then
/// restores whatever was set before.
///
/// ```
/// use lingo::context::{current_language, scoped_language};
///
/// {
///     let _scope = scoped_language("fr");
///     assert_eq!(current_language().as_deref(), Some("fr"));
/// }
/// assert_eq!(current_language(), None);
/// ```
pub fn scoped_language(language: impl Into<String>) -> LanguageScope {
    let previous = current_language();
    set_current_language(language);
    LanguageScope { previous }
}

/// Guard returned by [`scoped_language`].
#[derive(Debug)]
#[must_use = "the language is restored as soon as the scope is dropped"]
pub struct LanguageScope {
    previous: Option<String>,
}

impl Drop for LanguageScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_LANGUAGE.with(|current| *current.borrow_mut() = previous);
    }
}
