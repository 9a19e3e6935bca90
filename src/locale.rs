//! Locale-aware line comparison support for LC_COLLATE
//!
//! This module provides locale-aware comparison using the system's strcoll
//! function, respecting the LC_COLLATE environment variable.

use std::cmp::Ordering;
use std::env;
use std::ffi::CString;

/// Collation rule selected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Raw byte ordering (C/POSIX locale)
    Bytes,
    /// strcoll under the locale installed at construction
    Locale,
}

/// The collation comparator for one run.
///
/// Built once at startup and passed by reference to every component that
/// orders lines, so the whole process agrees on a single rule. Immutable
/// after construction.
#[derive(Debug, Clone)]
pub struct Collator {
    rule: Rule,
    locale_name: String,
}

impl Collator {
    /// Build the collator from the environment: LC_COLLATE, then LC_ALL,
    /// then LANG. An unset, empty, C, or POSIX locale selects byte order.
    pub fn from_env() -> Self {
        let locale = env::var("LC_COLLATE")
            .or_else(|_| env::var("LC_ALL"))
            .or_else(|_| env::var("LANG"))
            .unwrap_or_else(|_| "C".to_string());
        Self::with_locale(&locale)
    }

    /// Build the collator for a named locale, installing it for strcoll.
    /// Falls back to byte order when the locale cannot be installed.
    pub fn with_locale(name: &str) -> Self {
        if byte_locale(name) {
            return Self::bytes_named(name);
        }

        let locale_cstr = match CString::new(name) {
            Ok(s) => s,
            Err(_) => return Self::bytes_named(name),
        };
        let installed = unsafe { libc::setlocale(libc::LC_COLLATE, locale_cstr.as_ptr()) };
        if installed.is_null() {
            return Self::bytes_named(name);
        }

        Self {
            rule: Rule::Locale,
            locale_name: name.to_string(),
        }
    }

    /// Plain byte-order collation, independent of the environment
    pub fn bytes() -> Self {
        Self::bytes_named("C")
    }

    fn bytes_named(name: &str) -> Self {
        Self {
            rule: Rule::Bytes,
            locale_name: name.to_string(),
        }
    }

    /// The locale name this collator was built for
    pub fn locale_name(&self) -> &str {
        &self.locale_name
    }

    /// Whether comparisons go through strcoll
    pub fn uses_locale(&self) -> bool {
        self.rule == Rule::Locale
    }

    /// Compare two lines under the active collation rule
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        // Fast path for identical lines
        if a == b {
            return Ordering::Equal;
        }

        match self.rule {
            Rule::Bytes => a.cmp(b),
            Rule::Locale => strcoll_compare(a, b),
        }
    }
}

/// True when the named locale means plain byte comparison
fn byte_locale(name: &str) -> bool {
    name.is_empty() || name == "C" || name == "POSIX"
}

/// Locale-aware comparison using strcoll. strcoll is only defined for valid
/// strings in the locale's encoding; invalid UTF-8 or an interior NUL keeps
/// byte order for that pair.
fn strcoll_compare(a: &[u8], b: &[u8]) -> Ordering {
    if std::str::from_utf8(a).is_err() || std::str::from_utf8(b).is_err() {
        return a.cmp(b);
    }

    let (a_cstr, b_cstr) = match (CString::new(a), CString::new(b)) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return a.cmp(b),
    };

    let result = unsafe { libc::strcoll(a_cstr.as_ptr(), b_cstr.as_ptr()) };
    match result {
        x if x < 0 => Ordering::Less,
        x if x > 0 => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_locales_skip_strcoll() {
        assert!(!Collator::with_locale("C").uses_locale());
        assert!(!Collator::with_locale("POSIX").uses_locale());
        assert!(!Collator::with_locale("").uses_locale());
        assert!(!Collator::bytes().uses_locale());
        assert_eq!(Collator::with_locale("C").locale_name(), "C");
    }

    #[test]
    fn test_byte_order_basic() {
        let collator = Collator::bytes();
        assert_eq!(collator.compare(b"apple", b"banana"), Ordering::Less);
        assert_eq!(collator.compare(b"banana", b"apple"), Ordering::Greater);
        assert_eq!(collator.compare(b"apple", b"apple"), Ordering::Equal);
    }

    #[test]
    fn test_byte_order_prefix_is_less() {
        let collator = Collator::bytes();
        assert_eq!(collator.compare(b"app", b"apple"), Ordering::Less);
        assert_eq!(collator.compare(b"", b"a"), Ordering::Less);
    }

    #[test]
    fn test_strcoll_ascii() {
        // Only orderings every installable collation agrees on: other tests
        // in this binary may have switched the process locale already.
        assert_eq!(strcoll_compare(b"apple", b"banana"), Ordering::Less);
        assert_eq!(strcoll_compare(b"banana", b"apple"), Ordering::Greater);
        assert_eq!(strcoll_compare(b"same", b"same"), Ordering::Equal);
    }

    #[test]
    fn test_strcoll_invalid_utf8_falls_back() {
        assert_eq!(strcoll_compare(b"\xff\xfe", b"\xff"), Ordering::Greater);
        assert_eq!(strcoll_compare(b"\xff", b"\xff\xfe"), Ordering::Less);
    }

    #[test]
    fn test_strcoll_interior_nul_falls_back() {
        assert_eq!(strcoll_compare(b"a\x00b", b"a\x00a"), Ordering::Greater);
        assert_eq!(strcoll_compare(b"a\x00a", b"a\x00b"), Ordering::Less);
    }

    #[test]
    fn test_identical_bytes_equal_under_any_rule() {
        let collator = Collator::bytes();
        assert_eq!(collator.compare(b"\xff\x00\xfe", b"\xff\x00\xfe"), Ordering::Equal);
    }
}
