//! Pattern validation for rule entries
//!
//! Each rule declares one of four pattern kinds (namespace, wildcard, regex,
//! domain) and a pattern string. This module provides one total predicate per
//! kind plus [`validate`], the exhaustive dispatch over [`RuleKind`]. The
//! predicates never panic and never allocate for the common path; a failed
//! check is inline field feedback, not an error.
//!
//! Validation is purely syntactic: no DNS length limits are enforced beyond
//! per-label character rules, and the regex check only asks whether the
//! pattern compiles.

use crate::core::model::RuleKind;
use regex::Regex;

/// Checks one dot-separated label: `[A-Za-z0-9]` with optional interior
/// hyphens, never at either end, never empty.
fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if !bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-') {
        return false;
    }
    bytes[0] != b'-' && bytes[bytes.len() - 1] != b'-'
}

/// Like [`is_valid_label`] but additionally permits the glob metacharacters
/// `*` and `?` anywhere in the label.
fn is_valid_glob_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'*' | b'?'))
    {
        return false;
    }
    bytes[0] != b'-' && bytes[bytes.len() - 1] != b'-'
}

/// Validates an exact-domain pattern.
///
/// Legal iff the pattern is a dot-separated sequence of at least one label,
/// with no leading dot, no trailing dot, and no consecutive dots.
///
/// # Examples
///
/// ```
/// use routedit::validators::is_valid_domain;
///
/// assert!(is_valid_domain("sub.domain-test.com"));
/// assert!(!is_valid_domain(".domain.com"));
/// assert!(!is_valid_domain("domain..com"));
/// ```
pub fn is_valid_domain(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.split('.').all(is_valid_label)
}

/// Validates a namespace (hierarchical suffix) pattern.
///
/// Same as [`is_valid_domain`], additionally permitting any number of leading
/// dots: the pattern is legal if a leading-dot-stripped copy is a legal
/// domain. Trailing dots are never legal.
pub fn is_valid_namespace(pattern: &str) -> bool {
    is_valid_domain(pattern) || is_valid_domain(pattern.trim_start_matches('.'))
}

/// Validates a wildcard pattern.
///
/// Domain syntax extended with `*` and `?` glob metacharacters anywhere, with
/// the same dot rules as [`is_valid_domain`] and `**` rejected outright. A
/// single-label pattern (glob or not) is legal; `*.` is not.
pub fn is_valid_wildcard(pattern: &str) -> bool {
    !pattern.is_empty() && !pattern.contains("**") && pattern.split('.').all(is_valid_glob_label)
}

/// Validates a regex pattern by compiling it.
///
/// A compile failure is the validation signal; the error itself is discarded.
pub fn is_valid_regex(pattern: &str) -> bool {
    Regex::new(pattern).is_ok()
}

/// Dispatches a pattern to the validator for its kind.
///
/// The match is exhaustive over [`RuleKind`], so an unrecognized kind cannot
/// reach this function: schema deserialization rejects unknown kind strings
/// before a `RuleKind` value can exist.
pub fn validate(kind: RuleKind, pattern: &str) -> bool {
    match kind {
        RuleKind::Namespace => is_valid_namespace(pattern),
        RuleKind::Wildcard => is_valid_wildcard(pattern),
        RuleKind::Regex => is_valid_regex(pattern),
        RuleKind::Domain => is_valid_domain(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_accepts_label_sequences() {
        assert!(is_valid_domain("domain.com"));
        assert!(is_valid_domain("domain.com.cn"));
        assert!(is_valid_domain("domain.com.cn.cn"));
        assert!(is_valid_domain("sub.domain.com"));
        assert!(is_valid_domain("sub-domain.com"));
        assert!(is_valid_domain("sub.domain-test.com"));
        assert!(is_valid_domain("123.domain.com"));
        assert!(is_valid_domain("domain.123.com"));
        assert!(is_valid_domain("domain.com123"));
        assert!(is_valid_domain("domain.123"));
        assert!(is_valid_domain("a.b.c.d"));
        assert!(is_valid_domain("a.b.c.123"));
        assert!(is_valid_domain("localhost"));
    }

    #[test]
    fn test_domain_rejects_malformed_dots_and_hyphens() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("."));
        assert!(!is_valid_domain("..."));
        assert!(!is_valid_domain(".com.cn.cn.cn"));
        assert!(!is_valid_domain("com.cn.cn."));
        assert!(!is_valid_domain("domain.com-"));
        assert!(!is_valid_domain("-domain.com"));
        assert!(!is_valid_domain("domain.-com"));
        assert!(!is_valid_domain("domain..com"));
        assert!(!is_valid_domain(".domain"));
        assert!(!is_valid_domain("a.b.c..d"));
        assert!(!is_valid_domain("a.b.c."));
        assert!(!is_valid_domain("dom ain.com"));
        assert!(!is_valid_domain("domain.com/path"));
    }

    #[test]
    fn test_namespace_permits_leading_dots_only() {
        assert!(is_valid_namespace("domain.com"));
        assert!(is_valid_namespace(".com.cn.cn.cn"));
        assert!(is_valid_namespace("...domain.com"));
        assert!(is_valid_namespace(".domain"));
        assert!(!is_valid_namespace("com.cn.cn."));
        assert!(!is_valid_namespace(".domain.com."));
        assert!(!is_valid_namespace("domain..com"));
        assert!(!is_valid_namespace("."));
        assert!(!is_valid_namespace("..."));
        assert!(!is_valid_namespace(""));
    }

    #[test]
    fn test_wildcard_accepts_glob_labels() {
        assert!(is_valid_wildcard("*.domain.com"));
        assert!(is_valid_wildcard("*.sub.domain.com"));
        assert!(is_valid_wildcard("domain.com"));
        assert!(is_valid_wildcard("sub.domain.com"));
        assert!(is_valid_wildcard("*.domain.com.cn"));
        assert!(is_valid_wildcard("*.domain.123"));
        assert!(is_valid_wildcard("*.domain"));
        assert!(is_valid_wildcard("domain"));
        assert!(is_valid_wildcard("*"));
        assert!(is_valid_wildcard("img?.cdn.com"));
        assert!(is_valid_wildcard("a*b.domain.com"));
    }

    #[test]
    fn test_wildcard_rejects_malformed_patterns() {
        assert!(!is_valid_wildcard(""));
        assert!(!is_valid_wildcard("*."));
        assert!(!is_valid_wildcard("*.domain."));
        assert!(!is_valid_wildcard(".*.domain"));
        assert!(!is_valid_wildcard(".anything"));
        assert!(!is_valid_wildcard("*.domain..com"));
        assert!(!is_valid_wildcard("**.domain.com"));
        assert!(!is_valid_wildcard("a**.domain.com"));
        assert!(!is_valid_wildcard("*.domain.com-"));
        assert!(!is_valid_wildcard("*.domain.-com"));
        assert!(!is_valid_wildcard("..."));
    }

    #[test]
    fn test_regex_compile_is_the_signal() {
        assert!(is_valid_regex("^[a-zA-Z0-9]+$"));
        assert!(is_valid_regex(".*"));
        assert!(is_valid_regex("a(b|c)d"));
        assert!(is_valid_regex("\\d+"));
        assert!(is_valid_regex("a{2,3}"));
        assert!(is_valid_regex(""));
        assert!(!is_valid_regex("^[a-zA-Z0-9+$"));
        assert!(!is_valid_regex("("));
        assert!(!is_valid_regex("a{2,"));
        assert!(!is_valid_regex("[z-a]"));
    }

    #[test]
    fn test_dispatch_matches_predicates() {
        assert!(validate(RuleKind::Domain, "domain.com"));
        assert!(validate(RuleKind::Namespace, ".domain.com"));
        assert!(validate(RuleKind::Wildcard, "*.domain.com"));
        assert!(validate(RuleKind::Regex, ".*"));
        assert!(!validate(RuleKind::Domain, ".domain.com"));
        assert!(!validate(RuleKind::Wildcard, "*.domain."));
        assert!(!validate(RuleKind::Regex, "("));
    }
}
