//! Lightweight email and domain validation.
//!
//! Syntax checking only: no DNS lookups, no deliverability guarantees.
//! Domain allowlists are caller-supplied configuration, never baked in.

use crate::token;
use regex::Regex;
use std::sync::LazyLock;

// HTML5-style address shape: permissive local part, letter/digit/hyphen
// labels of at most 63 characters on the domain side.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// True iff `addr` is a plausibly formed email address.
///
/// Addresses shorter than 3 or longer than 254 bytes are rejected before
/// the pattern is consulted.
pub fn is_email(addr: &str) -> bool {
    if addr.len() < 3 || addr.len() > 254 {
        return false;
    }

    EMAIL_PATTERN.is_match(addr)
}

/// True iff the domain after the last `@` appears in `domains`.
///
/// Domain comparison is case-insensitive. An address with no `@` is
/// invalid regardless of the allowlist.
pub fn is_valid_email<S: AsRef<str>>(addr: &str, domains: &[S]) -> bool {
    match addr.rsplit_once('@') {
        Some((_, domain)) => token::contains_fold(domains, domain),
        None => false,
    }
}

/// True iff `domain` exactly matches an entry in `allowlist`.
pub fn is_valid_domain<S: AsRef<str>>(domain: &str, allowlist: &[S]) -> bool {
    allowlist.iter().any(|entry| entry.as_ref() == domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_email_accepts_plain_address() {
        assert!(is_email("test@example.com"));
    }

    #[test]
    fn is_email_accepts_subdomain() {
        assert!(is_email("user@mail.example.com"));
    }

    #[test]
    fn is_email_rejects_missing_at() {
        assert!(!is_email("testexample.com"));
    }

    #[test]
    fn is_email_rejects_missing_domain() {
        assert!(!is_email("test@"));
    }

    #[test]
    fn is_email_rejects_empty_and_tiny_inputs() {
        assert!(!is_email(""));
        assert!(!is_email("a@"));
    }

    #[test]
    fn is_email_rejects_oversized_input() {
        let addr = format!("{}@example.com", "a".repeat(300));
        assert!(!is_email(&addr));
    }

    #[test]
    fn is_valid_email_checks_domain_allowlist() {
        let domains = ["example.com", "test.org"];
        assert!(is_valid_email("user@example.com", &domains));
        assert!(is_valid_email("user@test.org", &domains));
        assert!(!is_valid_email("user@invalid.com", &domains));
    }

    #[test]
    fn is_valid_email_domain_match_is_case_insensitive() {
        let domains = ["example.com"];
        assert!(is_valid_email("user@Example.COM", &domains));
    }

    #[test]
    fn is_valid_email_uses_last_at_sign() {
        let domains = ["example.com"];
        assert!(is_valid_email("oddly@shaped@example.com", &domains));
    }

    #[test]
    fn is_valid_email_rejects_missing_at() {
        let domains = ["example.com"];
        assert!(!is_valid_email("userexample.com", &domains));
    }

    #[test]
    fn is_valid_domain_matches_exactly() {
        let allowlist = ["procul.io", "dashs.com", "dashs.com.au", "t3b.io"];
        assert!(is_valid_domain("procul.io", &allowlist));
        assert!(is_valid_domain("t3b.io", &allowlist));
        assert!(!is_valid_domain("google.com", &allowlist));
        assert!(!is_valid_domain("", &allowlist));
    }
}
