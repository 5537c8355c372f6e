use regex::Regex;
use std::sync::LazyLock;

/// Local-part characters: letters, digits and `! # $ % & ' * + / = ? ^ _ { } | ~ . -`.
static USER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_{}|~.-]+$").expect("valid user pattern")
});

/// Letters, digits, dots and hyphens. Bare names such as `localhost` match too.
static HOST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+$").expect("valid host pattern"));

/// ASCII digits only; `\d` would also match other Unicode digits.
static IPV4_HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$")
        .expect("valid ipv4 host pattern")
});

/// Checks the user (local) part of an address.
///
/// # Examples
/// ```
/// use email_verifier::validation::patterns::is_valid_user;
///
/// assert!(is_valid_user("geezer123"));
/// assert!(!is_valid_user(""));
/// ```
pub fn is_valid_user(user: &str) -> bool {
    USER_PATTERN.is_match(user)
}

/// Checks the host part against the hostname grammar.
pub fn is_valid_host(host: &str) -> bool {
    HOST_PATTERN.is_match(host)
}

/// Checks that the host has the shape of a dotted-quad IPv4 literal.
///
/// Only the shape is checked: `999.1.1.1` passes.
pub fn is_ipv4_host(host: &str) -> bool {
    IPV4_HOST_PATTERN.is_match(host)
}

/// A host is acceptable when it matches either the hostname grammar or the
/// IPv4 grammar.
pub fn is_acceptable_host(host: &str) -> bool {
    is_valid_host(host) || is_ipv4_host(host)
}
