/// Splits a raw address into user and host on its last `@`.
///
/// # Examples
/// ```
/// use email_verifier::validation::address::EmailAddress;
///
/// let address = EmailAddress::parse("user@example.com").unwrap();
/// assert_eq!(address.host(), "example.com");
/// assert!(EmailAddress::parse("no-separator").is_err());
/// ```
pub mod address;

/// Static set of hosts rejected regardless of syntax, loaded from a
/// line-oriented text file.
///
/// A missing or unreadable file produces an empty set rather than an error.
pub mod blacklist;

/// Runs the full check for one address and produces a
/// [`ValidationVerdict`](engine::ValidationVerdict).
///
/// Checks, in order:
/// 1. The address splits into non-empty user and host
/// 2. The user matches the local-part grammar
/// 3. The host matches the hostname grammar or the IPv4 grammar
/// 4. The host is not blacklisted
pub mod engine;

/// Precompiled, anchored regular expressions for the user and host parts.
pub mod patterns;
