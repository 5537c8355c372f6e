use super::address::EmailAddress;
use super::blacklist::Blacklist;
use super::patterns;
use crate::error::{AddressError, malformed_message};
use std::fmt;

/// Why an address passed or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Ok,
    Malformed(AddressError),
    InvalidUser,
    InvalidHost,
    Blacklisted,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Ok => f.write_str("OK"),
            Reason::Malformed(e) => f.write_str(&malformed_message(e)),
            Reason::InvalidUser => f.write_str("invalid user portion of email"),
            Reason::InvalidHost => f.write_str("invalid host portion of email"),
            Reason::Blacklisted => f.write_str("host is blacklisted"),
        }
    }
}

/// Outcome of validating a single address.
///
/// `user` and `host` are empty when the address could not be split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub email: String,
    pub user: String,
    pub host: String,
    pub reason: Reason,
}

impl ValidationVerdict {
    fn new(email: &str, address: Option<&EmailAddress>, reason: Reason) -> Self {
        let (user, host) = address
            .map(|a| (a.user().to_string(), a.host().to_string()))
            .unwrap_or_default();
        Self {
            valid: reason == Reason::Ok,
            email: email.to_string(),
            user,
            host,
            reason,
        }
    }

    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

/// Runs the parse, grammar and blacklist checks in order, stopping at the
/// first failure.
///
/// Holds no per-request state; one instance is shared by every worker.
#[derive(Debug, Default)]
pub struct Validator {
    blacklist: Blacklist,
}

impl Validator {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// # Examples
    /// ```
    /// use email_verifier::validation::blacklist::Blacklist;
    /// use email_verifier::validation::engine::Validator;
    ///
    /// let validator = Validator::new(Blacklist::default());
    /// let verdict = validator.validate("testing@thing.com");
    /// assert!(verdict.valid);
    /// assert_eq!(verdict.message(), "OK");
    /// ```
    pub fn validate(&self, raw: &str) -> ValidationVerdict {
        let verdict = self.check(raw);
        tracing::debug!(
            email = %verdict.email,
            valid = verdict.valid,
            reason = %verdict.reason,
            "Validated email address"
        );
        verdict
    }

    fn check(&self, raw: &str) -> ValidationVerdict {
        let address = match EmailAddress::parse(raw) {
            Ok(address) => address,
            Err(e) => return ValidationVerdict::new(raw, None, Reason::Malformed(e)),
        };

        let reason = if !patterns::is_valid_user(address.user()) {
            Reason::InvalidUser
        } else if !patterns::is_acceptable_host(address.host()) {
            Reason::InvalidHost
        } else if self.blacklist.contains(address.host()) {
            Reason::Blacklisted
        } else {
            Reason::Ok
        };

        ValidationVerdict::new(raw, Some(&address), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(
            ["item1", "item2", "item3"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn valid_address() {
        let verdict = validator().validate("testing@thing.com");
        assert!(verdict.valid);
        assert_eq!(verdict.user, "testing");
        assert_eq!(verdict.host, "thing.com");
        assert_eq!(verdict.email, "testing@thing.com");
        assert_eq!(verdict.message(), "OK");
    }

    #[test]
    fn ipv4_host_is_accepted() {
        let verdict = validator().validate("root@192.168.0.1");
        assert!(verdict.valid);
        assert_eq!(verdict.host, "192.168.0.1");
    }

    #[test]
    fn malformed_address() {
        let verdict = validator().validate("blargh!");
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason,
            Reason::Malformed(AddressError::MissingSeparator)
        );
        assert_eq!(verdict.email, "blargh!");
        assert!(verdict.user.is_empty());
        assert!(verdict.host.is_empty());
    }

    #[test]
    fn invalid_user() {
        let verdict = validator().validate("bad user@thing.com");
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Reason::InvalidUser);
        assert_eq!(verdict.message(), "invalid user portion of email");
        assert_eq!(verdict.user, "bad user");
        assert_eq!(verdict.host, "thing.com");
    }

    #[test]
    fn user_with_separator_is_rejected_by_grammar() {
        let verdict = validator().validate("a@b@thing.com");
        assert_eq!(verdict.reason, Reason::InvalidUser);
        assert_eq!(verdict.user, "a@b");
    }

    #[test]
    fn invalid_host() {
        let verdict = validator().validate("user@ex_ample.com");
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Reason::InvalidHost);
        assert_eq!(verdict.message(), "invalid host portion of email");
    }

    #[test]
    fn non_ascii_digit_host_is_invalid() {
        let verdict = validator().validate("user@١٢.١٤.١٥٦.٢٥٥");
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Reason::InvalidHost);

        let verdict = validator().validate("user@１.２.３.４");
        assert_eq!(verdict.reason, Reason::InvalidHost);
    }

    #[test]
    fn blacklisted_host() {
        let verdict = validator().validate("user@item1");
        assert!(!verdict.valid);
        assert_eq!(verdict.reason, Reason::Blacklisted);
        assert_eq!(verdict.message(), "host is blacklisted");
        assert_eq!(verdict.host, "item1");
    }

    #[test]
    fn blacklist_lookup_is_exact() {
        assert!(validator().validate("user@ITEM1").valid);
        assert!(validator().validate("user@sub.item1").valid);
    }

    #[test]
    fn user_checked_before_blacklist() {
        let verdict = validator().validate("bad user@item1");
        assert_eq!(verdict.reason, Reason::InvalidUser);
    }

    #[test]
    fn empty_blacklist_accepts_everything_well_formed() {
        let verdict = Validator::default().validate("user@item1");
        assert!(verdict.valid);
    }
}
