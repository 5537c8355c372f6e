use crate::error::AddressError;
use std::fmt;
use std::str::FromStr;

/// An address split into its user and host parts.
///
/// Both parts are guaranteed non-empty. The split happens on the last `@`,
/// so the host never contains one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    user: String,
    host: String,
}

impl EmailAddress {
    /// Splits `raw` on its last `@`.
    ///
    /// # Examples
    /// ```
    /// use email_verifier::validation::address::EmailAddress;
    ///
    /// let address = EmailAddress::parse("a@b@example.com").unwrap();
    /// assert_eq!(address.user(), "a@b");
    /// assert_eq!(address.host(), "example.com");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }

        let (user, host) = raw.rsplit_once('@').ok_or(AddressError::MissingSeparator)?;
        if user.is_empty() {
            return Err(AddressError::EmptyUser);
        }
        if host.is_empty() {
            return Err(AddressError::EmptyHost);
        }

        Ok(Self {
            user: user.to_string(),
            host: host.to_string(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl FromStr for EmailAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}
