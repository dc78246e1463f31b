use std::fmt;

/// Address a student is identified by.
///
/// There is no central student directory. A student exists by appearing on
/// one or more rosters, and the address itself is intentionally not
/// validated.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for EmailAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for EmailAddress {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
