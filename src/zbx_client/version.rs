use std::fmt::{self, Display};
use std::str::FromStr;

/// Server API version as reported by `apiinfo.version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ApiVersion {
    #[must_use]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// `user.login` switched from `user` to `username` in 5.4.
    #[must_use]
    pub const fn login_user_key(self) -> &'static str {
        if self.major > 5 || (self.major == 5 && self.minor >= 4) {
            "username"
        } else {
            "user"
        }
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let mut next = |name: &str, required: bool| -> Result<u16, String> {
            match parts.next() {
                Some(raw) => {
                    // release candidates report e.g. "7.0.0rc1"
                    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
                    digits
                        .parse::<u16>()
                        .map_err(|err| format!("invalid {name} component in {s:?}: {err}"))
                }
                None if required => Err(format!("missing {name} component in {s:?}")),
                None => Ok(0),
            }
        };
        let major = next("major", true)?;
        let minor = next("minor", true)?;
        let patch = next("patch", false)?;
        Ok(Self::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiVersion;

    #[test]
    fn parses_release_strings() {
        assert_eq!("6.0.12".parse(), Ok(ApiVersion::new(6, 0, 12)));
        assert_eq!("5.4".parse(), Ok(ApiVersion::new(5, 4, 0)));
        assert_eq!("7.0.0rc1".parse(), Ok(ApiVersion::new(7, 0, 0)));
        assert!("six".parse::<ApiVersion>().is_err());
        assert!("6".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn orders_by_component() {
        assert!(ApiVersion::new(5, 4, 0) > ApiVersion::new(5, 2, 9));
        assert!(ApiVersion::new(6, 0, 0) > ApiVersion::new(5, 4, 12));
    }

    #[test]
    fn login_key_follows_the_5_4_rename() {
        assert_eq!(ApiVersion::new(5, 2, 0).login_user_key(), "user");
        assert_eq!(ApiVersion::new(5, 4, 0).login_user_key(), "username");
        assert_eq!(ApiVersion::new(7, 0, 1).login_user_key(), "username");
    }
}
