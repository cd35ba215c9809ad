use std::fmt;

/// HTTP Version.
///
/// Built digit by digit while parsing, so arbitrary `major.minor` pairs are
/// representable, not only the registered protocol versions.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version {
    major: u16,
    minor: u16,
}

impl Version {
    /// [`HTTP/1.0`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/Evolution_of_HTTP#http1.0_%E2%80%93_building_extensibility)
    pub const HTTP_10: Version = Version { major: 1, minor: 0 };

    /// [`HTTP/1.1`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/Evolution_of_HTTP#http1.1_%E2%80%93_the_standardized_protocol)
    pub const HTTP_11: Version = Version { major: 1, minor: 1 };

    /// Create new [`Version`] from its numeric parts.
    #[inline]
    pub const fn new(major: u16, minor: u16) -> Version {
        Version { major, minor }
    }

    /// Returns the major version number.
    #[inline]
    pub const fn major(&self) -> u16 {
        self.major
    }

    /// Returns the minor version number.
    #[inline]
    pub const fn minor(&self) -> u16 {
        self.minor
    }

    pub(crate) fn push_major_digit(&mut self, digit: u8) {
        self.major = self
            .major
            .saturating_mul(10)
            .saturating_add((digit - b'0') as u16);
    }

    pub(crate) fn push_minor_digit(&mut self, digit: u8) {
        self.minor = self
            .minor
            .saturating_mul(10)
            .saturating_add((digit - b'0') as u16);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        f.write_str("HTTP/")?;
        f.write_str(buf.format(self.major))?;
        f.write_str(".")?;
        f.write_str(buf.format(self.minor))
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(Version::HTTP_11.to_string(), "HTTP/1.1");
        assert_eq!(Version::HTTP_10.to_string(), "HTTP/1.0");
        assert_eq!(Version::new(12, 3).to_string(), "HTTP/12.3");
    }

    #[test]
    fn test_version_digits() {
        let mut version = Version::default();
        version.push_major_digit(b'1');
        version.push_minor_digit(b'1');
        assert_eq!(version, Version::HTTP_11);

        let mut version = Version::default();
        version.push_major_digit(b'1');
        version.push_major_digit(b'2');
        version.push_minor_digit(b'3');
        assert_eq!(version, Version::new(12, 3));
    }
}
