//! The employee identifier value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width of the zero-padded serial at the end of every identifier.
pub const SERIAL_WIDTH: usize = 4;

/// A semantically encoded employee identifier of the form `CCFFLLYYYYSSSS`.
///
/// `CC` is the employer code, `FF`/`LL` the first and last name codes, `YYYY`
/// the join year and `SSSS` a zero-padded serial.
///
/// # Example
///
/// ```
/// use hrms_engine::models::EmployeeId;
///
/// let id = EmployeeId::new("OIJODO20240003");
/// assert_eq!(id.prefix(), "OIJODO2024");
/// assert_eq!(id.serial(), 3);
/// assert_eq!(id.with_serial(12).as_str(), "OIJODO20240012");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an identifier from its prefix and a serial, padding the serial
    /// to four digits. Serials above 9999 are written in full.
    pub fn from_parts(prefix: &str, serial: u32) -> Self {
        Self(format!("{}{:0width$}", prefix, serial, width = SERIAL_WIDTH))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the trailing serial.
    pub fn prefix(&self) -> &str {
        &self.0[..self.serial_start()]
    }

    /// The numeric value of the trailing four characters, or 0 when they are
    /// not all digits.
    pub fn serial(&self) -> u32 {
        let tail = &self.0[self.serial_start()..];
        if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
            return 0;
        }
        tail.parse().unwrap_or(0)
    }

    /// Returns a copy with the serial replaced.
    pub fn with_serial(&self, serial: u32) -> Self {
        Self::from_parts(self.prefix(), serial)
    }

    fn serial_start(&self) -> usize {
        self.0
            .char_indices()
            .rev()
            .nth(SERIAL_WIDTH - 1)
            .map(|(idx, _)| idx)
            .unwrap_or(0)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_serial_split() {
        let id = EmployeeId::new("ACJODO20250042");
        assert_eq!(id.prefix(), "ACJODO2025");
        assert_eq!(id.serial(), 42);
    }

    #[test]
    fn test_from_parts_pads_serial() {
        assert_eq!(EmployeeId::from_parts("OIJODO2024", 1).as_str(), "OIJODO20240001");
        assert_eq!(EmployeeId::from_parts("OIJODO2024", 9999).as_str(), "OIJODO20249999");
    }

    #[test]
    fn test_from_parts_does_not_truncate_large_serial() {
        assert_eq!(EmployeeId::from_parts("OIJODO2024", 10001).as_str(), "OIJODO202410001");
    }

    #[test]
    fn test_non_numeric_tail_reads_as_zero() {
        assert_eq!(EmployeeId::new("OIJODOXXXX").serial(), 0);
        assert_eq!(EmployeeId::new("").serial(), 0);
    }

    #[test]
    fn test_non_ascii_name_codes_split_on_char_boundary() {
        let id = EmployeeId::new("OIÉMDU20240007");
        assert_eq!(id.prefix(), "OIÉMDU2024");
        assert_eq!(id.serial(), 7);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EmployeeId::new("OIJODO20240001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"OIJODO20240001\"");
        let back: EmployeeId = serde_json::from_str("\"OIJODO20240001\"").unwrap();
        assert_eq!(back, id);
    }
}
