//! 128-bit GUIDs as five hex groups.
//!
//! Node-set documents write GUIDs as `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`,
//! optionally wrapped in braces. Groups are kept as integers so that the
//! textual form and the numeric identifier form share one parser.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Number of hyphen-separated groups in a GUID.
pub const GUID_GROUPS: usize = 5;

/// Hex digit width of each group in canonical text.
const GROUP_WIDTHS: [usize; GUID_GROUPS] = [8, 4, 4, 4, 12];

/// Error returned when GUID text does not split into valid hex groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GuidParseError {
    pub message: String,
}

/// A GUID held as its five hex groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid(pub [u64; GUID_GROUPS]);

impl Guid {
    /// The all-zero GUID, used when GUID text cannot be parsed.
    pub const NIL: Guid = Guid([0; GUID_GROUPS]);

    /// Parses `{8-4-4-4-12}` text. Braces and surrounding whitespace are optional.
    pub fn parse(text: &str) -> Result<Guid, GuidParseError> {
        let groups = parse_hex_groups(text)?;
        let groups: [u64; GUID_GROUPS] =
            groups.as_slice().try_into().map_err(|_| GuidParseError {
                message: format!(
                    "expected {GUID_GROUPS} groups, found {} in {text:?}",
                    groups.len()
                ),
            })?;
        Ok(Guid(groups))
    }

    pub fn groups(&self) -> &[u64; GUID_GROUPS] {
        &self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; GUID_GROUPS]
    }

    /// Converts to a [`Uuid`] if every group fits its canonical width.
    pub fn to_uuid(&self) -> Option<Uuid> {
        let [d1, d2, d3, d4a, d4b] = self.0;
        let d1 = u32::try_from(d1).ok()?;
        let d2 = u16::try_from(d2).ok()?;
        let d3 = u16::try_from(d3).ok()?;
        let d4a = u16::try_from(d4a).ok()?;
        if d4b >> 48 != 0 {
            return None;
        }
        let mut d4 = [0u8; 8];
        d4[..2].copy_from_slice(&d4a.to_be_bytes());
        d4[2..].copy_from_slice(&d4b.to_be_bytes()[2..]);
        Some(Uuid::from_fields(d1, d2, d3, &d4))
    }

    pub fn from_uuid(uuid: Uuid) -> Guid {
        let (d1, d2, d3, d4) = uuid.as_fields();
        let d4a = u16::from_be_bytes([d4[0], d4[1]]);
        let mut tail = [0u8; 8];
        tail[2..].copy_from_slice(&d4[2..]);
        Guid([
            d1.into(),
            d2.into(),
            d3.into(),
            d4a.into(),
            u64::from_be_bytes(tail),
        ])
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        Guid::from_uuid(uuid)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_groups(&self.0))
    }
}

/// Splits GUID-like text into hex groups.
///
/// Braces are dropped, then the text is split on `-`. Every group must be a
/// non-empty run of ASCII hex digits that fits in 64 bits. The group count is
/// not checked here.
pub(crate) fn parse_hex_groups(text: &str) -> Result<Vec<u64>, GuidParseError> {
    let stripped: String = text.trim().chars().filter(|c| *c != '{' && *c != '}').collect();
    stripped
        .split('-')
        .map(|group| {
            if group.is_empty() || !group.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(GuidParseError {
                    message: format!("invalid hex group {group:?} in {text:?}"),
                });
            }
            u64::from_str_radix(group, 16).map_err(|e| GuidParseError {
                message: format!("hex group {group:?} in {text:?}: {e}"),
            })
        })
        .collect()
}

/// Formats groups as uppercase hex joined by `-`.
///
/// The first five groups are zero-padded to 8-4-4-4-12 digits; any extra
/// group is written unpadded.
pub(crate) fn format_groups(groups: &[u64]) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let width = GROUP_WIDTHS.get(i).copied().unwrap_or(0);
            format!("{g:0width$X}")
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_braced_and_bare() {
        let a = Guid::parse("{72962B91-FA75-4AE6-8D28-B404DC7DAF63}").unwrap();
        let b = Guid::parse("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.0, [0x72962B91, 0xFA75, 0x4AE6, 0x8D28, 0xB404DC7DAF63]);
    }

    #[test]
    fn test_parse_rejects_bad_groups() {
        assert!(Guid::parse("").is_err());
        assert!(Guid::parse("1-2-3-4").is_err());
        assert!(Guid::parse("1-2-3-4-5-6").is_err());
        assert!(Guid::parse("xyz-2-3-4-5").is_err());
        assert!(Guid::parse("1--3-4-5").is_err());
        assert!(Guid::parse("+1-2-3-4-5").is_err());
    }

    #[test]
    fn test_display_is_padded_uppercase() {
        let g = Guid([1, 2, 3, 4, 5]);
        assert_eq!(g.to_string(), "00000001-0002-0003-0004-000000000005");
        assert_eq!(Guid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let g = Guid::from_uuid(uuid);
        assert_eq!(g.to_string(), "550E8400-E29B-41D4-A716-446655440000");
        assert_eq!(g.to_uuid(), Some(uuid));

        // Oversized groups have no UUID form.
        assert_eq!(Guid([0x1_0000_0000, 0, 0, 0, 0]).to_uuid(), None);
        assert!(Guid::NIL.is_nil());
    }
}
