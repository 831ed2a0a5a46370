//! Display names derived from procedure identifiers.
//!
//! `test_Sdash9dot1dashAdot1dash4` becomes `Standard S-9.1-A.1-4`:
//! the `test_` prefix is dropped, `dash` becomes `-`, `dot` becomes `.`,
//! and a leading `S` or `RP` is expanded.

use heapless::String;

use crate::error::RegistryError;

/// Identifier prefix of a registrable procedure.
pub const TEST_PREFIX: &str = "test_";

/// Capacity of identifiers and display names.
pub const MAX_NAME_LEN: usize = 64;

/// Human-readable test name.
pub type DisplayName = String<MAX_NAME_LEN>;

const STANDARD_PREFIX: &str = "Standard ";
const RECOMMENDED_PRACTICE_PREFIX: &str = "Recommended Practice ";

/// Whether an identifier follows the procedure naming convention.
#[inline]
pub fn is_test_identifier(identifier: &str) -> bool {
    identifier.starts_with(TEST_PREFIX)
}

/// Build the display name for a procedure identifier.
///
/// # Errors
///
/// Returns `RegistryError::InvalidIdentifier` if the identifier lacks the
/// `test_` prefix and `RegistryError::NameTooLong` if the result does not fit
/// a [`DisplayName`].
pub fn display_name(identifier: &str) -> Result<DisplayName, RegistryError> {
    let encoded = identifier.strip_prefix(TEST_PREFIX).ok_or_else(|| {
        RegistryError::InvalidIdentifier(truncated(identifier))
    })?;

    let mut decoded: DisplayName = String::new();
    let mut rest = encoded;
    while let Some(c) = rest.chars().next() {
        let (out, consumed) = if rest.starts_with("dash") {
            ('-', 4)
        } else if rest.starts_with("dot") {
            ('.', 3)
        } else {
            (c, c.len_utf8())
        };
        decoded.push(out).map_err(|_| RegistryError::NameTooLong)?;
        rest = &rest[consumed..];
    }

    let prefix = if decoded.starts_with('S') {
        STANDARD_PREFIX
    } else if decoded.starts_with("RP") {
        RECOMMENDED_PRACTICE_PREFIX
    } else {
        return Ok(decoded);
    };

    let mut name: DisplayName = String::new();
    name.push_str(prefix).map_err(|_| RegistryError::NameTooLong)?;
    name.push_str(&decoded).map_err(|_| RegistryError::NameTooLong)?;
    Ok(name)
}

fn truncated(text: &str) -> DisplayName {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
