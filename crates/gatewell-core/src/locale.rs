//! Token-based text localization.
//!
//! UI strings are authored with `$token` placeholders and resolved through a
//! translation table at display time. Only the tokens used by this crate are
//! bundled; a host with a full localization service replaces this module at
//! the same seam.

/// English translation table, longest tokens first so that substitution never
/// matches a token inside a longer one.
const TABLE: &[(&str, &str)] = &[
    ("$plate_make_private", "Make private"),
    ("$plate_make_public", "Make public"),
    ("$plate_private", "Private"),
    ("$plate_public", "Public"),
    ("$plate_name", "Pressure plate"),
    ("$KEY_Use", "Use"),
];

/// Resolves every known `$token` in `text` against the bundled table.
///
/// Unknown tokens are left in place, matching the behavior of localization
/// services that fall back to the raw key.
///
/// # Example
///
/// ```
/// use gatewell_core::locale::localize;
///
/// assert_eq!(localize("$plate_name"), "Pressure plate");
/// assert_eq!(localize("[$KEY_Use] $plate_make_public"), "[Use] Make public");
/// ```
#[must_use]
pub fn localize(text: &str) -> String {
    let mut out = text.to_string();
    for (token, translation) in TABLE {
        out = out.replace(token, translation);
    }
    out
}
