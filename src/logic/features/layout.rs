//! Feature Layout
//!
//! The column order the scaler and classifier were fit on. Any other order
//! silently corrupts predictions, so the artifact's `feature_names.json` is
//! checked against this list at load time and every `FeatureVector` carries
//! a stamp (version + CRC32 of the names) that is re-checked before
//! inference.
//!
//! Adding, removing, renaming or reordering a feature means bumping
//! `FEATURE_VERSION`.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Bump on any change to `FEATURE_LAYOUT`
pub const FEATURE_VERSION: u8 = 1;

/// Training column names, in vector order. Also the trailing columns of
/// the prediction log.
pub const FEATURE_LAYOUT: &[&str] = &[
    "Rainfall_mm",
    "Humidity_%",
    "Temperature_C",
    "Wind_Speed_kmph",
    "Soil_Moisture_%",
    "Magnitude",
    "Depth_km",
];

pub const FEATURE_COUNT: usize = 7;

static LAYOUT_HASH: Lazy<u32> = Lazy::new(|| stamp_hash(FEATURE_VERSION, FEATURE_LAYOUT));

/// CRC32 over the version byte and the NUL-terminated names
fn stamp_hash(version: u8, names: &[&str]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[version]);
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

/// Hash of the current layout
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

/// Layout description reported by the status command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A vector stamped for a different layout than this build's
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("feature layout v{found_version} ({found_hash:08x}) does not match v{FEATURE_VERSION} ({expected_hash:08x})")]
pub struct LayoutMismatchError {
    pub expected_hash: u32,
    pub found_version: u8,
    pub found_hash: u32,
}

/// Check a (version, hash) stamp against the current layout
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    if version == FEATURE_VERSION && hash == expected_hash {
        return Ok(());
    }
    Err(LayoutMismatchError {
        expected_hash,
        found_version: version,
        found_hash: hash,
    })
}

/// Position of the first name that breaks the layout; a length mismatch
/// reports the shorter length.
pub fn first_name_mismatch<S: AsRef<str>>(names: &[S]) -> Option<usize> {
    names
        .iter()
        .zip(FEATURE_LAYOUT)
        .position(|(given, expected)| given.as_ref() != *expected)
        .or_else(|| (names.len() != FEATURE_COUNT).then(|| names.len().min(FEATURE_COUNT)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_names() {
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_hash_depends_on_order_and_version() {
        assert_eq!(layout_hash(), stamp_hash(FEATURE_VERSION, FEATURE_LAYOUT));

        let mut swapped = FEATURE_LAYOUT.to_vec();
        swapped.swap(0, 1);
        assert_ne!(layout_hash(), stamp_hash(FEATURE_VERSION, &swapped));
        assert_ne!(layout_hash(), stamp_hash(FEATURE_VERSION + 1, FEATURE_LAYOUT));
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());

        let err = validate_layout(FEATURE_VERSION + 1, layout_hash()).unwrap_err();
        assert_eq!(err.found_version, FEATURE_VERSION + 1);
        assert!(validate_layout(FEATURE_VERSION, layout_hash() ^ 1).is_err());
    }

    #[test]
    fn test_first_name_mismatch() {
        assert_eq!(first_name_mismatch(FEATURE_LAYOUT), None);

        let mut swapped: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        swapped.swap(0, 1);
        assert_eq!(first_name_mismatch(&swapped), Some(0));

        assert_eq!(first_name_mismatch(&FEATURE_LAYOUT[..5]), Some(5));

        let mut longer = FEATURE_LAYOUT.to_vec();
        longer.push("Pressure_hPa");
        assert_eq!(first_name_mismatch(&longer), Some(FEATURE_COUNT));
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.names.len(), FEATURE_COUNT);
        assert_eq!(info.hash, layout_hash());
    }
}
