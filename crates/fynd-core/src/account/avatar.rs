//! Avatar keys and their image assets.
//!
//! Users never upload pictures; their document stores one of a fixed set
//! of keys which the client maps to bundled artwork.

use super::Gender;
use rand::Rng;
use rand::seq::SliceRandom;

pub const MALE_AVATARS: [&str; 6] = ["male1", "male2", "male3", "male4", "male5", "male6"];

pub const FEMALE_AVATARS: [&str; 6] = [
    "female1", "female2", "female3", "female4", "female5", "female6",
];

/// Key written on a freshly created document before a real one is assigned.
pub const DEFAULT_AVATAR_KEY: &str = "default";

/// Asset shown when the key is unknown.
pub const PLACEHOLDER_ASSET: &str = "user";

const AVATAR_ASSETS: [(&str, &str); 12] = [
    ("male1", "male_avatar1"),
    ("male2", "male_avatar2"),
    ("male3", "male_avatar3"),
    ("male4", "male_avatar4"),
    ("male5", "male_avatar5"),
    ("male6", "male_avatar6"),
    ("female1", "female_avatar1"),
    ("female2", "female_avatar2"),
    ("female3", "female_avatar3"),
    ("female4", "female_avatar4"),
    ("female5", "female_avatar5"),
    ("female6", "female_avatar6"),
];

/// Looks up the asset for a key, `None` for unknown keys (including `"default"`).
pub fn avatar_asset(key: &str) -> Option<&'static str> {
    AVATAR_ASSETS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, asset)| *asset)
}

pub fn is_known_avatar(key: &str) -> bool {
    avatar_asset(key).is_some()
}

/// Asset to display for a possibly missing or unknown key.
pub fn resolve_avatar_asset(key: Option<&str>) -> &'static str {
    key.and_then(avatar_asset).unwrap_or(PLACEHOLDER_ASSET)
}

/// Picks a random avatar key appropriate for the gender.
///
/// Without a gender every key is eligible, plus the `"default"` key.
pub fn random_avatar<R: Rng + ?Sized>(gender: Option<Gender>, rng: &mut R) -> &'static str {
    let choice = match gender {
        Some(Gender::Male) => MALE_AVATARS.choose(rng),
        Some(Gender::Female) => FEMALE_AVATARS.choose(rng),
        None => {
            let any: Vec<&'static str> = MALE_AVATARS
                .iter()
                .chain(FEMALE_AVATARS.iter())
                .copied()
                .chain(std::iter::once(DEFAULT_AVATAR_KEY))
                .collect();
            return any.choose(rng).copied().unwrap_or(DEFAULT_AVATAR_KEY);
        }
    };
    choice.copied().unwrap_or(DEFAULT_AVATAR_KEY)
}

/// Picks a random key that maps to a real asset, regardless of gender.
pub fn random_known_avatar<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AVATAR_ASSETS
        .choose(rng)
        .map(|(key, _)| *key)
        .unwrap_or(DEFAULT_AVATAR_KEY)
}
