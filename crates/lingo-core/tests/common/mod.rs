#![allow(dead_code)] // Shared helpers; not every test file uses every one

use lingo_core::{DetectorOptions, LangProfile, ProfileRegistry};

pub const TEXT_A: &str = "a a a b b c c d e";
pub const TEXT_B: &str = "a b b c c c d d d";
pub const TEXT_C: &str = "x x x y y y z z z";

pub fn profile_from_text(name: &str, text: &str) -> LangProfile {
    let mut profile = LangProfile::new(name);
    profile.update(text);
    profile
}

/// Three tiny unpruned profiles; A and B share the latin letters a-e,
/// C is disjoint.
pub fn three_lang_registry() -> ProfileRegistry {
    ProfileRegistry::from_profiles(&[
        profile_from_text("lang-a", TEXT_A),
        profile_from_text("lang-b", TEXT_B),
        profile_from_text("lang-c", TEXT_C),
    ])
    .expect("registry build failed")
}

pub fn seeded(seed: u64) -> DetectorOptions {
    DetectorOptions {
        seed: Some(seed),
        ..Default::default()
    }
}
