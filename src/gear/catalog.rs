//! Gear option catalogs and selection.
//!
//! Selections come straight from player input. Anything outside the catalog
//! is replaced by the starter value for that field and reported as a notice
//! rather than rejected, so a bad choice never blocks play.

use super::types::{Fly, FlyCategory, Leader, LineMaterial, Rod, RodMaterial};

pub const ROD_LENGTHS_FT: std::ops::RangeInclusive<u8> = 7..=10;
pub const ROD_WEIGHT_CLASSES: std::ops::RangeInclusive<u8> = 3..=8;
pub const LEADER_LENGTHS_FT: std::ops::RangeInclusive<u8> = 7..=12;

/// Tippet classes from heaviest to finest.
pub const TIPPET_CLASSES: [&str; 8] = [
    "0X (6.8kg)",
    "1X (5.9kg)",
    "2X (5.0kg)",
    "3X (4.1kg)",
    "4X (3.6kg)",
    "5X (3.0kg)",
    "6X (2.0kg)",
    "7X (1.1kg)",
];

/// Hook sizes, largest number (smallest hook) first.
pub const HOOK_SIZES: [u8; 9] = [20, 18, 16, 14, 12, 10, 8, 6, 4];

pub const DRY_FLY_PATTERNS: [&str; 4] = ["Adams", "Elk Hair Caddis", "Parachute BWO", "Royal Wulff"];
pub const NYMPH_PATTERNS: [&str; 4] = ["Pheasant Tail", "Hare's Ear", "Copper John", "Zebra Midge"];
pub const STREAMER_PATTERNS: [&str; 4] = ["Woolly Bugger", "Clouser Minnow", "Muddler Minnow", "Zonker"];
pub const WET_FLY_PATTERNS: [&str; 3] = ["Soft Hackle", "Leadwing Coachman", "Partridge and Orange"];

/// A coerced gear choice together with what had to be corrected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    pub value: T,
    pub notices: Vec<String>,
}

impl<T> Selection<T> {
    pub fn was_coerced(&self) -> bool {
        !self.notices.is_empty()
    }
}

impl FlyCategory {
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            FlyCategory::DryFlies => &DRY_FLY_PATTERNS,
            FlyCategory::Nymphs => &NYMPH_PATTERNS,
            FlyCategory::Streamers => &STREAMER_PATTERNS,
            FlyCategory::WetFlies => &WET_FLY_PATTERNS,
        }
    }

    /// Matches "Nymphs", "nymph", "dry flies", "dry" and similar.
    pub fn parse(input: &str) -> Option<FlyCategory> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        FlyCategory::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase().starts_with(&needle))
    }
}

impl RodMaterial {
    pub fn parse(input: &str) -> Option<RodMaterial> {
        let needle = input.trim();
        RodMaterial::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(needle))
    }
}

impl LineMaterial {
    /// Accepts the full name or the common shorthands "mono" and "fluoro".
    pub fn parse(input: &str) -> Option<LineMaterial> {
        let needle = input.trim();
        match needle.to_lowercase().as_str() {
            "mono" => Some(LineMaterial::Monofilament),
            "fluoro" => Some(LineMaterial::Fluorocarbon),
            _ => LineMaterial::ALL
                .into_iter()
                .find(|m| m.name().eq_ignore_ascii_case(needle)),
        }
    }
}

/// Finds a tippet class by its leading "NX" designation or full label.
pub fn find_tippet(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_uppercase();
    if needle.is_empty() {
        return None;
    }
    TIPPET_CLASSES.into_iter().find(|t| {
        t.eq_ignore_ascii_case(input.trim()) || t.split_whitespace().next() == Some(needle.as_str())
    })
}

fn coerce<T: Copy + std::fmt::Display>(
    field: &str,
    requested: Option<T>,
    valid: impl Fn(T) -> bool,
    fallback: T,
    notices: &mut Vec<String>,
) -> T {
    match requested {
        Some(v) if valid(v) => v,
        Some(v) => {
            notices.push(format!("{field} {v} is not available; using {fallback}."));
            fallback
        }
        None => {
            notices.push(format!("No {field} given; using {fallback}."));
            fallback
        }
    }
}

fn log_notices(notices: &[String]) {
    for notice in notices {
        log::warn!("gear selection coerced: {notice}");
    }
}

pub fn select_rod(length_ft: Option<u8>, weight_class: Option<u8>, material: &str) -> Selection<Rod> {
    let starter = Rod::default();
    let mut notices = Vec::new();

    let length_ft = coerce(
        "rod length",
        length_ft,
        |v| ROD_LENGTHS_FT.contains(&v),
        starter.length_ft,
        &mut notices,
    );
    let weight_class = coerce(
        "rod weight",
        weight_class,
        |v| ROD_WEIGHT_CLASSES.contains(&v),
        starter.weight_class,
        &mut notices,
    );
    let material = RodMaterial::parse(material).unwrap_or_else(|| {
        notices.push(format!(
            "Rod material '{}' is not available; using {}.",
            material.trim(),
            starter.material.name()
        ));
        starter.material
    });

    log_notices(&notices);
    Selection {
        value: Rod {
            length_ft,
            weight_class,
            material,
        },
        notices,
    }
}

pub fn select_leader(material: &str, tippet: &str, length_ft: Option<u8>) -> Selection<Leader> {
    let starter = Leader::default();
    let mut notices = Vec::new();

    let material = LineMaterial::parse(material).unwrap_or_else(|| {
        notices.push(format!(
            "Leader material '{}' is not available; using {}.",
            material.trim(),
            starter.material.name()
        ));
        starter.material
    });
    let tippet = match find_tippet(tippet) {
        Some(t) => t.to_string(),
        None => {
            notices.push(format!(
                "Tippet '{}' is not available; using {}.",
                tippet.trim(),
                starter.tippet
            ));
            starter.tippet.clone()
        }
    };
    let length_ft = coerce(
        "leader length",
        length_ft,
        |v| LEADER_LENGTHS_FT.contains(&v),
        starter.length_ft,
        &mut notices,
    );

    log_notices(&notices);
    Selection {
        value: Leader {
            material,
            tippet,
            length_ft,
        },
        notices,
    }
}

/// Builds a fly. An unknown pattern falls back to the first pattern of the
/// chosen category so pattern and category always agree.
pub fn select_fly(pattern: &str, category: &str, hook_size: Option<u8>) -> Selection<Fly> {
    let starter = Fly::default();
    let mut notices = Vec::new();

    let category = FlyCategory::parse(category).unwrap_or_else(|| {
        notices.push(format!(
            "Fly category '{}' is not available; using {}.",
            category.trim(),
            starter.category.name()
        ));
        starter.category
    });

    let patterns = category.patterns();
    let pattern = match patterns
        .iter()
        .find(|p| p.eq_ignore_ascii_case(pattern.trim()))
    {
        Some(p) => p.to_string(),
        None => {
            let fallback = if category == starter.category {
                starter.pattern.clone()
            } else {
                patterns[0].to_string()
            };
            notices.push(format!(
                "Pattern '{}' is not tied in {}; using {}.",
                pattern.trim(),
                category.name(),
                fallback
            ));
            fallback
        }
    };

    let hook_size = coerce(
        "hook size",
        hook_size,
        |v| HOOK_SIZES.contains(&v),
        starter.hook_size,
        &mut notices,
    );

    log_notices(&notices);
    Selection {
        value: Fly {
            pattern,
            category,
            hook_size,
        },
        notices,
    }
}
