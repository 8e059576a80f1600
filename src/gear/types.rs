//! Gear value objects.
//!
//! Gear is immutable once built; changing any piece means building a new
//! one through the catalog so selections stay inside the documented ranges.

use std::fmt;

/// Rod blank material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RodMaterial {
    Graphite,
    Fiberglass,
    Bamboo,
}

impl RodMaterial {
    pub const ALL: [RodMaterial; 3] = [
        RodMaterial::Graphite,
        RodMaterial::Fiberglass,
        RodMaterial::Bamboo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RodMaterial::Graphite => "Graphite",
            RodMaterial::Fiberglass => "Fiberglass",
            RodMaterial::Bamboo => "Bamboo",
        }
    }
}

/// Leader line material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMaterial {
    Monofilament,
    Fluorocarbon,
}

impl LineMaterial {
    pub const ALL: [LineMaterial; 2] = [LineMaterial::Monofilament, LineMaterial::Fluorocarbon];

    pub fn name(&self) -> &'static str {
        match self {
            LineMaterial::Monofilament => "Monofilament",
            LineMaterial::Fluorocarbon => "Fluorocarbon",
        }
    }
}

/// Fly families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyCategory {
    DryFlies,
    Nymphs,
    Streamers,
    WetFlies,
}

impl FlyCategory {
    pub const ALL: [FlyCategory; 4] = [
        FlyCategory::DryFlies,
        FlyCategory::Nymphs,
        FlyCategory::Streamers,
        FlyCategory::WetFlies,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FlyCategory::DryFlies => "Dry Flies",
            FlyCategory::Nymphs => "Nymphs",
            FlyCategory::Streamers => "Streamers",
            FlyCategory::WetFlies => "Wet Flies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rod {
    pub length_ft: u8,
    pub weight_class: u8,
    pub material: RodMaterial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leader {
    pub material: LineMaterial,
    pub tippet: String,
    pub length_ft: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fly {
    pub pattern: String,
    pub category: FlyCategory,
    pub hook_size: u8,
}

/// One rod, one leader, one fly: everything a cast needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout {
    pub rod: Rod,
    pub leader: Leader,
    pub fly: Fly,
}

impl Default for Rod {
    fn default() -> Self {
        Self {
            length_ft: 9,
            weight_class: 5,
            material: RodMaterial::Graphite,
        }
    }
}

impl Default for Leader {
    fn default() -> Self {
        Self {
            material: LineMaterial::Monofilament,
            tippet: "5X (3.0kg)".to_string(),
            length_ft: 9,
        }
    }
}

impl Default for Fly {
    fn default() -> Self {
        Self {
            pattern: "Adams".to_string(),
            category: FlyCategory::DryFlies,
            hook_size: 16,
        }
    }
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            rod: Rod::default(),
            leader: Leader::default(),
            fly: Fly::default(),
        }
    }
}

impl fmt::Display for Rod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}' {}wt {} rod",
            self.length_ft,
            self.weight_class,
            self.material.name()
        )
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}' {} leader, {} tippet",
            self.length_ft,
            self.material.name(),
            self.tippet
        )
    }
}

impl fmt::Display for Fly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) size {}",
            self.pattern,
            self.category.name(),
            self.hook_size
        )
    }
}

impl fmt::Display for Loadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; {}", self.rod, self.leader, self.fly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loadout_matches_starter_gear() {
        let loadout = Loadout::default();
        assert_eq!(loadout.rod.length_ft, 9);
        assert_eq!(loadout.rod.weight_class, 5);
        assert_eq!(loadout.rod.material, RodMaterial::Graphite);
        assert_eq!(loadout.leader.material, LineMaterial::Monofilament);
        assert_eq!(loadout.leader.tippet, "5X (3.0kg)");
        assert_eq!(loadout.leader.length_ft, 9);
        assert_eq!(loadout.fly.pattern, "Adams");
        assert_eq!(loadout.fly.category, FlyCategory::DryFlies);
        assert_eq!(loadout.fly.hook_size, 16);
    }

    #[test]
    fn test_loadout_display() {
        let text = Loadout::default().to_string();
        assert!(text.contains("9' 5wt Graphite rod"));
        assert!(text.contains("5X (3.0kg)"));
        assert!(text.contains("Adams (Dry Flies) size 16"));
    }
}
