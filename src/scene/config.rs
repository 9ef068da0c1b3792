//! Performance-tier scene parameters
//!
//! The shell owns tier auto-detection and the persisted user override;
//! the engine consumes the resolved tier read-only.

/// Resolved performance tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PerfTier {
    Low,
    Medium,
    High,
}

impl PerfTier {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(PerfTier::Low),
            "medium" => Some(PerfTier::Medium),
            "high" => Some(PerfTier::High),
            _ => None,
        }
    }
}

/// Population sizes and cadence parameters for one tier
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub gold_count: usize,
    pub silver_count: usize,
    pub gem_count: usize,
    pub emerald_count: usize,
    pub dust_count: usize,
    /// Vertical extent of the conical formation
    pub tree_height: f32,
    /// Formation radius at the base of the cone
    pub max_radius: f32,
    /// Run the landmark model every Nth video frame
    pub gesture_frame_skip: u32,
    /// Cap on user photos (the focusable elements)
    pub max_photos: usize,
}

impl SceneConfig {
    pub fn for_tier(tier: PerfTier) -> Self {
        let base = Self {
            gold_count: 400,
            silver_count: 400,
            gem_count: 250,
            emerald_count: 250,
            dust_count: 800,
            tree_height: 120.0,
            max_radius: 55.0,
            gesture_frame_skip: 2,
            max_photos: 12,
        };
        match tier {
            PerfTier::Low => Self {
                gold_count: 200,
                silver_count: 200,
                gem_count: 150,
                emerald_count: 150,
                dust_count: 500,
                gesture_frame_skip: 3,
                max_photos: 5,
                ..base
            },
            PerfTier::Medium => base,
            PerfTier::High => Self {
                gold_count: 650,
                silver_count: 650,
                gem_count: 450,
                emerald_count: 450,
                dust_count: 1300,
                gesture_frame_skip: 1,
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tiers() {
        assert_eq!(PerfTier::parse("low"), Some(PerfTier::Low));
        assert_eq!(PerfTier::parse("medium"), Some(PerfTier::Medium));
        assert_eq!(PerfTier::parse("high"), Some(PerfTier::High));
        assert_eq!(PerfTier::parse("ultra"), None);
    }

    #[test]
    fn tiers_scale_population_and_cadence() {
        let low = SceneConfig::for_tier(PerfTier::Low);
        let high = SceneConfig::for_tier(PerfTier::High);
        assert!(low.gold_count < high.gold_count);
        assert!(low.dust_count < high.dust_count);
        assert!(low.gesture_frame_skip > high.gesture_frame_skip);
        assert_eq!(low.max_photos, 5);
        assert_eq!(high.max_photos, 12);
        // Formation geometry is tier-independent
        assert_eq!(low.tree_height, high.tree_height);
        assert_eq!(low.max_radius, high.max_radius);
    }
}
