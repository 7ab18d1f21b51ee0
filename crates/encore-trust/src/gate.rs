use encore_core::{FeatureThreshold, NextUnlock, Role};
use serde::Serialize;

const fn entry(feature: &'static str, min_score: u32) -> FeatureThreshold {
    FeatureThreshold { feature, min_score }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleThresholds {
    musician: Vec<FeatureThreshold>,
    teacher: Vec<FeatureThreshold>,
    client: Vec<FeatureThreshold>,
    booker: Vec<FeatureThreshold>,
}

impl Default for RoleThresholds {
    fn default() -> Self {
        Self {
            musician: vec![
                entry("canPostBasicGigs", 10),
                entry("canMessageUsers", 20),
                entry("hasVerifiedBadge", 40),
                entry("canCompete", 45),
                entry("canViewAnalytics", 50),
                entry("canPostPremiumGigs", 55),
                entry("canUseDualRole", 60),
                entry("canVideoCall", 65),
                entry("canCreateBand", 70),
                entry("canVerifyOthers", 75),
                entry("canModerate", 80),
                entry("canAccessBetaFeatures", 85),
            ],
            teacher: vec![
                entry("canListLessons", 10),
                entry("canMessageUsers", 20),
                entry("hasVerifiedBadge", 35),
                entry("canViewAnalytics", 45),
                entry("canPostPremiumGigs", 50),
                entry("canVideoCall", 55),
                entry("canUseDualRole", 60),
                entry("canCreateBand", 65),
                entry("canVerifyOthers", 70),
                entry("canModerate", 80),
                entry("canAccessBetaFeatures", 85),
            ],
            client: vec![
                entry("canPostBasicGigs", 5),
                entry("canMessageUsers", 15),
                entry("hasVerifiedBadge", 30),
                entry("canViewAnalytics", 40),
                entry("canPostPremiumGigs", 45),
                entry("canUseDualRole", 50),
                entry("canVideoCall", 55),
                entry("canVerifyOthers", 65),
                entry("canModerate", 70),
                entry("canAccessBetaFeatures", 75),
            ],
            booker: vec![
                entry("canBrowseArtists", 5),
                entry("canMessageUsers", 10),
                entry("canManageArtists", 20),
                entry("hasVerifiedBadge", 35),
                entry("canViewAnalytics", 45),
                entry("canCreateBand", 50),
                entry("canVideoCall", 55),
                entry("canUseDualRole", 60),
                entry("canVerifyOthers", 65),
                entry("canModerate", 75),
                entry("canAccessBetaFeatures", 80),
            ],
        }
    }
}

impl RoleThresholds {
    pub fn for_role(&self, role: Role) -> &[FeatureThreshold] {
        match role {
            Role::Musician => &self.musician,
            Role::Teacher => &self.teacher,
            Role::Client => &self.client,
            Role::Booker => &self.booker,
        }
    }

    pub fn threshold(&self, role: Role, feature: &str) -> Option<u32> {
        self.for_role(role)
            .iter()
            .find(|t| t.feature == feature)
            .map(|t| t.min_score)
    }

    // Unknown keys gate closed rather than erroring.
    pub fn can_access(&self, role: Role, feature: &str, score: u32) -> bool {
        match self.threshold(role, feature) {
            Some(min) => score >= min,
            None => false,
        }
    }

    pub fn points_needed(&self, role: Role, feature: &str, score: u32) -> Option<u32> {
        self.threshold(role, feature)
            .map(|min| min.saturating_sub(score))
    }

    // Tables are ordered by unlock, so the first entry above the score is the
    // cheapest locked feature.
    pub fn next_unlock(&self, role: Role, score: u32) -> Option<NextUnlock> {
        self.for_role(role)
            .iter()
            .filter(|t| t.min_score > score)
            .min_by_key(|t| t.min_score)
            .map(|t| NextUnlock {
                feature: t.feature,
                threshold: t.min_score,
                points_needed: t.min_score - score,
            })
    }

    // Config overrides may retune an existing feature, not invent new ones.
    pub fn override_threshold(&mut self, role: Role, feature: &str, min_score: u32) -> bool {
        let table = match role {
            Role::Musician => &mut self.musician,
            Role::Teacher => &mut self.teacher,
            Role::Client => &mut self.client,
            Role::Booker => &mut self.booker,
        };
        match table.iter_mut().find(|t| t.feature == feature) {
            Some(t) => {
                t.min_score = min_score;
                true
            }
            None => false,
        }
    }
}
