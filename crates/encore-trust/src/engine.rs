use chrono::{DateTime, Utc};
use encore_core::{FeatureThreshold, NextUnlock, ScoreBreakdown, SignalRecord, Suggestion};
use tracing::debug;

use crate::categories;
use crate::gate::RoleThresholds;
use crate::penalty;
use crate::report;
use crate::role::resolve_role;
use crate::tier;

#[derive(Debug, Clone, Default)]
pub struct TrustEngine {
    thresholds: RoleThresholds,
}

impl TrustEngine {
    pub fn new(thresholds: RoleThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RoleThresholds {
        &self.thresholds
    }

    pub fn compute_score(&self, record: &SignalRecord, now: DateTime<Utc>) -> ScoreBreakdown {
        let role = resolve_role(record);

        let profile = categories::score_profile(record);
        let longevity = categories::score_longevity(record, now);
        let activity = categories::score_activity(record, role);
        let quality = categories::score_quality(record, role);
        let content = categories::score_content(record);
        let social = categories::score_social(record);
        let penalty = penalty::compute_penalty(record, role);

        // Category caps sum to 120, so subtracting the flat 100-point ban
        // penalty could still leave points on the table. Banned accounts are
        // zeroed outright instead.
        let final_score = if record.is_banned {
            0
        } else {
            (profile + longevity + activity + quality + content + social)
                .saturating_sub(penalty)
                .min(100)
        };

        debug!(role = role.as_str(), final_score, "trust score computed");

        ScoreBreakdown {
            role,
            profile,
            longevity,
            activity,
            quality,
            content,
            social,
            penalty,
            final_score,
            tier: tier::tier_for(final_score),
            stars: tier::stars_for(final_score),
        }
    }

    pub fn can_access(&self, record: &SignalRecord, feature: &str, now: DateTime<Utc>) -> bool {
        let breakdown = self.compute_score(record, now);
        self.thresholds
            .can_access(breakdown.role, feature, breakdown.final_score)
    }

    pub fn feature_thresholds(&self, record: &SignalRecord) -> &[FeatureThreshold] {
        self.thresholds.for_role(resolve_role(record))
    }

    pub fn points_needed(
        &self,
        record: &SignalRecord,
        feature: &str,
        now: DateTime<Utc>,
    ) -> Option<u32> {
        let breakdown = self.compute_score(record, now);
        self.thresholds
            .points_needed(breakdown.role, feature, breakdown.final_score)
    }

    pub fn next_unlock(&self, record: &SignalRecord, now: DateTime<Utc>) -> Option<NextUnlock> {
        let breakdown = self.compute_score(record, now);
        self.thresholds
            .next_unlock(breakdown.role, breakdown.final_score)
    }

    pub fn improvement_suggestions(
        &self,
        record: &SignalRecord,
        now: DateTime<Utc>,
    ) -> Vec<Suggestion> {
        report::improvement_suggestions(record, now)
    }
}
