use chrono::{DateTime, Duration, TimeZone, Utc};
use encore_core::{ReputationTier, Role, SignalRecord};
use encore_trust::{resolve_role, RoleThresholds, TrustEngine};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn established_musician() -> SignalRecord {
    let mut record = SignalRecord::default();
    record.is_musician = true;
    record.firstname = Some("Jonas".to_string());
    record.lastname = Some("Reiter".to_string());
    record.city = Some("Hamburg".to_string());
    record.phone = Some("+49 40 5555".to_string());
    record.picture = Some("jonas.jpg".to_string());
    record.has_payout_method = true;
    record.onboarding_complete = true;
    record.role_type = Some("performer".to_string());
    record.created_at = Some(now() - Duration::days(800));
    record.last_active = Some(now() - Duration::hours(3));
    record.completed_gigs_count = 10;
    record.avg_rating = 4.9;
    record.description = Some("Session guitarist, 10 years on the road".to_string());
    record.genres = vec!["rock".to_string(), "blues".to_string()];
    record.instrument = Some("guitar".to_string());
    record.followers = (0..50).map(|i| format!("fan-{i}")).collect();
    record.subscription = encore_core::SubscriptionTier::Elite;
    record
}

#[test]
fn brand_new_free_user_scores_one() {
    let engine = TrustEngine::default();
    let breakdown = engine.compute_score(&SignalRecord::default(), now());

    assert_eq!(breakdown.profile, 0);
    assert_eq!(breakdown.longevity, 0);
    assert_eq!(breakdown.activity, 0);
    assert_eq!(breakdown.quality, 0);
    assert_eq!(breakdown.content, 0);
    assert_eq!(breakdown.social, 1);
    assert_eq!(breakdown.penalty, 0);
    assert_eq!(breakdown.final_score, 1);
    assert_eq!(breakdown.tier, ReputationTier::New);
    assert_eq!(breakdown.stars, 0.5);
}

#[test]
fn established_musician_lands_at_seventy_four() {
    let engine = TrustEngine::default();
    let record = established_musician();
    let breakdown = engine.compute_score(&record, now());

    assert_eq!(breakdown.profile, 21);
    assert_eq!(breakdown.longevity, 8);
    assert_eq!(breakdown.activity, 15);
    assert_eq!(breakdown.quality, 15);
    assert_eq!(breakdown.content, 6);
    assert_eq!(breakdown.social, 9);
    assert_eq!(breakdown.penalty, 0);
    assert_eq!(breakdown.final_score, 74);
    assert_eq!(breakdown.tier, ReputationTier::Trusted);
    assert_eq!(breakdown.stars, 4.0);

    assert!(engine.can_access(&record, "canVideoCall", now()));
    assert!(engine.can_access(&record, "canCreateBand", now()));
    assert!(!engine.can_access(&record, "canModerate", now()));
}

#[test]
fn banned_user_scores_zero_despite_everything() {
    let engine = TrustEngine::default();
    let mut record = established_musician();
    record.is_banned = true;

    let breakdown = engine.compute_score(&record, now());
    assert_eq!(breakdown.final_score, 0);
    assert_eq!(breakdown.tier, ReputationTier::New);
    assert_eq!(breakdown.stars, 0.5);

    for threshold in engine.feature_thresholds(&record) {
        assert!(
            !engine.can_access(&record, threshold.feature, now()),
            "{} unlocked for a banned user",
            threshold.feature
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = TrustEngine::default();
    let record = established_musician();
    let first = engine.compute_score(&record, now());
    for _ in 0..10 {
        assert_eq!(engine.compute_score(&record, now()), first);
    }
}

#[test]
fn category_subtotals_and_final_score_stay_bounded() {
    let engine = TrustEngine::default();

    let mut maxed = established_musician();
    maxed.completed_gigs_count = 500;
    maxed.performance_stats.response_time_hours = Some(1.0);
    maxed.video_count = 40;
    maxed.video_likes = 900;
    maxed.has_profile_video = true;
    maxed.gig_video_count = 12;
    maxed.followers = (0..5000).map(|i| format!("fan-{i}")).collect();

    for record in [SignalRecord::default(), established_musician(), maxed] {
        let b = engine.compute_score(&record, now());
        assert!(b.profile <= 25);
        assert!(b.longevity <= 10);
        assert!(b.activity <= 40);
        assert!(b.quality <= 20);
        assert!(b.content <= 15);
        assert!(b.social <= 10);
        assert!(b.final_score <= 100);
    }
}

#[test]
fn heavy_penalties_cannot_push_below_zero() {
    let engine = TrustEngine::default();
    let mut record = SignalRecord::default();
    record.is_suspended = true;
    record.reports_count = 10;
    record.cancelled_gigs_count = 10;

    let breakdown = engine.compute_score(&record, now());
    assert!(breakdown.penalty > breakdown.category_total());
    assert_eq!(breakdown.final_score, 0);
}

#[test]
fn lower_threshold_features_unlock_first() {
    let tables = RoleThresholds::default();
    for role in [Role::Musician, Role::Teacher, Role::Client, Role::Booker] {
        let table = tables.for_role(role);
        for score in 0..=100u32 {
            for pair in table.windows(2) {
                if tables.can_access(role, pair[1].feature, score) {
                    assert!(
                        tables.can_access(role, pair[0].feature, score),
                        "{} unlocked before {} for {:?} at {}",
                        pair[1].feature,
                        pair[0].feature,
                        role,
                        score
                    );
                }
            }
        }
    }
}

#[test]
fn thresholds_round_trip_exactly_at_the_boundary() {
    let tables = RoleThresholds::default();
    for role in [Role::Musician, Role::Teacher, Role::Client, Role::Booker] {
        for threshold in tables.for_role(role) {
            assert!(tables.can_access(role, threshold.feature, threshold.min_score));
            assert!(!tables.can_access(role, threshold.feature, threshold.min_score - 1));
        }
    }
}

#[test]
fn next_unlock_tracks_the_score() {
    let engine = TrustEngine::default();
    let record = established_musician();

    // At 74 the musician's next locked feature is canVerifyOthers at 75.
    let unlock = engine.next_unlock(&record, now()).unwrap();
    assert_eq!(unlock.feature, "canVerifyOthers");
    assert_eq!(unlock.threshold, 75);
    assert_eq!(unlock.points_needed, 1);

    assert_eq!(engine.points_needed(&record, "canVerifyOthers", now()), Some(1));
    assert_eq!(engine.points_needed(&record, "canVideoCall", now()), Some(0));
    assert_eq!(engine.points_needed(&record, "noSuchFeature", now()), None);
}

#[test]
fn injected_threshold_overrides_change_gating() {
    let mut tables = RoleThresholds::default();
    assert!(tables.override_threshold(Role::Musician, "canModerate", 70));
    let engine = TrustEngine::new(tables);

    let record = established_musician();
    assert!(engine.can_access(&record, "canModerate", now()));
}

#[test]
fn role_resolution_drives_the_table() {
    let engine = TrustEngine::default();

    let mut teacher = established_musician();
    teacher.role_type = Some("teacher".to_string());
    assert_eq!(resolve_role(&teacher), Role::Teacher);
    assert!(engine
        .feature_thresholds(&teacher)
        .iter()
        .any(|t| t.feature == "canListLessons"));

    let mut client = SignalRecord::default();
    client.is_client = true;
    assert!(engine
        .feature_thresholds(&client)
        .iter()
        .any(|t| t.feature == "canPostBasicGigs"));
}

#[test]
fn sparse_json_records_deserialize_with_defaults() {
    let record: SignalRecord =
        serde_json::from_str(r#"{"isMusician": true, "completedGigsCount": 4}"#).unwrap();
    assert!(record.is_musician);
    assert_eq!(record.completed_gigs_count, 4);
    assert!(record.created_at.is_none());

    let empty: SignalRecord = serde_json::from_str("{}").unwrap();
    let breakdown = TrustEngine::default().compute_score(&empty, now());
    assert_eq!(breakdown.final_score, 1);
}

#[test]
fn breakdown_serializes_flat() {
    let engine = TrustEngine::default();
    let breakdown = engine.compute_score(&established_musician(), now());
    let value = serde_json::to_value(&breakdown).unwrap();

    assert_eq!(value["finalScore"], 74);
    assert_eq!(value["tier"], "trusted");
    assert_eq!(value["profile"], 21);
    assert_eq!(value["role"], "musician");
}
