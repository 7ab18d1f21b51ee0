use chrono::{DateTime, Utc};
use encore_core::{Role, SignalRecord, SubscriptionTier};

use crate::signals;

pub const PROFILE_CAP: u32 = 25;
pub const LONGEVITY_CAP: u32 = 10;
pub const ACTIVITY_CAP: u32 = 40;
pub const QUALITY_CAP: u32 = 20;
pub const CONTENT_CAP: u32 = 15;
pub const SOCIAL_CAP: u32 = 10;

pub fn score_profile(record: &SignalRecord) -> u32 {
    let mut points = 0;

    if signals::has_text(&record.firstname) {
        points += 2;
    }
    if signals::has_text(&record.lastname) {
        points += 2;
    }
    if signals::has_text(&record.city) {
        points += 2;
    }
    if signals::has_text(&record.phone) {
        points += 2;
    }
    if signals::has_text(&record.picture) {
        points += 3;
    }
    if record.has_payout_method {
        points += 5;
    }
    if record.onboarding_complete {
        points += 2;
    }
    if signals::has_text(&record.role_type) {
        points += 3;
    }

    points.min(PROFILE_CAP)
}

pub fn score_longevity(record: &SignalRecord, now: DateTime<Utc>) -> u32 {
    let age_days = signals::account_age_days(record, now);
    let age_points = if age_days > 730 {
        5
    } else if age_days > 365 {
        4
    } else if age_days > 180 {
        3
    } else if age_days > 90 {
        2
    } else if age_days > 30 {
        1
    } else {
        0
    };

    let recency_points = match signals::days_since_active(record, now) {
        Some(days) if days < 1 => 3,
        Some(days) if days < 7 => 2,
        Some(days) if days < 30 => 1,
        _ => 0,
    };

    (age_points + recency_points).min(LONGEVITY_CAP)
}

pub fn score_activity(record: &SignalRecord, role: Role) -> u32 {
    let points = match role {
        Role::Musician | Role::Teacher => musician_activity(record),
        Role::Client => client_activity(record),
        Role::Booker => booker_activity(record),
    };
    points.min(ACTIVITY_CAP)
}

fn musician_activity(record: &SignalRecord) -> u32 {
    let gig_points = (record.completed_gigs_count as f64 * 1.5).min(20.0) as u32;
    let response_bonus = match signals::response_time_hours(record) {
        Some(hours) if hours < 24.0 => 3,
        _ => 0,
    };
    gig_points + response_bonus
}

fn client_activity(record: &SignalRecord) -> u32 {
    (record.gigs_posted as f64 * 0.5).min(10.0) as u32
}

fn booker_activity(record: &SignalRecord) -> u32 {
    let artist_points = (record.artists_managed.len() as u32).min(10);
    let band_points = (record.managed_bands.len() as f64 * 1.5).min(10.0) as u32;
    let booking_points = (signals::completed_bookings(record) as f64 * 0.5).min(10.0) as u32;
    artist_points + band_points + booking_points
}

pub fn score_quality(record: &SignalRecord, role: Role) -> u32 {
    let points = match role {
        // Bookers are rated through the same review stream as musicians.
        Role::Musician | Role::Teacher | Role::Booker => rating_ladder(record.avg_rating),
        Role::Client => client_quality(record),
    };
    points.min(QUALITY_CAP)
}

pub(crate) fn rating_ladder(avg: f64) -> u32 {
    if avg >= 4.8 {
        15
    } else if avg >= 4.5 {
        10
    } else if avg >= 4.0 {
        5
    } else if avg >= 3.5 {
        2
    } else if avg > 0.0 {
        1
    } else {
        0
    }
}

fn client_quality(record: &SignalRecord) -> u32 {
    let rate = signals::completion_rate(record);
    let completion_points = if record.gigs_posted == 0 {
        0
    } else if rate >= 1.0 {
        15
    } else if rate >= 0.9 {
        10
    } else if rate >= 0.8 {
        7
    } else if rate >= 0.7 {
        4
    } else if rate >= 0.6 {
        2
    } else if rate > 0.0 {
        1
    } else {
        0
    };

    let rating_bonus = if record.avg_rating >= 4.9 {
        5
    } else if record.avg_rating >= 4.8 {
        3
    } else if record.avg_rating >= 4.5 {
        2
    } else if record.avg_rating >= 4.0 {
        1
    } else {
        0
    };

    completion_points + rating_bonus
}

pub fn score_content(record: &SignalRecord) -> u32 {
    let mut points = 0;

    if signals::has_text(&record.description) || signals::has_text(&record.organization) {
        points += 3;
    }
    if !record.genres.is_empty() || !record.skills.is_empty() {
        points += 2;
    }
    if signals::has_text(&record.instrument) {
        points += 1;
    }

    if record.video_count >= 1 {
        points += 2;
    }
    if record.video_count >= 3 {
        points += 2;
    }
    if record.video_count >= 5 {
        points += 1;
    }

    if record.video_likes >= 5 {
        points += 1;
    }
    if record.video_likes >= 20 {
        points += 1;
    }
    if record.video_likes >= 50 {
        points += 1;
    }

    if record.has_profile_video {
        points += 2;
    }

    if record.gig_video_count >= 1 {
        points += 1;
    }
    if record.gig_video_count >= 3 {
        points += 1;
    }

    points.min(CONTENT_CAP)
}

pub fn score_social(record: &SignalRecord) -> u32 {
    let followers = signals::follower_count(record);
    let mut points = 0;

    if followers >= 5 {
        points += 1;
    }
    if followers >= 20 {
        points += 1;
    }
    if followers >= 50 {
        points += 2;
    }
    if followers >= 100 {
        points += 4;
    }

    points += subscription_bonus(record.subscription);

    points.min(SOCIAL_CAP)
}

pub fn subscription_bonus(tier: SubscriptionTier) -> u32 {
    match tier {
        SubscriptionTier::Elite => 5,
        SubscriptionTier::Premium => 3,
        SubscriptionTier::Pro => 2,
        SubscriptionTier::Free => 1,
    }
}
