use chrono::{DateTime, Utc};
use encore_core::{Category, Role, SignalRecord, SubscriptionTier, Suggestion};

use crate::categories::{self, ACTIVITY_CAP, CONTENT_CAP, LONGEVITY_CAP, PROFILE_CAP, QUALITY_CAP, SOCIAL_CAP};
use crate::role::resolve_role;
use crate::signals;

pub fn improvement_suggestions(record: &SignalRecord, now: DateTime<Utc>) -> Vec<Suggestion> {
    let role = resolve_role(record);
    let mut out = Vec::new();

    profile_suggestions(record, &mut out);
    longevity_suggestions(record, now, &mut out);
    activity_suggestions(record, role, &mut out);
    quality_suggestions(record, role, &mut out);
    content_suggestions(record, &mut out);
    social_suggestions(record, &mut out);

    // Cheapest increment first; stable sort keeps category order on ties.
    out.sort_by_key(|s| s.points_gain);
    out
}

fn push(
    out: &mut Vec<Suggestion>,
    current: u32,
    cap: u32,
    category: Category,
    action: &str,
    raw_gain: u32,
) {
    let gain = raw_gain.min(cap.saturating_sub(current));
    if gain > 0 {
        out.push(Suggestion {
            action: action.to_string(),
            category,
            points_gain: gain,
        });
    }
}

fn profile_suggestions(record: &SignalRecord, out: &mut Vec<Suggestion>) {
    let current = categories::score_profile(record);
    let fields: [(&Option<String>, &str, u32); 5] = [
        (&record.firstname, "add your first name", 2),
        (&record.lastname, "add your last name", 2),
        (&record.city, "set your city", 2),
        (&record.phone, "add a phone number", 2),
        (&record.picture, "upload a profile picture", 3),
    ];
    for (field, action, gain) in fields {
        if !signals::has_text(field) {
            push(out, current, PROFILE_CAP, Category::Profile, action, gain);
        }
    }
    if !record.has_payout_method {
        push(out, current, PROFILE_CAP, Category::Profile, "connect a payout method", 5);
    }
    if !record.onboarding_complete {
        push(out, current, PROFILE_CAP, Category::Profile, "finish onboarding", 2);
    }
    if !signals::has_text(&record.role_type) {
        push(out, current, PROFILE_CAP, Category::Profile, "pick a role type", 3);
    }
}

fn longevity_suggestions(record: &SignalRecord, now: DateTime<Utc>, out: &mut Vec<Suggestion>) {
    let current = categories::score_longevity(record, now);
    let recency_points = match signals::days_since_active(record, now) {
        Some(days) if days < 1 => 3,
        Some(days) if days < 7 => 2,
        Some(days) if days < 30 => 1,
        _ => 0,
    };
    // Account age accrues on its own; recency is the only lever.
    if recency_points < 3 {
        push(
            out,
            current,
            LONGEVITY_CAP,
            Category::Longevity,
            "log in today",
            3 - recency_points,
        );
    }
}

fn activity_suggestions(record: &SignalRecord, role: Role, out: &mut Vec<Suggestion>) {
    let current = categories::score_activity(record, role);
    match role {
        Role::Musician | Role::Teacher => {
            let gigs = record.completed_gigs_count;
            let term = |n: u32| (n as f64 * 1.5).min(20.0) as u32;
            let gain = term(gigs + 1) - term(gigs);
            if gain > 0 {
                push(out, current, ACTIVITY_CAP, Category::Activity, "complete another gig", gain);
            }
            let fast_responder = matches!(signals::response_time_hours(record), Some(h) if h < 24.0);
            if !fast_responder {
                push(
                    out,
                    current,
                    ACTIVITY_CAP,
                    Category::Activity,
                    "respond to booking requests within 24 hours",
                    3,
                );
            }
        }
        Role::Client => {
            let posted = record.gigs_posted;
            let term = |n: u32| (n as f64 * 0.5).min(10.0) as u32;
            let gain = term(posted + 1) - term(posted);
            if gain > 0 {
                push(out, current, ACTIVITY_CAP, Category::Activity, "post another gig", gain);
            }
        }
        Role::Booker => {
            if (record.artists_managed.len() as u32) < 10 {
                push(out, current, ACTIVITY_CAP, Category::Activity, "sign another artist", 1);
            }
            let bands = record.managed_bands.len() as u32;
            let band_term = |n: u32| (n as f64 * 1.5).min(10.0) as u32;
            let band_gain = band_term(bands + 1) - band_term(bands);
            if band_gain > 0 {
                push(out, current, ACTIVITY_CAP, Category::Activity, "take on another band", band_gain);
            }
            let bookings = signals::completed_bookings(record);
            let booking_term = |n: u32| (n as f64 * 0.5).min(10.0) as u32;
            let booking_gain = booking_term(bookings + 1) - booking_term(bookings);
            if booking_gain > 0 {
                push(
                    out,
                    current,
                    ACTIVITY_CAP,
                    Category::Activity,
                    "see another booking through",
                    booking_gain,
                );
            }
        }
    }
}

fn quality_suggestions(record: &SignalRecord, role: Role, out: &mut Vec<Suggestion>) {
    let current = categories::score_quality(record, role);
    match role {
        Role::Musician | Role::Teacher | Role::Booker => {
            let avg = record.avg_rating;
            if avg <= 0.0 {
                push(out, current, QUALITY_CAP, Category::Quality, "collect your first review", 1);
            } else if let Some((target, points)) = next_rating_bucket(avg) {
                let held = categories::rating_ladder(avg);
                push(
                    out,
                    current,
                    QUALITY_CAP,
                    Category::Quality,
                    &format!("raise your average rating to {target:.1}"),
                    points - held,
                );
            }
        }
        Role::Client => {
            if record.gigs_posted > 0 {
                let rate = signals::completion_rate(record);
                if let Some((points, held)) = next_completion_bucket(rate) {
                    push(
                        out,
                        current,
                        QUALITY_CAP,
                        Category::Quality,
                        "complete more of your posted gigs",
                        points - held,
                    );
                }
            }
        }
    }
}

fn next_rating_bucket(avg: f64) -> Option<(f64, u32)> {
    if avg < 3.5 {
        Some((3.5, 2))
    } else if avg < 4.0 {
        Some((4.0, 5))
    } else if avg < 4.5 {
        Some((4.5, 10))
    } else if avg < 4.8 {
        Some((4.8, 15))
    } else {
        None
    }
}

// Returns (points at the next completion bucket, points held now).
fn next_completion_bucket(rate: f64) -> Option<(u32, u32)> {
    let held = if rate >= 1.0 {
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
    let next = if rate < 0.6 {
        2
    } else if rate < 0.7 {
        4
    } else if rate < 0.8 {
        7
    } else if rate < 0.9 {
        10
    } else if rate < 1.0 {
        15
    } else {
        return None;
    };
    Some((next, held))
}

fn content_suggestions(record: &SignalRecord, out: &mut Vec<Suggestion>) {
    let current = categories::score_content(record);

    if !signals::has_text(&record.description) && !signals::has_text(&record.organization) {
        push(out, current, CONTENT_CAP, Category::Content, "write a bio", 3);
    }
    if record.genres.is_empty() && record.skills.is_empty() {
        push(out, current, CONTENT_CAP, Category::Content, "list your genres or skills", 2);
    }
    if !signals::has_text(&record.instrument) {
        push(out, current, CONTENT_CAP, Category::Content, "name your main instrument", 1);
    }

    if record.video_count < 1 {
        push(out, current, CONTENT_CAP, Category::Content, "upload your first video", 2);
    } else if record.video_count < 3 {
        push(out, current, CONTENT_CAP, Category::Content, "upload 3 videos", 2);
    } else if record.video_count < 5 {
        push(out, current, CONTENT_CAP, Category::Content, "upload 5 videos", 1);
    }

    if !record.has_profile_video {
        push(out, current, CONTENT_CAP, Category::Content, "add a profile video", 2);
    }

    if record.gig_video_count < 1 {
        push(out, current, CONTENT_CAP, Category::Content, "share a video from a gig", 1);
    } else if record.gig_video_count < 3 {
        push(out, current, CONTENT_CAP, Category::Content, "share videos from 3 gigs", 1);
    }
}

fn social_suggestions(record: &SignalRecord, out: &mut Vec<Suggestion>) {
    let current = categories::score_social(record);
    let followers = signals::follower_count(record);

    let next_step = if followers < 5 {
        Some((5, 1))
    } else if followers < 20 {
        Some((20, 1))
    } else if followers < 50 {
        Some((50, 2))
    } else if followers < 100 {
        Some((100, 4))
    } else {
        None
    };
    if let Some((target, gain)) = next_step {
        push(
            out,
            current,
            SOCIAL_CAP,
            Category::Social,
            &format!("reach {target} followers"),
            gain,
        );
    }

    let upgrade = match record.subscription {
        SubscriptionTier::Free => Some((SubscriptionTier::Pro, "upgrade to a pro subscription")),
        SubscriptionTier::Pro => Some((SubscriptionTier::Premium, "upgrade to a premium subscription")),
        SubscriptionTier::Premium => Some((SubscriptionTier::Elite, "upgrade to an elite subscription")),
        SubscriptionTier::Elite => None,
    };
    if let Some((next, action)) = upgrade {
        let gain = categories::subscription_bonus(next) - categories::subscription_bonus(record.subscription);
        push(out, current, SOCIAL_CAP, Category::Social, action, gain);
    }
}
