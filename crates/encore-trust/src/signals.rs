use chrono::{DateTime, Utc};
use encore_core::{BookingStatus, SignalRecord};

pub fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

pub fn account_age_days(record: &SignalRecord, now: DateTime<Utc>) -> i64 {
    match record.created_at {
        Some(created) => (now - created).num_days(),
        None => 0,
    }
}

pub fn days_since_active(record: &SignalRecord, now: DateTime<Utc>) -> Option<i64> {
    record.last_active.map(|active| (now - active).num_days())
}

pub fn follower_count(record: &SignalRecord) -> usize {
    record.followers.len()
}

pub fn completed_bookings(record: &SignalRecord) -> u32 {
    record
        .booking_history
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count() as u32
}

// gigs_posted == 0 yields 0.0 rather than dividing by zero; a client with no
// postings has no completion rate to speak of.
pub fn completion_rate(record: &SignalRecord) -> f64 {
    if record.gigs_posted == 0 {
        return 0.0;
    }
    record.completed_gigs_count as f64 / record.gigs_posted as f64
}

pub fn response_time_hours(record: &SignalRecord) -> Option<f64> {
    record.performance_stats.response_time_hours
}
