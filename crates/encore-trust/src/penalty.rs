use encore_core::{Role, SignalRecord};

use crate::signals;

pub const BAN_PENALTY: u32 = 100;

pub fn compute_penalty(record: &SignalRecord, role: Role) -> u32 {
    if record.is_banned {
        return BAN_PENALTY;
    }

    let mut total = 0;

    if record.is_suspended {
        total += 20;
    }

    total += (record.reports_count as u64 * 3).min(15) as u32;
    total += (record.cancelled_gigs_count as u64 * 2).min(10) as u32;

    if role == Role::Client {
        total += spam_penalty(record);
    }

    if matches!(role, Role::Musician | Role::Teacher) {
        total += slow_response_penalty(record);
    }

    total
}

// A client churning out postings it never completes is the strongest spam
// signal the marketplace has.
fn spam_penalty(record: &SignalRecord) -> u32 {
    let ratio = record.gigs_posted as f64 / record.completed_gigs_count.max(1) as f64;
    if ratio > 5.0 {
        10
    } else if ratio > 3.0 {
        5
    } else {
        0
    }
}

fn slow_response_penalty(record: &SignalRecord) -> u32 {
    match signals::response_time_hours(record) {
        Some(hours) if hours > 72.0 => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ban_short_circuits_everything_else() {
        let mut record = SignalRecord::default();
        record.is_banned = true;
        record.is_suspended = true;
        record.reports_count = 99;
        assert_eq!(compute_penalty(&record, Role::Musician), BAN_PENALTY);
    }

    #[test]
    fn reports_and_cancellations_are_capped() {
        let mut record = SignalRecord::default();
        record.reports_count = 20;
        record.cancelled_gigs_count = 20;
        // 15 + 10, both at their caps
        assert_eq!(compute_penalty(&record, Role::Musician), 25);
    }

    #[test]
    fn extreme_counters_stay_at_their_caps() {
        let mut record = SignalRecord::default();
        record.reports_count = u32::MAX;
        record.cancelled_gigs_count = u32::MAX;
        assert_eq!(compute_penalty(&record, Role::Booker), 25);
    }

    #[test]
    fn suspension_adds_twenty() {
        let mut record = SignalRecord::default();
        record.is_suspended = true;
        assert_eq!(compute_penalty(&record, Role::Booker), 20);
    }

    #[test]
    fn client_spam_ratio_tiers() {
        let mut record = SignalRecord::default();
        record.gigs_posted = 12;
        record.completed_gigs_count = 2;
        assert_eq!(compute_penalty(&record, Role::Client), 10);

        record.gigs_posted = 8;
        assert_eq!(compute_penalty(&record, Role::Client), 5);

        record.gigs_posted = 4;
        assert_eq!(compute_penalty(&record, Role::Client), 0);

        // never charged to musicians
        record.gigs_posted = 40;
        assert_eq!(compute_penalty(&record, Role::Musician), 0);
    }

    #[test]
    fn slow_responders_lose_points() {
        let mut record = SignalRecord::default();
        record.performance_stats.response_time_hours = Some(96.0);
        assert_eq!(compute_penalty(&record, Role::Musician), 5);
        assert_eq!(compute_penalty(&record, Role::Teacher), 5);
        // response time is a musician-side signal only
        assert_eq!(compute_penalty(&record, Role::Client), 0);

        record.performance_stats.response_time_hours = Some(48.0);
        assert_eq!(compute_penalty(&record, Role::Musician), 0);
    }
}
