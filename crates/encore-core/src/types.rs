use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignalRecord {
    pub is_musician: bool,
    pub is_client: bool,
    pub is_booker: bool,
    pub role_type: Option<String>,
    pub subscription: SubscriptionTier,

    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub picture: Option<String>,
    pub has_payout_method: bool,
    pub onboarding_complete: bool,

    pub completed_gigs_count: u32,
    pub gigs_posted: u32,
    pub artists_managed: Vec<String>,
    pub managed_bands: Vec<String>,
    pub booking_history: Vec<BookingEntry>,

    pub avg_rating: f64,
    pub performance_stats: PerformanceStats,

    pub description: Option<String>,
    pub organization: Option<String>,
    pub genres: Vec<String>,
    pub skills: Vec<String>,
    pub instrument: Option<String>,
    pub video_count: u32,
    pub video_likes: u32,
    pub has_profile_video: bool,
    pub gig_video_count: u32,

    pub followers: Vec<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub last_active: Option<DateTime<Utc>>,

    pub is_banned: bool,
    pub is_suspended: bool,
    pub reports_count: u32,
    pub cancelled_gigs_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    pub gig_id: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceStats {
    pub response_time_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    Premium,
    Elite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Musician,
    Teacher,
    Client,
    Booker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Musician => "musician",
            Role::Teacher => "teacher",
            Role::Client => "client",
            Role::Booker => "booker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationTier {
    New,
    Basic,
    Verified,
    Trusted,
    Elite,
}

impl ReputationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReputationTier::New => "new",
            ReputationTier::Basic => "basic",
            ReputationTier::Verified => "verified",
            ReputationTier::Trusted => "trusted",
            ReputationTier::Elite => "elite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Profile,
    Longevity,
    Activity,
    Quality,
    Content,
    Social,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Profile => "profile",
            Category::Longevity => "longevity",
            Category::Activity => "activity",
            Category::Quality => "quality",
            Category::Content => "content",
            Category::Social => "social",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub role: Role,
    pub profile: u32,
    pub longevity: u32,
    pub activity: u32,
    pub quality: u32,
    pub content: u32,
    pub social: u32,
    pub penalty: u32,
    pub final_score: u32,
    pub tier: ReputationTier,
    pub stars: f32,
}

impl ScoreBreakdown {
    pub fn category_total(&self) -> u32 {
        self.profile + self.longevity + self.activity + self.quality + self.content + self.social
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureThreshold {
    pub feature: &'static str,
    pub min_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextUnlock {
    pub feature: &'static str,
    pub threshold: u32,
    pub points_needed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub action: String,
    pub category: Category,
    pub points_gain: u32,
}
