use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How keen the counterpart is on a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterestLevel {
    High,
    Medium,
    Low,
}

impl InterestLevel {
    pub fn label(&self) -> &'static str {
        match self {
            InterestLevel::High => "High interest",
            InterestLevel::Medium => "Medium interest",
            InterestLevel::Low => "Low interest",
        }
    }
}

/// A suggested counterpart for the current user.
///
/// For a startup the counterpart is an investor and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub counterpart_id: String,
    pub counterpart_name: String,
    /// 0..=100
    pub score: u8,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<InterestLevel>,
}

impl Match {
    /// Badge variant name for the score: strong, fair or weak.
    pub fn score_band(&self) -> &'static str {
        match self.score {
            80..=u8::MAX => "strong",
            60..=79 => "fair",
            _ => "weak",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl MeetingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "Scheduled",
            MeetingStatus::Completed => "Completed",
            MeetingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    pub id: String,
    pub startup_id: String,
    pub investor_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub status: MeetingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Meeting {
    pub fn involves(&self, user_id: &str) -> bool {
        self.startup_id == user_id || self.investor_id == user_id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Interested,
    DueDiligence,
    Committed,
    Closed,
}

impl DealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Interested => "Interested",
            DealStatus::DueDiligence => "Due diligence",
            DealStatus::Committed => "Committed",
            DealStatus::Closed => "Closed",
        }
    }

    /// Still in progress, i.e. counted as an open deal.
    pub fn is_open(&self) -> bool {
        !matches!(self, DealStatus::Closed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub id: String,
    pub startup_id: String,
    pub investor_id: String,
    pub status: DealStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Percent of equity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    pub fn involves(&self, user_id: &str) -> bool {
        self.startup_id == user_id || self.investor_id == user_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    /// File type, e.g. `pdf` or `xlsx`.
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// The other participant, seen from `user_id`.
    pub fn counterpart_of(&self, user_id: &str) -> Option<&str> {
        if self.sender_id == user_id {
            Some(&self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(&self.sender_id)
        } else {
            None
        }
    }
}

/// All messages exchanged with one counterpart, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thread {
    pub counterpart_id: String,
    pub counterpart_name: String,
    pub messages: Vec<Message>,
}

impl Thread {
    pub fn unread_for(&self, user_id: &str) -> usize {
        self.messages
            .iter()
            .filter(|m| m.receiver_id == user_id && !m.read)
            .count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.messages.iter().flat_map(|m| m.attachments.iter())
    }
}
