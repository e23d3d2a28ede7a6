//! In-process stand-in for the account and activity API.
//!
//! Every call first waits out the configured latency, then answers from
//! the fixture [`Directory`].

use chrono::{Datelike, Utc};
use shared_types::*;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::fixtures::Directory;
use crate::latency::simulate;
use crate::stats::quest_id;

/// Placeholder for free-text profile fields a new account has not filled.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Cheap to clone; clones share the fixture directory.
#[derive(Debug, Clone)]
pub struct Backend {
    latency: LatencyConfig,
    directory: Arc<Directory>,
}

impl Backend {
    pub fn new(latency: LatencyConfig) -> Self {
        Self {
            latency,
            directory: Arc::new(Directory::new(Utc::now())),
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Look up an account by email.
    ///
    /// Credentials are not checked: any password is accepted for a known
    /// email.
    pub async fn authenticate(&self, email: &str, _password: &str) -> Result<User, AppError> {
        simulate(self.latency.login_ms).await;
        self.directory
            .find_by_email(email)
            .cloned()
            .ok_or_else(|| {
                tracing::debug!(email, "no account for email");
                AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE)
            })
    }

    /// Build a fresh account from registration data. The directory is not
    /// modified.
    pub async fn create_account(&self, patch: &UserPatch, role: UserRole) -> Result<User, AppError> {
        simulate(self.latency.register_ms).await;

        let now = Utc::now();
        let mut rng = rand::thread_rng();
        let account = Account {
            id: format!("user-{}", now.timestamp_millis()),
            quest_id: quest_id(&mut rng),
            name: patch.name.clone().unwrap_or_default(),
            email: patch.email.clone().unwrap_or_default(),
            phone_number: patch.phone_number.clone().unwrap_or_default(),
            linkedin_profile: patch.linkedin_profile.clone().unwrap_or_default(),
            level: Level::L1,
            created_at: now,
        };

        let mut user = match role {
            UserRole::Startup => User::Startup(StartupUser {
                account,
                profile: StartupProfile {
                    startup_name: String::new(),
                    logo: None,
                    industry: vec![],
                    business_model: NOT_SPECIFIED.to_string(),
                    website: None,
                    social_links: None,
                    headquarters: NOT_SPECIFIED.to_string(),
                    operational_regions: vec![],
                    year_founded: now.year(),
                    co_founders: vec![],
                    advisors: vec![],
                    traction: None,
                    funding: None,
                    preferences: None,
                    documents: None,
                    privacy: None,
                },
            }),
            UserRole::Investor => User::Investor(InvestorUser {
                account,
                profile: InvestorProfile {
                    investor_type: String::new(),
                    industry: vec![],
                    investment_stage: vec!["Seed".to_string()],
                    ticket_size: TicketSize::default(),
                    deal_type: vec![],
                    geographic_preferences: vec![],
                    risk_appetite: NOT_SPECIFIED.to_string(),
                    portfolio: None,
                    preferences: None,
                    activity_level: None,
                    founder_preferences: None,
                    verification: None,
                },
            }),
        };

        // Registration data only fills the profile fields it carries.
        let profile_only = UserPatch {
            startup: patch.startup.clone(),
            investor: patch.investor.clone(),
            ..Default::default()
        };
        user.apply(&profile_only);

        tracing::info!(id = user.id(), role = %role, "account created");
        Ok(user)
    }

    /// Merge `patch` into a copy of `current`.
    pub async fn update_account(&self, current: &User, patch: &UserPatch) -> Result<User, AppError> {
        simulate(self.latency.update_ms).await;
        let mut updated = current.clone();
        updated.apply(patch);
        Ok(updated)
    }

    /// Suggested counterparts, best score first.
    pub async fn matches_for(&self, user: &User) -> Vec<Match> {
        simulate(self.latency.fetch_ms).await;
        let mut found = self
            .directory
            .matches
            .get(user.id())
            .cloned()
            .unwrap_or_default();
        found.sort_by(|a, b| b.score.cmp(&a.score));
        found
    }

    /// Meetings the user takes part in, earliest first.
    pub async fn meetings_for(&self, user: &User) -> Vec<Meeting> {
        simulate(self.latency.fetch_ms).await;
        let mut found: Vec<Meeting> = self
            .directory
            .meetings
            .iter()
            .filter(|m| m.involves(user.id()))
            .cloned()
            .collect();
        found.sort_by_key(|m| m.date);
        found
    }

    /// Deals the user is party to, most recently updated first.
    pub async fn deals_for(&self, user: &User) -> Vec<Deal> {
        simulate(self.latency.fetch_ms).await;
        let mut found: Vec<Deal> = self
            .directory
            .deals
            .iter()
            .filter(|d| d.involves(user.id()))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        found
    }

    /// Conversations grouped by counterpart, messages oldest first.
    pub async fn threads_for(&self, user: &User) -> Vec<Thread> {
        simulate(self.latency.fetch_ms).await;
        let me = user.id();
        let mut grouped: BTreeMap<String, Vec<Message>> = BTreeMap::new();
        for msg in &self.directory.messages {
            if let Some(other) = msg.counterpart_of(me) {
                grouped.entry(other.to_string()).or_default().push(msg.clone());
            }
        }

        let mut threads: Vec<Thread> = grouped
            .into_iter()
            .map(|(counterpart_id, mut messages)| {
                messages.sort_by_key(|m| m.timestamp);
                Thread {
                    counterpart_name: self.directory.display_name(&counterpart_id),
                    counterpart_id,
                    messages,
                }
            })
            .collect();
        // Most recent conversation on top.
        threads.sort_by(|a, b| {
            let a = a.last_message().map(|m| m.timestamp);
            let b = b.last_message().map(|m| m.timestamp);
            b.cmp(&a)
        });
        threads
    }
}
