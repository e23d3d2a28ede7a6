use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the marketplace an account sits on.
///
/// The role decides the profile shape, the dashboard route prefix and
/// which navigation entries are visible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Startup,
    Investor,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Startup, UserRole::Investor];

    /// Lowercase tag used in URLs and in the persisted session.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Startup => "startup",
            UserRole::Investor => "investor",
        }
    }

    pub fn parse_role(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "startup" => Some(UserRole::Startup),
            "investor" => Some(UserRole::Investor),
            _ => None,
        }
    }

    /// Path prefix owning this role's dashboard subtree.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            UserRole::Startup => "/startup",
            UserRole::Investor => "/investor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Startup => "Startup",
            UserRole::Investor => "Investor",
        }
    }

    /// Single letter shown in the avatar when no name is available.
    pub fn initial(&self) -> char {
        match self {
            UserRole::Startup => 'S',
            UserRole::Investor => 'I',
        }
    }

    /// The role on the other side of a match.
    pub fn counterpart(&self) -> Self {
        match self {
            UserRole::Startup => UserRole::Investor,
            UserRole::Investor => UserRole::Startup,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path segment or query value is not a known role.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_role(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Platform tier. Every new account starts at `L1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    L1,
    L2,
    Q,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::Q => "Q",
        }
    }
}

/// Identity and contact fields shared by both roles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    /// Secondary, human-facing identifier (`Q-1234`).
    pub quest_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub linkedin_profile: String,
    #[serde(default)]
    pub level: Level,
    pub created_at: DateTime<Utc>,
}

// ── Startup profile ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoFounder {
    pub name: String,
    pub role: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisor {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Traction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_active_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_paying_customers: Option<u64>,
    /// Year-over-year growth, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoy_growth_rate: Option<u32>,
    #[serde(default)]
    pub key_milestones: Vec<String>,
}

/// The round a startup is currently raising.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundingRound {
    pub total_raised: u64,
    pub current_round: String,
    pub target_amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity_offered: Option<u32>,
    #[serde(default)]
    pub use_of_funds: Vec<String>,
    #[serde(default)]
    pub ideal_investor_type: Vec<String>,
}

impl FundingRound {
    /// Share of the target already raised, clamped to 0..=100.
    pub fn progress_percent(&self) -> u32 {
        if self.target_amount == 0 {
            return 0;
        }
        let pct = self.total_raised.saturating_mul(100) / self.target_amount;
        pct.min(100) as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StartupPreferences {
    #[serde(default)]
    pub preferred_investor_region: Vec<String>,
    #[serde(default)]
    pub mentorship_needed: Vec<String>,
    #[serde(default)]
    pub industry_connections_needed: Vec<String>,
    #[serde(default)]
    pub open_to_co_investment: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StartupDocuments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_deck: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_projections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl StartupDocuments {
    /// Labelled links for every document that has been uploaded.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Pitch Deck", &self.pitch_deck),
            ("Business Plan", &self.business_plan),
            ("Financial Projections", &self.financial_projections),
            ("Business Registration", &self.business_registration),
            ("Tax ID", &self.tax_id),
        ]
        .into_iter()
        .filter_map(|(label, doc)| doc.as_deref().map(|d| (label, d)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacySettings {
    pub is_public: bool,
    pub show_financials: bool,
    pub allow_direct_messaging: bool,
    #[serde(default)]
    pub restricted_regions: Vec<String>,
}

/// Fields only a startup account carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartupProfile {
    pub startup_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub industry: Vec<String>,
    pub business_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    pub headquarters: String,
    #[serde(default)]
    pub operational_regions: Vec<String>,
    pub year_founded: i32,
    #[serde(default)]
    pub co_founders: Vec<CoFounder>,
    #[serde(default)]
    pub advisors: Vec<Advisor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traction: Option<Traction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<FundingRound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<StartupPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<StartupDocuments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacySettings>,
}

// ── Investor profile ────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TicketSize {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FundedStartup {
    pub name: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub total_investments: u32,
    pub portfolio_size: u64,
    pub successful_exits: u32,
    #[serde(default)]
    pub funded_startups: Vec<FundedStartup>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Platform,
    Video,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DealFlowFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorPreferences {
    pub visibility: Visibility,
    pub allow_messages: bool,
    pub contact_method: ContactMethod,
    pub deal_flow_frequency: DealFlowFrequency,
    #[serde(default)]
    pub syndicate_memberships: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    VeryActive,
    Active,
    Passive,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::Active => "Active",
            ActivityLevel::Passive => "Passive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FounderPreferences {
    pub first_time_founders: bool,
    pub experienced_founders: bool,
    #[serde(default)]
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Verification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accreditation_status: Option<String>,
}

/// Fields only an investor account carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorProfile {
    pub investor_type: String,
    #[serde(default)]
    pub industry: Vec<String>,
    #[serde(default)]
    pub investment_stage: Vec<String>,
    #[serde(default)]
    pub ticket_size: TicketSize,
    #[serde(default)]
    pub deal_type: Vec<String>,
    #[serde(default)]
    pub geographic_preferences: Vec<String>,
    pub risk_appetite: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Portfolio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<InvestorPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder_preferences: Option<FounderPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

// ── User ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartupUser {
    #[serde(flatten)]
    pub account: Account,
    #[serde(flatten)]
    pub profile: StartupProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorUser {
    #[serde(flatten)]
    pub account: Account,
    #[serde(flatten)]
    pub profile: InvestorProfile,
}

/// A platform account. The variant is the role, so the role tag and the
/// populated profile shape can never disagree.
///
/// Serialized with an explicit `"role"` discriminant; this is the format
/// of the persisted session slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Startup(StartupUser),
    Investor(InvestorUser),
}

impl User {
    pub fn role(&self) -> UserRole {
        match self {
            User::Startup(_) => UserRole::Startup,
            User::Investor(_) => UserRole::Investor,
        }
    }

    pub fn account(&self) -> &Account {
        match self {
            User::Startup(u) => &u.account,
            User::Investor(u) => &u.account,
        }
    }

    pub fn account_mut(&mut self) -> &mut Account {
        match self {
            User::Startup(u) => &mut u.account,
            User::Investor(u) => &mut u.account,
        }
    }

    pub fn id(&self) -> &str {
        &self.account().id
    }

    pub fn email(&self) -> &str {
        &self.account().email
    }

    pub fn name(&self) -> &str {
        &self.account().name
    }

    /// Company or fund name shown next to the person's name.
    pub fn organization(&self) -> &str {
        match self {
            User::Startup(u) => &u.profile.startup_name,
            User::Investor(u) => &u.profile.investor_type,
        }
    }

    pub fn industries(&self) -> &[String] {
        match self {
            User::Startup(u) => &u.profile.industry,
            User::Investor(u) => &u.profile.industry,
        }
    }

    /// Up to two uppercase initials of the display name, falling back to
    /// the role letter.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name()
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            self.role().initial().to_string()
        } else {
            initials
        }
    }

    /// Merge a partial update into this user. Common fields always apply;
    /// only the role patch matching this variant is used.
    pub fn apply(&mut self, patch: &UserPatch) {
        let account = self.account_mut();
        if let Some(name) = &patch.name {
            account.name = name.clone();
        }
        if let Some(email) = &patch.email {
            account.email = email.clone();
        }
        if let Some(phone) = &patch.phone_number {
            account.phone_number = phone.clone();
        }
        if let Some(linkedin) = &patch.linkedin_profile {
            account.linkedin_profile = linkedin.clone();
        }

        match self {
            User::Startup(u) => {
                if let Some(p) = &patch.startup {
                    p.apply(&mut u.profile);
                }
            }
            User::Investor(u) => {
                if let Some(p) = &patch.investor {
                    p.apply(&mut u.profile);
                }
            }
        }
    }
}

// ── Partial updates ─────────────────────────────────────

/// Partial user data used by registration and profile updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup: Option<StartupPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor: Option<InvestorPatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StartupPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<i32>,
}

impl StartupPatch {
    fn apply(&self, profile: &mut StartupProfile) {
        if let Some(v) = &self.startup_name {
            profile.startup_name = v.clone();
        }
        if let Some(v) = &self.industry {
            profile.industry = v.clone();
        }
        if let Some(v) = &self.business_model {
            profile.business_model = v.clone();
        }
        if let Some(v) = &self.website {
            profile.website = Some(v.clone());
        }
        if let Some(v) = &self.headquarters {
            profile.headquarters = v.clone();
        }
        if let Some(v) = &self.operational_regions {
            profile.operational_regions = v.clone();
        }
        if let Some(v) = self.year_founded {
            profile.year_founded = v;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InvestorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_stage: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_size: Option<TicketSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographic_preferences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_appetite: Option<String>,
}

impl InvestorPatch {
    fn apply(&self, profile: &mut InvestorProfile) {
        if let Some(v) = &self.investor_type {
            profile.investor_type = v.clone();
        }
        if let Some(v) = &self.industry {
            profile.industry = v.clone();
        }
        if let Some(v) = &self.investment_stage {
            profile.investment_stage = v.clone();
        }
        if let Some(v) = self.ticket_size {
            profile.ticket_size = v;
        }
        if let Some(v) = &self.deal_type {
            profile.deal_type = v.clone();
        }
        if let Some(v) = &self.geographic_preferences {
            profile.geographic_preferences = v.clone();
        }
        if let Some(v) = &self.risk_appetite {
            profile.risk_appetite = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn account(name: &str) -> Account {
        Account {
            id: "startup-9".into(),
            quest_id: "Q-0009".into(),
            name: name.into(),
            email: "founder@example.com".into(),
            phone_number: "+1-555-000-0000".into(),
            linkedin_profile: String::new(),
            level: Level::L1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn startup(name: &str) -> User {
        User::Startup(StartupUser {
            account: account(name),
            profile: StartupProfile {
                startup_name: "Acme".into(),
                logo: None,
                industry: vec!["SaaS".into()],
                business_model: "B2B".into(),
                website: None,
                social_links: None,
                headquarters: "Lisbon".into(),
                operational_regions: vec![],
                year_founded: 2023,
                co_founders: vec![],
                advisors: vec![],
                traction: None,
                funding: None,
                preferences: None,
                documents: None,
                privacy: None,
            },
        })
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(UserRole::parse_role("Startup"), Some(UserRole::Startup));
        assert_eq!(" investor ".parse::<UserRole>(), Ok(UserRole::Investor));
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_prefixes_are_disjoint() {
        assert_eq!(UserRole::Startup.route_prefix(), "/startup");
        assert_eq!(UserRole::Investor.route_prefix(), "/investor");
        assert_eq!(UserRole::Startup.counterpart(), UserRole::Investor);
    }

    #[test]
    fn serialized_user_carries_role_tag() {
        let user = startup("Ada Lovelace");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "startup");
        assert_eq!(value["startup_name"], "Acme");
        assert_eq!(value["quest_id"], "Q-0009");

        let parsed: User = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.role(), UserRole::Startup);
        assert_eq!(parsed, user);
    }

    #[test]
    fn initials_fall_back_to_role_letter() {
        assert_eq!(startup("ada byron lovelace").initials(), "AB");
        assert_eq!(startup("   ").initials(), "S");
    }

    #[test]
    fn patch_keeps_variant_and_ignores_other_role() {
        let mut user = startup("Ada");
        let patch = UserPatch {
            name: Some("Ada L.".into()),
            startup: Some(StartupPatch {
                headquarters: Some("Porto".into()),
                ..Default::default()
            }),
            investor: Some(InvestorPatch {
                risk_appetite: Some("High".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        user.apply(&patch);

        assert_eq!(user.role(), UserRole::Startup);
        assert_eq!(user.name(), "Ada L.");
        match &user {
            User::Startup(u) => assert_eq!(u.profile.headquarters, "Porto"),
            User::Investor(_) => panic!("variant changed"),
        }
    }

    #[test]
    fn funding_progress_is_clamped() {
        let mut round = FundingRound {
            total_raised: 525_000,
            current_round: "Seed".into(),
            target_amount: 1_500_000,
            equity_offered: None,
            use_of_funds: vec![],
            ideal_investor_type: vec![],
        };
        assert_eq!(round.progress_percent(), 35);
        round.total_raised = 9_000_000;
        assert_eq!(round.progress_percent(), 100);
        round.target_amount = 0;
        assert_eq!(round.progress_percent(), 0);
    }
}
