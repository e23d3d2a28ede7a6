//! Static directory data served by the mock backend.
//!
//! Dates that are relative in the product copy ("in two days", "a week
//! ago") are computed from the `now` handed to [`Directory::new`].

use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_types::*;
use std::collections::HashMap;

/// Demo logins advertised on the login page.
pub const DEMO_STARTUP_EMAIL: &str = "startup@example.com";
pub const DEMO_INVESTOR_EMAIL: &str = "investor@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Every fixture collection, built once per backend.
#[derive(Debug, Clone)]
pub struct Directory {
    pub startups: Vec<User>,
    pub investors: Vec<User>,
    /// Keyed by the viewing user's id.
    pub matches: HashMap<String, Vec<Match>>,
    pub meetings: Vec<Meeting>,
    pub deals: Vec<Deal>,
    pub messages: Vec<Message>,
}

impl Directory {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            startups: startups(),
            investors: investors(),
            matches: matches(),
            meetings: meetings(now),
            deals: deals(now),
            messages: messages(now),
        }
    }

    /// Startups are searched before investors.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.startups
            .iter()
            .chain(self.investors.iter())
            .find(|u| u.email() == email)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.startups
            .iter()
            .chain(self.investors.iter())
            .find(|u| u.id() == id)
    }

    /// Name to show for a counterpart: company for startups, person for
    /// investors, falling back to the raw id.
    pub fn display_name(&self, id: &str) -> String {
        match self.find_by_id(id) {
            Some(User::Startup(u)) => u.profile.startup_name.clone(),
            Some(User::Investor(u)) => u.account.name.clone(),
            None => id.to_string(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn account(
    id: &str,
    quest_id: &str,
    name: &str,
    email: &str,
    phone: &str,
    linkedin: &str,
    level: Level,
    created_at: DateTime<Utc>,
) -> Account {
    Account {
        id: id.into(),
        quest_id: quest_id.into(),
        name: name.into(),
        email: email.into(),
        phone_number: phone.into(),
        linkedin_profile: linkedin.into(),
        level,
        created_at,
    }
}

fn co_founder(name: &str, role: &str, linkedin: &str, email: &str) -> CoFounder {
    CoFounder {
        name: name.into(),
        role: role.into(),
        linkedin: linkedin.into(),
        phone_number: None,
        email: Some(email.into()),
    }
}

fn social(handle: &str, facebook_company: bool) -> SocialLinks {
    let facebook = if facebook_company {
        format!("https://facebook.com/company/{handle}")
    } else {
        format!("https://facebook.com/{handle}")
    };
    SocialLinks {
        twitter: Some(format!("https://twitter.com/{handle}")),
        facebook: Some(facebook),
        instagram: None,
        other: None,
    }
}

fn startups() -> Vec<User> {
    vec![
        User::Startup(StartupUser {
            account: account(
                "startup-1",
                "Q-1234",
                "John Doe",
                "john@techinnovate.com",
                "+1-555-123-4567",
                "https://linkedin.com/in/johndoe",
                Level::L2,
                date(2023, 1, 15),
            ),
            profile: StartupProfile {
                startup_name: "TechInnovate".into(),
                logo: Some("/images/logos/techinnovate.png".into()),
                industry: strings(&["Artificial Intelligence", "SaaS"]),
                business_model: "B2B SaaS".into(),
                website: Some("https://techinnovate.com".into()),
                social_links: Some(social("techinnovate", true)),
                headquarters: "San Francisco, USA".into(),
                operational_regions: strings(&["North America", "Europe"]),
                year_founded: 2020,
                co_founders: vec![co_founder(
                    "Jane Smith",
                    "CTO",
                    "https://linkedin.com/in/janesmith",
                    "jane@techinnovate.com",
                )],
                advisors: vec![],
                traction: Some(Traction {
                    revenue_status: Some("$100K-$500K ARR".into()),
                    monthly_active_users: Some(2500),
                    total_paying_customers: Some(50),
                    yoy_growth_rate: Some(120),
                    key_milestones: strings(&[
                        "Product launch",
                        "First enterprise customer",
                        "Series A funding",
                    ]),
                }),
                funding: Some(FundingRound {
                    total_raised: 1_500_000,
                    current_round: "Series A".into(),
                    target_amount: 5_000_000,
                    equity_offered: Some(15),
                    use_of_funds: strings(&["Product development", "Team expansion", "Marketing"]),
                    ideal_investor_type: strings(&[
                        "VC funds",
                        "Angel investors with industry expertise",
                    ]),
                }),
                preferences: Some(StartupPreferences {
                    preferred_investor_region: strings(&["US", "Europe"]),
                    mentorship_needed: strings(&["Sales strategy", "Enterprise scaling"]),
                    industry_connections_needed: strings(&["Enterprise SaaS", "AI"]),
                    open_to_co_investment: true,
                }),
                documents: Some(StartupDocuments {
                    pitch_deck: Some("/documents/techinnovate-deck.pdf".into()),
                    business_plan: Some("/documents/techinnovate-plan.pdf".into()),
                    financial_projections: Some("/documents/techinnovate-financials.xlsx".into()),
                    ..Default::default()
                }),
                privacy: Some(PrivacySettings {
                    is_public: true,
                    show_financials: false,
                    allow_direct_messaging: true,
                    restricted_regions: vec![],
                }),
            },
        }),
        User::Startup(StartupUser {
            account: account(
                "startup-2",
                "Q-5678",
                "Sarah Johnson",
                "sarah@healthwave.com",
                "+1-555-987-6543",
                "https://linkedin.com/in/sarahjohnson",
                Level::L1,
                date(2023, 6, 20),
            ),
            profile: StartupProfile {
                startup_name: "HealthWave".into(),
                logo: Some("/images/logos/healthwave.png".into()),
                industry: strings(&["Health Tech", "Mobile Apps"]),
                business_model: "B2C Subscription".into(),
                website: Some("https://healthwave.com".into()),
                social_links: Some(social("healthwave", false)),
                headquarters: "Boston, USA".into(),
                operational_regions: strings(&["North America"]),
                year_founded: 2022,
                co_founders: vec![co_founder(
                    "Michael Chen",
                    "CTO",
                    "https://linkedin.com/in/michaelchen",
                    "michael@healthwave.com",
                )],
                advisors: vec![],
                traction: Some(Traction {
                    revenue_status: Some("Pre-revenue".into()),
                    monthly_active_users: Some(500),
                    total_paying_customers: Some(0),
                    yoy_growth_rate: None,
                    key_milestones: strings(&["MVP launch", "Closed beta with 500 users"]),
                }),
                funding: Some(FundingRound {
                    total_raised: 250_000,
                    current_round: "Seed".into(),
                    target_amount: 1_000_000,
                    equity_offered: Some(10),
                    use_of_funds: strings(&["Product development", "User acquisition"]),
                    ideal_investor_type: strings(&[
                        "Health tech VCs",
                        "Angel investors with healthcare background",
                    ]),
                }),
                preferences: Some(StartupPreferences {
                    preferred_investor_region: strings(&["US East Coast", "Europe"]),
                    mentorship_needed: strings(&["Marketing", "Healthcare regulations"]),
                    industry_connections_needed: strings(&["Healthcare providers", "Insurance"]),
                    open_to_co_investment: true,
                }),
                documents: Some(StartupDocuments {
                    pitch_deck: Some("/documents/healthwave-deck.pdf".into()),
                    ..Default::default()
                }),
                privacy: Some(PrivacySettings {
                    is_public: false,
                    show_financials: false,
                    allow_direct_messaging: true,
                    restricted_regions: vec![],
                }),
            },
        }),
        User::Startup(StartupUser {
            account: account(
                "startup-3",
                "Q-9012",
                "Carlos Rodriguez",
                "carlos@greenlogistics.com",
                "+34-555-234-5678",
                "https://linkedin.com/in/carlosrodriguez",
                Level::Q,
                date(2022, 4, 10),
            ),
            profile: StartupProfile {
                startup_name: "GreenLogistics".into(),
                logo: Some("/images/logos/greenlogistics.png".into()),
                industry: strings(&["Sustainability", "Supply Chain", "Logistics"]),
                business_model: "B2B Platform".into(),
                website: Some("https://greenlogistics.com".into()),
                social_links: Some(social("greenlogistics", true)),
                headquarters: "Barcelona, Spain".into(),
                operational_regions: strings(&["Europe", "Latin America"]),
                year_founded: 2019,
                co_founders: vec![
                    co_founder(
                        "Elena Vargas",
                        "COO",
                        "https://linkedin.com/in/elenavargas",
                        "elena@greenlogistics.com",
                    ),
                    co_founder(
                        "David Muller",
                        "CTO",
                        "https://linkedin.com/in/davidmuller",
                        "david@greenlogistics.com",
                    ),
                ],
                advisors: vec![],
                traction: Some(Traction {
                    revenue_status: Some("$500K-$1M ARR".into()),
                    monthly_active_users: Some(5000),
                    total_paying_customers: Some(120),
                    yoy_growth_rate: Some(150),
                    key_milestones: strings(&[
                        "Product launch",
                        "100 business customers",
                        "European expansion",
                    ]),
                }),
                funding: Some(FundingRound {
                    total_raised: 3_500_000,
                    current_round: "Series B".into(),
                    target_amount: 10_000_000,
                    equity_offered: Some(12),
                    use_of_funds: strings(&[
                        "International expansion",
                        "Product scaling",
                        "Team growth",
                    ]),
                    ideal_investor_type: strings(&[
                        "Climate tech VCs",
                        "Sustainability-focused investors",
                    ]),
                }),
                preferences: Some(StartupPreferences {
                    preferred_investor_region: strings(&["Europe", "US", "Asia"]),
                    mentorship_needed: vec![],
                    industry_connections_needed: strings(&["Logistics", "Transportation", "Retail"]),
                    open_to_co_investment: true,
                }),
                documents: Some(StartupDocuments {
                    pitch_deck: Some("/documents/greenlogistics-deck.pdf".into()),
                    business_plan: Some("/documents/greenlogistics-plan.pdf".into()),
                    financial_projections: Some(
                        "/documents/greenlogistics-financials.xlsx".into(),
                    ),
                    ..Default::default()
                }),
                privacy: Some(PrivacySettings {
                    is_public: true,
                    show_financials: true,
                    allow_direct_messaging: true,
                    restricted_regions: vec![],
                }),
            },
        }),
        User::Startup(StartupUser {
            account: account(
                "startup-demo",
                "Q-0001",
                "Demo Founder",
                DEMO_STARTUP_EMAIL,
                "+1-555-000-0001",
                "https://linkedin.com/in/demofounder",
                Level::L1,
                date(2024, 2, 1),
            ),
            profile: StartupProfile {
                startup_name: "LaunchPad Labs".into(),
                logo: None,
                industry: strings(&["Fintech", "SaaS"]),
                business_model: "B2B SaaS".into(),
                website: Some("https://launchpadlabs.example.com".into()),
                social_links: None,
                headquarters: "Austin, USA".into(),
                operational_regions: strings(&["North America"]),
                year_founded: 2023,
                co_founders: vec![],
                advisors: vec![Advisor {
                    name: "Priya Natarajan".into(),
                    role: "Go-to-market advisor".into(),
                    linkedin: None,
                }],
                traction: Some(Traction {
                    revenue_status: Some("$0-$100K ARR".into()),
                    monthly_active_users: Some(800),
                    total_paying_customers: Some(12),
                    yoy_growth_rate: None,
                    key_milestones: strings(&["Private beta", "First paying customer"]),
                }),
                funding: Some(FundingRound {
                    total_raised: 525_000,
                    current_round: "Seed".into(),
                    target_amount: 1_500_000,
                    equity_offered: Some(12),
                    use_of_funds: strings(&["Product development", "Sales hires"]),
                    ideal_investor_type: strings(&["Fintech angels", "Seed funds"]),
                }),
                preferences: None,
                documents: Some(StartupDocuments {
                    pitch_deck: Some("/documents/launchpad-deck.pdf".into()),
                    ..Default::default()
                }),
                privacy: Some(PrivacySettings {
                    is_public: true,
                    show_financials: true,
                    allow_direct_messaging: true,
                    restricted_regions: vec![],
                }),
            },
        }),
    ]
}

fn funded(name: &str, industry: &str, amount: u64, when: DateTime<Utc>) -> FundedStartup {
    FundedStartup {
        name: name.into(),
        industry: industry.into(),
        amount: Some(amount),
        date: Some(when),
    }
}

fn investor_preferences(
    visibility: Visibility,
    contact_method: ContactMethod,
    frequency: DealFlowFrequency,
    syndicates: &[&str],
) -> InvestorPreferences {
    InvestorPreferences {
        visibility,
        allow_messages: true,
        contact_method,
        deal_flow_frequency: frequency,
        syndicate_memberships: strings(syndicates),
    }
}

fn verified() -> Option<Verification> {
    Some(Verification {
        government_id: None,
        accreditation_status: Some("Verified".into()),
    })
}

fn investors() -> Vec<User> {
    vec![
        User::Investor(InvestorUser {
            account: account(
                "investor-1",
                "Q-3456",
                "Alex Thompson",
                "alex@innovatecapital.com",
                "+1-555-789-0123",
                "https://linkedin.com/in/alexthompson",
                Level::L2,
                date(2021, 8, 12),
            ),
            profile: InvestorProfile {
                investor_type: "Venture Capital".into(),
                industry: strings(&["Artificial Intelligence", "SaaS", "Fintech"]),
                investment_stage: strings(&["Seed", "Series A", "Series B"]),
                ticket_size: TicketSize {
                    min: 500_000,
                    max: 5_000_000,
                },
                deal_type: strings(&["Equity", "Convertible Notes"]),
                geographic_preferences: strings(&["North America", "Europe"]),
                risk_appetite: "Moderate".into(),
                portfolio: Some(Portfolio {
                    total_investments: 35,
                    portfolio_size: 80_000_000,
                    successful_exits: 7,
                    funded_startups: vec![
                        funded("CloudTech Solutions", "Cloud Infrastructure", 2_500_000, date(2022, 5, 15)),
                        funded("Finnovate", "Fintech", 3_500_000, date(2021, 11, 22)),
                    ],
                }),
                preferences: Some(investor_preferences(
                    Visibility::Public,
                    ContactMethod::Platform,
                    DealFlowFrequency::Weekly,
                    &[],
                )),
                activity_level: Some(ActivityLevel::VeryActive),
                founder_preferences: Some(FounderPreferences {
                    first_time_founders: true,
                    experienced_founders: true,
                    key_factors: strings(&["Team expertise", "Market size", "Traction", "IP"]),
                }),
                verification: verified(),
            },
        }),
        User::Investor(InvestorUser {
            account: account(
                "investor-2",
                "Q-7890",
                "Jennifer Wu",
                "jennifer@emergecapital.com",
                "+1-555-345-6789",
                "https://linkedin.com/in/jenniferwu",
                Level::Q,
                date(2022, 1, 20),
            ),
            profile: InvestorProfile {
                investor_type: "Angel Investor".into(),
                industry: strings(&["Health Tech", "Biotechnology", "Medical Devices"]),
                investment_stage: strings(&["Pre-seed", "Seed"]),
                ticket_size: TicketSize {
                    min: 50_000,
                    max: 500_000,
                },
                deal_type: strings(&["Equity", "SAFE"]),
                geographic_preferences: strings(&["North America", "Asia"]),
                risk_appetite: "High".into(),
                portfolio: Some(Portfolio {
                    total_investments: 18,
                    portfolio_size: 5_000_000,
                    successful_exits: 3,
                    funded_startups: vec![funded(
                        "MediTech Solutions",
                        "Health Tech",
                        250_000,
                        date(2022, 9, 10),
                    )],
                }),
                preferences: Some(investor_preferences(
                    Visibility::Private,
                    ContactMethod::Email,
                    DealFlowFrequency::Daily,
                    &[],
                )),
                activity_level: Some(ActivityLevel::Active),
                founder_preferences: Some(FounderPreferences {
                    first_time_founders: true,
                    experienced_founders: true,
                    key_factors: strings(&["Team background", "Domain expertise", "Novel technology"]),
                }),
                verification: verified(),
            },
        }),
        User::Investor(InvestorUser {
            account: account(
                "investor-3",
                "Q-1357",
                "Robert Keller",
                "robert@sustainfund.com",
                "+49-555-456-7890",
                "https://linkedin.com/in/robertkeller",
                Level::L1,
                date(2021, 11, 5),
            ),
            profile: InvestorProfile {
                investor_type: "Venture Capital".into(),
                industry: strings(&["Clean Energy", "Sustainability", "GreenTech"]),
                investment_stage: strings(&["Series A", "Series B"]),
                ticket_size: TicketSize {
                    min: 2_000_000,
                    max: 10_000_000,
                },
                deal_type: strings(&["Equity"]),
                geographic_preferences: strings(&["Europe", "North America"]),
                risk_appetite: "Moderate".into(),
                portfolio: Some(Portfolio {
                    total_investments: 22,
                    portfolio_size: 150_000_000,
                    successful_exits: 5,
                    funded_startups: vec![
                        funded("SolarTech", "Renewable Energy", 5_000_000, date(2022, 3, 18)),
                        funded("EcoBuilding", "Sustainable Construction", 3_500_000, date(2021, 7, 29)),
                    ],
                }),
                preferences: Some(investor_preferences(
                    Visibility::Public,
                    ContactMethod::Platform,
                    DealFlowFrequency::Weekly,
                    &["CleanTech Alliance", "European Green Investors"],
                )),
                activity_level: Some(ActivityLevel::Active),
                founder_preferences: Some(FounderPreferences {
                    first_time_founders: false,
                    experienced_founders: true,
                    key_factors: strings(&[
                        "Impact metrics",
                        "Tech innovation",
                        "Scalability",
                        "Team track record",
                    ]),
                }),
                verification: verified(),
            },
        }),
        User::Investor(InvestorUser {
            account: account(
                "investor-demo",
                "Q-0002",
                "Demo Investor",
                DEMO_INVESTOR_EMAIL,
                "+1-555-000-0002",
                "https://linkedin.com/in/demoinvestor",
                Level::L1,
                date(2024, 2, 1),
            ),
            profile: InvestorProfile {
                investor_type: "Angel Investor".into(),
                industry: strings(&["Artificial Intelligence", "Sustainability"]),
                investment_stage: strings(&["Seed", "Series A"]),
                ticket_size: TicketSize {
                    min: 100_000,
                    max: 1_000_000,
                },
                deal_type: strings(&["Equity", "SAFE"]),
                geographic_preferences: strings(&["North America", "Europe"]),
                risk_appetite: "Moderate".into(),
                portfolio: Some(Portfolio {
                    total_investments: 6,
                    portfolio_size: 2_400_000,
                    successful_exits: 1,
                    funded_startups: vec![funded(
                        "DataNest",
                        "Data Infrastructure",
                        300_000,
                        date(2023, 4, 12),
                    )],
                }),
                preferences: Some(investor_preferences(
                    Visibility::Public,
                    ContactMethod::Platform,
                    DealFlowFrequency::Weekly,
                    &[],
                )),
                activity_level: Some(ActivityLevel::Active),
                founder_preferences: None,
                verification: None,
            },
        }),
    ]
}

fn found(id: &str, name: &str, score: u8, reasons: &[&str], interest: InterestLevel) -> Match {
    Match {
        counterpart_id: id.into(),
        counterpart_name: name.into(),
        score,
        reasons: strings(reasons),
        interest: Some(interest),
    }
}

fn matches() -> HashMap<String, Vec<Match>> {
    use InterestLevel::*;

    let ai_saas = ["Industry match: AI & SaaS", "Stage match: Series A", "Region match"];
    let health = ["Industry match: Health Tech", "Stage match: Seed", "Region match"];
    let sustain = ["Industry match: Sustainability", "Stage match: Series B", "Region match"];
    let series_a = ["Stage match: Series A", "Region match"];
    let series_b = ["Stage match: Series B", "Region match: Europe"];

    HashMap::from([
        (
            "startup-1".to_string(),
            vec![
                found("investor-1", "Alex Thompson", 87, &ai_saas, High),
                found("investor-3", "Robert Keller", 62, &series_a, Medium),
            ],
        ),
        (
            "startup-2".to_string(),
            vec![found("investor-2", "Jennifer Wu", 91, &health, High)],
        ),
        (
            "startup-3".to_string(),
            vec![
                found("investor-3", "Robert Keller", 95, &sustain, High),
                found("investor-1", "Alex Thompson", 70, &series_b, Medium),
            ],
        ),
        (
            "startup-demo".to_string(),
            vec![
                found("investor-2", "Jennifer Wu", 66, &["Stage match: Seed"], Low),
                found(
                    "investor-1",
                    "Alex Thompson",
                    84,
                    &["Industry match: Fintech & SaaS", "Stage match: Seed", "Region match"],
                    High,
                ),
            ],
        ),
        (
            "investor-1".to_string(),
            vec![
                found("startup-1", "TechInnovate", 87, &ai_saas, High),
                found("startup-3", "GreenLogistics", 70, &series_b, Medium),
            ],
        ),
        (
            "investor-2".to_string(),
            vec![found("startup-2", "HealthWave", 91, &health, High)],
        ),
        (
            "investor-3".to_string(),
            vec![
                found("startup-3", "GreenLogistics", 95, &sustain, High),
                found("startup-1", "TechInnovate", 62, &series_a, Medium),
            ],
        ),
        (
            "investor-demo".to_string(),
            vec![
                found(
                    "startup-3",
                    "GreenLogistics",
                    73,
                    &["Industry match: Sustainability", "Region match: Europe"],
                    Medium,
                ),
                found(
                    "startup-1",
                    "TechInnovate",
                    88,
                    &["Industry match: AI", "Stage match: Series A", "Region match"],
                    High,
                ),
            ],
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn meeting(
    id: &str,
    startup_id: &str,
    investor_id: &str,
    title: &str,
    description: &str,
    date: DateTime<Utc>,
    duration_minutes: u32,
    link: &str,
    status: MeetingStatus,
    notes: Option<&str>,
) -> Meeting {
    Meeting {
        id: id.into(),
        startup_id: startup_id.into(),
        investor_id: investor_id.into(),
        title: title.into(),
        description: Some(description.into()),
        date,
        duration_minutes,
        link: Some(link.into()),
        status,
        notes: notes.map(Into::into),
    }
}

fn meetings(now: DateTime<Utc>) -> Vec<Meeting> {
    vec![
        meeting(
            "meeting-1",
            "startup-1",
            "investor-1",
            "Initial Introduction Call",
            "Discuss TechInnovate's product and investment opportunity",
            now + Duration::days(2),
            45,
            "https://zoom.us/j/123456789",
            MeetingStatus::Scheduled,
            None,
        ),
        meeting(
            "meeting-2",
            "startup-3",
            "investor-3",
            "Series B Investment Discussion",
            "Deep dive into GreenLogistics' growth plans and financial projections",
            now + Duration::days(5),
            60,
            "https://meet.google.com/abc-defg-hij",
            MeetingStatus::Scheduled,
            None,
        ),
        meeting(
            "meeting-3",
            "startup-2",
            "investor-2",
            "Seed Round Follow-up",
            "Follow-up discussion regarding potential seed investment",
            now - Duration::days(3),
            30,
            "https://zoom.us/j/987654321",
            MeetingStatus::Completed,
            Some("Requested additional user metrics and financial projections"),
        ),
        meeting(
            "meeting-4",
            "startup-demo",
            "investor-1",
            "Seed Round Introduction",
            "First look at LaunchPad Labs and its seed round",
            now + Duration::days(1),
            30,
            "https://zoom.us/j/555000111",
            MeetingStatus::Scheduled,
            None,
        ),
        meeting(
            "meeting-5",
            "startup-1",
            "investor-demo",
            "Product Demo",
            "Walkthrough of TechInnovate's enterprise AI platform",
            now + Duration::days(4),
            45,
            "https://meet.google.com/xyz-demo-call",
            MeetingStatus::Scheduled,
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    startup_id: &str,
    investor_id: &str,
    status: DealStatus,
    amount: u64,
    equity: u32,
    notes: &str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Deal {
    Deal {
        id: id.into(),
        startup_id: startup_id.into(),
        investor_id: investor_id.into(),
        status,
        amount: Some(amount),
        equity: Some(equity),
        notes: Some(notes.into()),
        created_at,
        updated_at,
    }
}

fn deals(now: DateTime<Utc>) -> Vec<Deal> {
    let ago = |days| now - Duration::days(days);
    vec![
        deal(
            "deal-1",
            "startup-3",
            "investor-3",
            DealStatus::DueDiligence,
            4_000_000,
            8,
            "Conducting market analysis and team background checks",
            ago(15),
            ago(5),
        ),
        deal(
            "deal-2",
            "startup-1",
            "investor-1",
            DealStatus::Interested,
            2_500_000,
            10,
            "Initial interest shown, awaiting more details",
            ago(7),
            ago(7),
        ),
        deal(
            "deal-3",
            "startup-2",
            "investor-2",
            DealStatus::Committed,
            400_000,
            8,
            "Term sheet signed, finalizing documentation",
            ago(20),
            ago(2),
        ),
        deal(
            "deal-4",
            "startup-demo",
            "investor-1",
            DealStatus::Interested,
            750_000,
            6,
            "Waiting on updated revenue figures",
            ago(4),
            ago(1),
        ),
        deal(
            "deal-5",
            "startup-1",
            "investor-demo",
            DealStatus::DueDiligence,
            500_000,
            2,
            "Reviewing customer contracts",
            ago(10),
            ago(3),
        ),
    ]
}

fn pdf(name: &str, url: &str) -> Attachment {
    Attachment {
        name: name.into(),
        url: url.into(),
        kind: "application/pdf".into(),
    }
}

fn message(
    id: &str,
    sender: &str,
    receiver: &str,
    content: &str,
    timestamp: DateTime<Utc>,
    attachments: Vec<Attachment>,
) -> Message {
    Message {
        id: id.into(),
        sender_id: sender.into(),
        receiver_id: receiver.into(),
        content: content.into(),
        timestamp,
        read: true,
        attachments,
    }
}

fn messages(now: DateTime<Utc>) -> Vec<Message> {
    let days = |d| now - Duration::days(d);
    let mut all = vec![
        message(
            "msg-1",
            "startup-1",
            "investor-1",
            "Thanks for your interest in TechInnovate. I'd be happy to schedule a call to discuss our business model and growth plans.",
            days(5) - Duration::hours(2),
            vec![],
        ),
        message(
            "msg-2",
            "investor-1",
            "startup-1",
            "That sounds great. I'm particularly interested in your AI technology and how you're using it to solve enterprise problems. Could you send over your latest pitch deck before our call?",
            days(5) - Duration::hours(1),
            vec![],
        ),
        message(
            "msg-3",
            "startup-1",
            "investor-1",
            "Absolutely, I've attached our latest pitch deck and a one-pager on our technology. Looking forward to our call!",
            days(5),
            vec![
                pdf("TechInnovate_Pitch_2023.pdf", "/documents/techinnovate-deck.pdf"),
                pdf("TechInnovate_Tech_Overview.pdf", "/documents/techinnovate-tech.pdf"),
            ],
        ),
        message(
            "msg-4",
            "investor-2",
            "startup-2",
            "Hello Sarah, I'm very impressed by what HealthWave is building. Your approach to consumer health tech is quite innovative. Do you have time to chat this week?",
            days(10),
            vec![],
        ),
        message(
            "msg-5",
            "startup-2",
            "investor-2",
            "Hi Jennifer, thanks for reaching out! We're excited about the possibility of working with you. I'm available this Thursday or Friday afternoon for a call.",
            days(9),
            vec![],
        ),
        message(
            "msg-6",
            "investor-2",
            "startup-2",
            "Friday at 2pm PT works for me. I'll send a calendar invite with Zoom details. Could you also share some information about your user growth and engagement metrics?",
            days(9) + Duration::hours(3),
            vec![],
        ),
        message(
            "msg-7",
            "startup-3",
            "investor-3",
            "Hello Robert, I noticed you've shown interest in GreenLogistics. We're preparing for our Series B round and believe there could be great alignment with SustainFund.",
            days(20),
            vec![],
        ),
        message(
            "msg-8",
            "investor-3",
            "startup-3",
            "Carlos, thanks for reaching out. I've been following your progress for some time and am impressed with your expansion across Europe. Let's set up a call to discuss how we could support your next phase of growth.",
            days(19),
            vec![],
        ),
        message(
            "msg-9",
            "startup-3",
            "investor-3",
            "That sounds excellent. I've attached our latest investor presentation and impact report. When would be a good time for that call?",
            days(18),
            vec![
                pdf(
                    "GreenLogistics_Investor_Deck_2023.pdf",
                    "/documents/greenlogistics-deck.pdf",
                ),
                pdf(
                    "GreenLogistics_Impact_Report_2023.pdf",
                    "/documents/greenlogistics-impact.pdf",
                ),
            ],
        ),
        message(
            "msg-10",
            "investor-3",
            "startup-3",
            "Thanks for sharing these materials. I'm available next Monday or Tuesday morning CET. Also, I'd like to introduce you to our sustainability metrics team - they'll have some questions about your carbon reduction calculations.",
            days(17),
            vec![],
        ),
        message(
            "msg-11",
            "investor-1",
            "startup-demo",
            "Hi, your seed deck landed on my desk this morning. Do you have time for a short intro call this week?",
            days(2),
            vec![],
        ),
        message(
            "msg-12",
            "startup-demo",
            "investor-1",
            "Happy to! I've attached the latest deck. Thursday afternoon works for us.",
            days(1),
            vec![pdf("LaunchPad_Seed_Deck.pdf", "/documents/launchpad-deck.pdf")],
        ),
        message(
            "msg-13",
            "startup-1",
            "investor-demo",
            "Thanks for the intro call. Sharing the product overview we discussed.",
            days(3),
            vec![pdf(
                "TechInnovate_Tech_Overview.pdf",
                "/documents/techinnovate-tech.pdf",
            )],
        ),
    ];
    if let Some(last) = all.last_mut() {
        last.read = false;
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_account_has_a_unique_email() {
        let dir = Directory::new(Utc::now());
        let mut emails: Vec<_> = dir
            .startups
            .iter()
            .chain(dir.investors.iter())
            .map(|u| u.email().to_string())
            .collect();
        let total = emails.len();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), total);
    }

    #[test]
    fn collections_hold_only_their_role() {
        let dir = Directory::new(Utc::now());
        assert!(dir.startups.iter().all(|u| u.role() == UserRole::Startup));
        assert!(dir.investors.iter().all(|u| u.role() == UserRole::Investor));
    }

    #[test]
    fn demo_accounts_exist() {
        let dir = Directory::new(Utc::now());
        assert_eq!(
            dir.find_by_email(DEMO_STARTUP_EMAIL).map(User::role),
            Some(UserRole::Startup)
        );
        assert_eq!(
            dir.find_by_email(DEMO_INVESTOR_EMAIL).map(User::role),
            Some(UserRole::Investor)
        );
    }

    #[test]
    fn activity_references_known_accounts() {
        let dir = Directory::new(Utc::now());
        for m in &dir.meetings {
            assert!(dir.find_by_id(&m.startup_id).is_some(), "{}", m.id);
            assert!(dir.find_by_id(&m.investor_id).is_some(), "{}", m.id);
        }
        for msg in &dir.messages {
            assert!(dir.find_by_id(&msg.sender_id).is_some(), "{}", msg.id);
            assert!(dir.find_by_id(&msg.receiver_id).is_some(), "{}", msg.id);
        }
        for (owner, list) in &dir.matches {
            assert!(dir.find_by_id(owner).is_some());
            for m in list {
                assert!(dir.find_by_id(&m.counterpart_id).is_some());
            }
        }
    }

    #[test]
    fn display_name_prefers_company_for_startups() {
        let dir = Directory::new(Utc::now());
        assert_eq!(dir.display_name("startup-2"), "HealthWave");
        assert_eq!(dir.display_name("investor-2"), "Jennifer Wu");
        assert_eq!(dir.display_name("ghost"), "ghost");
    }
}
