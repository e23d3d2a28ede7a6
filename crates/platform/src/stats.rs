use rand::Rng;
use shared_types::{DashboardStats, UserRole};

/// Placeholder snapshot produced on login and rehydration.
pub fn random_stats(role: UserRole, rng: &mut impl Rng) -> DashboardStats {
    DashboardStats {
        total_matches: rng.gen_range(5..=24),
        profile_views: rng.gen_range(10..=109),
        meetings_scheduled: rng.gen_range(0..=9),
        active_deals: rng.gen_range(0..=4),
        ..Default::default()
    }
    .with_role_figures(role)
}

/// Secondary identifier in the `Q-NNNN` family.
pub fn quest_id(rng: &mut impl Rng) -> String {
    format!("Q-{}", rng.gen_range(0..10_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_stats_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let stats = random_stats(UserRole::Investor, &mut rng);
            assert!((5..=24).contains(&stats.total_matches));
            assert!((10..=109).contains(&stats.profile_views));
            assert!(stats.meetings_scheduled <= 9);
            assert!(stats.active_deals <= 4);
            assert_eq!(stats.open_deals, Some(0));
            assert_eq!(stats.funding_progress, None);
        }
    }

    #[test]
    fn quest_ids_have_prefix() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = quest_id(&mut rng);
        let digits = id.strip_prefix("Q-").unwrap();
        assert!(digits.parse::<u32>().unwrap() < 10_000);
    }

    #[test]
    fn back_to_back_snapshots_are_not_all_identical() {
        let first = random_stats(UserRole::Startup, &mut rand::thread_rng());
        let varied = (0..20)
            .map(|_| random_stats(UserRole::Startup, &mut rand::thread_rng()))
            .any(|s| s != first);
        assert!(varied);
    }
}
