//! # Gamification presentation helpers
//!
//! The server computes experience, levels, and credits. This module only
//! turns those numbers into what the badge shows:
//!
//! - [`honorific_title`]: the title for a level, by descending threshold.
//! - [`experience_percentage`] / [`remaining_experience`]: the XP bar.
//! - [`detect_progress`]: edge detection over two successive status
//!   snapshots, so "did the user just level up / earn a credit" does not
//!   depend on any UI framework's diffing.

use crate::models::GamificationStatus;

/// Title shown when the level is below every threshold.
pub const NO_TITLE: &str = "Sem título";

/// Level thresholds and their titles, ascending.
const HONORIFIC_TITLES: &[(i64, &str)] = &[
    (1, "Iniciante Nutricional"),
    (5, "Explorador de Sabores"),
    (10, "Conquistador da Saúde"),
    (20, "Mestre da Nutrição"),
    (30, "Guru do Bem-Estar"),
    (40, "Sábio da Alimentação"),
    (50, "Mestre dos Alimentos"),
];

/// Title of the greatest threshold not above `level`.
pub fn honorific_title(level: i64) -> &'static str {
    HONORIFIC_TITLES
        .iter()
        .rev()
        .find(|(threshold, _)| level >= *threshold)
        .map(|(_, title)| *title)
        .unwrap_or(NO_TITLE)
}

/// Progress toward the next level, 0..=100.
pub fn experience_percentage(status: &GamificationStatus) -> f64 {
    if status.total_experience_for_next_level <= 0.0 {
        return 0.0;
    }
    (status.experience / status.total_experience_for_next_level * 100.0).clamp(0.0, 100.0)
}

/// Whole XP points still missing for the next level.
pub fn remaining_experience(status: &GamificationStatus) -> i64 {
    let missing = status.total_experience_for_next_level - status.experience.floor();
    missing.max(0.0) as i64
}

/// What changed between two status snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub leveled_up: bool,
    pub credits_gained: u32,
}

impl Progress {
    pub fn earned_credit(&self) -> bool {
        self.credits_gained > 0
    }

    pub fn is_empty(&self) -> bool {
        !self.leveled_up && !self.earned_credit()
    }
}

/// Compare the previously seen status with the current one.
///
/// The first snapshot (`previous == None`) never fires: loading the page is
/// not a level-up. Decreases (credits spent on recipes) are not events.
pub fn detect_progress(
    previous: Option<&GamificationStatus>,
    current: &GamificationStatus,
) -> Progress {
    let Some(previous) = previous else {
        return Progress::default();
    };

    Progress {
        leveled_up: current.level > previous.level,
        credits_gained: current.credits_earned.saturating_sub(previous.credits_earned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(level: i64, credits: u32, experience: f64, next: f64) -> GamificationStatus {
        GamificationStatus {
            experience,
            level,
            total_experience_for_next_level: next,
            title: honorific_title(level).to_string(),
            credits_earned: credits,
        }
    }

    #[test]
    fn test_titles_follow_thresholds() {
        assert_eq!(honorific_title(0), "Sem título");
        assert_eq!(honorific_title(-3), "Sem título");
        assert_eq!(honorific_title(1), "Iniciante Nutricional");
        assert_eq!(honorific_title(4), "Iniciante Nutricional");
        assert_eq!(honorific_title(5), "Explorador de Sabores");
        assert_eq!(honorific_title(9), "Explorador de Sabores");
        assert_eq!(honorific_title(10), "Conquistador da Saúde");
        assert_eq!(honorific_title(29), "Mestre da Nutrição");
        assert_eq!(honorific_title(30), "Guru do Bem-Estar");
        assert_eq!(honorific_title(45), "Sábio da Alimentação");
        assert_eq!(honorific_title(50), "Mestre dos Alimentos");
        assert_eq!(honorific_title(1000), "Mestre dos Alimentos");
    }

    #[test]
    fn test_first_snapshot_fires_nothing() {
        let current = status(7, 3, 10.0, 100.0);
        assert!(detect_progress(None, &current).is_empty());
    }

    #[test]
    fn test_level_up_and_credit_detected() {
        let before = status(4, 0, 95.0, 100.0);
        let after = status(5, 1, 2.0, 150.0);

        let progress = detect_progress(Some(&before), &after);
        assert!(progress.leveled_up);
        assert!(progress.earned_credit());
        assert_eq!(progress.credits_gained, 1);
    }

    #[test]
    fn test_spending_credits_is_not_an_event() {
        let before = status(5, 2, 10.0, 150.0);
        let after = status(5, 1, 10.0, 150.0);

        let progress = detect_progress(Some(&before), &after);
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn test_same_snapshot_is_quiet() {
        let snapshot = status(3, 1, 50.0, 100.0);
        assert!(detect_progress(Some(&snapshot), &snapshot).is_empty());
    }

    #[test]
    fn test_experience_bar() {
        assert_eq!(experience_percentage(&status(1, 0, 25.0, 100.0)), 25.0);
        assert_eq!(experience_percentage(&status(1, 0, 25.0, 0.0)), 0.0);
        assert_eq!(experience_percentage(&status(1, 0, 150.0, 100.0)), 100.0);

        assert_eq!(remaining_experience(&status(1, 0, 25.9, 100.0)), 75);
        assert_eq!(remaining_experience(&status(1, 0, 120.0, 100.0)), 0);
    }
}
