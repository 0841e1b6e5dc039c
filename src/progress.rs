//! Progress figures derived from a dashboard snapshot.
//!
//! Everything here is a pure function of its inputs. Missing numbers count as
//! zero so a partial snapshot still renders.

use crate::config::DEFAULT_GOAL_AMOUNT;
use crate::error::ConfigurationError;
use crate::models::{DashboardSnapshot, Milestone};

/// A strictly positive, finite goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalAmount(f64);

impl GoalAmount {
    pub fn new(amount: f64) -> Result<Self, ConfigurationError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(GoalAmount(amount))
        } else {
            Err(ConfigurationError::NonPositiveGoal(amount))
        }
    }

    /// Accepts the snapshot's goal, substituting the default when it is absent
    /// or unusable.
    pub fn resolve(amount: Option<f64>) -> Self {
        match amount.map(GoalAmount::new) {
            Some(Ok(goal)) => goal,
            Some(Err(err)) => {
                log::warn!("{}; using default goal {}", err, DEFAULT_GOAL_AMOUNT);
                GoalAmount(DEFAULT_GOAL_AMOUNT)
            }
            None => GoalAmount(DEFAULT_GOAL_AMOUNT),
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    /// Share of the goal reached, clamped to `0..=100`.
    pub percentage: f64,
    /// Goal minus net progress. Negative once the goal is overshot.
    pub remaining: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MilestoneState {
    pub achieved: bool,
    pub percentage: f64,
}

pub fn compute_goal_progress(net_progress: f64, goal: GoalAmount) -> GoalProgress {
    let net_progress = finite_or_zero(net_progress);
    GoalProgress {
        percentage: clamped_percentage(net_progress, goal.value()),
        remaining: goal.value() - net_progress,
    }
}

/// A milestone with a non-positive target is always achieved and shown full.
pub fn compute_milestone_state(net_progress: f64, milestone: &Milestone) -> MilestoneState {
    let net_progress = finite_or_zero(net_progress);
    let target = milestone.target_amount;
    if target.is_nan() || target <= 0.0 {
        return MilestoneState {
            achieved: true,
            percentage: 100.0,
        };
    }
    MilestoneState {
        achieved: net_progress >= target,
        percentage: clamped_percentage(net_progress, target),
    }
}

fn clamped_percentage(current: f64, target: f64) -> f64 {
    (current / target * 100.0).clamp(0.0, 100.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl DashboardSnapshot {
    pub fn net_progress(&self) -> f64 {
        self.net_progress.map(finite_or_zero).unwrap_or(0.0)
    }

    pub fn total_income(&self) -> f64 {
        self.total_income.map(finite_or_zero).unwrap_or(0.0)
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses.map(finite_or_zero).unwrap_or(0.0)
    }

    pub fn goal(&self) -> GoalAmount {
        GoalAmount::resolve(self.goal_amount)
    }

    pub fn goal_progress(&self) -> GoalProgress {
        compute_goal_progress(self.net_progress(), self.goal())
    }

    /// Milestones in snapshot order, each paired with its derived state.
    pub fn milestone_states(&self) -> impl Iterator<Item = (&Milestone, MilestoneState)> + '_ {
        let net_progress = self.net_progress();
        self.milestones
            .iter()
            .map(move |m| (m, compute_milestone_state(net_progress, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(target_amount: f64) -> Milestone {
        Milestone {
            title: "Tuition Secured".to_string(),
            target_amount,
            ..Milestone::default()
        }
    }

    fn goal(amount: f64) -> GoalAmount {
        GoalAmount::new(amount).unwrap()
    }

    #[test]
    fn percentage_stays_within_bounds() {
        for net in [0.0, 1.0, 999.5, 250_000.0, 1_999_999.0, 2_000_000.0, 9e12] {
            for target in [1.0, 100_000.0, 2_000_000.0] {
                let p = compute_goal_progress(net, goal(target)).percentage;
                assert!((0.0..=100.0).contains(&p), "net={net} target={target} p={p}");
            }
        }
    }

    #[test]
    fn nothing_saved_yet() {
        let progress = compute_goal_progress(0.0, goal(2_000_000.0));
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, 2_000_000.0);
    }

    #[test]
    fn goal_reached_exactly() {
        let progress = compute_goal_progress(2_000_000.0, goal(2_000_000.0));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn overshoot_clamps_percentage_but_not_remaining() {
        let progress = compute_goal_progress(3_000_000.0, goal(2_000_000.0));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, -1_000_000.0);
    }

    #[test]
    fn negative_net_progress_shows_empty_bar() {
        let progress = compute_goal_progress(-5_000.0, goal(2_000_000.0));
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, 2_005_000.0);
    }

    #[test]
    fn non_positive_goal_is_a_configuration_error() {
        assert_eq!(
            GoalAmount::new(0.0),
            Err(ConfigurationError::NonPositiveGoal(0.0))
        );
        assert!(GoalAmount::new(-10.0).is_err());
        assert!(GoalAmount::new(f64::NAN).is_err());
    }

    #[test]
    fn unusable_goal_falls_back_to_default() {
        assert_eq!(GoalAmount::resolve(None).value(), 2_000_000.0);
        assert_eq!(GoalAmount::resolve(Some(0.0)).value(), 2_000_000.0);
        assert_eq!(GoalAmount::resolve(Some(-1.0)).value(), 2_000_000.0);
        assert_eq!(GoalAmount::resolve(Some(500_000.0)).value(), 500_000.0);
    }

    #[test]
    fn milestone_achieved_at_threshold() {
        let state = compute_milestone_state(500_000.0, &milestone(500_000.0));
        assert!(state.achieved);
        assert_eq!(state.percentage, 100.0);

        let state = compute_milestone_state(499_999.0, &milestone(500_000.0));
        assert!(!state.achieved);
        assert!(state.percentage < 100.0);
    }

    #[test]
    fn milestone_with_non_positive_target_counts_as_achieved() {
        let state = compute_milestone_state(-20.0, &milestone(0.0));
        assert!(state.achieved);
        assert_eq!(state.percentage, 100.0);
        assert!(compute_milestone_state(0.0, &milestone(-1.0)).achieved);
    }

    #[test]
    fn snapshot_with_small_progress() {
        let snapshot: DashboardSnapshot = serde_json::from_str(
            r#"{"total_income": 10000, "total_expenses": 4000, "net_progress": 6000, "goal_amount": 2000000}"#,
        )
        .unwrap();

        let progress = snapshot.goal_progress();
        assert_eq!(progress.remaining, 1_994_000.0);
        assert!((progress.percentage - 0.3).abs() < 1e-9);
        assert_eq!(snapshot.total_income(), 10_000.0);
        assert_eq!(snapshot.total_expenses(), 4_000.0);
    }

    #[test]
    fn missing_net_progress_counts_as_zero() {
        let snapshot = DashboardSnapshot {
            net_progress: None,
            milestones: vec![milestone(100_000.0), milestone(0.0)],
            ..DashboardSnapshot::default()
        };

        assert_eq!(snapshot.net_progress(), 0.0);
        assert_eq!(snapshot.goal_progress().remaining, 2_000_000.0);

        let states: Vec<MilestoneState> = snapshot.milestone_states().map(|(_, s)| s).collect();
        assert!(!states[0].achieved);
        assert_eq!(states[0].percentage, 0.0);
        assert!(states[1].achieved);
    }
}
