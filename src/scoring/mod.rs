//! Transient selection state for the game currently being scored.
//!
//! The selection lives only while the scoring flow is open: it is filled by
//! toggles, read once when the win is committed into the session, and reset.

use crate::domain::{OTHER_CRITERION_ID, PlayerNumber, ScoringCriterion};

#[derive(Debug, Clone, Default)]
pub struct ScoringSelection {
    selected: Vec<ScoringCriterion>,
    winner: Option<PlayerNumber>,
    other_points: u32,
}

impl ScoringSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the criterion if absent, remove it if present. Removing the
    /// wildcard "other" criterion also zeroes its ad-hoc point value.
    pub fn toggle(&mut self, criterion: &ScoringCriterion) {
        if let Some(pos) = self.selected.iter().position(|c| c.id == criterion.id) {
            self.selected.remove(pos);
            if criterion.id == OTHER_CRITERION_ID {
                self.other_points = 0;
            }
        } else {
            self.selected.push(criterion.clone());
        }
    }

    /// Declare the winning player. Validity of the player within the
    /// session is the caller's concern.
    pub fn set_winner(&mut self, winner: PlayerNumber) {
        self.winner = Some(winner);
    }

    pub fn winner(&self) -> Option<PlayerNumber> {
        self.winner
    }

    /// Point value of the "other" criterion. The caller layer coerces
    /// invalid input to 0 before this is reached.
    pub fn set_other_points(&mut self, points: u32) {
        self.other_points = points;
    }

    pub fn other_points(&self) -> u32 {
        self.other_points
    }

    pub fn selected_criteria(&self) -> &[ScoringCriterion] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// Running total, recomputed on every read. The "other" criterion
    /// contributes its ad-hoc value instead of its catalog points, and only
    /// while it is selected.
    pub fn total_points(&self) -> u32 {
        let criteria_points: u32 = self
            .selected
            .iter()
            .filter(|c| c.id != OTHER_CRITERION_ID)
            .map(|c| c.points)
            .sum();

        let other = if self.is_selected(OTHER_CRITERION_ID) {
            self.other_points
        } else {
            0
        };

        criteria_points + other
    }

    /// Back to the initial empty state. Called after a win is committed or
    /// when scoring is abandoned.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: &str, points: u32) -> ScoringCriterion {
        ScoringCriterion {
            id: id.to_string(),
            name: id.to_string(),
            points,
            category: "test".to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = ScoringSelection::new();
        let all_chows = criterion("all-chows", 1);

        selection.toggle(&all_chows);
        assert!(selection.is_selected("all-chows"));

        selection.toggle(&all_chows);
        assert!(!selection.is_selected("all-chows"));
        assert_eq!(selection.total_points(), 0);
    }

    #[test]
    fn test_double_toggle_is_an_involution() {
        let mut selection = ScoringSelection::new();
        let kept = criterion("mixed-one-suit", 3);
        selection.toggle(&kept);

        let toggled = criterion("all-pungs", 3);
        selection.toggle(&toggled);
        selection.toggle(&toggled);

        assert_eq!(selection.selected_criteria().len(), 1);
        assert_eq!(selection.selected_criteria()[0].id, "mixed-one-suit");
        assert_eq!(selection.total_points(), 3);
    }

    #[test]
    fn test_double_toggle_of_other_is_not_a_pure_involution() {
        // Removing "other" clears its ad-hoc value, so toggling it twice
        // does NOT restore other_points. That asymmetry is intended.
        let mut selection = ScoringSelection::new();
        let other = criterion(OTHER_CRITERION_ID, 0);

        selection.toggle(&other);
        selection.set_other_points(7);
        assert_eq!(selection.total_points(), 7);

        selection.toggle(&other);
        assert_eq!(selection.other_points(), 0);

        selection.toggle(&other);
        assert_eq!(selection.other_points(), 0);
        assert_eq!(selection.total_points(), 0);
    }

    #[test]
    fn test_total_combines_catalog_and_other_points() {
        let mut selection = ScoringSelection::new();
        selection.toggle(&criterion("a", 3));
        selection.toggle(&criterion("b", 5));
        selection.toggle(&criterion(OTHER_CRITERION_ID, 0));
        selection.set_other_points(7);

        assert_eq!(selection.total_points(), 15);
    }

    #[test]
    fn test_other_points_ignored_while_other_not_selected() {
        let mut selection = ScoringSelection::new();
        selection.toggle(&criterion("a", 3));
        selection.set_other_points(9);

        assert_eq!(selection.total_points(), 3);
    }

    #[test]
    fn test_total_is_recomputed_not_cached() {
        let mut selection = ScoringSelection::new();
        let other = criterion(OTHER_CRITERION_ID, 0);
        selection.toggle(&other);
        selection.set_other_points(4);
        assert_eq!(selection.total_points(), 4);

        selection.set_other_points(6);
        assert_eq!(selection.total_points(), 6);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut selection = ScoringSelection::new();
        selection.toggle(&criterion("a", 3));
        selection.set_winner(PlayerNumber::One);
        selection.set_other_points(2);

        selection.reset();

        assert!(selection.selected_criteria().is_empty());
        assert_eq!(selection.winner(), None);
        assert_eq!(selection.other_points(), 0);
        assert_eq!(selection.total_points(), 0);
    }
}
