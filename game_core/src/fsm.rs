//! Match state machine
//!
//! Drives a match through waiting, play, point resolution and game over.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    WaitingToStart,
    Playing,
    PointScored,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    Scored,
    Continue,
    Win,
    Restart,
}

/// Match finite state machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::WaitingToStart,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; an invalid action leaves the state unchanged
    pub fn transition(&mut self, action: MatchAction) -> bool {
        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            true
        } else {
            false
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::WaitingToStart, MatchAction::Start) => Some(MatchState::Playing),
            (MatchState::Playing, MatchAction::Scored) => Some(MatchState::PointScored),
            (MatchState::PointScored, MatchAction::Continue) => Some(MatchState::Playing),
            (MatchState::PointScored, MatchAction::Win) => Some(MatchState::GameOver),
            (MatchState::GameOver, MatchAction::Restart) => Some(MatchState::WaitingToStart),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to the waiting state
    pub fn reset(&mut self) {
        self.state = MatchState::WaitingToStart;
    }

    /// Check if the simulation should advance
    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    /// Check if the match has been decided
    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.state(), MatchState::WaitingToStart);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::new();
        assert!(fsm.transition(MatchAction::Start));
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.transition(MatchAction::Scored));
        assert_eq!(
            fsm.state(),
            MatchState::WaitingToStart,
            "Invalid action leaves the state unchanged"
        );
    }

    #[test]
    fn test_point_continues_play() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::Scored);
        assert_eq!(fsm.state(), MatchState::PointScored);
        fsm.transition(MatchAction::Continue);
        assert_eq!(fsm.state(), MatchState::Playing);
    }

    #[test]
    fn test_full_match_flow() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::Scored);
        fsm.transition(MatchAction::Win);
        assert!(fsm.is_game_over());
        fsm.transition(MatchAction::Restart);
        assert_eq!(
            fsm.state(),
            MatchState::WaitingToStart,
            "Game over leads back to a fresh match"
        );
    }

    #[test]
    fn test_can_transition() {
        let fsm = MatchFsm::new();
        assert!(fsm.can_transition(MatchAction::Start));
        assert!(!fsm.can_transition(MatchAction::Win));
    }
}
