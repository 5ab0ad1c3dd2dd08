use crate::r#match::engine::ball::events::{BallPhase, BallTouch};

/// The incoming ball threaded through one rally.
///
/// Resolvers take it by value and hand it back, so exactly one touch owns it at a time.
/// Once `in_play` turns false the rally is over and no further touch is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RallyState {
    pub speed: u32,
    pub in_play: bool,
    pub phase: BallPhase,
    pub player_id: u32,
    history: Vec<BallTouch>,
}

impl RallyState {
    pub(crate) fn new(server_id: u32) -> Self {
        RallyState {
            speed: 0,
            in_play: true,
            phase: BallPhase::Serve,
            player_id: server_id,
            history: Vec::with_capacity(16),
        }
    }

    pub(crate) fn touch(&mut self, player_id: u32, phase: BallPhase, speed: u32, in_play: bool) {
        debug_assert!(self.in_play, "touch recorded on a dead ball");

        self.player_id = player_id;
        self.phase = phase;
        self.speed = speed;
        self.in_play = in_play;

        self.history.push(BallTouch {
            speed,
            in_play,
            phase,
            player_id,
        });
    }

    pub fn is_dead(&self) -> bool {
        !self.in_play
    }

    pub fn touches(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[BallTouch] {
        &self.history
    }

    pub fn into_history(self) -> Vec<BallTouch> {
        self.history
    }

    /// Ends a rally that ran past the touch cap; the last touch is recorded as dead.
    pub(crate) fn kill(&mut self) {
        self.in_play = false;
        if let Some(last) = self.history.last_mut() {
            last.in_play = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_appends_snapshot() {
        let mut ball = RallyState::new(1);
        ball.touch(1, BallPhase::Serve, 44, true);
        ball.touch(2, BallPhase::Pass, 3, true);

        assert_eq!(ball.touches(), 2);
        assert_eq!(
            ball.history()[1],
            BallTouch {
                speed: 3,
                in_play: true,
                phase: BallPhase::Pass,
                player_id: 2
            }
        );
        assert_eq!(ball.player_id, 2);
    }

    #[test]
    fn test_kill_marks_last_touch_dead() {
        let mut ball = RallyState::new(1);
        ball.touch(1, BallPhase::Serve, 44, true);
        ball.kill();

        assert!(ball.is_dead());
        assert!(!ball.history()[0].in_play);
    }
}
