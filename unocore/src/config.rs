use crate::constants::INITIAL_HAND_SIZE;

/// What happens after a player draws because they could not, or would not,
/// play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPolicy {
    /// One card is drawn and the turn ends.
    DrawThenPass,
    /// The player is asked for a move again after every draw.
    DrawThenRetry,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Seeds every random decision of the game when set.
    pub seed: Option<u64>,
    pub hand_size: usize,
    pub interactive_draw_policy: DrawPolicy,
    pub automated_draw_policy: DrawPolicy,
    pub shuffle_on_refill: bool,
    /// Verify after every turn that no card was lost or duplicated.
    pub check_invariants: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: INITIAL_HAND_SIZE,
            interactive_draw_policy: DrawPolicy::DrawThenRetry,
            automated_draw_policy: DrawPolicy::DrawThenPass,
            shuffle_on_refill: true,
            check_invariants: true,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_interactive_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.interactive_draw_policy = policy;
        self
    }

    pub fn with_automated_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.automated_draw_policy = policy;
        self
    }

    pub fn with_shuffle_on_refill(mut self, shuffle: bool) -> Self {
        self.shuffle_on_refill = shuffle;
        self
    }

    pub fn with_invariant_checks(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }

    pub(crate) fn draw_policy_for(&self, interactive: bool) -> DrawPolicy {
        if interactive {
            self.interactive_draw_policy
        } else {
            self.automated_draw_policy
        }
    }
}
