//! The game engine: one owned state record plus the operations on it.
//!
//! Every operation is validated against the current state before any
//! mutation happens, so a transition either applies in full or not at all.
//! `apply` reports the `Rejection`; the named operations (`start`,
//! `pick_category`, ...) log it and carry on, which is what the rendering
//! layer wants: an out-of-guard click is simply dropped.

use tracing::{debug, info};

use crate::auction::AuctionState;
use crate::challenge::{resolve_round, Countdown};
use crate::core::error::{Rejection, Result};
use crate::core::{
    Action, CategoryId, CellKey, GameConfig, GameState, Phase, PowerUp, SelectedCategory, TeamId,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(TeamId),
    /// Tied scores.
    Draw,
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        matches!(self, GameResult::Winner(t) if *t == team)
    }
}

/// In-memory game state machine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    /// Bumped whenever a countdown run starts or ends (challenge start,
    /// resume, pause, finalize, reset). Never reset. A ticker bound to an
    /// older value exits without ticking.
    countdown_epoch: u64,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameEngine {
    /// Create an engine in SETUP.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            countdown_epoch: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state (O(1) for the board collections).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Identifies the current countdown run.
    #[must_use]
    pub fn countdown_epoch(&self) -> u64 {
        self.countdown_epoch
    }

    /// Final standings, once the game reaches FINALE.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state.phase != Phase::Finale {
            return None;
        }
        let first = self.state.team(TeamId::FIRST).score;
        let second = self.state.team(TeamId::SECOND).score;
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(TeamId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(TeamId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    // === Validation ===

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.state.phase != expected {
            return Err(Rejection::wrong_phase(expected, self.state.phase));
        }
        Ok(())
    }

    fn current_auction(&self) -> Result<&AuctionState> {
        self.state.auction.as_ref().ok_or(Rejection::NoAuction)
    }

    fn current_auction_mut(&mut self) -> Result<&mut AuctionState> {
        self.state.auction.as_mut().ok_or(Rejection::NoAuction)
    }

    /// Check an action against the current state without applying it.
    pub fn validate(&self, action: &Action) -> Result<()> {
        let state = &self.state;
        match action {
            Action::Start { .. } => self.expect_phase(Phase::Setup),

            Action::PickCategory(category) => {
                self.expect_phase(Phase::Draft)?;
                if state.selected.len() >= self.config.draft_size() {
                    return Err(Rejection::DraftComplete);
                }
                if self.config.category(*category).is_none() {
                    return Err(Rejection::UnknownCategory(*category));
                }
                if state.is_selected(*category) {
                    return Err(Rejection::CategoryTaken(*category));
                }
                Ok(())
            }

            Action::TogglePowerUp(kind) => {
                self.expect_phase(Phase::Board)?;
                if state.armed == Some(*kind) {
                    return Ok(());
                }
                let team = state.active_team;
                if !state.team(team).inventory.has(*kind) {
                    return Err(Rejection::PowerUpUnavailable { team, kind: *kind });
                }
                Ok(())
            }

            Action::InitiateAuction {
                category,
                points,
                team,
            } => {
                self.expect_phase(Phase::Board)?;
                if *team != state.active_team {
                    return Err(Rejection::NotActiveTeam {
                        team: *team,
                        active: state.active_team,
                    });
                }
                if self.config.category(*category).is_none() {
                    return Err(Rejection::UnknownCategory(*category));
                }
                if !state.is_selected(*category) {
                    return Err(Rejection::CategoryNotDrafted(*category));
                }
                if !self.config.is_point_value(*points) {
                    return Err(Rejection::UnknownPointValue(*points));
                }
                let cell = CellKey::new(*category, *team, *points);
                if state.is_answered(&cell) {
                    return Err(Rejection::CellAnswered(cell));
                }
                Ok(())
            }

            Action::RaiseBid | Action::Withdraw => {
                self.expect_phase(Phase::Auction)?;
                self.current_auction()?.check_open()
            }

            Action::StartChallenge => {
                self.expect_phase(Phase::Auction)?;
                if !self.current_auction()?.is_settled() {
                    return Err(Rejection::WinnerNotSettled);
                }
                Ok(())
            }

            Action::AdjustChallengeScore(_) | Action::Tick => {
                self.expect_phase(Phase::Challenge)?;
                if !state.countdown.active {
                    return Err(Rejection::CountdownInactive);
                }
                Ok(())
            }

            Action::SetCountdownActive(true) => {
                self.expect_phase(Phase::Challenge)?;
                if state.countdown.seconds_remaining == 0 {
                    return Err(Rejection::CountdownExhausted);
                }
                if state.challenge_score >= self.current_auction()?.current_bid {
                    return Err(Rejection::BidReached);
                }
                Ok(())
            }

            Action::SetCountdownActive(false) => {
                self.expect_phase(Phase::Challenge)?;
                if !state.countdown.active {
                    return Err(Rejection::CountdownInactive);
                }
                Ok(())
            }

            Action::FinalizeChallenge => {
                self.expect_phase(Phase::Challenge)?;
                if !self.current_auction()?.is_settled() {
                    return Err(Rejection::WinnerNotSettled);
                }
                Ok(())
            }

            Action::AdjustTeamScore { .. } => self.expect_phase(Phase::Board),

            Action::Reset => Ok(()),
        }
    }

    /// Check if an action would be accepted right now.
    ///
    /// The presentation layer uses this to disable controls.
    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        self.validate(action).is_ok()
    }

    // === Application ===

    /// Validate and apply an action.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        self.validate(&action)?;
        self.execute(action)
    }

    /// Apply an action, dropping it if a guard rejects it.
    fn dispatch(&mut self, action: Action) {
        let name = action.name();
        if let Err(rejection) = self.apply(action) {
            debug!(action = name, phase = %self.state.phase, %rejection, "action rejected");
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if self.state.phase != next {
            info!(from = %self.state.phase, to = %next, "phase transition");
            self.state.phase = next;
        }
    }

    fn execute(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Start { names } => {
                for (team, raw) in TeamId::all().zip(names.iter()) {
                    self.state.teams[team].name = self.config.team_name_or_default(team, raw);
                }
                self.set_phase(Phase::Draft);
            }

            Action::PickCategory(category) => self.pick(category)?,

            Action::TogglePowerUp(kind) => {
                self.state.armed = if self.state.armed == Some(kind) {
                    None
                } else {
                    Some(kind)
                };
            }

            Action::InitiateAuction {
                category,
                points,
                team,
            } => self.open_auction(category, points, team)?,

            Action::RaiseBid => self.current_auction_mut()?.raise_bid()?,

            Action::Withdraw => {
                let winner = self.current_auction_mut()?.withdraw()?;
                debug!(%winner, "auction settled by withdrawal");
            }

            Action::StartChallenge => {
                let base_points = self.current_auction()?.base_points;
                self.state.countdown = Countdown::seeded(self.config.countdown_for(base_points));
                self.state.challenge_score = 0;
                self.countdown_epoch += 1;
                self.set_phase(Phase::Challenge);
            }

            Action::AdjustChallengeScore(delta) => {
                let next = (i64::from(self.state.challenge_score) + i64::from(delta)).max(0);
                self.state.challenge_score = u32::try_from(next).unwrap_or(u32::MAX);
            }

            Action::SetCountdownActive(active) => {
                if active {
                    self.state.countdown.resume()?;
                } else {
                    self.state.countdown.pause()?;
                }
                self.countdown_epoch += 1;
            }

            Action::Tick => {
                self.state.countdown.tick()?;
                debug!(seconds_remaining = self.state.countdown.seconds_remaining, "countdown tick");
            }

            Action::FinalizeChallenge => self.finalize()?,

            Action::AdjustTeamScore { team, delta } => {
                self.state.teams[team].adjust_score(delta);
            }

            Action::Reset => {
                self.state = GameState::new(&self.config);
                self.countdown_epoch += 1;
                info!("game reset");
            }
        }
        Ok(())
    }

    fn pick(&mut self, category: CategoryId) -> Result<()> {
        let category = self
            .config
            .category(category)
            .cloned()
            .ok_or(Rejection::UnknownCategory(category))?;

        let owner = self.state.active_team;
        self.state.selected.push_back(SelectedCategory { category, owner });

        if self.state.selected.len() == self.config.draft_size() {
            self.state.active_team = TeamId::FIRST;
            self.set_phase(Phase::Board);
        } else {
            self.state.active_team = owner.other();
        }
        Ok(())
    }

    fn open_auction(&mut self, category: CategoryId, points: u32, team: TeamId) -> Result<()> {
        let selection = self
            .state
            .selection(category)
            .cloned()
            .ok_or(Rejection::CategoryNotDrafted(category))?;

        let inventory = &mut self.state.teams[team].inventory;
        let power_up: Option<PowerUp> = self.state.armed.take().filter(|&kind| inventory.consume(kind));

        let mission = self.config.mission_for(&selection.category.name);
        let auction = AuctionState::open(
            selection.category,
            points,
            self.config.opening_bid(),
            team,
            selection.owner,
            power_up,
            mission,
        );

        debug!(
            category = %auction.category.name,
            points,
            %team,
            doubled = auction.is_doubled,
            blocked = auction.is_blocked,
            "auction opened"
        );

        self.state.auction = Some(auction);
        self.set_phase(Phase::Auction);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let auction = self.current_auction()?;
        let outcome =
            resolve_round(auction, self.state.challenge_score).ok_or(Rejection::WinnerNotSettled)?;
        let cell = CellKey::new(auction.category.id, self.state.active_team, auction.base_points);

        self.state.teams[outcome.winner].adjust_score(i64::from(outcome.points));
        self.state.answered.insert(cell);
        self.state.active_team = self.state.active_team.other();
        self.state.auction = None;
        self.state.countdown.deactivate();
        self.countdown_epoch += 1;
        self.state.last_outcome = Some(outcome);

        info!(
            winner = %outcome.winner,
            points = outcome.points,
            success = outcome.success,
            answered = self.state.answered_count(),
            "round finalized"
        );

        if self.state.answered_count() >= self.config.finale_threshold() {
            self.set_phase(Phase::Finale);
        } else {
            self.set_phase(Phase::Board);
        }
        Ok(())
    }

    // === Operations ===

    /// Name the teams and open the draft.
    pub fn start(&mut self, names: [&str; 2]) {
        self.dispatch(Action::start(names[0], names[1]));
    }

    pub fn pick_category(&mut self, category: CategoryId) {
        self.dispatch(Action::PickCategory(category));
    }

    /// Arm a power-up for the active team, or disarm it if already armed.
    pub fn toggle_power_up(&mut self, kind: PowerUp) {
        self.dispatch(Action::TogglePowerUp(kind));
    }

    pub fn initiate_auction(&mut self, category: CategoryId, points: u32, team: TeamId) {
        self.dispatch(Action::InitiateAuction {
            category,
            points,
            team,
        });
    }

    pub fn raise_bid(&mut self) {
        self.dispatch(Action::RaiseBid);
    }

    pub fn withdraw(&mut self) {
        self.dispatch(Action::Withdraw);
    }

    pub fn start_challenge(&mut self) {
        self.dispatch(Action::StartChallenge);
    }

    /// Count answers while the countdown runs. Floored at zero.
    pub fn adjust_challenge_score(&mut self, delta: i32) {
        self.dispatch(Action::AdjustChallengeScore(delta));
    }

    pub fn set_countdown_active(&mut self, active: bool) {
        self.dispatch(Action::SetCountdownActive(active));
    }

    /// One second elapsed on the challenge clock.
    pub fn tick(&mut self) {
        self.dispatch(Action::Tick);
    }

    pub fn finalize_challenge(&mut self) {
        self.dispatch(Action::FinalizeChallenge);
    }

    /// Manual score correction during BOARD. Floored at zero.
    pub fn update_team_score(&mut self, team: TeamId, delta: i64) {
        self.dispatch(Action::AdjustTeamScore { team, delta });
    }

    pub fn reset_game(&mut self) {
        self.dispatch(Action::Reset);
    }
}
