//! The rules engine: one game session.
//!
//! `Game` owns the board and both players, enforces turn order, applies
//! moves and walls, and detects wins. Every operation is total: the `bool`
//! API never panics and never changes state on failure, the `try_*` API
//! returns the precise [`RulesError`].
//!
//! ## Turn flow
//!
//! - Successful move: position updated, history appended, then either
//!   `Won` (turn stays with the winner) or the turn passes.
//! - Successful wall: wall added, budget spent, observer notified, turn
//!   passes.
//! - Rejected action: nothing changes.

use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use crate::ai::{AiStrategy, Decision};
use crate::core::{
    Action, ConfigError, Coord, GameConfig, GameState, GameView, GridBoard, MoveRecord,
    Orientation, PlayerKind, PlayerMap, PlayerState, RulesError, Wall, WallError,
};

use super::observer::{GameObserver, NoopObserver};

/// A game session.
pub struct Game {
    config: GameConfig,
    board: GridBoard,
    players: PlayerMap<PlayerState>,
    current: PlayerKind,
    state: GameState,
    winner: Option<PlayerKind>,
    history: Vec<MoveRecord>,
    ply: u32,
    ai: AiStrategy,
    last_decision: Option<Decision>,
    observer: Box<dyn GameObserver>,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_valid_config(GameConfig::default())
    }
}

impl Game {
    /// Create a game in its starting position.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GameConfig) -> Self {
        let players = initial_players(&config);
        Self {
            board: GridBoard::new(config.board_size),
            players,
            current: config.first_player,
            state: GameState::Playing,
            winner: None,
            history: Vec::new(),
            ply: 0,
            ai: AiStrategy::default(),
            last_decision: None,
            observer: Box::new(NoopObserver),
            config,
        }
    }

    /// Assemble a game from pre-validated parts. Used by [`GameBuilder`](super::GameBuilder).
    pub(crate) fn from_parts(
        config: GameConfig,
        board: GridBoard,
        players: PlayerMap<PlayerState>,
        current: PlayerKind,
    ) -> Self {
        let mut game = Self::with_valid_config(config);
        game.board = board;
        game.players = players;
        game.current = current;
        game
    }

    /// Attach an observer, replacing the current one.
    #[must_use]
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Replace the observer in place.
    pub fn set_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observer = Box::new(observer);
    }

    /// Use a custom AI strategy for [`make_ai_move`](Self::make_ai_move).
    #[must_use]
    pub fn with_ai(mut self, ai: AiStrategy) -> Self {
        self.ai = ai;
        self
    }

    /// Reset to a fresh game with the same configuration.
    ///
    /// Observer and AI strategy are kept.
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self) {
        self.board = GridBoard::new(self.config.board_size);
        self.players = initial_players(&self.config);
        self.current = self.config.first_player;
        self.state = GameState::Playing;
        self.winner = None;
        self.history.clear();
        self.ply = 0;
        self.last_decision = None;
        info!(first = %self.current, "game started");
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, kind: PlayerKind) -> &PlayerState {
        &self.players[kind]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerKind {
        self.current
    }

    /// Progression state.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// True once a player has won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    /// The winner, once there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerKind> {
        self.winner
    }

    /// Completed pawn moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of accepted actions so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The AI's most recent decision, with its score and statistics.
    #[must_use]
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Read-only view for policies and UI code.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.board, &self.players, self.current, self.state)
    }

    /// Moves a player needs to reach their goal row, ignoring pawns.
    #[must_use]
    pub fn distance_to_goal(&self, kind: PlayerKind) -> Option<u32> {
        let player = &self.players[kind];
        self.board
            .shortest_path(player.position(), player.goal_row())
            .map(|p| p.distance())
    }

    /// Legal destinations for a player, ignoring turn order.
    #[must_use]
    pub fn legal_moves(&self, kind: PlayerKind) -> SmallVec<[Coord; 4]> {
        self.view().legal_moves(kind)
    }

    // === Probes ===

    /// Would the current player's move to `(x, y)` be accepted?
    #[must_use]
    pub fn is_valid_move(&self, x: i32, y: i32) -> bool {
        !self.state.is_over() && self.view().check_move(self.current, Coord::new(x, y)).is_ok()
    }

    /// Would the current player's wall at `(x, y, orientation)` be accepted?
    ///
    /// Unlike [`GridBoard::is_valid_wall_placement`], this also checks the
    /// wall budget and the reachability rule.
    #[must_use]
    pub fn can_place_wall(&self, x: i32, y: i32, orientation: Orientation) -> bool {
        !self.state.is_over() && self.check_wall(self.current, Wall::new(x, y, orientation)).is_ok()
    }

    /// Full wall legality for `player`, ignoring turn order.
    pub fn check_wall(&self, player: PlayerKind, wall: Wall) -> Result<(), WallError> {
        if !self.players[player].has_walls_left() {
            return Err(WallError::NoWallsLeft);
        }
        self.board.check_wall_placement(wall)?;
        if self.config.enforce_reachability && !self.view().wall_keeps_routes(wall) {
            return Err(WallError::BlocksPath);
        }
        Ok(())
    }

    // === Moves ===

    /// Move the current player to `(x, y)`. `false` if illegal.
    pub fn make_move(&mut self, x: i32, y: i32) -> bool {
        self.try_make_move(x, y).is_ok()
    }

    /// Move the current player to `(x, y)`.
    pub fn try_make_move(&mut self, x: i32, y: i32) -> Result<(), RulesError> {
        self.make_move_as(self.current, Coord::new(x, y))
    }

    /// Move `player` to `to`, rejecting the move if it is not their turn.
    #[instrument(level = "debug", skip(self))]
    pub fn make_move_as(&mut self, player: PlayerKind, to: Coord) -> Result<(), RulesError> {
        self.ensure_turn(player)?;
        if let Err(err) = self.view().check_move(player, to) {
            debug!(%err, "move rejected");
            return Err(err.into());
        }

        let from = self.players[player].position();
        self.players[player].set_position(to);
        self.ply += 1;
        self.history.push(MoveRecord::now(player, to, self.ply));
        self.observer.pawn_moved(player, from, to);
        debug!(%from, "move accepted");

        if self.players[player].has_reached_goal() {
            self.state = GameState::Won;
            self.winner = Some(player);
            info!(winner = %player, ply = self.ply, "game won");
            self.observer.game_won(player);
        } else {
            self.switch_turn();
        }
        Ok(())
    }

    // === Walls ===

    /// Place a wall for the current player. `false` if illegal.
    pub fn place_wall(&mut self, x: i32, y: i32, orientation: Orientation) -> bool {
        self.try_place_wall(Wall::new(x, y, orientation)).is_ok()
    }

    /// Place a wall for the current player.
    pub fn try_place_wall(&mut self, wall: Wall) -> Result<(), RulesError> {
        self.place_wall_as(self.current, wall)
    }

    /// Place a wall for `player`, rejecting it if it is not their turn.
    #[instrument(level = "debug", skip(self))]
    pub fn place_wall_as(&mut self, player: PlayerKind, wall: Wall) -> Result<(), RulesError> {
        self.ensure_turn(player)?;
        if let Err(err) = self.check_wall(player, wall) {
            debug!(%err, "wall rejected");
            return Err(err.into());
        }

        self.board.add_wall(wall)?;
        self.players[player].use_wall();
        self.ply += 1;
        debug!(
            remaining = self.players[player].walls_remaining(),
            "wall accepted"
        );
        self.observer.wall_placed(player, wall);
        self.switch_turn();
        Ok(())
    }

    // === Actions ===

    /// Apply an action for the current player.
    pub fn apply_action(&mut self, action: &Action) -> Result<(), RulesError> {
        self.apply_action_as(self.current, action)
    }

    /// Apply an action for `player`.
    pub fn apply_action_as(&mut self, player: PlayerKind, action: &Action) -> Result<(), RulesError> {
        match *action {
            Action::Move { to } => self.make_move_as(player, to),
            Action::PlaceWall(wall) => self.place_wall_as(player, wall),
            Action::Stay => self.pass_as(player),
        }
    }

    /// Pass the turn. Only allowed when `player` has no legal move.
    #[instrument(level = "debug", skip(self))]
    pub fn pass_as(&mut self, player: PlayerKind) -> Result<(), RulesError> {
        self.ensure_turn(player)?;
        if !self.legal_moves(player).is_empty() {
            return Err(RulesError::CannotPass);
        }
        self.ply += 1;
        debug!("turn passed");
        self.switch_turn();
        Ok(())
    }

    /// Run one AI decision and apply it.
    ///
    /// Returns `false` without doing anything if it is not the AI's turn or
    /// the game is over.
    pub fn make_ai_move(&mut self) -> bool {
        if self.state.is_over() || self.current != PlayerKind::Ai {
            debug!(current = %self.current, "AI move requested out of turn");
            return false;
        }

        let view = GameView::new(&self.board, &self.players, self.current, self.state);
        let decision = self.ai.decide(&view, PlayerKind::Ai);
        let action = decision.action;
        self.last_decision = Some(decision);

        match self.apply_action_as(PlayerKind::Ai, &action) {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, %action, "AI chose an illegal action");
                false
            }
        }
    }

    // === Internals ===

    fn ensure_turn(&self, player: PlayerKind) -> Result<(), RulesError> {
        if self.state.is_over() {
            return Err(RulesError::GameOver);
        }
        if player != self.current {
            return Err(RulesError::MisorderedAction {
                expected: self.current,
                actual: player,
            });
        }
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("state", &self.state)
            .field("ply", &self.ply)
            .finish_non_exhaustive()
    }
}

fn initial_players(config: &GameConfig) -> PlayerMap<PlayerState> {
    PlayerMap::new(|kind| {
        PlayerState::new(
            kind,
            config.start_position(kind),
            config.walls_per_player,
            config.goal_row(kind),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveError;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::default();

        assert_eq!(game.current_player(), PlayerKind::Human);
        assert_eq!(game.game_state(), GameState::Playing);
        assert_eq!(game.player(PlayerKind::Human).position(), Coord::new(4, 8));
        assert_eq!(game.player(PlayerKind::Ai).position(), Coord::new(4, 0));
        assert_eq!(game.player(PlayerKind::Ai).walls_remaining(), 10);
        assert_eq!(game.distance_to_goal(PlayerKind::Human), Some(8));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_board_size(1);
        assert!(matches!(Game::new(config), Err(ConfigError::BoardSize(1))));
    }

    #[test]
    fn test_move_switches_turn() {
        let mut game = Game::default();

        assert!(game.make_move(4, 7));
        assert_eq!(game.player(PlayerKind::Human).position(), Coord::new(4, 7));
        assert_eq!(game.current_player(), PlayerKind::Ai);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].position, Coord::new(4, 7));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::default();

        assert_eq!(
            game.try_make_move(4, 6),
            Err(RulesError::IllegalMove(MoveError::NotAdjacent))
        );
        assert_eq!(
            game.try_make_move(4, 9),
            Err(RulesError::IllegalMove(MoveError::OutOfBounds))
        );
        assert_eq!(game.current_player(), PlayerKind::Human);
        assert_eq!(game.player(PlayerKind::Human).position(), Coord::new(4, 8));
        assert!(game.history().is_empty());
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_misordered_action() {
        let mut game = Game::default();

        let result = game.make_move_as(PlayerKind::Ai, Coord::new(4, 1));
        assert_eq!(
            result,
            Err(RulesError::MisorderedAction {
                expected: PlayerKind::Human,
                actual: PlayerKind::Ai,
            })
        );
        assert_eq!(game.player(PlayerKind::Ai).position(), Coord::new(4, 0));
    }

    #[test]
    fn test_wall_spends_budget_and_switches_turn() {
        let mut game = Game::default();

        assert!(game.place_wall(4, 4, Orientation::Horizontal));
        assert!(game.board().has_wall(Wall::horizontal(4, 4)));
        assert_eq!(game.player(PlayerKind::Human).walls_remaining(), 9);
        assert_eq!(game.current_player(), PlayerKind::Ai);
    }

    #[test]
    fn test_vertical_wall_at_column_zero_rejected() {
        let mut game = Game::default();

        assert!(!game.place_wall(0, 0, Orientation::Vertical));
        assert_eq!(game.board().wall_count(), 0);
        assert_eq!(game.player(PlayerKind::Human).walls_remaining(), 10);
        assert_eq!(game.player(PlayerKind::Ai).walls_remaining(), 10);
        assert_eq!(game.current_player(), PlayerKind::Human);
    }

    #[test]
    fn test_pass_only_without_moves() {
        let mut game = Game::default();
        assert_eq!(game.pass_as(PlayerKind::Human), Err(RulesError::CannotPass));
        assert_eq!(game.current_player(), PlayerKind::Human);
    }

    #[test]
    fn test_ai_move_out_of_turn_is_noop() {
        let mut game = Game::default();
        assert!(!game.make_ai_move());
        assert_eq!(game.ply(), 0);
        assert!(game.last_decision().is_none());
    }

    #[test]
    fn test_ai_move_applies_decision() {
        let mut game = Game::default();
        assert!(game.make_move(4, 7));
        assert!(game.make_ai_move());

        assert_eq!(game.current_player(), PlayerKind::Human);
        assert_eq!(game.player(PlayerKind::Ai).position(), Coord::new(4, 1));
        assert!(game.last_decision().is_some());
    }

    #[test]
    fn test_start_resets_everything() {
        let mut game = Game::default();
        assert!(game.place_wall(2, 2, Orientation::Vertical));
        assert!(game.make_ai_move());

        game.start();

        assert_eq!(game.board().wall_count(), 0);
        assert_eq!(game.player(PlayerKind::Human).walls_remaining(), 10);
        assert_eq!(game.player(PlayerKind::Ai).position(), Coord::new(4, 0));
        assert_eq!(game.current_player(), PlayerKind::Human);
        assert_eq!(game.ply(), 0);
        assert!(game.history().is_empty());
    }
}
