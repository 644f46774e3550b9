//! Game state management for the Gomoku GUI

use crate::config::{Difficulty, GameConfig};
use crate::rules::find_five_line;
use crate::{AIEngine, Board, MoveResult, Pos, Stone};
use log::{error, info};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the board
    TwoPlayer,
    /// Human against the AI
    VsAi { difficulty: Difficulty },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi {
            difficulty: Difficulty::Normal,
        }
    }
}

impl GameMode {
    /// Modes offered by the main menu, in display order
    pub fn menu() -> Vec<GameMode> {
        std::iter::once(GameMode::TwoPlayer)
            .chain(
                Difficulty::MENU
                    .into_iter()
                    .map(|difficulty| GameMode::VsAi { difficulty }),
            )
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            GameMode::TwoPlayer => "2 Player".to_string(),
            GameMode::VsAi { difficulty } => format!("AI ({})", difficulty),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Five or more in a row through the last stone
    Win { winner: Stone, line: Vec<Pos> },
    /// Board full without a five
    Draw,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_count: usize,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    config: GameConfig,
}

impl GameState {
    /// Start a game. `config` must already be validated.
    pub fn new(mode: GameMode, config: GameConfig) -> Self {
        let config = Self::config_for(mode, config);
        Self {
            board: Board::new(config.board_size),
            mode,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
        }
    }

    fn config_for(mode: GameMode, config: GameConfig) -> GameConfig {
        match mode {
            GameMode::VsAi { difficulty } => GameConfig {
                difficulty,
                ..config
            },
            GameMode::TwoPlayer => config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clear the board and start over in the same mode.
    ///
    /// A search still running is abandoned; its result is dropped with
    /// the receiver.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.move_count = 0;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        info!("new game: {}", self.mode.label());
    }

    /// Switch mode and start a fresh game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.config = Self::config_for(mode, self.config);
        self.reset();
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { .. } => self.current_turn == self.config.human_stone(),
            GameMode::TwoPlayer => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { .. } => self.current_turn == self.config.ai_stone,
            GameMode::TwoPlayer => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Winning stones, if the game was won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Some(GameOutcome::Win { line, .. }) => Some(line.as_slice()),
            _ => None,
        }
    }

    /// Attempt to place a stone for the human to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.board.is_valid_move(i32::from(pos.x), i32::from(pos.y)) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        if !self.board.play(pos, color) {
            self.message = Some(format!("Illegal move {}", pos));
            return;
        }

        self.move_count += 1;
        self.last_move = Some(pos);
        self.message = None;

        if let Some(line) = find_five_line(&self.board, pos, color) {
            info!("{} wins with {} after {} moves", color.name(), pos, self.move_count);
            self.outcome = Some(GameOutcome::Win {
                winner: color,
                line,
            });
            return;
        }

        if self.board.is_full() {
            info!("draw after {} moves", self.move_count);
            self.outcome = Some(GameOutcome::Draw);
            return;
        }

        self.current_turn = color.opponent();
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let mut board = self.board.clone();
        let engine_config = self.config.engine();

        let (tx, rx) = channel();

        thread::spawn(move || match AIEngine::new(engine_config) {
            Ok(mut engine) => {
                let result = engine.select_move_with_stats(&mut board);
                let _ = tx.send(result);
            }
            Err(err) => error!("cannot start AI: {}", err),
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI move once the worker has answered
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => self.execute_move(pos),
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(size: usize) -> GameConfig {
        GameConfig {
            board_size: size,
            seed: Some(3),
            ..GameConfig::default()
        }
    }

    /// Poll the worker until the AI has moved
    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("AI did not answer");
    }

    #[test]
    fn test_menu_modes() {
        let labels: Vec<String> = GameMode::menu().iter().map(GameMode::label).collect();
        assert_eq!(
            labels,
            ["2 Player", "AI (Easy)", "AI (Normal)", "AI (Hard)"]
        );
    }

    #[test]
    fn test_two_player_turns_alternate() {
        let mut state = GameState::new(GameMode::TwoPlayer, GameConfig::default());
        assert_eq!(state.current_turn, Stone::Black);

        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);

        state.try_place_stone(Pos::new(8, 7)).unwrap();
        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.last_move, Some(Pos::new(8, 7)));
        assert_eq!(state.move_count, 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::TwoPlayer, GameConfig::default());
        state.try_place_stone(Pos::new(3, 3)).unwrap();
        assert!(state.try_place_stone(Pos::new(3, 3)).is_err());
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_five_ends_game() {
        let mut state = GameState::new(GameMode::TwoPlayer, GameConfig::default());
        for x in 0..4 {
            state.try_place_stone(Pos::new(x, 0)).unwrap();
            state.try_place_stone(Pos::new(x, 1)).unwrap();
        }
        state.try_place_stone(Pos::new(4, 0)).unwrap();

        match &state.outcome {
            Some(GameOutcome::Win { winner, line }) => {
                assert_eq!(*winner, Stone::Black);
                assert_eq!(line.len(), 5);
            }
            other => panic!("expected a win, got {:?}", other),
        }
        assert!(state.try_place_stone(Pos::new(9, 9)).is_err());
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = GameState::new(GameMode::TwoPlayer, small_config(2));
        for pos in [Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1), Pos::new(0, 1)] {
            state.try_place_stone(pos).unwrap();
        }
        assert_eq!(state.outcome, Some(GameOutcome::Draw));
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mode = GameMode::VsAi {
            difficulty: Difficulty::Easy,
        };
        let mut state = GameState::new(mode, small_config(9));
        assert!(state.is_human_turn());
        state.try_place_stone(Pos::new(4, 4)).unwrap();

        assert!(state.is_ai_turn());
        assert_eq!(
            state.try_place_stone(Pos::new(5, 5)),
            Err("Not your turn".to_string())
        );
    }

    #[test]
    fn test_ai_reply_is_applied() {
        let mode = GameMode::VsAi {
            difficulty: Difficulty::Easy,
        };
        let mut state = GameState::new(mode, small_config(9));
        state.try_place_stone(Pos::new(4, 4)).unwrap();

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.move_count, 2);
        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.board.stone_count(), 2);
        let ai_move = state.last_move.unwrap();
        assert_eq!(state.board.get(ai_move), Stone::White);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_set_mode_restarts() {
        let mut state = GameState::new(GameMode::TwoPlayer, GameConfig::default());
        state.try_place_stone(Pos::new(1, 1)).unwrap();

        let mode = GameMode::VsAi {
            difficulty: Difficulty::Hard,
        };
        state.set_mode(mode);
        assert_eq!(state.mode, mode);
        assert_eq!(state.config().difficulty, Difficulty::Hard);
        assert!(state.board.is_board_empty());
        assert_eq!(state.current_turn, Stone::Black);
    }
}
