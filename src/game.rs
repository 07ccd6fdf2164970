//! A game between two players on top of the rules engine.
//!
//! `Game` owns the current position, the move history and the way the game
//! ended. It is the only place where the turn is handed over after a move,
//! and the only place that knows about resignation, draw offers and
//! abandoned games.

use std::fmt;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Classification, Color, GameStatus, Move, MoveError, Position, Square, SquareError,
};
use crate::wire::MovePayload;

/// Error type for game-level operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended
    GameOver,
    /// The move was rejected by the rules engine
    Move(MoveError),
    /// The move payload held an out-of-range coordinate
    Payload(SquareError),
    /// There is no pending draw offer to answer
    NoDrawOffer,
    /// A player tried to answer their own draw offer
    OwnDrawOffer,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is over"),
            GameError::Move(e) => write!(f, "{e}"),
            GameError::Payload(e) => write!(f, "Invalid move payload: {e}"),
            GameError::NoDrawOffer => write!(f, "No draw offer to answer"),
            GameError::OwnDrawOffer => write!(f, "Cannot answer your own draw offer"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Payload(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

impl From<SquareError> for GameError {
    fn from(e: SquareError) -> Self {
        GameError::Payload(e)
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Resignation { winner: Color },
    DrawByAgreement,
    Abandoned { winner: Color },
}

impl Outcome {
    /// The winning side, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner }
            | Outcome::Resignation { winner }
            | Outcome::Abandoned { winner } => Some(winner),
            Outcome::Stalemate | Outcome::DrawByAgreement => None,
        }
    }

    /// Announcement shown to both players.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Outcome::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            Outcome::Stalemate => "Stalemate! Draw!".to_string(),
            Outcome::Resignation { winner } => format!("{} resigned", winner.opponent()),
            Outcome::DrawByAgreement => "Game drawn by agreement".to_string(),
            Outcome::Abandoned { winner } => format!("{} disconnected", winner.opponent()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// One played move and the side that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    status: Classification,
    history: Vec<MoveRecord>,
    draw_offer: Option<Color>,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::initial())
    }

    /// A game starting from an arbitrary position. A position that is
    /// already checkmate or stalemate starts out finished.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = position.classify();
        Game {
            position,
            status,
            history: Vec::new(),
            draw_offer: None,
            outcome: Self::terminal_outcome(status),
        }
    }

    fn terminal_outcome(status: Classification) -> Option<Outcome> {
        match status.status {
            GameStatus::Checkmate => Some(Outcome::Checkmate {
                winner: status.color.opponent(),
            }),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
            GameStatus::Ongoing | GameStatus::Check => None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Classification of the side to move.
    #[must_use]
    pub fn status(&self) -> Classification {
        self.status
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// The side whose draw offer is waiting for an answer.
    #[must_use]
    pub fn pending_draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Play `from -> to` for the side to move and hand the turn over.
    ///
    /// Playing a move withdraws any pending draw offer.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Classification, GameError> {
        self.ensure_running()?;

        let mover = self.position.side_to_move();
        let next = self.position.apply_move(from, to).map_err(|e| {
            debug!("rejected {from}{to} for {mover}: {e}");
            e
        })?;

        self.position = next.pass_turn();
        self.history.push(MoveRecord {
            mv: Move::new(from, to),
            color: mover,
        });
        self.draw_offer = None;
        self.status = self.position.classify();
        self.outcome = Self::terminal_outcome(self.status);

        debug!("{mover} played {from}{to}: {}", self.status);
        if let Some(outcome) = self.outcome {
            debug!("game over: {outcome}");
        }
        Ok(self.status)
    }

    /// Play a move received as a coordinate payload.
    pub fn play_payload(&mut self, payload: &MovePayload) -> Result<Classification, GameError> {
        let mv = Move::try_from(payload)?;
        self.play(mv.from, mv.to)
    }

    /// `color` gives up; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<Outcome, GameError> {
        self.finish(Outcome::Resignation {
            winner: color.opponent(),
        })
    }

    /// `color` left the game; the opponent wins.
    pub fn abandon(&mut self, color: Color) -> Result<Outcome, GameError> {
        self.finish(Outcome::Abandoned {
            winner: color.opponent(),
        })
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, GameError> {
        self.ensure_running()?;
        self.outcome = Some(outcome);
        self.draw_offer = None;
        debug!("game over: {outcome}");
        Ok(outcome)
    }

    /// `color` offers a draw. A newer offer replaces an older one.
    pub fn offer_draw(&mut self, color: Color) -> Result<(), GameError> {
        self.ensure_running()?;
        self.draw_offer = Some(color);
        debug!("{color} offers a draw");
        Ok(())
    }

    /// `color` accepts the opponent's pending offer, ending the game.
    pub fn accept_draw(&mut self, color: Color) -> Result<Outcome, GameError> {
        self.answerable_offer(color)?;
        self.finish(Outcome::DrawByAgreement)
    }

    /// `color` declines the opponent's pending offer.
    pub fn decline_draw(&mut self, color: Color) -> Result<(), GameError> {
        let offered_by = self.answerable_offer(color)?;
        self.draw_offer = None;
        debug!("{color} declined the draw offer from {offered_by}");
        Ok(())
    }

    fn answerable_offer(&self, color: Color) -> Result<Color, GameError> {
        self.ensure_running()?;
        match self.draw_offer {
            None => Err(GameError::NoDrawOffer),
            Some(offered_by) if offered_by == color => Err(GameError::OwnDrawOffer),
            Some(offered_by) => Ok(offered_by),
        }
    }
}
