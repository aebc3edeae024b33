//! Match orchestration: the setup/turn state machine coupling two boards
//! and, optionally, an automated opponent.

use std::fmt;

use log::{debug, warn};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, PlacementError, PlayerId};
use crate::config::{ConfigError, MatchConfig, OpponentMode};
use crate::ship::Orientation;
use crate::strategy::{strategy_for, Strategy, TargetView};

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The given player is placing ships; attacks are disallowed.
    Placing(PlayerId),
    /// The given player may resolve exactly one attack.
    Active(PlayerId),
    /// An attack has been resolved; waiting for the explicit turn switch.
    AwaitingSwitch(PlayerId),
    /// Terminal: the given player sank every opposing ship cell.
    Over(PlayerId),
}

/// Response to a placement request routed through the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementResponse {
    /// Ship committed; the same player places the next, shorter ship.
    Placed { next_length: usize },
    /// Ship committed and this player's setup phase is finished.
    PlayerDone,
    /// The board rejected the placement; nothing changed.
    Rejected(PlacementError),
    /// Request arrived outside the player's placement window.
    Ignored,
}

/// Response to an attack request routed through the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResponse {
    /// Empty water; the turn window is spent.
    Miss,
    /// An unhit ship segment; the turn window is spent.
    Hit,
    /// Hit that removed the defender's last ship cell; the match is over.
    Win,
    /// No-op: wrong turn or phase, a repeat attack this turn, or an
    /// already-hit or off-grid cell.
    Ignored,
}

impl AttackResponse {
    /// Whether the request mutated the game.
    pub fn applied(self) -> bool {
        !matches!(self, AttackResponse::Ignored)
    }
}

/// One action performed by the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentEvent {
    Placed {
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    Attacked {
        row: usize,
        col: usize,
        response: AttackResponse,
    },
}

/// Two boards plus the phase state machine. All mutation of either board
/// goes through the request methods here.
pub struct Match {
    boards: [Board; 2],
    num_ships: usize,
    placed: [usize; 2],
    phase: Phase,
    opponent: Option<Box<dyn Strategy>>,
}

impl Match {
    /// Build a match from a configuration, validating it first.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let opponent = match config.opponent {
            OpponentMode::Human => None,
            OpponentMode::Automated { difficulty } => Some(strategy_for(difficulty)),
        };
        Ok(Match {
            boards: [
                Board::new(config.rows, config.cols),
                Board::new(config.rows, config.cols),
            ],
            num_ships: config.num_ships,
            placed: [0; 2],
            phase: Phase::Placing(PlayerId::P0),
            opponent,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, once the match is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Over(winner) => Some(winner),
            _ => None,
        }
    }

    /// Read access to a player's board for rendering.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// Ship count each player places.
    pub fn num_ships(&self) -> usize {
        self.num_ships
    }

    /// Length of the next ship the player has to place, if any. Lengths
    /// count down from the ship count to 1.
    pub fn next_ship_length(&self, player: PlayerId) -> Option<usize> {
        let placed = self.placed[player.index()];
        if placed < self.num_ships {
            Some(self.num_ships - placed)
        } else {
            None
        }
    }

    /// Whether both fleets are fully placed.
    pub fn is_setup_complete(&self) -> bool {
        !matches!(self.phase, Phase::Placing(_))
    }

    /// Route a placement request to the player's own board. Only honored
    /// during that player's placement window.
    pub fn request_placement(
        &mut self,
        player: PlayerId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> PlacementResponse {
        if self.phase != Phase::Placing(player) {
            return PlacementResponse::Ignored;
        }
        let Some(length) = self.next_ship_length(player) else {
            return PlacementResponse::Ignored;
        };
        match self.boards[player.index()].place_ship(length, row, col, orientation) {
            Err(err) => PlacementResponse::Rejected(err),
            Ok(()) => {
                self.placed[player.index()] += 1;
                debug!("{player} placed a length-{length} ship at ({row}, {col})");
                if let Some(next_length) = self.next_ship_length(player) {
                    PlacementResponse::Placed { next_length }
                } else {
                    let other = player.opponent();
                    if self.placed[other.index()] == self.num_ships {
                        debug!("setup complete, {} to move", PlayerId::P0);
                        self.phase = Phase::Active(PlayerId::P0);
                    } else {
                        self.phase = Phase::Placing(other);
                    }
                    PlacementResponse::PlayerDone
                }
            }
        }
    }

    /// Route an attack request to the opponent's board. Honored only while
    /// the match is active, it is the attacker's turn, and no attack has
    /// been resolved yet this turn; everything else is an idempotent no-op.
    pub fn request_attack(&mut self, attacker: PlayerId, row: usize, col: usize) -> AttackResponse {
        if self.phase != Phase::Active(attacker) {
            return AttackResponse::Ignored;
        }
        let defender = attacker.opponent();
        let Some(result) = self.boards[defender.index()].apply_attack(row, col) else {
            return AttackResponse::Ignored;
        };
        match result {
            AttackResult::Miss => {
                debug!("{attacker} missed at ({row}, {col})");
                self.phase = Phase::AwaitingSwitch(attacker);
                AttackResponse::Miss
            }
            AttackResult::Hit => {
                if self.boards[defender.index()].check_win() {
                    debug!("{attacker} hit ({row}, {col}) and wins");
                    self.phase = Phase::Over(attacker);
                    AttackResponse::Win
                } else {
                    debug!("{attacker} hit at ({row}, {col})");
                    self.phase = Phase::AwaitingSwitch(attacker);
                    AttackResponse::Hit
                }
            }
        }
    }

    /// The single explicit turn-switch transition, invoked by timer expiry
    /// or a direct user action. Applies only after an attack has been
    /// resolved for the current turn; returns whether the turn flipped.
    pub fn advance_turn(&mut self) -> bool {
        match self.phase {
            Phase::AwaitingSwitch(turn) => {
                self.phase = Phase::Active(turn.opponent());
                true
            }
            _ => false,
        }
    }

    /// Let the automated opponent take its move when it has one: a
    /// placement during its setup window, an attack during its turn. Turn
    /// switching stays with the caller so the explicit-switch rule is
    /// uniform for both players.
    pub fn opponent_act(&mut self, rng: &mut SmallRng) -> Option<OpponentEvent> {
        let side = PlayerId::P1;
        match self.phase {
            Phase::Placing(player) if player == side => {
                let length = self.next_ship_length(side)?;
                let pick = {
                    let strategy = self.opponent.as_mut()?;
                    strategy.choose_placement(rng, &self.boards[side.index()], length)
                };
                let Some((row, col, orientation)) = pick else {
                    warn!("opponent strategy found no placement for length {length}");
                    return None;
                };
                match self.request_placement(side, row, col, orientation) {
                    PlacementResponse::Rejected(err) => {
                        warn!("opponent strategy produced an invalid placement: {err}");
                        None
                    }
                    PlacementResponse::Ignored => None,
                    PlacementResponse::Placed { .. } | PlacementResponse::PlayerDone => {
                        Some(OpponentEvent::Placed {
                            length,
                            row,
                            col,
                            orientation,
                        })
                    }
                }
            }
            Phase::Active(player) if player == side => {
                let target = {
                    let strategy = self.opponent.as_mut()?;
                    let view = TargetView::new(&self.boards[side.opponent().index()]);
                    strategy.choose_attack_target(rng, &view)
                };
                let Some((row, col)) = target else {
                    warn!("opponent strategy found no target");
                    return None;
                };
                let response = self.request_attack(side, row, col);
                if !response.applied() {
                    warn!("opponent strategy produced an invalid attack at ({row}, {col})");
                    return None;
                }
                Some(OpponentEvent::Attacked { row, col, response })
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("phase", &self.phase)
            .field("num_ships", &self.num_ships)
            .field("placed", &self.placed)
            .field("automated", &self.opponent.is_some())
            .finish()
    }
}
