//! Scenario table and level loader
//!
//! A scenario is a named starting layout plus the rules that decide how the
//! level is played out: which side the player controls, which side answers
//! automatically, what counts as solving it and how many moves the player
//! gets.
//!
//! Scenario data is plain configuration handed to the loader; nothing here
//! is global. [`ScenarioTable::builtin`] supplies the stock levels, and a
//! table can be extended from deserialised [`ScenarioFile`] data or with
//! code-level [`ScenarioHooks`].
//!
//! # Layout format
//!
//! Rows are written top rank first, one identifier per cell (see
//! [`crate::types`]). A row may be a string (`"rnbqkbnr"`) or a list of
//! single-character strings (`["r","n",...]`) when deserialised.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::game::history::MoveHistory;
use crate::types::Color;

/// Outcome of a level after a turn completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    #[default]
    Continue,
    Complete,
    Failed,
}

/// Built-in completion rule of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Ordinary game; completes once the side to move has no legal move
    #[default]
    FreePlay,
    /// Player must leave the opponent in check with no legal move
    Checkmate,
    /// Player must leave the opponent with no legal move, check or not
    Immobilize,
}

/// One row of a layout as written in scenario data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutRow {
    Text(String),
    Cells(Vec<char>),
}

impl LayoutRow {
    fn to_text(&self) -> String {
        match self {
            LayoutRow::Text(text) => text.clone(),
            LayoutRow::Cells(cells) => cells.iter().collect(),
        }
    }
}

impl From<&str> for LayoutRow {
    fn from(text: &str) -> Self {
        LayoutRow::Text(text.to_string())
    }
}

/// Serializable description of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDef {
    pub name: String,
    /// Layout rows, top rank first
    pub board: Vec<LayoutRow>,
    /// Side the player controls
    #[serde(default)]
    pub player: Color,
    /// Side whose moves are played automatically after each player move
    #[serde(default)]
    pub auto_reply: Option<Color>,
    #[serde(default)]
    pub objective: Objective,
    /// Number of player moves allowed before the level fails
    #[serde(default)]
    pub total_moves: Option<u32>,
}

impl ScenarioDef {
    /// Free-play scenario with the given layout
    pub fn new<R: Into<LayoutRow>>(name: &str, rows: impl IntoIterator<Item = R>) -> Self {
        ScenarioDef {
            name: name.to_string(),
            board: rows.into_iter().map(Into::into).collect(),
            player: Color::White,
            auto_reply: None,
            objective: Objective::FreePlay,
            total_moves: None,
        }
    }

    pub fn with_auto_reply(mut self, color: Color) -> Self {
        self.auto_reply = Some(color);
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_total_moves(mut self, total_moves: u32) -> Self {
        self.total_moves = Some(total_moves);
        self
    }

    /// Layout rows as strings, top rank first
    pub fn rows(&self) -> Vec<String> {
        self.board.iter().map(LayoutRow::to_text).collect()
    }

    /// Build the starting board for this scenario
    ///
    /// Fails with [`RulesError::InvalidScenario`] if the layout does not
    /// decode or if the auto-reply side is the player's own side.
    pub fn build_board(&self) -> RulesResult<Board> {
        if self.auto_reply == Some(self.player) {
            return Err(RulesError::InvalidScenario {
                scenario: self.name.clone(),
                reason: format!(
                    "{} cannot be both the player and the auto-reply side",
                    self.player
                ),
            });
        }
        Board::from_layout(&self.name, &self.rows())
    }
}

/// Shape of a scenario file: `{ "levels": [ ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub levels: Vec<ScenarioDef>,
}

/// Snapshot handed to [`ScenarioHooks::on_turn_complete`]
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub board: &'a Board,
    pub side_to_move: Color,
    pub player: Color,
    /// Moves the player has made so far
    pub player_moves: u32,
    pub history: &'a MoveHistory,
}

pub type TurnCompleteHook = Arc<dyn Fn(&TurnContext<'_>) -> LevelStatus + Send + Sync>;
pub type SwitchTurnHook = Arc<dyn Fn(Color) -> Color + Send + Sync>;

/// Code-level overrides of a scenario's turn handling
#[derive(Clone, Default)]
pub struct ScenarioHooks {
    /// Replaces the built-in objective check after every completed turn
    pub on_turn_complete: Option<TurnCompleteHook>,
    /// Picks the side to move next; defaults to the opponent
    pub switch_turn: Option<SwitchTurnHook>,
}

impl ScenarioHooks {
    pub fn on_turn_complete<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TurnContext<'_>) -> LevelStatus + Send + Sync + 'static,
    {
        self.on_turn_complete = Some(Arc::new(hook));
        self
    }

    pub fn switch_turn<F>(mut self, hook: F) -> Self
    where
        F: Fn(Color) -> Color + Send + Sync + 'static,
    {
        self.switch_turn = Some(Arc::new(hook));
        self
    }

    /// Side to move after `color` finished a move
    pub fn next_turn(&self, color: Color) -> Color {
        match &self.switch_turn {
            Some(hook) => hook(color),
            None => color.opponent(),
        }
    }
}

impl fmt::Debug for ScenarioHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioHooks")
            .field("on_turn_complete", &self.on_turn_complete.is_some())
            .field("switch_turn", &self.switch_turn.is_some())
            .finish()
    }
}

/// A registered scenario: its data plus optional hooks
#[derive(Debug, Clone)]
pub struct Scenario {
    pub def: ScenarioDef,
    pub hooks: ScenarioHooks,
}

impl Scenario {
    pub fn name(&self) -> &str {
        &self.def.name
    }
}

/// Ordered table of scenarios; order defines level progression
#[derive(Debug, Clone, Default)]
pub struct ScenarioTable {
    levels: Vec<Scenario>,
}

impl ScenarioTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock levels: the standard opening, the pin study and two puzzles
    pub fn builtin() -> Self {
        let mut table = ScenarioTable::new();
        for def in builtin_levels() {
            table.insert(def);
        }
        table
    }

    /// Register `def`, replacing any scenario with the same name in place
    ///
    /// Layouts are not decoded here; a bad layout surfaces as
    /// [`RulesError::InvalidScenario`] when the scenario is loaded.
    pub fn insert(&mut self, def: ScenarioDef) {
        match self.levels.iter_mut().find(|level| level.def.name == def.name) {
            Some(existing) => existing.def = def,
            None => self.levels.push(Scenario {
                def,
                hooks: ScenarioHooks::default(),
            }),
        }
    }

    /// Register every level of a scenario file
    pub fn extend_from_file(&mut self, file: ScenarioFile) {
        for def in file.levels {
            self.insert(def);
        }
    }

    /// Attach hooks to a registered scenario
    pub fn set_hooks(&mut self, name: &str, hooks: ScenarioHooks) -> RulesResult<()> {
        let level = self
            .levels
            .iter_mut()
            .find(|level| level.def.name == name)
            .ok_or_else(|| RulesError::UnknownScenario {
                name: name.to_string(),
            })?;
        level.hooks = hooks;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.levels.iter().find(|level| level.def.name == name)
    }

    /// Scenario names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.levels.iter().map(Scenario::name)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Name of the level following `name`, if any
    pub fn next_after(&self, name: &str) -> Option<&str> {
        let index = self.levels.iter().position(|level| level.def.name == name)?;
        self.levels.get(index + 1).map(Scenario::name)
    }

    /// Look up a scenario, failing with [`RulesError::UnknownScenario`]
    pub fn scenario(&self, name: &str) -> RulesResult<&Scenario> {
        self.get(name).ok_or_else(|| RulesError::UnknownScenario {
            name: name.to_string(),
        })
    }

    /// Build the starting board of scenario `name`
    ///
    /// Either the whole board is built or an error is returned; no partial
    /// state escapes.
    pub fn load(&self, name: &str) -> RulesResult<Board> {
        let board = self.scenario(name)?.def.build_board()?;
        info!(
            "[SCENARIO] Loaded '{}' ({}x{}, {} pieces)",
            name,
            board.length(),
            board.width(),
            board.pieces().count()
        );
        Ok(board)
    }
}

fn builtin_levels() -> Vec<ScenarioDef> {
    vec![
        ScenarioDef::new(
            "classic",
            [
                "RNBQKBNR", "PPPPPPPP", "--------", "--------", "--------", "--------",
                "pppppppp", "rnbqkbnr",
            ],
        ),
        // White king on d2 is checked from a5 while the f4 bishop is pinned
        // from h6.
        ScenarioDef::new(
            "test",
            [
                "--------", "--------", "-------B", "B-------", "---r-bN-", "-P------",
                "---k----", "--------",
            ],
        ),
        ScenarioDef::new("back-rank", ["--K--", "-PPP-", "-----", "r---k"])
            .with_auto_reply(Color::Black)
            .with_objective(Objective::Checkmate)
            .with_total_moves(1),
        ScenarioDef::new("keyhole", ["XKXX", "----", "----", "k-q-"])
            .with_auto_reply(Color::Black)
            .with_objective(Objective::Checkmate)
            .with_total_moves(1),
    ]
}
