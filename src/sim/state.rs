//! Game status machine and core simulation state
//!
//! `GameState` is the single owner of everything the simulation knows:
//! playfield bounds, brick grid, paddle, ball, score, status and the
//! seeded RNG. Hosts mutate it only through the command methods below and
//! [`super::tick::tick`]; every call takes `&mut self` for its duration
//! and runs to completion, which is the whole concurrency model.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{BrickColor, BrickGrid};
use super::geom::Rect;
use super::paddle::{NudgeDirection, Paddle};
use crate::tuning::Tuning;

/// Current status of the game, exactly one active at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Freshly constructed, never started
    Initial,
    /// Between games: a finished run was acknowledged, waiting to restart
    UnStart,
    /// Active gameplay
    Playing,
    /// Gameplay suspended
    Paused,
    /// All bricks destroyed
    GameClear,
    /// Ball fell out the bottom
    GameOver,
}

/// Side effect attached to a toggle edge
#[derive(Debug, Clone, Copy)]
enum ToggleEffect {
    Enable,
    Disable,
    /// Full game-data reset, then enable. Only the `UnStart -> Playing`
    /// edge carries this; the first start from `Initial` plays the state
    /// built at construction.
    ResetThenEnable,
}

/// The transition table behind the single external status toggle
const TOGGLE_TRANSITIONS: [(GameStatus, GameStatus, ToggleEffect); 6] = [
    (GameStatus::Initial, GameStatus::Playing, ToggleEffect::Enable),
    (GameStatus::UnStart, GameStatus::Playing, ToggleEffect::ResetThenEnable),
    (GameStatus::Playing, GameStatus::Paused, ToggleEffect::Disable),
    (GameStatus::Paused, GameStatus::Playing, ToggleEffect::Enable),
    (GameStatus::GameClear, GameStatus::UnStart, ToggleEffect::Disable),
    (GameStatus::GameOver, GameStatus::UnStart, ToggleEffect::Disable),
];

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub status: GameStatus,
    pub score: u32,
    /// Tracks the transition table's enable/disable side effects; gates
    /// the paddle commands, never the status toggle
    pub controls_enabled: bool,
    /// Set by the first `on_playfield_sized` call, immutable afterwards
    pub playfield: Option<Rect>,
    pub bricks: BrickGrid,
    pub paddle: Paddle,
    pub ball: Ball,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given seed. Identical seeds and command
    /// sequences produce identical simulations.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = fresh_grid(&mut rng, &tuning);
        let ball = Ball::new(roll_sign(&mut rng));
        Self {
            seed,
            tuning,
            status: GameStatus::Initial,
            score: 0,
            controls_enabled: false,
            playfield: None,
            bricks,
            paddle: Paddle::default(),
            ball,
            rng,
        }
    }

    /// Frame-driver lifecycle signal. Only the first call takes effect;
    /// the playfield is immutable for the rest of the session. Placement
    /// of paddle, ball and brick layout happens here.
    pub fn on_playfield_sized(&mut self, width: f32, height: f32) {
        if self.playfield.is_some() {
            return;
        }
        self.playfield = Some(Rect::from_origin_size(Vec2::ZERO, Vec2::new(width, height)));
        log::info!("playfield sized {}x{}", width, height);
        self.place_entities();
    }

    /// Touch down: try to pick up a paddle drag
    pub fn press(&mut self, x: f32, y: f32) {
        if !self.controls_enabled {
            return;
        }
        self.paddle.begin_drag(Vec2::new(x, y), &self.tuning);
    }

    /// Touch moved. Only the horizontal position steers the paddle, and
    /// only while the touch is still in contact.
    pub fn drag_move(&mut self, x: f32, _y: f32, in_contact: bool) {
        if !self.controls_enabled || !in_contact {
            return;
        }
        let Some(playfield) = self.playfield else {
            return;
        };
        self.paddle.drag_to(x, playfield);
    }

    /// Touch lifted. Always ends the drag, even if controls were disabled
    /// mid-gesture by a pause.
    pub fn release(&mut self) {
        self.paddle.end_drag();
    }

    /// Discrete-button alternative to dragging
    pub fn click_left(&mut self) {
        self.nudge(NudgeDirection::Left);
    }

    pub fn click_right(&mut self) {
        self.nudge(NudgeDirection::Right);
    }

    /// The single external trigger: its effect depends on the current
    /// status per the transition table (start / pause / resume /
    /// acknowledge). Never gated.
    pub fn click_toggle_status(&mut self) {
        let Some(&(_, to, effect)) = TOGGLE_TRANSITIONS
            .iter()
            .find(|(from, _, _)| *from == self.status)
        else {
            return;
        };
        match effect {
            ToggleEffect::Enable => self.set_status(to, true),
            ToggleEffect::Disable => self.set_status(to, false),
            ToggleEffect::ResetThenEnable => {
                self.reset_game_data();
                self.set_status(to, true);
            }
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            playfield: self.playfield,
            ball: self.ball.center,
            paddle: self.paddle.rect,
            score: self.score,
            status: self.status,
            controls_enabled: self.controls_enabled,
            bricks: &self.bricks,
        }
    }

    /// Full game-data reset: fresh bricks (colors re-rolled), paddle and
    /// ball unplaced, horizontal ball sign re-rolled 50/50 (vertical
    /// always starts downward), score zeroed. Entities are placed again
    /// right away when the playfield is already known.
    pub fn reset_game_data(&mut self) {
        self.bricks = fresh_grid(&mut self.rng, &self.tuning);
        self.paddle = Paddle::default();
        self.ball = Ball::new(roll_sign(&mut self.rng));
        self.score = 0;
        self.place_entities();
        log::debug!("game data reset");
    }

    pub(crate) fn set_status(&mut self, to: GameStatus, controls_enabled: bool) {
        if self.status != to {
            log::debug!("status {:?} -> {:?}", self.status, to);
        }
        self.status = to;
        self.controls_enabled = controls_enabled;
    }

    fn place_entities(&mut self) {
        let Some(playfield) = self.playfield else {
            return;
        };
        self.paddle.place_default(playfield, &self.tuning);
        self.ball.place_default(playfield);
        self.bricks.compute_layout_if_needed(playfield, &self.tuning);
    }

    fn nudge(&mut self, direction: NudgeDirection) {
        if !self.controls_enabled {
            return;
        }
        let Some(playfield) = self.playfield else {
            return;
        };
        self.paddle.nudge(direction, playfield, &self.tuning);
    }
}

fn fresh_grid(rng: &mut Pcg32, tuning: &Tuning) -> BrickGrid {
    BrickGrid::new(tuning.rows, tuning.cols, || {
        if rng.random() {
            BrickColor::Red
        } else {
            BrickColor::Blue
        }
    })
}

fn roll_sign(rng: &mut Pcg32) -> f32 {
    if rng.random() { 1.0 } else { -1.0 }
}

/// Everything the renderer needs for one frame, read-only
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub playfield: Option<Rect>,
    pub ball: Option<Vec2>,
    pub paddle: Option<Rect>,
    pub score: u32,
    pub status: GameStatus,
    pub controls_enabled: bool,
    bricks: &'a BrickGrid,
}

impl Snapshot<'_> {
    /// Live bricks with rects and colors, row-major
    pub fn bricks(&self) -> impl Iterator<Item = (Rect, BrickColor)> + '_ {
        self.bricks.live_bricks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized() -> GameState {
        let mut g = GameState::new(7, Tuning::default());
        g.on_playfield_sized(400.0, 600.0);
        g
    }

    #[test]
    fn test_new_is_initial_and_unplaced() {
        let g = GameState::new(7, Tuning::default());
        assert_eq!(g.status, GameStatus::Initial);
        assert_eq!(g.score, 0);
        assert!(!g.controls_enabled);
        assert!(g.playfield.is_none());
        assert!(g.paddle.rect.is_none());
        assert!(g.ball.center.is_none());
        assert_eq!(g.ball.sign.y, 1.0);
        assert!(g.ball.sign.x == 1.0 || g.ball.sign.x == -1.0);
    }

    #[test]
    fn test_sizing_places_everything_once() {
        let mut g = sized();
        assert_eq!(g.ball.center, Some(Vec2::new(200.0, 300.0)));
        assert_eq!(g.paddle.rect.unwrap().top(), 530.0);
        assert_eq!(g.bricks.live_bricks().count(), 20);

        // Second report is ignored
        g.on_playfield_sized(800.0, 800.0);
        assert_eq!(g.playfield.unwrap().size, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_toggle_walks_the_table() {
        let mut g = sized();
        g.click_toggle_status();
        assert_eq!(g.status, GameStatus::Playing);
        assert!(g.controls_enabled);

        g.click_toggle_status();
        assert_eq!(g.status, GameStatus::Paused);
        assert!(!g.controls_enabled);

        g.click_toggle_status();
        assert_eq!(g.status, GameStatus::Playing);
        assert!(g.controls_enabled);
    }

    #[test]
    fn test_acknowledge_terminal_states() {
        for terminal in [GameStatus::GameOver, GameStatus::GameClear] {
            let mut g = sized();
            g.set_status(terminal, false);
            g.click_toggle_status();
            assert_eq!(g.status, GameStatus::UnStart);
            assert!(!g.controls_enabled);
        }
    }

    #[test]
    fn test_first_start_does_not_reset() {
        let mut g = sized();
        // State established before the first start survives it
        g.score = 7;
        g.click_toggle_status();
        assert_eq!(g.status, GameStatus::Playing);
        assert_eq!(g.score, 7);
    }

    #[test]
    fn test_restart_from_unstart_resets() {
        let mut g = sized();
        g.score = 12;
        let hit = g.bricks.live_bricks().next().unwrap().0;
        g.bricks.hit_test(hit);
        assert_eq!(g.bricks.remaining(), 19);

        g.set_status(GameStatus::GameOver, false);
        g.click_toggle_status(); // acknowledge -> UnStart
        assert_eq!(g.score, 12); // acknowledging does not reset
        g.click_toggle_status(); // start -> Playing, full reset
        assert_eq!(g.status, GameStatus::Playing);
        assert_eq!(g.score, 0);
        assert_eq!(g.bricks.remaining(), 20);
        assert!(g.controls_enabled);
        // Bounds were known, so entities are placed again immediately
        assert_eq!(g.ball.center, Some(Vec2::new(200.0, 300.0)));
        assert!(g.paddle.rect.is_some());
        assert_eq!(g.ball.sign.y, 1.0);
    }

    #[test]
    fn test_controls_gate_paddle_commands() {
        let mut g = sized();
        let resting = g.paddle.rect.unwrap().left();

        // Initial: controls disabled, nothing moves
        g.press(200.0, 540.0);
        assert!(!g.paddle.dragging);
        g.click_left();
        assert_eq!(g.paddle.rect.unwrap().left(), resting);

        g.click_toggle_status();
        g.click_left();
        assert_eq!(g.paddle.rect.unwrap().left(), resting - 80.0);
    }

    #[test]
    fn test_drag_commands_route_to_paddle() {
        let mut g = sized();
        g.click_toggle_status();

        g.press(200.0, 540.0);
        assert!(g.paddle.dragging);
        g.drag_move(100.0, 0.0, true);
        assert_eq!(g.paddle.rect.unwrap().left(), 50.0);
        // Out-of-contact moves carry no drag intent
        g.drag_move(300.0, 0.0, false);
        assert_eq!(g.paddle.rect.unwrap().left(), 50.0);
        g.release();
        assert!(!g.paddle.dragging);
        g.drag_move(300.0, 0.0, true);
        assert_eq!(g.paddle.rect.unwrap().left(), 50.0);
    }

    #[test]
    fn test_release_ungated() {
        let mut g = sized();
        g.click_toggle_status();
        g.press(200.0, 540.0);
        assert!(g.paddle.dragging);
        g.click_toggle_status(); // pause disables controls mid-drag
        g.release();
        assert!(!g.paddle.dragging);
    }

    #[test]
    fn test_same_seed_same_colors_and_sign() {
        let a = GameState::new(99, Tuning::default());
        let b = GameState::new(99, Tuning::default());
        assert_eq!(a.ball.sign, b.ball.sign);
        let mut ga = a;
        let mut gb = b;
        ga.on_playfield_sized(400.0, 600.0);
        gb.on_playfield_sized(400.0, 600.0);
        let ca: Vec<_> = ga.bricks.live_bricks().map(|(_, c)| c).collect();
        let cb: Vec<_> = gb.bricks.live_bricks().map(|(_, c)| c).collect();
        assert_eq!(ca, cb);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut g = sized();
        g.click_toggle_status();
        g.score = 3;
        let snap = g.snapshot();
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.score, 3);
        assert!(snap.controls_enabled);
        assert_eq!(snap.ball, Some(Vec2::new(200.0, 300.0)));
        assert_eq!(snap.bricks().count(), 20);
        // And it serializes for host-side export
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":3"));
    }
}
