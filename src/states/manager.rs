use std::collections::HashMap;

use rand::rngs::StdRng;
use tracing::info;

use super::{GameState, MENU, MenuState, PLAYING, PlayingState, Signal};
use crate::error::GameError;
use crate::game::{GameConfig, HandLandmarks, Point, SharedClock};
use crate::render::Canvas;

/// Owns every registered state and routes frames to the current one
///
/// States live as long as the manager, so switching away and back keeps
/// their progress (menu selection, a paused game).
pub struct StateManager {
    states: HashMap<String, GameState>,
    current: Option<String>,
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
        }
    }

    /// Menu and game registered, starting at the menu
    pub fn with_default_states(
        config: GameConfig,
        clock: SharedClock,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut manager = Self::new();
        manager.add_state(MENU, MenuState::new(config.width, config.height));
        manager.add_state(PLAYING, PlayingState::new(config, clock, rng));
        manager.change_state(MENU)?;
        Ok(manager)
    }

    /// Register `state` under `name`, replacing any state of that name
    pub fn add_state(&mut self, name: impl Into<String>, state: impl Into<GameState>) {
        self.states.insert(name.into(), state.into());
    }

    pub fn change_state(&mut self, name: &str) -> Result<(), GameError> {
        if !self.states.contains_key(name) {
            return Err(GameError::UnknownState(name.to_string()));
        }
        info!(from = ?self.current, to = name, "changing state");
        self.current = Some(name.to_string());
        Ok(())
    }

    pub fn current_state_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_state(&self) -> Option<&GameState> {
        self.current.as_ref().and_then(|name| self.states.get(name))
    }

    pub fn state(&self, name: &str) -> Option<&GameState> {
        self.states.get(name)
    }

    pub fn state_mut(&mut self, name: &str) -> Option<&mut GameState> {
        self.states.get_mut(name)
    }

    fn current_mut(&mut self) -> Option<&mut GameState> {
        let name = self.current.as_ref()?;
        self.states.get_mut(name)
    }

    /// Carry out a state's signal; `Ok(false)` means stop
    fn apply(&mut self, signal: Signal) -> Result<bool, GameError> {
        match signal {
            Signal::Continue => Ok(true),
            Signal::Quit => Ok(false),
            Signal::Switch(name) => {
                self.change_state(name)?;
                Ok(true)
            }
        }
    }

    /// Update the current state; `Ok(false)` means the program should exit
    pub fn update(
        &mut self,
        landmarks: Option<&HandLandmarks>,
        finger: Option<Point>,
    ) -> Result<bool, GameError> {
        let Some(state) = self.current_mut() else {
            return Ok(true);
        };
        let signal = state.update(landmarks, finger);
        self.apply(signal)
    }

    pub fn render(&self, canvas: Canvas) -> Canvas {
        match self.current_state() {
            Some(state) => state.render(canvas),
            None => canvas,
        }
    }

    /// Handle this frame's key, if any; `Ok(false)` means the program should exit
    pub fn handle_key(&mut self, key: Option<i32>) -> Result<bool, GameError> {
        let Some(key) = key else {
            return Ok(true);
        };
        let Some(state) = self.current_mut() else {
            return Ok(true);
        };
        let signal = state.handle_key(key);
        self.apply(signal)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ManualClock;
    use crate::input::keys;
    use crate::render::DrawCommand;
    use rand::SeedableRng;

    fn manager() -> StateManager {
        StateManager::with_default_states(
            GameConfig::default(),
            ManualClock::new().shared(),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_at_menu() {
        let manager = manager();
        assert_eq!(manager.current_state_name(), Some(MENU));
        assert!(manager.current_state().unwrap().as_menu().is_some());
    }

    #[test]
    fn test_change_state() {
        let mut manager = manager();
        manager.change_state(PLAYING).unwrap();
        assert_eq!(manager.current_state_name(), Some(PLAYING));

        manager.change_state(MENU).unwrap();
        assert_eq!(manager.current_state_name(), Some(MENU));
    }

    #[test]
    fn test_change_to_missing_state() {
        let mut manager = manager();
        let err = manager.change_state("missing").unwrap_err();

        assert_eq!(err, GameError::UnknownState("missing".to_string()));
        assert_eq!(err.to_string(), "state 'missing' does not exist");
        assert_eq!(manager.current_state_name(), Some(MENU));
    }

    #[test]
    fn test_empty_manager_passes_through() {
        let mut manager = StateManager::new();
        assert_eq!(manager.update(None, Some(Point::new(1, 1))), Ok(true));
        assert_eq!(manager.handle_key(Some(keys::ESCAPE)), Ok(true));

        let mut canvas = Canvas::new(640, 480);
        canvas.shade(0.2);
        let rendered = manager.render(canvas.clone());
        assert_eq!(rendered, canvas);
    }

    #[test]
    fn test_no_key_is_continue() {
        let mut manager = manager();
        assert_eq!(manager.handle_key(None), Ok(true));
        assert_eq!(manager.current_state_name(), Some(MENU));
    }

    #[test]
    fn test_menu_enter_starts_game() {
        let mut manager = manager();
        assert_eq!(manager.handle_key(Some(keys::ENTER)), Ok(true));
        assert_eq!(manager.current_state_name(), Some(PLAYING));
    }

    #[test]
    fn test_quit_from_menu() {
        let mut manager = manager();
        assert_eq!(manager.handle_key(Some(keys::ESCAPE)), Ok(false));
    }

    #[test]
    fn test_pause_and_return_to_menu() {
        let mut manager = manager();
        manager.change_state(PLAYING).unwrap();

        manager.handle_key(Some(keys::ascii('m'))).unwrap();
        assert_eq!(manager.current_state_name(), Some(PLAYING));

        manager.handle_key(Some(keys::ascii('p'))).unwrap();
        manager.handle_key(Some(keys::ascii('m'))).unwrap();
        assert_eq!(manager.current_state_name(), Some(MENU));

        // the game is still paused when we come back
        manager.handle_key(Some(keys::ENTER)).unwrap();
        let playing = manager.current_state().unwrap().as_playing().unwrap();
        assert!(playing.is_paused());
    }

    #[test]
    fn test_menu_selection_survives_round_trip() {
        let mut manager = manager();
        manager.handle_key(Some(keys::ARROW_DOWN)).unwrap();
        manager.change_state(PLAYING).unwrap();
        manager.change_state(MENU).unwrap();

        let menu = manager.current_state().unwrap().as_menu().unwrap();
        assert_eq!(menu.selected_option(), 1);
    }

    #[test]
    fn test_update_routes_to_current_state() {
        let mut manager = manager();
        manager.change_state(PLAYING).unwrap();
        manager
            .state_mut(PLAYING)
            .and_then(GameState::as_playing_mut)
            .unwrap()
            .game_mut()
            .place_food(Point::new(500, 400));

        assert_eq!(manager.update(None, Some(Point::new(120, 80))), Ok(true));
        let playing = manager.state(PLAYING).and_then(GameState::as_playing).unwrap();
        assert_eq!(playing.game().head(), Some(Point::new(120, 80)));
    }

    #[test]
    fn test_render_delegates() {
        let mut manager = manager();
        let menu_frame = manager.render(Canvas::new(640, 480));
        assert!(menu_frame.contains_text("VISION SNAKE"));

        manager.change_state(PLAYING).unwrap();
        let game_frame = manager.render(Canvas::new(640, 480));
        assert!(game_frame.contains_text("Score: 0"));
        assert!(!matches!(game_frame.commands()[0], DrawCommand::Shade { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = StateManager::with_default_states(
            GameConfig::new(0, 480),
            ManualClock::new().shared(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
