use crate::game::{Controls, GameState};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};

/// One-shot actions triggered by a key press
///
/// Held keys (movement, fire) are read from the keyboard state every tick
/// instead, see [`InputSystem::controls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    TogglePause,
    Restart,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal gameplay - movement, firing, pausing
    Playing,
    /// Game is paused, only unpause and quit work
    Paused,
    /// Game over, the player may restart
    GameOver,
}

impl From<GameState> for InputContext {
    fn from(state: GameState) -> Self {
        match state {
            GameState::Playing => InputContext::Playing,
            GameState::Paused => InputContext::Paused,
            GameState::GameOver => InputContext::GameOver,
        }
    }
}

/// InputSystem turns SDL2 events into GameActions and the keyboard state
/// into Controls.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Update the input context from the current game state
    pub fn update_context(&mut self, state: GameState) {
        self.context = state.into();
    }

    /// Polls pending SDL2 events and returns the actions they trigger
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.action_for_key(key) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    /// Maps a pressed key to an action for the current context
    pub fn action_for_key(&self, key: Keycode) -> Option<GameAction> {
        match (self.context, key) {
            (_, Keycode::Escape) => Some(GameAction::Quit),
            (InputContext::Playing | InputContext::Paused, Keycode::Pause | Keycode::P) => {
                Some(GameAction::TogglePause)
            }
            (InputContext::GameOver, Keycode::R | Keycode::Return) => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Reads held keys. Nothing is held while the game isn't running.
    pub fn controls(&self, keyboard_state: &KeyboardState) -> Controls {
        let pressed = |codes: &[Scancode]| {
            codes
                .iter()
                .any(|code| keyboard_state.is_scancode_pressed(*code))
        };
        Self::controls_from(self.context, pressed)
    }

    fn controls_from(context: InputContext, pressed: impl Fn(&[Scancode]) -> bool) -> Controls {
        if context != InputContext::Playing {
            return Controls::default();
        }

        Controls {
            left: pressed(&[Scancode::Left, Scancode::A]),
            right: pressed(&[Scancode::Right, Scancode::D]),
            fire: pressed(&[Scancode::Space]),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Playing);
    }

    #[test]
    fn test_context_follows_game_state() {
        let mut input = InputSystem::new();

        input.update_context(GameState::Paused);
        assert_eq!(input.context, InputContext::Paused);

        input.update_context(GameState::GameOver);
        assert_eq!(input.context, InputContext::GameOver);
    }

    #[test]
    fn test_pause_key_toggles_while_playing_or_paused() {
        let mut input = InputSystem::new();
        assert_eq!(input.action_for_key(Keycode::Pause), Some(GameAction::TogglePause));
        assert_eq!(input.action_for_key(Keycode::P), Some(GameAction::TogglePause));

        input.update_context(GameState::Paused);
        assert_eq!(input.action_for_key(Keycode::Pause), Some(GameAction::TogglePause));

        input.update_context(GameState::GameOver);
        assert_eq!(input.action_for_key(Keycode::Pause), None);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut input = InputSystem::new();
        assert_eq!(input.action_for_key(Keycode::R), None);

        input.update_context(GameState::GameOver);
        assert_eq!(input.action_for_key(Keycode::R), Some(GameAction::Restart));
    }

    #[test]
    fn test_escape_always_quits() {
        let mut input = InputSystem::new();
        for state in [GameState::Playing, GameState::Paused, GameState::GameOver] {
            input.update_context(state);
            assert_eq!(input.action_for_key(Keycode::Escape), Some(GameAction::Quit));
        }
    }

    #[test]
    fn test_controls_from_held_keys() {
        let held = |codes: &[Scancode]| codes.contains(&Scancode::A) || codes.contains(&Scancode::Space);
        let controls = InputSystem::controls_from(InputContext::Playing, held);

        assert_eq!(
            controls,
            Controls {
                left: true,
                right: false,
                fire: true
            }
        );
    }

    #[test]
    fn test_controls_ignored_while_paused() {
        let held = |_: &[Scancode]| true;
        assert_eq!(
            InputSystem::controls_from(InputContext::Paused, held),
            Controls::default()
        );
    }
}
