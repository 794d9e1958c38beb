//! Input Controller
//!
//! Two-state machine deciding what each key press does:
//!
//! - `Enabled`: a printable key spawns a letter somewhere in the spawn
//!   region; Backspace starts the tilt and switches to `Disabled`.
//! - `Disabled`: every key is dropped. Only
//!   [`on_animation_complete`](InputController::on_animation_complete)
//!   switches back.
//!
//! Ctrl/Alt/Meta chords and the space bar are dropped in both states.

use glam::Vec3;
use rand::Rng;

use crate::game::config::LetterConfig;
use crate::input::{KeyCode, KeyPress};

use super::actions::{IgnoreReason, InputCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Enabled,
    /// Waiting for the tilt animation to finish
    Disabled,
}

/// Box above the ground that letters appear in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRegion {
    /// x and z are drawn from [-half_width, half_width]
    pub half_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            half_width: 5.0,
            min_height: 10.0,
            max_height: 20.0,
        }
    }
}

impl SpawnRegion {
    pub fn from_config(config: &LetterConfig) -> Self {
        Self {
            half_width: config.spawn_half_width,
            min_height: config.spawn_min_height,
            max_height: config.spawn_max_height,
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-self.half_width..=self.half_width),
            rng.gen_range(self.min_height..=self.max_height),
            rng.gen_range(-self.half_width..=self.half_width),
        )
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x.abs() <= self.half_width
            && p.z.abs() <= self.half_width
            && (self.min_height..=self.max_height).contains(&p.y)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    mode: InputMode,
    pub region: SpawnRegion,
}

impl InputController {
    pub fn new(region: SpawnRegion) -> Self {
        Self {
            mode: InputMode::Enabled,
            region,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn is_enabled(&self) -> bool {
        self.mode == InputMode::Enabled
    }

    pub fn handle_key(&mut self, press: &KeyPress, rng: &mut impl Rng) -> InputCommand {
        if press.modifiers.has_command() {
            return InputCommand::Ignored(IgnoreReason::Modifier);
        }
        if press.key == KeyCode::Space || press.text == Some(' ') {
            return InputCommand::Ignored(IgnoreReason::Space);
        }

        if press.key == KeyCode::Backspace {
            return match self.mode {
                InputMode::Enabled => {
                    self.mode = InputMode::Disabled;
                    InputCommand::StartTilt
                }
                InputMode::Disabled => InputCommand::Ignored(IgnoreReason::Disabled),
            };
        }

        let Some(glyph) = press.text.filter(|c| !c.is_control() && !c.is_whitespace()) else {
            return InputCommand::Ignored(IgnoreReason::NotPrintable);
        };
        if self.mode == InputMode::Disabled {
            return InputCommand::Ignored(IgnoreReason::Disabled);
        }

        InputCommand::Spawn {
            glyph,
            position: self.region.sample(rng),
        }
    }

    /// The tilt finished; accept keys again.
    pub fn on_animation_complete(&mut self) {
        self.mode = InputMode::Enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ModifierState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_printable_key_spawns() {
        let mut controller = InputController::default();
        let cmd = controller.handle_key(&KeyPress::character('a'), &mut rng());
        match cmd {
            InputCommand::Spawn { glyph, position } => {
                assert_eq!(glyph, 'a');
                assert!(controller.region.contains(position));
            }
            other => panic!("expected spawn, got {other:?}"),
        }
    }

    #[test]
    fn test_space_ignored() {
        let mut controller = InputController::default();
        assert_eq!(
            controller.handle_key(&KeyPress::character(' '), &mut rng()),
            InputCommand::Ignored(IgnoreReason::Space)
        );
    }

    #[test]
    fn test_command_modifiers_ignored() {
        let mut controller = InputController::default();
        for mods in [
            ModifierState { ctrl: true, ..Default::default() },
            ModifierState { alt: true, ..Default::default() },
            ModifierState { meta: true, ..Default::default() },
        ] {
            let press = KeyPress::character('c').with_modifiers(mods);
            assert_eq!(
                controller.handle_key(&press, &mut rng()),
                InputCommand::Ignored(IgnoreReason::Modifier)
            );
        }
        let backspace = KeyPress::named(KeyCode::Backspace).with_modifiers(ModifierState {
            ctrl: true,
            ..Default::default()
        });
        assert!(controller.handle_key(&backspace, &mut rng()).is_ignored());
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_shift_still_spawns() {
        let mut controller = InputController::default();
        let press = KeyPress::character('A').with_modifiers(ModifierState {
            shift: true,
            ..Default::default()
        });
        assert!(matches!(
            controller.handle_key(&press, &mut rng()),
            InputCommand::Spawn { glyph: 'A', .. }
        ));
    }

    #[test]
    fn test_backspace_disables_until_complete() {
        let mut controller = InputController::default();
        let mut rng = rng();
        assert_eq!(
            controller.handle_key(&KeyPress::named(KeyCode::Backspace), &mut rng),
            InputCommand::StartTilt
        );
        assert_eq!(controller.mode(), InputMode::Disabled);

        assert_eq!(
            controller.handle_key(&KeyPress::character('b'), &mut rng),
            InputCommand::Ignored(IgnoreReason::Disabled)
        );
        assert_eq!(
            controller.handle_key(&KeyPress::named(KeyCode::Backspace), &mut rng),
            InputCommand::Ignored(IgnoreReason::Disabled)
        );

        controller.on_animation_complete();
        assert!(matches!(
            controller.handle_key(&KeyPress::character('b'), &mut rng),
            InputCommand::Spawn { glyph: 'b', .. }
        ));
    }

    #[test]
    fn test_named_keys_not_printable() {
        let mut controller = InputController::default();
        for key in [KeyCode::Enter, KeyCode::ArrowLeft, KeyCode::ShiftLeft, KeyCode::Tab] {
            assert_eq!(
                controller.handle_key(&KeyPress::named(key), &mut rng()),
                InputCommand::Ignored(IgnoreReason::NotPrintable)
            );
        }
    }

    #[test]
    fn test_spawn_positions_bounded() {
        let region = SpawnRegion::default();
        let mut rng = rng();
        for _ in 0..1000 {
            let p = region.sample(&mut rng);
            assert!((-5.0..=5.0).contains(&p.x));
            assert!((10.0..=20.0).contains(&p.y));
            assert!((-5.0..=5.0).contains(&p.z));
        }
    }
}
