use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

use crate::form::{self, FormState};
use crate::presets::PRESETS;
use crate::prompt::{self, ValidationStatus};
use crate::theme::ThemeController;
use crate::{clipboard, config, export};

/// How long the "Copied to clipboard" label stays up before reverting.
const COPIED_REVERT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Idea,
    Moods,
    CameraMovement,
    CameraAngle,
    CameraFocus,
    SoundscapePrimary,
    SoundscapeSecondary,
    SoundscapeQuality,
    VisualEffects,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::Idea,
        Field::Moods,
        Field::CameraMovement,
        Field::CameraAngle,
        Field::CameraFocus,
        Field::SoundscapePrimary,
        Field::SoundscapeSecondary,
        Field::SoundscapeQuality,
        Field::VisualEffects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Idea => "Idea",
            Field::Moods => "Moods",
            Field::CameraMovement => "Camera Movement",
            Field::CameraAngle => "Camera Angle",
            Field::CameraFocus => "Camera Focus",
            Field::SoundscapePrimary => "Soundscape Primary",
            Field::SoundscapeSecondary => "Soundscape Secondary",
            Field::SoundscapeQuality => "Soundscape Quality",
            Field::VisualEffects => "Visual Effects",
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            Field::Moods | Field::SoundscapeSecondary | Field::VisualEffects
        )
    }

    /// Option table for this field; empty for the free-text idea.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Field::Idea => &[],
            Field::Moods => form::MOODS,
            Field::CameraMovement => form::CAMERA_MOVEMENTS,
            Field::CameraAngle => form::CAMERA_ANGLES,
            Field::CameraFocus => form::CAMERA_FOCUS,
            Field::SoundscapePrimary => form::SOUNDSCAPE_PRIMARY,
            Field::SoundscapeSecondary => form::SOUNDSCAPE_SECONDARY,
            Field::SoundscapeQuality => form::SOUNDSCAPE_QUALITY,
            Field::VisualEffects => form::VISUAL_EFFECTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Form,
    EditingIdea(String),
    PickingOption { cursor: usize },
    TogglingOptions { cursor: usize },
    PickingPreset { cursor: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Ok,
    Error,
}

#[derive(Debug, Clone)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
    expires: Option<Instant>,
}

pub struct App {
    pub form: FormState,
    pub mode: Mode,
    pub field_selected: usize,
    pub generated: Option<String>,
    pub validation: ValidationStatus,
    pub theme: ThemeController,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let preference = config::load_theme_preference();
        Self {
            form: FormState::default(),
            mode: Mode::Form,
            field_selected: 0,
            generated: None,
            validation: ValidationStatus::Unchecked,
            theme: ThemeController::new(preference),
            status: None,
            should_quit: false,
        }
    }

    pub fn selected_field(&self) -> Field {
        Field::ALL[self.field_selected]
    }

    /// Called on every poll tick: revert an expired copied label and keep the
    /// effective theme tracking the terminal while the preference is System.
    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
        self.theme.refresh();
    }

    fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if status.expires.is_some_and(|at| now >= at) {
                self.status = None;
            }
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind,
            expires: None,
        });
    }

    fn set_transient_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind,
            expires: Some(Instant::now() + COPIED_REVERT),
        });
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode.clone() {
            Mode::Form => self.handle_form(key),
            Mode::EditingIdea(buf) => self.handle_editing_idea(key, buf),
            Mode::PickingOption { cursor } => self.handle_picking_option(key, cursor),
            Mode::TogglingOptions { cursor } => self.handle_toggling_options(key, cursor),
            Mode::PickingPreset { cursor } => self.handle_picking_preset(key, cursor),
        }
    }

    fn handle_form(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.field_selected == 0 {
                    self.field_selected = Field::ALL.len() - 1;
                } else {
                    self.field_selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.field_selected = (self.field_selected + 1) % Field::ALL.len();
            }
            KeyCode::Enter => self.open_editor(),
            KeyCode::Char('p') => self.mode = Mode::PickingPreset { cursor: 0 },
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('c') => self.copy_to_clipboard(),
            KeyCode::Char('s') => self.save_to_file(),
            KeyCode::Char('v') => self.run_self_test(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn open_editor(&mut self) {
        let field = self.selected_field();
        match field {
            Field::Idea => self.mode = Mode::EditingIdea(self.form.idea.clone()),
            _ if field.is_multi() => self.mode = Mode::TogglingOptions { cursor: 0 },
            _ => {
                let current = self.single_value(field);
                let cursor = field
                    .options()
                    .iter()
                    .position(|opt| *opt == current)
                    .unwrap_or(0);
                self.mode = Mode::PickingOption { cursor };
            }
        }
    }

    fn handle_editing_idea(&mut self, key: KeyCode, mut buf: String) {
        match key {
            KeyCode::Char(c) => {
                buf.push(c);
                self.mode = Mode::EditingIdea(buf);
            }
            KeyCode::Backspace => {
                buf.pop();
                self.mode = Mode::EditingIdea(buf);
            }
            KeyCode::Enter => {
                self.form.idea = buf;
                self.mode = Mode::Form;
            }
            KeyCode::Esc => {
                self.mode = Mode::Form;
            }
            _ => {
                self.mode = Mode::EditingIdea(buf);
            }
        }
    }

    fn handle_picking_option(&mut self, key: KeyCode, cursor: usize) {
        let options = self.selected_field().options();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::PickingOption {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::PickingOption {
                    cursor: (cursor + 1).min(options.len().saturating_sub(1)),
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let value = options[cursor].to_string();
                match self.selected_field() {
                    Field::CameraMovement => self.form.camera_movement = value,
                    Field::CameraAngle => self.form.camera_angle = value,
                    Field::CameraFocus => self.form.camera_focus = value,
                    Field::SoundscapePrimary => self.form.soundscape_primary = value,
                    Field::SoundscapeQuality => self.form.soundscape_quality = value,
                    _ => {}
                }
                self.mode = Mode::Form;
            }
            KeyCode::Esc => {
                self.mode = Mode::Form;
            }
            _ => {
                self.mode = Mode::PickingOption { cursor };
            }
        }
    }

    fn handle_toggling_options(&mut self, key: KeyCode, cursor: usize) {
        let options = self.selected_field().options();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::TogglingOptions {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::TogglingOptions {
                    cursor: (cursor + 1).min(options.len().saturating_sub(1)),
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let item = options[cursor];
                match self.selected_field() {
                    Field::Moods => form::toggle(&mut self.form.moods, item),
                    Field::SoundscapeSecondary => {
                        form::toggle(&mut self.form.soundscape_secondary, item)
                    }
                    Field::VisualEffects => form::toggle(&mut self.form.visual_effects, item),
                    _ => {}
                }
                self.mode = Mode::TogglingOptions { cursor };
            }
            KeyCode::Esc => {
                self.mode = Mode::Form;
            }
            _ => {
                self.mode = Mode::TogglingOptions { cursor };
            }
        }
    }

    fn handle_picking_preset(&mut self, key: KeyCode, cursor: usize) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::PickingPreset {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::PickingPreset {
                    cursor: (cursor + 1).min(PRESETS.len() - 1),
                };
            }
            KeyCode::Enter => {
                let preset = &PRESETS[cursor];
                preset.apply(&mut self.form);
                self.set_status(
                    StatusKind::Info,
                    format!("Applied preset \"{}\"", preset.name),
                );
                self.mode = Mode::Form;
            }
            KeyCode::Esc => {
                self.mode = Mode::Form;
            }
            _ => {
                self.mode = Mode::PickingPreset { cursor };
            }
        }
    }

    fn single_value(&self, field: Field) -> &str {
        match field {
            Field::CameraMovement => &self.form.camera_movement,
            Field::CameraAngle => &self.form.camera_angle,
            Field::CameraFocus => &self.form.camera_focus,
            Field::SoundscapePrimary => &self.form.soundscape_primary,
            Field::SoundscapeQuality => &self.form.soundscape_quality,
            _ => "",
        }
    }

    /// Snapshot the form into a fresh prompt. Any previous self-test result
    /// no longer applies.
    fn generate(&mut self) {
        let prompt = prompt::build(&self.form);
        self.generated = Some(prompt::to_json_text(&prompt));
        self.validation = ValidationStatus::Unchecked;
        self.set_status(StatusKind::Info, "Prompt generated");
    }

    fn copy_to_clipboard(&mut self) {
        let Some(text) = self.generated.clone() else {
            self.set_status(StatusKind::Error, "Nothing to copy - generate first (g)");
            return;
        };
        match clipboard::copy(&text) {
            Ok(()) => self.set_transient_status(StatusKind::Ok, "Copied to clipboard"),
            Err(e) => self.set_status(StatusKind::Error, format!("Copy failed: {e}")),
        }
    }

    fn save_to_file(&mut self) {
        let Some(text) = self.generated.clone() else {
            self.set_status(StatusKind::Error, "Nothing to save - generate first (g)");
            return;
        };
        match export::write_prompt_file(&self.form.idea, &text) {
            Ok(path) => {
                self.set_status(StatusKind::Ok, format!("Saved to {}", path.display()));
            }
            Err(e) => self.set_status(StatusKind::Error, format!("Save failed: {e}")),
        }
    }

    fn run_self_test(&mut self) {
        let Some(text) = &self.generated else {
            self.set_status(StatusKind::Error, "Nothing to test - generate first (g)");
            return;
        };
        self.validation = prompt::self_test(text);
        match self.validation {
            ValidationStatus::Valid => self.set_status(StatusKind::Ok, "Self-test passed"),
            ValidationStatus::Invalid => self.set_status(StatusKind::Error, "Self-test failed"),
            ValidationStatus::Unchecked => {}
        }
    }

    fn reset(&mut self) {
        self.form = FormState::default();
        self.generated = None;
        self.validation = ValidationStatus::Unchecked;
        self.set_status(StatusKind::Info, "Reset to defaults");
    }

    fn cycle_theme(&mut self) {
        let next = self.theme.preference().next();
        self.theme.set_preference(next);
        match config::save_theme_preference(next) {
            Ok(()) => self.set_status(StatusKind::Info, format!("Theme: {}", next.label())),
            Err(e) => self.set_status(StatusKind::Error, format!("Theme not saved: {e}")),
        }
    }
}
