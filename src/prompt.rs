use serde::Serialize;
use serde_json::Value;

use crate::form::FormState;

/// The generated prompt object. Field order here is the key order of the
/// serialized JSON.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratedPrompt {
    pub title: String,
    pub description: String,
    pub style: String,
    pub mood: Vec<String>,
    pub camera: Camera,
    pub soundscape: Soundscape,
    pub visual_effects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Camera {
    pub movement: String,
    pub angle: String,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Soundscape {
    pub primary: String,
    pub secondary: Vec<String>,
    pub quality: String,
}

/// Outcome of the structural self-test. New prompts start `Unchecked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Unchecked,
    Valid,
    Invalid,
}

/// Build the prompt object from a form snapshot. Pure and total over any
/// valid `FormState`.
pub fn build(form: &FormState) -> GeneratedPrompt {
    GeneratedPrompt {
        title: form.idea.clone(),
        description: format!(
            "ASMR video: {}. A slow, immersive scene with rich textural detail.",
            form.idea
        ),
        style: "ASMR".to_string(),
        mood: form.moods.clone(),
        camera: Camera {
            movement: form.camera_movement.clone(),
            angle: form.camera_angle.clone(),
            focus: form.camera_focus.clone(),
        },
        soundscape: Soundscape {
            primary: form.soundscape_primary.clone(),
            secondary: form.soundscape_secondary.clone(),
            quality: form.soundscape_quality.clone(),
        },
        visual_effects: form.visual_effects.clone(),
    }
}

/// Serialize a prompt for display and export (2-space indentation).
pub fn to_json_text(prompt: &GeneratedPrompt) -> String {
    // Serialize of plain strings and vecs cannot fail.
    serde_json::to_string_pretty(prompt).unwrap_or_default()
}

const TOP_LEVEL_KEYS: &[&str] = &[
    "title",
    "description",
    "style",
    "mood",
    "camera",
    "soundscape",
    "visual_effects",
];
const CAMERA_KEYS: &[&str] = &["movement", "angle", "focus"];
const SOUNDSCAPE_KEYS: &[&str] = &["primary", "secondary", "quality"];

/// Structural self-test: parse the text and check that the expected keys are
/// present at the top level and inside `camera` and `soundscape`. Presence
/// only; value types and enum membership are not checked.
pub fn self_test(json_text: &str) -> ValidationStatus {
    let Ok(value) = serde_json::from_str::<Value>(json_text) else {
        return ValidationStatus::Invalid;
    };
    let Some(top) = value.as_object() else {
        return ValidationStatus::Invalid;
    };
    if !TOP_LEVEL_KEYS.iter().all(|k| top.contains_key(*k)) {
        return ValidationStatus::Invalid;
    }
    let camera_ok = top
        .get("camera")
        .and_then(Value::as_object)
        .is_some_and(|c| CAMERA_KEYS.iter().all(|k| c.contains_key(*k)));
    let soundscape_ok = top
        .get("soundscape")
        .and_then(Value::as_object)
        .is_some_and(|s| SOUNDSCAPE_KEYS.iter().all(|k| s.contains_key(*k)));
    if camera_ok && soundscape_ok {
        ValidationStatus::Valid
    } else {
        ValidationStatus::Invalid
    }
}

/// Filename for export: the idea lowercased with whitespace runs collapsed
/// to single underscores, or "prompt.json" when the idea is blank.
pub fn export_filename(idea: &str) -> String {
    let slug = idea
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if slug.is_empty() {
        "prompt.json".to_string()
    } else {
        format!("{slug}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PRESETS;

    #[test]
    fn built_prompt_always_self_tests_valid() {
        let mut form = FormState {
            idea: "forest rain at night".to_string(),
            ..FormState::default()
        };
        assert_eq!(self_test(&to_json_text(&build(&form))), ValidationStatus::Valid);

        for preset in PRESETS {
            preset.apply(&mut form);
            let text = to_json_text(&build(&form));
            assert_eq!(self_test(&text), ValidationStatus::Valid);
        }
    }

    #[test]
    fn forest_rain_example() {
        let mut form = FormState {
            idea: "forest rain at night".to_string(),
            ..FormState::default()
        };
        PRESETS
            .iter()
            .find(|p| p.name == "Forest Rain")
            .unwrap()
            .apply(&mut form);
        let prompt = build(&form);

        assert_eq!(prompt.title, "forest rain at night");
        assert_eq!(prompt.style, "ASMR");
        assert_eq!(prompt.mood, vec!["Calm", "Melancholy"]);
        assert_eq!(prompt.camera.movement, "Slow Zoom In");
        assert_eq!(prompt.soundscape.primary, "Rain");
        assert_eq!(prompt.soundscape.secondary, vec!["Thunder", "Wind"]);
    }

    #[test]
    fn json_text_key_order_and_indent() {
        let text = to_json_text(&build(&FormState::default()));
        let title_at = text.find("\"title\"").unwrap();
        let camera_at = text.find("\"camera\"").unwrap();
        let effects_at = text.find("\"visual_effects\"").unwrap();
        assert!(title_at < camera_at && camera_at < effects_at);
        assert!(text.contains("\n  \"title\""));
    }

    #[test]
    fn self_test_rejects_truncated_text() {
        assert_eq!(self_test("{\"title\": \"forest"), ValidationStatus::Invalid);
        assert_eq!(self_test(""), ValidationStatus::Invalid);
        assert_eq!(self_test("[1, 2, 3]"), ValidationStatus::Invalid);
    }

    #[test]
    fn self_test_rejects_missing_nested_keys() {
        let mut value = serde_json::to_value(build(&FormState::default())).unwrap();
        value["camera"].as_object_mut().unwrap().remove("focus");
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(self_test(&text), ValidationStatus::Invalid);
    }

    #[test]
    fn self_test_rejects_missing_top_level_key() {
        let mut value = serde_json::to_value(build(&FormState::default())).unwrap();
        value.as_object_mut().unwrap().remove("soundscape");
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(self_test(&text), ValidationStatus::Invalid);
    }

    #[test]
    fn self_test_checks_presence_only() {
        // Wrong value types still pass; the check is structural.
        let text = r#"{
            "title": 7, "description": null, "style": [], "mood": "x",
            "camera": {"movement": 1, "angle": 2, "focus": 3},
            "soundscape": {"primary": [], "secondary": {}, "quality": 0},
            "visual_effects": null
        }"#;
        assert_eq!(self_test(text), ValidationStatus::Valid);
    }

    #[test]
    fn export_filename_slugifies_idea() {
        assert_eq!(export_filename("Forest Rain at Night"), "forest_rain_at_night.json");
        assert_eq!(export_filename("  spaced   out \t idea "), "spaced_out_idea.json");
        assert_eq!(export_filename(""), "prompt.json");
        assert_eq!(export_filename("   "), "prompt.json");
    }
}
