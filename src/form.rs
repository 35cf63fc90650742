/// Fixed option tables for every enumerated form field. The first entry of
/// each single-valued list is that field's default.
pub const MOODS: &[&str] = &[
    "Calm",
    "Cozy",
    "Dreamy",
    "Melancholy",
    "Mysterious",
    "Nostalgic",
    "Uplifting",
    "Eerie",
];

pub const CAMERA_MOVEMENTS: &[&str] = &[
    "Static",
    "Slow Zoom In",
    "Slow Zoom Out",
    "Slow Pan Left",
    "Slow Pan Right",
    "Orbit",
    "Handheld Drift",
];

pub const CAMERA_ANGLES: &[&str] = &[
    "Eye Level",
    "Close-Up",
    "Macro",
    "Overhead",
    "Low Angle",
    "Wide Shot",
];

pub const CAMERA_FOCUS: &[&str] = &[
    "Soft Focus",
    "Shallow Depth of Field",
    "Deep Focus",
    "Rack Focus",
];

pub const SOUNDSCAPE_PRIMARY: &[&str] = &[
    "Rain",
    "Ocean Waves",
    "Crackling Fire",
    "Forest Ambience",
    "Wind",
    "White Noise",
    "Tapping",
    "Page Turning",
];

pub const SOUNDSCAPE_SECONDARY: &[&str] = &[
    "Thunder",
    "Wind",
    "Birdsong",
    "Rustling Leaves",
    "Clock Ticking",
    "Creaking Wood",
    "Distant Traffic",
    "Soft Whispers",
];

pub const SOUNDSCAPE_QUALITY: &[&str] = &[
    "Binaural",
    "Stereo Wide",
    "Crisp",
    "Muffled",
    "Layered",
];

pub const VISUAL_EFFECTS: &[&str] = &[
    "Film Grain",
    "Soft Glow",
    "Slow Motion",
    "Bokeh",
    "Fog",
    "Light Rays",
    "Vignette",
    "Lens Flare",
];

/// Current selections for every control in the prompt form.
///
/// Single-valued fields always hold a member of their option table.
/// Multi-valued fields keep selection order and never hold duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub idea: String,
    pub moods: Vec<String>,
    pub camera_movement: String,
    pub camera_angle: String,
    pub camera_focus: String,
    pub soundscape_primary: String,
    pub soundscape_secondary: Vec<String>,
    pub soundscape_quality: String,
    pub visual_effects: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            idea: String::new(),
            moods: Vec::new(),
            camera_movement: CAMERA_MOVEMENTS[0].to_string(),
            camera_angle: CAMERA_ANGLES[0].to_string(),
            camera_focus: CAMERA_FOCUS[0].to_string(),
            soundscape_primary: SOUNDSCAPE_PRIMARY[0].to_string(),
            soundscape_secondary: Vec::new(),
            soundscape_quality: SOUNDSCAPE_QUALITY[0].to_string(),
            visual_effects: Vec::new(),
        }
    }
}

/// Add `item` to `set` if absent, remove it if present. Selection order of
/// the remaining items is preserved.
pub fn toggle(set: &mut Vec<String>, item: &str) {
    if let Some(pos) = set.iter().position(|v| v == item) {
        set.remove(pos);
    } else {
        set.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_listed_options() {
        let form = FormState::default();
        assert_eq!(form.camera_movement, "Static");
        assert_eq!(form.camera_angle, "Eye Level");
        assert_eq!(form.camera_focus, "Soft Focus");
        assert_eq!(form.soundscape_primary, "Rain");
        assert_eq!(form.soundscape_quality, "Binaural");
        assert!(form.idea.is_empty());
        assert!(form.moods.is_empty());
        assert!(form.soundscape_secondary.is_empty());
        assert!(form.visual_effects.is_empty());
    }

    #[test]
    fn toggle_twice_is_a_noop() {
        let mut moods = vec!["Calm".to_string()];
        let before = moods.clone();
        toggle(&mut moods, "Dreamy");
        toggle(&mut moods, "Dreamy");
        assert_eq!(moods, before);
    }

    #[test]
    fn toggle_preserves_selection_order() {
        let mut set = Vec::new();
        toggle(&mut set, "Melancholy");
        toggle(&mut set, "Calm");
        toggle(&mut set, "Dreamy");
        toggle(&mut set, "Calm");
        assert_eq!(set, vec!["Melancholy".to_string(), "Dreamy".to_string()]);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut set = Vec::new();
        toggle(&mut set, "Fog");
        toggle(&mut set, "Fog");
        toggle(&mut set, "Fog");
        assert_eq!(set, vec!["Fog".to_string()]);
    }

    #[test]
    fn option_tables_have_no_duplicates() {
        for table in [
            MOODS,
            CAMERA_MOVEMENTS,
            CAMERA_ANGLES,
            CAMERA_FOCUS,
            SOUNDSCAPE_PRIMARY,
            SOUNDSCAPE_SECONDARY,
            SOUNDSCAPE_QUALITY,
            VISUAL_EFFECTS,
        ] {
            let mut seen = std::collections::HashSet::new();
            for opt in table {
                assert!(seen.insert(opt), "duplicate option {opt}");
            }
        }
    }
}
