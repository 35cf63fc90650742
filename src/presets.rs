use crate::form::FormState;

/// A named partial bundle of form field values, applied in one step.
///
/// `None` fields are left untouched by `apply`; the free-text idea is never
/// part of a preset.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: &'static str,
    pub moods: Option<&'static [&'static str]>,
    pub camera_movement: Option<&'static str>,
    pub camera_angle: Option<&'static str>,
    pub camera_focus: Option<&'static str>,
    pub soundscape_primary: Option<&'static str>,
    pub soundscape_secondary: Option<&'static [&'static str]>,
    pub soundscape_quality: Option<&'static str>,
    pub visual_effects: Option<&'static [&'static str]>,
}

impl Preset {
    /// Overwrite exactly the fields this preset names on `form`.
    pub fn apply(&self, form: &mut FormState) {
        if let Some(moods) = self.moods {
            form.moods = moods.iter().map(|m| m.to_string()).collect();
        }
        if let Some(movement) = self.camera_movement {
            form.camera_movement = movement.to_string();
        }
        if let Some(angle) = self.camera_angle {
            form.camera_angle = angle.to_string();
        }
        if let Some(focus) = self.camera_focus {
            form.camera_focus = focus.to_string();
        }
        if let Some(primary) = self.soundscape_primary {
            form.soundscape_primary = primary.to_string();
        }
        if let Some(secondary) = self.soundscape_secondary {
            form.soundscape_secondary = secondary.iter().map(|s| s.to_string()).collect();
        }
        if let Some(quality) = self.soundscape_quality {
            form.soundscape_quality = quality.to_string();
        }
        if let Some(effects) = self.visual_effects {
            form.visual_effects = effects.iter().map(|e| e.to_string()).collect();
        }
    }
}

/// The fixed preset table. Names are unique.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Forest Rain",
        moods: Some(&["Calm", "Melancholy"]),
        camera_movement: Some("Slow Zoom In"),
        camera_angle: Some("Wide Shot"),
        camera_focus: Some("Soft Focus"),
        soundscape_primary: Some("Rain"),
        soundscape_secondary: Some(&["Thunder", "Wind"]),
        soundscape_quality: Some("Binaural"),
        visual_effects: Some(&["Fog", "Film Grain"]),
    },
    Preset {
        name: "Crackling Hearth",
        moods: Some(&["Cozy", "Nostalgic"]),
        camera_movement: Some("Static"),
        camera_angle: Some("Close-Up"),
        camera_focus: Some("Shallow Depth of Field"),
        soundscape_primary: Some("Crackling Fire"),
        soundscape_secondary: Some(&["Creaking Wood", "Clock Ticking"]),
        soundscape_quality: Some("Layered"),
        visual_effects: Some(&["Soft Glow", "Bokeh"]),
    },
    Preset {
        name: "Ocean Dusk",
        moods: Some(&["Calm", "Dreamy"]),
        camera_movement: Some("Slow Pan Right"),
        camera_angle: Some("Wide Shot"),
        camera_focus: Some("Deep Focus"),
        soundscape_primary: Some("Ocean Waves"),
        soundscape_secondary: Some(&["Wind", "Birdsong"]),
        soundscape_quality: Some("Stereo Wide"),
        visual_effects: Some(&["Light Rays", "Lens Flare"]),
    },
    // Partial bundle: leaves camera and effects as they are.
    Preset {
        name: "Library Whispers",
        moods: Some(&["Calm", "Mysterious"]),
        camera_movement: None,
        camera_angle: None,
        camera_focus: None,
        soundscape_primary: Some("Page Turning"),
        soundscape_secondary: Some(&["Soft Whispers", "Clock Ticking"]),
        soundscape_quality: Some("Crisp"),
        visual_effects: None,
    },
    Preset {
        name: "Night Drive",
        moods: Some(&["Melancholy", "Mysterious"]),
        camera_movement: Some("Handheld Drift"),
        camera_angle: Some("Eye Level"),
        camera_focus: Some("Rack Focus"),
        soundscape_primary: Some("White Noise"),
        soundscape_secondary: Some(&["Distant Traffic", "Rustling Leaves"]),
        soundscape_quality: Some("Muffled"),
        visual_effects: Some(&["Vignette", "Film Grain"]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for preset in PRESETS {
            assert!(seen.insert(preset.name), "duplicate preset {}", preset.name);
        }
    }

    #[test]
    fn apply_never_touches_idea() {
        let mut form = FormState {
            idea: "forest rain at night".to_string(),
            ..FormState::default()
        };
        for preset in PRESETS {
            preset.apply(&mut form);
            assert_eq!(form.idea, "forest rain at night");
        }
    }

    #[test]
    fn forest_rain_sets_declared_values() {
        let mut form = FormState::default();
        PRESETS[0].apply(&mut form);
        assert_eq!(form.moods, vec!["Calm", "Melancholy"]);
        assert_eq!(form.camera_movement, "Slow Zoom In");
        assert_eq!(form.soundscape_primary, "Rain");
        assert_eq!(form.soundscape_secondary, vec!["Thunder", "Wind"]);
    }

    #[test]
    fn partial_preset_leaves_unnamed_fields_alone() {
        let mut form = FormState {
            camera_movement: "Orbit".to_string(),
            visual_effects: vec!["Fog".to_string()],
            ..FormState::default()
        };
        let library = PRESETS
            .iter()
            .find(|p| p.name == "Library Whispers")
            .unwrap();
        library.apply(&mut form);
        assert_eq!(form.camera_movement, "Orbit");
        assert_eq!(form.visual_effects, vec!["Fog"]);
        assert_eq!(form.soundscape_primary, "Page Turning");
    }

    #[test]
    fn preset_values_are_members_of_option_tables() {
        use crate::form::*;
        for preset in PRESETS {
            if let Some(moods) = preset.moods {
                assert!(moods.iter().all(|m| MOODS.contains(m)));
            }
            if let Some(v) = preset.camera_movement {
                assert!(CAMERA_MOVEMENTS.contains(&v));
            }
            if let Some(v) = preset.camera_angle {
                assert!(CAMERA_ANGLES.contains(&v));
            }
            if let Some(v) = preset.camera_focus {
                assert!(CAMERA_FOCUS.contains(&v));
            }
            if let Some(v) = preset.soundscape_primary {
                assert!(SOUNDSCAPE_PRIMARY.contains(&v));
            }
            if let Some(secondary) = preset.soundscape_secondary {
                assert!(secondary.iter().all(|s| SOUNDSCAPE_SECONDARY.contains(s)));
            }
            if let Some(v) = preset.soundscape_quality {
                assert!(SOUNDSCAPE_QUALITY.contains(&v));
            }
            if let Some(effects) = preset.visual_effects {
                assert!(effects.iter().all(|e| VISUAL_EFFECTS.contains(e)));
            }
        }
    }
}
