//! Built-in formation presets
//!
//! Eleven-slot templates for the common shapes. Position tags follow the
//! German abbreviations used on the board (TW = keeper, IV = centre-back,
//! LV/RV = full-backs, ZDM/ZM/ZOM = central midfield bands, LWV/RWV =
//! wing-backs, LF/RF = wide forwards). Slot order is significant: it drives
//! default numbering and stacking when a preset is applied.

use once_cell::sync::Lazy;

use crate::models::{FormationPreset, PresetSlot};

type SlotRow = (f64, f64, &'static str);

const BACK_FOUR: [SlotRow; 5] = [
    (50.0, 90.0, "TW"),
    (15.0, 75.0, "LV"),
    (35.0, 75.0, "IV"),
    (65.0, 75.0, "IV"),
    (85.0, 75.0, "RV"),
];

// ============================================================================
// Templates
// ============================================================================

const F4231: [SlotRow; 6] = [
    (35.0, 60.0, "ZDM"),
    (65.0, 60.0, "ZDM"),
    (20.0, 40.0, "LM"),
    (50.0, 45.0, "ZOM"),
    (80.0, 40.0, "RM"),
    (50.0, 20.0, "ST"),
];

const F442: [SlotRow; 6] = [
    (15.0, 50.0, "LM"),
    (35.0, 50.0, "ZM"),
    (65.0, 50.0, "ZM"),
    (85.0, 50.0, "RM"),
    (35.0, 25.0, "ST"),
    (65.0, 25.0, "ST"),
];

const F433: [SlotRow; 6] = [
    (25.0, 55.0, "ZM"),
    (50.0, 55.0, "ZM"),
    (75.0, 55.0, "ZM"),
    (20.0, 25.0, "LF"),
    (50.0, 20.0, "ST"),
    (80.0, 25.0, "RF"),
];

const F352: [SlotRow; 11] = [
    (50.0, 90.0, "TW"),
    (25.0, 75.0, "IV"),
    (50.0, 75.0, "IV"),
    (75.0, 75.0, "IV"),
    (10.0, 50.0, "LWV"),
    (30.0, 55.0, "ZM"),
    (50.0, 50.0, "ZM"),
    (70.0, 55.0, "ZM"),
    (90.0, 50.0, "RWV"),
    (40.0, 25.0, "ST"),
    (60.0, 25.0, "ST"),
];

fn slots(rows: &[SlotRow]) -> Vec<PresetSlot> {
    rows.iter().map(|&(x, y, position)| PresetSlot::new(x, y, position)).collect()
}

fn back_four_plus(rest: &[SlotRow]) -> Vec<PresetSlot> {
    let mut out = slots(&BACK_FOUR);
    out.extend(slots(rest));
    out
}

fn preset(label: &str, positions: Vec<PresetSlot>) -> FormationPreset {
    FormationPreset { name: label.to_string(), formation: label.to_string(), positions }
}

static DEFAULT_PRESETS: Lazy<Vec<FormationPreset>> = Lazy::new(|| {
    vec![
        preset("4-2-3-1", back_four_plus(&F4231)),
        preset("4-4-2", back_four_plus(&F442)),
        preset("4-3-3", back_four_plus(&F433)),
        preset("3-5-2", slots(&F352)),
    ]
});

/// All built-in presets, in menu order.
pub fn default_presets() -> &'static [FormationPreset] {
    &DEFAULT_PRESETS
}

/// Find a preset by name or formation label: exact match first, then
/// case-insensitive.
pub fn find_preset<'a>(presets: &'a [FormationPreset], key: &str) -> Option<&'a FormationPreset> {
    let key = key.trim();
    presets
        .iter()
        .find(|p| p.name == key || p.formation == key)
        .or_else(|| {
            presets
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(key) || p.formation.eq_ignore_ascii_case(key))
        })
}
