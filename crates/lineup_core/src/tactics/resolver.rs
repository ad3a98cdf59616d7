//! Preset expansion and identity substitution.

use crate::models::{FormationPreset, IdGenerator, Player, PlayerDraft, PlayerId};

/// Highest jersey number handed out automatically.
pub const MAX_AUTO_NUMBER: u32 = 99;

/// Expand a preset into fresh players, one per slot, in template order.
///
/// Slot i (0-based) becomes "Player {i+1}" wearing the slot's number or
/// `i + 1`, placed at the slot's coordinates, without a photo.
pub fn apply_preset(preset: &FormationPreset, ids: &mut IdGenerator) -> Vec<Player> {
    preset
        .positions
        .iter()
        .enumerate()
        .map(|(index, slot)| Player {
            id: ids.next_player_id(),
            name: format!("Player {}", index + 1),
            position: slot.position.clone(),
            number: slot.number.unwrap_or(index as u32 + 1),
            photo: None,
            x: slot.x,
            y: slot.y,
        })
        .collect()
}

/// Build the player that takes `old`'s place.
///
/// The replacement gets a new identity but keeps `old`'s board coordinates,
/// whatever coordinates the draft carries, so the card does not jump.
pub fn build_replacement(old: &Player, draft: PlayerDraft, new_id: PlayerId) -> Player {
    let mut replacement = Player::from_draft(new_id, draft);
    replacement.x = old.x;
    replacement.y = old.y;
    replacement
}

/// Smallest jersey number in 1..=99 not worn by anyone on the board,
/// or `len + 1` when all of them are taken.
pub fn next_available_number(players: &[Player]) -> u32 {
    (1..=MAX_AUTO_NUMBER)
        .find(|n| !players.iter().any(|p| p.number == *n))
        .unwrap_or(players.len() as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::presets::{default_presets, find_preset};
    use std::collections::HashSet;

    #[test]
    fn test_apply_preset_numbers_and_names() {
        let mut ids = IdGenerator::new();
        let preset = find_preset(default_presets(), "4-3-3").unwrap();
        let players = apply_preset(preset, &mut ids);

        assert_eq!(players.len(), 11);
        for (i, (player, slot)) in players.iter().zip(&preset.positions).enumerate() {
            assert_eq!(player.number, i as u32 + 1);
            assert_eq!(player.name, format!("Player {}", i + 1));
            assert_eq!(player.position, slot.position);
            assert_eq!((player.x, player.y), (slot.x, slot.y));
            assert!(player.photo.is_none());
        }

        let unique: HashSet<_> = players.iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), 11);
    }

    #[test]
    fn test_apply_preset_keeps_template_numbers() {
        let mut preset = default_presets()[0].clone();
        preset.positions[0].number = Some(23);
        let players = apply_preset(&preset, &mut IdGenerator::new());
        assert_eq!(players[0].number, 23);
        assert_eq!(players[1].number, 2);
    }

    #[test]
    fn test_replacement_keeps_coordinates() {
        let old = Player::from_draft(
            PlayerId::new("old"),
            PlayerDraft::new("Player 9", "ST", 9).at(35.0, 25.0),
        );
        let draft = PlayerDraft::new("Timo Werner", "ST", 11).at(80.0, 10.0);
        let new = build_replacement(&old, draft, PlayerId::new("new"));

        assert_eq!(new.id.as_str(), "new");
        assert_eq!(new.name, "Timo Werner");
        assert_eq!(new.number, 11);
        assert_eq!(new.coords(), (35.0, 25.0));
    }

    #[test]
    fn test_next_available_number() {
        let mut ids = IdGenerator::new();
        assert_eq!(next_available_number(&[]), 1);

        let mut players = apply_preset(&default_presets()[1], &mut ids);
        assert_eq!(next_available_number(&players), 12);

        players.remove(4); // number 5
        assert_eq!(next_available_number(&players), 5);
    }

    #[test]
    fn test_next_available_number_exhausted() {
        let players: Vec<Player> = (1..=99)
            .map(|n| Player::from_draft(PlayerId::new(format!("p{n}")), PlayerDraft::new("X", "MF", n)))
            .collect();
        assert_eq!(next_available_number(&players), 100);
    }
}
