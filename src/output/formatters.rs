//! Formatting utilities for terminal output

use crate::core::{Player, Tile};
use crate::session::ScoreLine;

/// Format a rack as bracketed slots, e.g. `[C3] [  ] [A1]`
///
/// The selected slot is wrapped in `>` `<` instead of brackets.
#[must_use]
pub fn rack_line(player: &Player, selection: Option<usize>) -> String {
    player
        .rack()
        .iter()
        .enumerate()
        .map(|(slot, tile)| {
            let body = tile.as_ref().map_or_else(|| "  ".to_string(), tile_label);
            if selection == Some(slot) {
                format!(">{body}<")
            } else {
                format!("[{body}]")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slot numbers aligned under [`rack_line`]
#[must_use]
pub fn rack_indices(player: &Player) -> String {
    (0..player.rack().len())
        .map(|slot| format!(" {slot:<2} "))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-character label for a tile: letter then value, values of 10 shown as `*`
#[must_use]
pub fn tile_label(tile: &Tile) -> String {
    match tile.value() {
        v @ 0..=9 => format!("{}{v}", tile.letter()),
        _ => format!("{}*", tile.letter()),
    }
}

/// One scoreboard row, padded for alignment
#[must_use]
pub fn score_row(line: &ScoreLine, name_width: usize) -> String {
    let marker = if line.is_leading { "  ← leading" } else { "" };
    format!(
        "{:<name_width$}  {:>4} pts{marker}",
        line.name, line.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let mut player = Player::new("Player 1");
        player.add_tile(Tile::new('C', 3)).unwrap();
        player.add_tile(Tile::new('Z', 10)).unwrap();
        player
    }

    #[test]
    fn tile_labels() {
        assert_eq!(tile_label(&Tile::new('A', 1)), "A1");
        assert_eq!(tile_label(&Tile::new('Q', 10)), "Q*");
    }

    #[test]
    fn rack_line_marks_selection_and_gaps() {
        let line = rack_line(&player(), Some(1));
        assert!(line.starts_with("[C3] >Z*< [  ]"));
        assert_eq!(line.matches("[  ]").count(), 5);
    }

    #[test]
    fn rack_indices_line_up() {
        let player = player();
        assert_eq!(
            rack_indices(&player).len(),
            rack_line(&player, None).chars().count()
        );
    }

    #[test]
    fn score_row_flags_leader() {
        let line = ScoreLine {
            name: "Player 2".to_string(),
            points: 14,
            is_leading: true,
        };
        assert_eq!(score_row(&line, 8), "Player 2    14 pts  ← leading");
    }
}
