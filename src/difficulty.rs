//! This module defines the difficulty tiers offered by this crate together
//! with the per-tier settings that puzzle generation and scoring read.

use serde::{Deserialize, Serialize};

/// The difficulty tiers at which puzzles can be generated. Each tier maps to
/// stock [DifficultySettings], which control how many cells are removed from
/// a solved board and which base score a completed game awards.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// The easiest tier: 40 cells are removed and the base score is 1000.
    Easy,

    /// The second tier: 50 cells are removed and the base score is 2000.
    Medium,

    /// The third tier: 60 cells are removed and the base score is 3000.
    Hard,

    /// The hardest tier: 70 cells are removed and the base score is 4000.
    Expert
}

impl Difficulty {

    /// All difficulty tiers, in ascending order of hardness.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert
    ];
}

/// The tunable parameters behind one difficulty tier. The stock tiers are
/// available through associated functions, but both fields are public, so
/// custom settings can be constructed directly and passed to a
/// [Generator](crate::generator::Generator) or a
/// [Session](crate::session::Session) like any stock tier.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DifficultySettings {

    /// The number of cells that are cleared from a solved board when a
    /// puzzle with these settings is generated. Must be at most 81.
    pub cells_to_remove: usize,

    /// The score awarded for a puzzle with these settings that is completed
    /// within the first minute. Every further elapsed minute deducts one
    /// point, to a minimum score of 0.
    pub base_score: u32
}

impl DifficultySettings {

    /// The stock settings of [Difficulty::Easy].
    pub fn easy() -> DifficultySettings {
        DifficultySettings {
            cells_to_remove: 40,
            base_score: 1000
        }
    }

    /// The stock settings of [Difficulty::Medium].
    pub fn medium() -> DifficultySettings {
        DifficultySettings {
            cells_to_remove: 50,
            base_score: 2000
        }
    }

    /// The stock settings of [Difficulty::Hard].
    pub fn hard() -> DifficultySettings {
        DifficultySettings {
            cells_to_remove: 60,
            base_score: 3000
        }
    }

    /// The stock settings of [Difficulty::Expert].
    pub fn expert() -> DifficultySettings {
        DifficultySettings {
            cells_to_remove: 70,
            base_score: 4000
        }
    }

    /// Gets the stock settings of the given difficulty tier.
    pub fn of(difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => DifficultySettings::easy(),
            Difficulty::Medium => DifficultySettings::medium(),
            Difficulty::Hard => DifficultySettings::hard(),
            Difficulty::Expert => DifficultySettings::expert()
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn stock_settings_table() {
        assert_eq!(40, DifficultySettings::easy().cells_to_remove);
        assert_eq!(1000, DifficultySettings::easy().base_score);
        assert_eq!(50, DifficultySettings::medium().cells_to_remove);
        assert_eq!(2000, DifficultySettings::medium().base_score);
        assert_eq!(60, DifficultySettings::hard().cells_to_remove);
        assert_eq!(3000, DifficultySettings::hard().base_score);
        assert_eq!(70, DifficultySettings::expert().cells_to_remove);
        assert_eq!(4000, DifficultySettings::expert().base_score);
    }

    #[test]
    fn of_resolves_each_tier() {
        assert_eq!(DifficultySettings::easy(),
            DifficultySettings::of(Difficulty::Easy));
        assert_eq!(DifficultySettings::medium(),
            DifficultySettings::of(Difficulty::Medium));
        assert_eq!(DifficultySettings::hard(),
            DifficultySettings::of(Difficulty::Hard));
        assert_eq!(DifficultySettings::expert(),
            DifficultySettings::of(Difficulty::Expert));
    }

    #[test]
    fn tiers_ascend_in_removed_cells() {
        for window in Difficulty::ALL.windows(2) {
            let lower = DifficultySettings::of(window[0]);
            let higher = DifficultySettings::of(window[1]);

            assert!(lower.cells_to_remove < higher.cells_to_remove);
            assert!(lower.base_score < higher.base_score);
        }
    }

    #[test]
    fn serde_round_trips() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!("\"Hard\"", json);

        let difficulty: Difficulty =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(Difficulty::Hard, difficulty);

        let settings = DifficultySettings {
            cells_to_remove: 33,
            base_score: 500
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: DifficultySettings =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(settings, deserialized);
    }
}
