//! Integration tests for the crossweave layout engine.
//!
//! These tests exercise the complete pipeline from raw word input through
//! placement to rendered output, for both strategies, against the
//! engine-level invariants: no cell conflicts, everything in bounds,
//! placements plus omissions accounting for every input word, and
//! reproducible layouts under a fixed seed.

use crossweave::grid::Orientation;
use crossweave::render::{display_rows, PuzzleOutput};
use crossweave::solver::{build_puzzle, BuildConfig, BuildResult, Strategy};
use crossweave::word_list::WordList;

fn build(words: &[&str], size: usize, strategy: Strategy) -> (WordList, BuildResult) {
    let list = WordList::from_words(words.to_vec());
    let config = BuildConfig {
        size,
        strategy,
        seed: 1234,
        ..BuildConfig::default()
    };
    let result = build_puzzle(&list, &config);
    (list, result)
}

const BOTH_STRATEGIES: [Strategy; 2] = [Strategy::Greedy, Strategy::Exhaustive];

/// Engine-level invariants that must hold for every build.
fn assert_invariants(result: &BuildResult, word_count: usize) {
    let size = result.grid.size();

    // Bounds and no-conflict: each placement's covered cells are in range
    // and the grid holds exactly the letters the placement wrote.
    for placement in &result.placements {
        for (row, col, ch) in placement.cells() {
            assert!(row < size && col < size, "cell out of bounds in {placement:?}");
            assert_eq!(
                result.grid.letter_at(row, col),
                Some(ch),
                "grid conflicts with {placement:?} at ({row}, {col})"
            );
        }
    }

    // Every occupied cell is explained by at least one placement.
    for (row, col, ch) in result.grid.occupied_cells() {
        assert!(
            result
                .placements
                .iter()
                .any(|p| p.letter_at(row, col) == Some(ch)),
            "stray letter {ch} at ({row}, {col})"
        );
    }

    // Placements plus omissions account for every input word exactly once.
    assert_eq!(result.placements.len() + result.omitted.len(), word_count);
}

mod scenarios {
    use super::*;

    #[test]
    fn test_cat_attack_interlocks() {
        for strategy in BOTH_STRATEGIES {
            let (_, result) = build(&["CAT", "ATTACK"], 9, strategy);
            assert_invariants(&result, 2);

            // ATTACK is seated first, centered horizontal
            let attack = &result.placements[0];
            assert_eq!(attack.word, "ATTACK");
            assert_eq!((attack.row, attack.col), (4, 1));
            assert_eq!(attack.orientation, Orientation::Horizontal);

            // CAT crosses it vertically through a shared letter
            let cat = &result.placements[1];
            assert_eq!(cat.word, "CAT");
            assert_eq!(cat.orientation, Orientation::Vertical);

            // At least one cell has two or more occupied neighbors
            assert!(result.score >= 1, "{strategy:?} produced a disjoint grid");
        }
    }

    #[test]
    fn test_single_word_on_tiny_grid() {
        let (_, result) = build(&["ZEBRA"], 5, Strategy::Greedy);
        assert_invariants(&result, 1);

        let zebra = &result.placements[0];
        assert_eq!((zebra.row, zebra.col), (2, 0));
        assert_eq!(zebra.orientation, Orientation::Horizontal);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_word_longer_than_grid_is_omitted() {
        for strategy in BOTH_STRATEGIES {
            let (_, result) = build(&["SUPERCALIFRAGILISTIC", "CAT", "ATTACK"], 9, strategy);
            assert_invariants(&result, 3);

            assert_eq!(result.omitted, vec!["SUPERCALIFRAGILISTIC".to_string()]);
            assert_eq!(result.placements.len(), 2);
            // The rest of the build proceeds normally
            assert_eq!(result.placements[0].word, "ATTACK");
        }
    }

    #[test]
    fn test_empty_word_list_yields_blank_grid() {
        for strategy in BOTH_STRATEGIES {
            let (_, result) = build(&[], 15, strategy);
            assert_invariants(&result, 0);

            assert!(result.placements.is_empty());
            assert!(result.omitted.is_empty());
            assert_eq!(result.grid.size(), 15);
            assert!(result.grid.occupied_cells().next().is_none());

            let rows = display_rows(&result.grid);
            assert_eq!(rows.len(), 15);
            assert!(rows.iter().all(|r| r.iter().all(String::is_empty)));
        }
    }
}

mod invariants {
    use super::*;

    const WORDS: [&str; 8] = [
        "stream", "master", "trees", "seam", "crossword", "word", "down", "across",
    ];

    #[test]
    fn test_larger_build_holds_invariants() {
        for strategy in BOTH_STRATEGIES {
            let (_, result) = build(&WORDS, 13, strategy);
            assert_invariants(&result, WORDS.len());
        }
    }

    #[test]
    fn test_identical_seeds_reproduce_the_layout() {
        for strategy in BOTH_STRATEGIES {
            let (_, a) = build(&WORDS, 13, strategy);
            let (_, b) = build(&WORDS, 13, strategy);
            assert_eq!(a.placements, b.placements, "{strategy:?} not reproducible");
            assert_eq!(a.omitted, b.omitted);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_different_seeds_may_differ_but_stay_valid() {
        // XYLYX shares no letters with the rest, forcing the random path
        let list = WordList::from_words(["attack", "xylyx", "cat"]);
        for seed in [0, 1, 99] {
            let config = BuildConfig {
                size: 9,
                seed,
                ..BuildConfig::default()
            };
            let result = build_puzzle(&list, &config);
            assert_invariants(&result, 3);
        }
    }

    #[test]
    fn test_intersections_are_perpendicular_single_cell() {
        for strategy in BOTH_STRATEGIES {
            let (_, result) = build(&["stream", "master", "trees", "seam"], 11, strategy);
            assert_invariants(&result, 4);

            for (i, a) in result.placements.iter().enumerate() {
                for b in &result.placements[i + 1..] {
                    let shared: Vec<_> = a
                        .cells()
                        .filter(|&(row, col, _)| b.letter_at(row, col).is_some())
                        .collect();
                    if !shared.is_empty() {
                        assert_eq!(shared.len(), 1, "{a:?} / {b:?} share a run");
                        assert_ne!(a.orientation, b.orientation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_scores_at_least_as_well_as_greedy() {
        // Small enough that the backtracker explores the whole tree, which
        // includes the greedy commit sequence as one of its branches.
        let words = ["CAT", "ATTACK", "TACK"];
        let (_, greedy) = build(&words, 9, Strategy::Greedy);
        let (_, exhaustive) = build(&words, 9, Strategy::Exhaustive);
        assert_eq!(exhaustive.placements.len(), 3);
        assert!(
            exhaustive.score >= greedy.score,
            "backtracking ({}) lost to greedy ({})",
            exhaustive.score,
            greedy.score
        );
    }
}

mod output {
    use super::*;

    #[test]
    fn test_json_payload_round_trip() {
        let list = WordList::parse_from_str("attack;assault\ncat;feline\n");
        let config = BuildConfig {
            size: 9,
            seed: 5,
            ..BuildConfig::default()
        };
        let result = build_puzzle(&list, &config);
        let output = PuzzleOutput::new(&result, &list);

        let json = serde_json::to_value(&output).unwrap();

        // Blank cells render as empty strings
        assert_eq!(json["grid"][0][0], "");
        // Clue records carry their placed positions
        let first = &json["words"][0];
        assert_eq!(first["word"], "ATTACK");
        assert_eq!(first["clue"], "assault");
        assert_eq!(first["row"], 4);
        assert_eq!(first["col"], 1);
        assert_eq!(first["orientation"], "horizontal");
        assert_eq!(json["omitted"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_clueless_words_serialize_without_clue_field() {
        let list = WordList::from_words(["cat", "attack"]);
        let result = build_puzzle(&list, &BuildConfig { size: 9, ..BuildConfig::default() });
        let output = PuzzleOutput::new(&result, &list);

        let json = serde_json::to_value(&output).unwrap();
        assert!(json["words"][0].get("clue").is_none());
    }
}
