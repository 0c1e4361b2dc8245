use crossword_solver::crossword::puzzle::Puzzle;
use crossword_solver::crossword::structure::Structure;
use crossword_solver::crossword::vocabulary::{Vocabulary, WordId};

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

/// Grids up to `max_side` on each side, roughly two thirds fillable.
pub fn structure_strategy(max_side: usize) -> BoxedStrategy<Structure> {
    (1..=max_side, 1..=max_side)
        .prop_flat_map(|(width, height)| {
            vec(prop::bool::weighted(0.7), width * height).prop_map(move |cells| {
                Structure::new(width, height, cells).expect("cell count matches dimensions")
            })
        })
        .boxed()
}

/// Words of length 2 to 4 over a three letter alphabet, so crossings often
/// agree and often clash.
pub fn vocabulary_strategy(max_words: usize) -> BoxedStrategy<Vocabulary> {
    vec("[ABC]{2,4}", 0..=max_words)
        .prop_map(|words| words.into_iter().collect())
        .boxed()
}

pub fn puzzle_strategy() -> BoxedStrategy<Puzzle> {
    (structure_strategy(3), vocabulary_strategy(10))
        .prop_map(|(structure, vocabulary)| Puzzle::new(structure, vocabulary))
        .boxed()
}

/// Checks every constraint directly against the puzzle, without going
/// through `Assignment`.
pub fn satisfies(puzzle: &Puzzle, words: &[Option<WordId>]) -> bool {
    let n = puzzle.num_vars();
    if words.len() != n {
        return false;
    }
    let Some(words) = words.iter().copied().collect::<Option<Vec<WordId>>>() else {
        return false;
    };
    for x in 0..n {
        if puzzle.vocabulary[words[x]].chars().count() != puzzle.variable(x).length {
            return false;
        }
        for y in 0..n {
            if x == y {
                continue;
            }
            if words[x] == words[y] {
                return false;
            }
            if let Some((i, j)) = puzzle.overlap(x, y) {
                let a = puzzle.vocabulary[words[x]].chars().nth(i);
                let b = puzzle.vocabulary[words[y]].chars().nth(j);
                if a != b {
                    return false;
                }
            }
        }
    }
    true
}

/// Every solution, found by exhaustive enumeration over the full vocabulary.
pub fn all_solutions(puzzle: &Puzzle) -> Vec<Vec<WordId>> {
    fn extend(puzzle: &Puzzle, partial: &mut Vec<WordId>, out: &mut Vec<Vec<WordId>>) {
        let var = partial.len();
        if var == puzzle.num_vars() {
            out.push(partial.clone());
            return;
        }
        for word in puzzle.vocabulary.ids() {
            if puzzle.vocabulary[word].chars().count() != puzzle.variable(var).length
                || partial.contains(&word)
            {
                continue;
            }
            let fits = partial.iter().enumerate().all(|(other, &placed)| {
                puzzle.overlap(var, other).is_none_or(|(i, j)| {
                    puzzle.vocabulary[word].chars().nth(i)
                        == puzzle.vocabulary[placed].chars().nth(j)
                })
            });
            if fits {
                partial.push(word);
                extend(puzzle, partial, out);
                partial.pop();
            }
        }
    }

    let mut out = Vec::new();
    extend(puzzle, &mut Vec::new(), &mut out);
    out
}
