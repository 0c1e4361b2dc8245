use crossword_solver::csp::arc_consistency::ArcQueueType;
use crossword_solver::csp::backtracking::Backtracking;
use crossword_solver::csp::parallel::ParallelBacktracking;
use crossword_solver::csp::solver::{DefaultConfig, DynamicConfig, Solver};
use crossword_solver::csp::value_ordering::ValueOrderingType;
use crossword_solver::csp::variable_selection::VariableSelectionType;
use crossword_solver::solve;

use super::strategy::{all_solutions, puzzle_strategy, satisfies};

use proptest::prelude::*;

proptest! {
    #[test]
    fn solutions_are_complete_and_consistent(puzzle in puzzle_strategy()) {
        if let Some(solution) = solve(&puzzle) {
            prop_assert!(solution.is_complete());
            prop_assert!(solution.is_consistent(&puzzle));
            let words: Vec<_> = (0..puzzle.num_vars()).map(|v| solution.get(v)).collect();
            prop_assert!(satisfies(&puzzle, &words));
        }
    }

    #[test]
    fn finds_a_solution_whenever_one_exists(puzzle in puzzle_strategy()) {
        let exists = !all_solutions(&puzzle).is_empty();
        prop_assert_eq!(solve(&puzzle).is_some(), exists);
    }

    #[test]
    fn solving_is_deterministic(puzzle in puzzle_strategy()) {
        let first = Backtracking::<DefaultConfig>::new(&puzzle).solve();
        let second = Backtracking::<DefaultConfig>::new(&puzzle).solve();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_matches_sequential(puzzle in puzzle_strategy()) {
        let sequential = Backtracking::<DefaultConfig>::new(&puzzle).solve();
        let parallel = ParallelBacktracking::<DefaultConfig>::new(&puzzle).solve();
        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn every_strategy_agrees_on_satisfiability(
        puzzle in puzzle_strategy(),
        selection in prop_oneof![
            Just(VariableSelectionType::Mrv),
            Just(VariableSelectionType::Fixed),
            Just(VariableSelectionType::Random),
        ],
        ordering in prop_oneof![
            Just(ValueOrderingType::Lcv),
            Just(ValueOrderingType::Elimination),
            Just(ValueOrderingType::Domain),
        ],
        queue in prop_oneof![Just(ArcQueueType::Fifo), Just(ArcQueueType::Lifo)],
        seed in any::<u64>(),
    ) {
        let expected = solve(&puzzle).is_some();
        let mut solver = Backtracking::<DynamicConfig>::from_parts(
            &puzzle,
            selection.to_impl(&puzzle, seed),
            ordering.to_impl(),
            queue.to_impl(),
        );
        let solution = solver.solve();
        prop_assert_eq!(solution.is_some(), expected);
        if let Some(solution) = solution {
            prop_assert!(solution.is_consistent(&puzzle));
            prop_assert!(solution.is_complete());
        }
    }
}
