use crossword_solver::crossword::puzzle::Puzzle;
use crossword_solver::csp::arc_consistency::{FifoQueue, LifoStack, ac3};
use crossword_solver::csp::domain::Domains;

use super::strategy::{all_solutions, puzzle_strategy};

use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

fn node_consistent(puzzle: &Puzzle) -> Domains {
    let mut domains = Domains::new(puzzle);
    domains.enforce_node_consistency(puzzle);
    domains
}

proptest! {
    #[test]
    fn ac3_is_idempotent(puzzle in puzzle_strategy()) {
        let mut once = node_consistent(&puzzle);
        let first = ac3(&puzzle, &mut once, None, &mut FifoQueue::default());
        prop_assume!(first.is_consistent());

        let mut twice = once.clone();
        let second = ac3(&puzzle, &mut twice, None, &mut FifoQueue::default());
        prop_assert!(second.is_consistent());
        prop_assert_eq!(second.removals, 0);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ac3_only_shrinks_domains(puzzle in puzzle_strategy()) {
        let before = node_consistent(&puzzle);
        let mut after = before.clone();
        let result = ac3(&puzzle, &mut after, None, &mut FifoQueue::default());
        prop_assert!(after.is_subset_of(&before));
        prop_assert_eq!(before.total_size() - after.total_size(), result.removals);
    }

    #[test]
    fn ac3_keeps_every_solution(puzzle in puzzle_strategy()) {
        let mut domains = node_consistent(&puzzle);
        let result = ac3(&puzzle, &mut domains, None, &mut FifoQueue::default());
        let solutions = all_solutions(&puzzle);
        if !solutions.is_empty() {
            prop_assert!(result.is_consistent());
        }
        for solution in solutions {
            for (var, &word) in solution.iter().enumerate() {
                prop_assert!(domains.contains(var, word));
            }
        }
    }

    #[test]
    fn fifo_and_lifo_reach_the_same_fixed_point(puzzle in puzzle_strategy()) {
        let mut fifo = node_consistent(&puzzle);
        let mut lifo = fifo.clone();
        let a = ac3(&puzzle, &mut fifo, None, &mut FifoQueue::default());
        let b = ac3(&puzzle, &mut lifo, None, &mut LifoStack::default());
        prop_assert_eq!(a.is_consistent(), b.is_consistent());
        if a.is_consistent() {
            prop_assert_eq!(fifo, lifo);
        }
    }

    #[test]
    fn arc_consistent_domains_have_support(puzzle in puzzle_strategy()) {
        let mut domains = node_consistent(&puzzle);
        let result = ac3(&puzzle, &mut domains, None, &mut FifoQueue::default());
        prop_assume!(result.is_consistent());
        for (x, y) in puzzle.arcs() {
            for &a in &domains[x] {
                prop_assert!(
                    domains[y].iter().any(|&b| puzzle.agree(x, a, y, b)),
                    "{} has no support in {}", &puzzle.vocabulary[a], puzzle.variable(y)
                );
            }
        }
    }
}
