//! Search algorithms that drive a [`Task`] from its initial state to its
//! goal: breadth-first search (optimal, heuristic-free) and A* (optimal
//! whenever the heuristic is admissible).

mod astar;
mod bfs;

pub use astar::astar;
pub use bfs::bfs;

use crate::search::heuristics::Heuristic;
use crate::task::Task;

/// The outcome of one `search` call.
///
/// "No solution" is a proven or exhausted search, not an error: it is
/// reported to the caller as a diagnostic, not a fatal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Success(Vec<String>),
    NoSolution,
}

/// Selects which search driver the CLI runs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// Breadth-first search over the ground state space.
    Bfs,
    /// A*, guided by the chosen heuristic.
    Astar,
}

impl SearchEngineName {
    pub fn search(&self, task: &Task, heuristic: &dyn Heuristic) -> SearchResult {
        match self {
            SearchEngineName::Bfs => bfs(task),
            SearchEngineName::Astar => astar(task, heuristic),
        }
    }
}

#[cfg(test)]
mod blocks_world_tests {
    use super::*;
    use crate::ground;
    use crate::parsed_types::{Domain, Problem};
    use crate::parsers::Parser;
    use crate::search::heuristics::{BlindHeuristic, HeuristicName, LandmarkHeuristic};

    fn blocks_domain() -> Domain {
        let input = r#"(define (domain blocks)
            (:predicates (on ?x ?y) (ontable ?x) (clear ?x) (handempty) (holding ?x))
            (:action pick-up
                :parameters (?x)
                :precondition (and (clear ?x) (ontable ?x) (handempty))
                :effect (and (holding ?x) (not (clear ?x)) (not (ontable ?x)) (not (handempty))))
            (:action put-down
                :parameters (?x)
                :precondition (holding ?x)
                :effect (and (ontable ?x) (clear ?x) (handempty) (not (holding ?x))))
            (:action stack
                :parameters (?x ?y)
                :precondition (and (holding ?x) (clear ?y))
                :effect (and (on ?x ?y) (clear ?x) (handempty) (not (holding ?x)) (not (clear ?y))))
            (:action unstack
                :parameters (?x ?y)
                :precondition (and (on ?x ?y) (clear ?x) (handempty))
                :effect (and (holding ?x) (clear ?y) (not (on ?x ?y)) (not (clear ?x)) (not (handempty)))))"#;
        Domain::from_str(input).unwrap()
    }

    #[test]
    fn pick_up_single_block() {
        let domain = blocks_domain();
        let problem_input = r#"(define (problem pickup-one)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear a) (handempty))
            (:goal (and (holding a))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        let task = ground(&domain, &problem, true, true).unwrap();

        assert_eq!(bfs(&task), SearchResult::Success(vec!["(pick-up a)".to_string()]));

        let landmark = LandmarkHeuristic::new(&task);
        match astar(&task, &landmark) {
            SearchResult::Success(plan) => assert_eq!(plan.len(), 1),
            SearchResult::NoSolution => panic!("expected a plan"),
        }
    }

    #[test]
    fn stack_one_block_on_another() {
        let domain = blocks_domain();
        let problem_input = r#"(define (problem stack-two)
            (:domain blocks)
            (:objects a b)
            (:init (ontable a) (ontable b) (clear a) (clear b) (handempty))
            (:goal (and (on a b))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        let task = ground(&domain, &problem, true, true).unwrap();

        match bfs(&task) {
            SearchResult::Success(plan) => assert_eq!(plan.len(), 2),
            SearchResult::NoSolution => panic!("expected a plan"),
        }

        let landmark = LandmarkHeuristic::new(&task);
        match astar(&task, &landmark) {
            SearchResult::Success(plan) => assert_eq!(plan.len(), 2),
            SearchResult::NoSolution => panic!("expected a plan"),
        }
    }

    #[test]
    fn unsolvable_goal_has_no_plan() {
        let domain = blocks_domain();
        // holding and handempty can never hold simultaneously.
        let problem_input = r#"(define (problem impossible)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear a) (handempty))
            (:goal (and (holding a) (handempty))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        let task = ground(&domain, &problem, true, true).unwrap();

        assert_eq!(bfs(&task), SearchResult::NoSolution);
        assert_eq!(astar(&task, &BlindHeuristic), SearchResult::NoSolution);
    }

    #[test]
    fn every_search_and_heuristic_name_is_constructible() {
        for search in [SearchEngineName::Bfs, SearchEngineName::Astar] {
            for heuristic_name in [HeuristicName::Blind, HeuristicName::Landmark] {
                let domain = blocks_domain();
                let problem_input = r#"(define (problem pickup-one)
                    (:domain blocks)
                    (:objects a)
                    (:init (ontable a) (clear a) (handempty))
                    (:goal (and (holding a))))"#;
                let problem = Problem::from_str(problem_input).unwrap();
                let task = ground(&domain, &problem, true, true).unwrap();
                let heuristic = heuristic_name.create(&task);
                assert_eq!(
                    search.search(&task, heuristic.as_ref()),
                    SearchResult::Success(vec!["(pick-up a)".to_string()])
                );
            }
        }
    }
}
