//! Turns a lifted [`Domain`]/[`Problem`] pair into a fully ground [`Task`],
//! by cross-product enumeration of action schemas over type-consistent
//! object assignments, with static-precondition pruning and backward
//! relevance analysis from the goal.

mod error;
mod fact;
mod operator;

pub use error::GroundingError;
pub use fact::Fact;
pub use operator::Operator;

use crate::parsed_types::{ActionDefinition, Atom, Domain, Name, Problem, Term, Type, Typed};
use crate::task::Task;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Grounds `problem` (interpreted against `domain`) into a runnable [`Task`].
///
/// `remove_statics_from_initial_state` intersects the initial state with the
/// fact universe after grounding, so static facts no surviving operator
/// references are dropped. `remove_irrelevant_operators` gates backward
/// relevance analysis from the goal. Both default to `true` in the driver;
/// they are exposed here so tests can observe grounding with either step
/// disabled.
pub fn ground(
    domain: &Domain,
    problem: &Problem,
    remove_statics_from_initial_state: bool,
    remove_irrelevant_operators: bool,
) -> Result<Task, GroundingError> {
    let object_types = build_object_table(domain, problem)?;
    let static_predicates = static_predicate_names(domain);
    let type_map = build_type_map(domain, &object_types);

    let predicate_arity: HashMap<Name, usize> = domain
        .predicates()
        .iter()
        .map(|p| (p.name().clone(), p.variables().len()))
        .collect();
    for atom in problem.init().iter().chain(problem.goals()) {
        validate_ground_atom(atom, &predicate_arity, &object_types)?;
    }

    let init: HashSet<Fact> = problem.init().iter().map(Fact::from_atom).collect();
    let goal: HashSet<Fact> = problem.goals().iter().map(Fact::from_atom).collect();

    let pred_pos_obj = index_init_positions(&init);

    let mut operators = Vec::new();
    for action in domain.actions() {
        ground_action(
            action,
            &type_map,
            &static_predicates,
            &pred_pos_obj,
            &init,
            &mut operators,
        );
    }
    debug!(count = operators.len(), "grounded candidate operators");

    let mut fact_universe: HashSet<Fact> = goal.clone();
    for op in &operators {
        fact_universe.extend(op.pre().iter().cloned());
        fact_universe.extend(op.add().iter().cloned());
        fact_universe.extend(op.del().iter().cloned());
    }

    let init = if remove_statics_from_initial_state {
        init.into_iter()
            .filter(|f| fact_universe.contains(f))
            .collect()
    } else {
        init
    };

    if remove_irrelevant_operators {
        relevance_analysis(&mut operators, &goal);
    }

    Ok(Task::encode(
        domain.name().clone(),
        fact_universe,
        init,
        goal,
        operators,
    ))
}

/// Merges `domain.constants()` and `problem.objects()` into a single
/// name→type map. Constants may not shadow objects.
fn build_object_table(
    domain: &Domain,
    problem: &Problem,
) -> Result<HashMap<Name, Type>, GroundingError> {
    let mut table = HashMap::new();
    for typed in problem.objects().values().iter() {
        table.insert(typed.value().clone(), typed.type_().clone());
    }
    for typed in domain.constants().values().iter() {
        if table.contains_key(typed.value()) {
            return Err(GroundingError::DuplicateObject(typed.value().clone()));
        }
        table.insert(typed.value().clone(), typed.type_().clone());
    }
    Ok(table)
}

/// Checks one ground atom (an init or goal fact) against the domain's
/// predicate signatures and the merged object table: undeclared predicate,
/// wrong arity, undeclared object are all surfaced eagerly with the
/// offending token rather than silently dropped during grounding.
fn validate_ground_atom(
    atom: &Atom<Name>,
    predicate_arity: &HashMap<Name, usize>,
    object_types: &HashMap<Name, Type>,
) -> Result<(), GroundingError> {
    let pred_name: &Name = atom.predicate_name();
    let Some(&expected) = predicate_arity.get(pred_name) else {
        return Err(GroundingError::UndeclaredPredicate(pred_name.clone()));
    };
    if atom.values().len() != expected {
        return Err(GroundingError::ArityMismatch {
            predicate: pred_name.clone(),
            expected,
            actual: atom.values().len(),
        });
    }
    for object in atom.values() {
        if !object_types.contains_key(object) {
            return Err(GroundingError::UndeclaredObject(object.clone()));
        }
    }
    Ok(())
}

/// A predicate name is static iff it never appears in the add-list or
/// delete-list of any action schema.
fn static_predicate_names(domain: &Domain) -> HashSet<Name> {
    let mut dynamic = HashSet::new();
    for action in domain.actions() {
        for effect in action.effects() {
            let atom = match effect {
                crate::parsed_types::PropEffect::Add(atom) => atom,
                crate::parsed_types::PropEffect::Delete(atom) => atom,
            };
            let pred_name: &Name = atom.predicate_name();
            dynamic.insert(pred_name.clone());
        }
    }

    domain
        .predicates()
        .iter()
        .map(|p| p.name().clone())
        .filter(|name| !dynamic.contains(name))
        .collect()
}

/// For every object, walks parent pointers from its declared type(s) up to
/// the universal root, registering the object under every ancestor type
/// name (including its own declared type and "object").
fn build_type_map(domain: &Domain, objects: &HashMap<Name, Type>) -> HashMap<Name, HashSet<Name>> {
    let mut parents: HashMap<Name, Vec<Name>> = HashMap::new();
    for typed in domain.types().values().iter() {
        let child = typed.value().clone();
        let ancestors: Vec<Name> = typed
            .type_()
            .clone()
            .into_iter()
            .map(|p| p.name().clone())
            .collect();
        parents.insert(child, ancestors);
    }

    let mut type_map: HashMap<Name, HashSet<Name>> = HashMap::new();
    for (object, declared) in objects {
        for primitive in declared.clone().into_iter() {
            let mut visited = HashSet::new();
            let mut frontier = vec![primitive.name().clone()];
            while let Some(type_name) = frontier.pop() {
                if !visited.insert(type_name.clone()) {
                    continue;
                }
                type_map
                    .entry(type_name.clone())
                    .or_default()
                    .insert(object.clone());
                if let Some(next) = parents.get(&type_name) {
                    for parent in next {
                        if parent != &type_name {
                            frontier.push(parent.clone());
                        }
                    }
                }
            }
        }
        // Every object is trivially of type "object".
        type_map
            .entry(Name::new("object"))
            .or_default()
            .insert(object.clone());
    }
    type_map
}

/// Index of `(predicate, position, object)` triples seen in the initial
/// state, used for structural static-precondition pruning instead of a
/// regex over the fact string.
fn index_init_positions(init: &HashSet<Fact>) -> HashSet<(String, usize, Name)> {
    let mut index = HashSet::new();
    for fact in init {
        // Facts are canonical `(pred a1 a2 ...)` strings; split back out.
        let inner = &fact.as_str()[1..fact.as_str().len() - 1];
        let mut tokens = inner.split(' ');
        let Some(predicate) = tokens.next() else {
            continue;
        };
        for (position, arg) in tokens.enumerate() {
            index.insert((predicate.to_string(), position, Name::new(arg)));
        }
    }
    index
}

/// Grounds a single action schema into zero or more candidate [`Operator`]s.
fn ground_action(
    action: &ActionDefinition,
    type_map: &HashMap<Name, HashSet<Name>>,
    static_predicates: &HashSet<Name>,
    pred_pos_obj: &HashSet<(String, usize, Name)>,
    init: &HashSet<Fact>,
    out: &mut Vec<Operator>,
) {
    let parameters = action.parameters();
    let mut candidates: Vec<HashSet<Name>> = parameters
        .iter()
        .map(|p| candidate_objects(p.type_(), type_map))
        .collect();

    let parameter_index: HashMap<Name, usize> = parameters
        .iter()
        .enumerate()
        .map(|(i, p)| (p.value().as_ref().clone(), i))
        .collect();

    for precondition in action.preconditions() {
        let pred_name: &Name = precondition.predicate_name();
        if !static_predicates.contains(pred_name) {
            continue;
        }
        for (position, term) in precondition.values().iter().enumerate() {
            let Term::Variable(var) = term else {
                continue;
            };
            let Some(&param_index) = parameter_index.get(var.name()) else {
                continue;
            };
            let predicate = precondition.predicate_name().to_ascii_lowercase();
            candidates[param_index].retain(|obj| {
                pred_pos_obj.contains(&(predicate.clone(), position, obj.clone()))
            });
        }
    }

    if candidates.iter().any(HashSet::is_empty) {
        return;
    }

    for assignment in candidates
        .iter()
        .map(|c| c.iter().cloned().collect::<Vec<_>>())
        .multi_cartesian_product()
    {
        if let Some(op) = build_operator(action, &parameter_index, &assignment, static_predicates, init) {
            out.push(op);
        }
    }
}

fn candidate_objects(param_type: &Type, type_map: &HashMap<Name, HashSet<Name>>) -> HashSet<Name> {
    let mut candidates = HashSet::new();
    for primitive in param_type.clone().into_iter() {
        if let Some(objs) = type_map.get(primitive.name()) {
            candidates.extend(objs.iter().cloned());
        }
    }
    candidates
}

fn resolve(term: &Term, parameter_index: &HashMap<Name, usize>, assignment: &[Name]) -> Name {
    match term {
        Term::Name(name) => name.clone(),
        Term::Variable(var) => {
            let index = *parameter_index
                .get(var.name())
                .expect("action precondition/effect variable not bound by any parameter");
            assignment[index].clone()
        }
    }
}

fn ground_atom(atom: &Atom<Term>, parameter_index: &HashMap<Name, usize>, assignment: &[Name]) -> Fact {
    let args: Vec<Name> = atom
        .values()
        .iter()
        .map(|t| resolve(t, parameter_index, assignment))
        .collect();
    Fact::new(atom.predicate_name(), &args)
}

/// Builds one candidate operator from an action schema and a
/// parameter→object assignment, or returns `None` if a static precondition
/// fails the bit-exact init-membership check.
fn build_operator(
    action: &ActionDefinition,
    parameter_index: &HashMap<Name, usize>,
    assignment: &[Name],
    static_predicates: &HashSet<Name>,
    init: &HashSet<Fact>,
) -> Option<Operator> {
    let mut pre = HashSet::new();
    for atom in action.preconditions() {
        let fact = ground_atom(atom, parameter_index, assignment);
        let pred_name: &Name = atom.predicate_name();
        if static_predicates.contains(pred_name) && !init.contains(&fact) {
            return None;
        }
        pre.insert(fact);
    }

    let mut add = HashSet::new();
    let mut del = HashSet::new();
    for effect in action.effects() {
        match effect {
            crate::parsed_types::PropEffect::Add(atom) => {
                add.insert(ground_atom(atom, parameter_index, assignment));
            }
            crate::parsed_types::PropEffect::Delete(atom) => {
                del.insert(ground_atom(atom, parameter_index, assignment));
            }
        }
    }

    let name = Fact::new(action.name(), assignment).into_string();
    Some(Operator::new(name, pre, add, del))
}

/// Backward relevance analysis. Grows `relevant` (seeded with the goal)
/// to a fixpoint, then rewrites every operator's add/delete sets to their
/// intersection with `relevant`, dropping operators left with no effect.
fn relevance_analysis(operators: &mut Vec<Operator>, goal: &HashSet<Fact>) {
    let mut relevant: HashSet<Fact> = goal.clone();
    loop {
        let mut grew = false;
        for op in operators.iter() {
            let touches_goal = op.add().iter().any(|f| relevant.contains(f))
                || op.del().iter().any(|f| relevant.contains(f));
            if touches_goal {
                for fact in op.pre() {
                    if relevant.insert(fact.clone()) {
                        grew = true;
                    }
                }
            }
        }
        if !grew {
            break;
        }
    }

    for op in operators.iter_mut() {
        op.retain_add_del(&relevant);
    }
    operators.retain(|op| !op.is_dead());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Parser;
    use crate::parsed_types::{Domain, Problem};

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

    fn single_block_problem() -> Problem {
        let input = r#"(define (problem pickup-one)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear a) (handempty))
            (:goal (and (holding a))))"#;
        Problem::from_str(input).unwrap()
    }

    #[test]
    fn grounds_single_applicable_operator() {
        let domain = blocks_domain();
        let problem = single_block_problem();
        let task = ground(&domain, &problem, true, true).unwrap();
        assert_eq!(task.operator_names(), vec!["(pick-up a)".to_string()]);
    }

    #[test]
    fn relevance_analysis_prunes_irrelevant_operators() {
        let domain = blocks_domain();
        let problem = single_block_problem();
        let pruned = ground(&domain, &problem, true, true).unwrap();
        let unpruned = ground(&domain, &problem, true, false).unwrap();
        assert!(pruned.operators().len() < unpruned.operators().len());
    }

    #[test]
    fn static_pruning_restricts_candidate_objects() {
        let input = r#"(define (domain logistics)
            (:predicates (in-city ?l ?c) (at ?t ?l) (drive))
            (:action drive
                :parameters (?t ?from ?to ?c)
                :precondition (and (at ?t ?from) (in-city ?from ?c) (in-city ?to ?c))
                :effect (and (at ?t ?to) (not (at ?t ?from)))))"#;
        let domain = Domain::from_str(input).unwrap();
        let problem_input = r#"(define (problem logistics-1)
            (:domain logistics)
            (:objects truck1 loc1 loc2 loc3 city1 city2)
            (:init (at truck1 loc1) (in-city loc1 city1) (in-city loc2 city1) (in-city loc3 city2))
            (:goal (and (at truck1 loc2))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        let task = ground(&domain, &problem, false, false).unwrap();
        // loc3 is in a different city from loc1/loc2, so no drive operator should
        // target it from loc1.
        assert!(task
            .operator_names()
            .iter()
            .all(|name| !name.contains("loc3")));
    }

    #[test]
    fn init_atom_with_undeclared_predicate_is_rejected() {
        let domain = blocks_domain();
        let problem_input = r#"(define (problem bad)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear a) (handempty) (frobnicate a))
            (:goal (and (holding a))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        assert_eq!(
            ground(&domain, &problem, true, true).unwrap_err(),
            GroundingError::UndeclaredPredicate(Name::new("frobnicate"))
        );
    }

    #[test]
    fn goal_atom_with_wrong_arity_is_rejected() {
        let domain = blocks_domain();
        let problem_input = r#"(define (problem bad)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear a) (handempty))
            (:goal (and (holding a a))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        assert_eq!(
            ground(&domain, &problem, true, true).unwrap_err(),
            GroundingError::ArityMismatch {
                predicate: Name::new("holding"),
                expected: 1,
                actual: 2,
            }
        );
    }

    #[test]
    fn init_atom_with_undeclared_object_is_rejected() {
        let domain = blocks_domain();
        let problem_input = r#"(define (problem bad)
            (:domain blocks)
            (:objects a)
            (:init (ontable a) (clear b) (handempty))
            (:goal (and (holding a))))"#;
        let problem = Problem::from_str(problem_input).unwrap();
        assert_eq!(
            ground(&domain, &problem, true, true).unwrap_err(),
            GroundingError::UndeclaredObject(Name::new("b"))
        );
    }
}
