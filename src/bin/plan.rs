//! Run the lazylifted planner: parse a PDDL domain and problem, ground them
//! into a [`Task`](lazylifted::Task), search for a plan, and print it one
//! ground operator per line.

use clap::Parser as ClapParser;
use lazylifted::search::heuristics::HeuristicName;
use lazylifted::search::search_engines::{SearchEngineName, SearchResult};
use lazylifted::search::Verbosity;
use lazylifted::{ground, Domain, Parser, Problem};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(ClapParser)]
#[command(version, about = "A classical STRIPS planner for PDDL domains and problems")]
struct Cli {
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(
        value_enum,
        long = "search",
        id = "SEARCH",
        default_value_t = SearchEngineName::Astar,
        help = "The search algorithm to use"
    )]
    search: SearchEngineName,
    #[arg(
        value_enum,
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Landmark,
        help = "The heuristic guiding A* (ignored by --search bfs)"
    )]
    heuristic: HeuristicName,
    #[arg(
        value_enum,
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        help = "The logging verbosity"
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(message) => {
            error!("{}", message);
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Parses, grounds and searches. Returns `Ok(true)` once a plan has been
/// printed to stdout, `Ok(false)` once the search has proven the problem
/// unsolvable (reported to stderr, not an error), or `Err` for a fatal
/// malformed-input condition raised while parsing or grounding.
fn run(cli: &Cli) -> Result<bool, String> {
    let domain_source = std::fs::read_to_string(&cli.domain)
        .map_err(|e| format!("failed to read domain file {:?}: {e}", cli.domain))?;
    let problem_source = std::fs::read_to_string(&cli.problem)
        .map_err(|e| format!("failed to read problem file {:?}: {e}", cli.problem))?;

    let domain =
        Domain::from_str(&domain_source).map_err(|e| format!("failed to parse domain: {e:?}"))?;
    let problem = Problem::from_str(&problem_source)
        .map_err(|e| format!("failed to parse problem: {e:?}"))?;

    let task = ground(&domain, &problem, true, true)
        .map_err(|e| format!("grounding failed: {e}"))?;
    info!(
        operators = task.operators().len(),
        facts = task.facts().len(),
        "task grounded"
    );

    let heuristic = cli.heuristic.create(&task);
    match cli.search.search(&task, heuristic.as_ref()) {
        SearchResult::Success(plan) => {
            for action in &plan {
                println!("{action}");
            }
            info!(plan_length = plan.len(), "plan found");
            Ok(true)
        }
        SearchResult::NoSolution => {
            eprintln!("No solution");
            Ok(false)
        }
    }
}
