//! Catalist CLI: catalog analysis and graph shortest-path reports.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use catalist::catalog::{self, CatalogError};
use catalist::graph;
use catalist::prelude::*;
use catalist::search;

#[derive(Parser)]
#[command(name = "catalist", version, about = "Comparison-counting analysis of line-oriented catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report palindromes, sort comparison totals, and search costs
    Items {
        /// Newline-delimited catalog file
        #[arg(default_value = "magicitems.txt")]
        file: PathBuf,

        /// Seed for the shuffle/probe RNG (omit for OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of random items to probe with each search
        #[arg(long, default_value_t = 42)]
        probes: usize,
    },
    /// Print adjacency matrices and shortest paths for a graph file
    Graphs {
        /// Graph command file
        #[arg(default_value = "graphs.txt")]
        file: PathBuf,

        /// Source vertex for shortest paths
        #[arg(long, default_value = "1")]
        source: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Items { file, seed, probes } => run_items(&file, seed, probes),
        Commands::Graphs { file, source } => run_graphs(&file, &source),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run_items(file: &Path, seed: Option<u64>, probes: usize) -> Result<(), CatalogError> {
    let mut items = catalog::load_lines(file)?;

    {
        let palindromes: Vec<&str> = items
            .iter()
            .filter(|line| is_palindrome(line))
            .map(String::as_str)
            .collect();
        println!("Total palindromes: {}", palindromes.len());
        for line in &palindromes {
            println!("{line}");
        }
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    fisher_yates(&mut items, &mut rng);
    capitalize_first(&mut items);

    // Every algorithm gets its own copy; counts stay independent.
    let mut sorted = items.clone();
    let mut totals = Vec::new();
    for algorithm in Algorithm::ALL {
        let mut copy = items.clone();
        let comparisons = algorithm.run(&mut copy);
        totals.push((algorithm, comparisons));
        sorted = copy;
    }

    println!("\nData after sorting:");
    for line in &sorted {
        println!("{line}");
    }

    println!();
    for (algorithm, comparisons) in &totals {
        println!("Total comparisons for {algorithm}: {comparisons}");
    }

    report_searches(&sorted, probes, &mut rng);

    Ok(())
}

fn report_searches(sorted: &[String], probes: usize, rng: &mut StdRng) {
    let picks = search::sample(sorted, probes, rng);
    if picks.is_empty() {
        return;
    }

    let mut linear_total = 0u64;
    let mut binary_total = 0u64;

    println!();
    for &pick in &picks {
        let linear = search::linear_search(sorted, pick);
        let binary = search::binary_search(sorted, pick);
        linear_total += linear.comparisons;
        binary_total += binary.comparisons;
        println!(
            "{pick}: linear {} comparisons, binary {} comparisons",
            linear.comparisons, binary.comparisons
        );
    }

    let count = picks.len() as f64;
    println!(
        "\nAverage linear search comparisons: {:.2}",
        linear_total as f64 / count
    );
    println!(
        "Average binary search comparisons: {:.2}",
        binary_total as f64 / count
    );
}

fn run_graphs(file: &Path, source: &str) -> Result<(), CatalogError> {
    let lines = catalog::load_lines(file)?;
    let outcome = graph::parse_commands(&lines);

    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    for (i, graph) in outcome.graphs.iter().enumerate() {
        println!("\nGraph {}:", i + 1);
        print!("{}", graph.render_matrix());

        match graph.bellman_ford(source) {
            Ok(paths) => {
                for id in graph.vertex_ids().filter(|&id| id != source) {
                    match paths.path_to(id) {
                        Some(path) => {
                            // distance exists whenever a path does
                            let cost = paths.distance(id).unwrap_or_default();
                            println!(
                                "{source} --> {id} cost is {cost}; path: {}",
                                path.join(" --> ")
                            );
                        }
                        None => println!("No path from {source} to {id}"),
                    }
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
