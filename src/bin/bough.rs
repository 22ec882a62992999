//! bough - build a binary search tree from the command line and inspect it.
//!
//! Usage:
//!   bough [KEYS]... [--rank R] [--key K] [--remove K]...
//!   bough --random N [--seed S] [--rank R] [--key K] [--remove K]...

use std::fmt::Display;

use bough::{BinaryTree, Rank};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_KEYS: [i64; 11] = [9, 1, 46, 20, 68, 15, 5, 0, 6, 55, 95];

#[derive(Parser, Debug)]
#[command(name = "bough")]
#[command(about = "Build an unbalanced binary search tree and query it by key and by pre-order rank")]
struct Cli {
    /// Keys to insert, in order; the first becomes the root
    #[arg(conflicts_with = "random", allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Fill the tree with N random keys in 0..100 instead
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random, for reproducible trees
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Rank to report the branch count and key of
    #[arg(long, short = 'r', default_value_t = 2)]
    rank: usize,

    /// Key to report the rank of
    #[arg(long, short = 'k', default_value_t = 1)]
    key: i64,

    /// Key to remove afterwards; may be given more than once
    #[arg(long, value_name = "KEY")]
    remove: Vec<i64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "bough=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut tree = build(&cli);
    report(&tree, &cli);

    for key in &cli.remove {
        match tree.remove(key) {
            Ok(_) => {
                println!("\nBinary tree after removing {key}:");
                println!("{tree}");
            }
            Err(error) => println!("\nCould not remove {key}: {error}"),
        }
    }
}

fn build(cli: &Cli) -> BinaryTree<i64> {
    if let Some(count) = cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::info!(count, seed = cli.seed, "filling tree with random keys");
        println!("Binary tree filled randomly:");
        return (0..count).map(|_| rng.gen_range(0..100)).collect();
    }

    println!("Customly created binary tree:");
    if cli.keys.is_empty() {
        BinaryTree::from(DEMO_KEYS)
    } else {
        tracing::info!(count = cli.keys.len(), "building tree from arguments");
        cli.keys.iter().copied().collect()
    }
}

fn report(tree: &BinaryTree<i64>, cli: &Cli) {
    println!("{tree}");
    println!("Count of nodes: {}", tree.len());

    let rank = Rank(cli.rank);
    match tree.branch_count_at_rank(rank.0) {
        Ok(branches) => println!("The {rank} node has {branches} branch(es)"),
        Err(error) => println!("No branch count for the {rank} node: {error}"),
    }
    match tree.node_at_rank(rank.0) {
        Ok(node) => println!("The {rank} node holds {}", node.key()),
        Err(error) => println!("No value for the {rank} node: {error}"),
    }
    match tree.rank_of(&cli.key) {
        Ok(found) => println!("Key {} is held by the {} node", cli.key, Rank(found)),
        Err(error) => println!("No rank for key {}: {error}", cli.key),
    }

    print_extreme("Min", tree.min().map(|node| *node.key()));
    print_extreme("Max", tree.max().map(|node| *node.key()));
}

fn print_extreme(label: &str, key: bough::Result<impl Display>) {
    match key {
        Ok(key) => println!("{label} value: {key}"),
        Err(error) => println!("{label} value: none ({error})"),
    }
}
