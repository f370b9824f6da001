use std::io::Read;

use anyhow::Context;
use itertools::Itertools;

use calorie_groups::{process_str, Summary};

fn read_input() -> anyhow::Result<String> {
    match std::env::args_os().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("couldn't read input file {}", path.to_string_lossy())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("couldn't read input from stdin")?;
            Ok(buffer)
        }
    }
}

fn report(summary: &Summary) {
    match summary.max {
        Some(group) => println!(
            "Group at index {} had the largest total: {}",
            group.index, group.total
        ),
        None => println!("No groups found: the input was empty or held only blank/invalid lines."),
    }

    println!(
        "Top {} totals: {} (sum {})",
        summary.top3.len(),
        summary.top3.iter().join(", "),
        summary.top3_sum
    );
}

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let input = read_input()?;
    report(&process_str(&input));

    Ok(())
}
