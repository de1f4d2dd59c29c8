use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use chatmark::tokenize;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Tokenize chat markup into a typed token stream")]
struct Cli {
    /// Print one JSON object per token instead of a pretty-printed array
    #[arg(long)]
    compact: bool,
    /// Message files to tokenize; reads stdin when none are given
    files: Vec<PathBuf>,
}

fn print_tokens(input: &str, compact: bool) -> anyhow::Result<()> {
    let tokens = tokenize(input);
    if compact {
        for token in &tokens {
            println!("{}", serde_json::to_string(token)?);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print_tokens(&input, cli.compact)?;
        return Ok(());
    }

    for path in cli.files {
        let content = fs::read_to_string(&path)?;
        print_tokens(&content, cli.compact)?;
    }

    Ok(())
}
