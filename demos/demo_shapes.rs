use std::collections::HashSet;
use std::path::PathBuf;

use magritte::derive::*;

#[derive(Debug, Literal)]
enum Mode {
    Fast,
    #[magritte(value = "thorough")]
    Slow,
    #[magritte(value = 0)]
    Off,
}

/// Shows off the type shapes available to a parameter.
#[derive(Debug, Parameters)]
struct Shapes {
    /// The input file.
    input: PathBuf,
    /// The processing mode.
    #[magritte(default = Mode::Fast)]
    mode: Mode,
    /// Pairs of label and weight.
    #[magritte(default)]
    weights: Vec<(String, f64)>,
    /// The tags to apply, deduplicated.
    #[magritte(default)]
    tags: HashSet<String>,
    /// A limit, if any.
    #[magritte(default = None)]
    limit: Option<u64>,
    /// Print the intermediate steps.
    #[magritte(default)]
    verbose: bool,
}

fn main() {
    let shapes = Shapes::parse();
    println!("{shapes:#?}");
}
