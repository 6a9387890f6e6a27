use magritte::derive::*;

/// Sums the items.
#[derive(Debug, Parameters)]
#[magritte(program = "summer")]
struct Summer {
    /// The items to sum.
    items: Vec<u32>,
}

fn main() {
    let summer = Summer::parse();
    let sum: u32 = summer.items.iter().sum();
    println!("Sum: {sum}");
}
