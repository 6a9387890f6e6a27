use magritte::derive::*;

#[derive(Debug, Parameters)]
#[magritte(program = "greet")]
struct Greeting {
    /// Who to greet.
    name: String,
    /// How many times to greet.
    #[magritte(default = 1)]
    times: u8,
}

fn greet(greeting: Greeting) -> usize {
    for _ in 0..greeting.times {
        println!("Hello, {}!", greeting.name);
    }

    greeting.times as usize
}

fn main() {
    let count = magritte::dispatch(greet);
    println!("Greeted {count} time(s).");
}
