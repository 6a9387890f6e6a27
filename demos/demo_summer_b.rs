use magritte::{CommandLineParser, Parameter};

fn main() {
    let parser = CommandLineParser::new("summer")
        .about("Sums the items.")
        .add(Parameter::typed::<Vec<u32>>("items").help("The items to sum."))
        .build();

    let mut values = parser.parse();
    let items: Vec<u32> = match values.take("items") {
        Ok(items) => items,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let sum: u32 = items.iter().sum();
    println!("Sum: {sum}");
}
