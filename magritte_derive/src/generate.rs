mod literal;
mod parameter;
mod parser;
