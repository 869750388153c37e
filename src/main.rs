mod cli;
mod domain;
mod engine;
mod expression;
mod intersect;
mod parser;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
