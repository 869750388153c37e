use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use crate::engine::Evaluator;
use crate::intersect::find_intersections;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Curvelab - Graphing-calculator expression engine
#[derive(Parser, Debug)]
#[command(name = "curvelab")]
#[command(about = "Evaluate expressions, inspect their domains, and find intersections")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Named parameter binding as name=value (repeatable)
    #[arg(short, long = "param", value_name = "NAME=VALUE", global = true)]
    pub params: Vec<String>,

    /// Named function binding as name=body (repeatable)
    #[arg(long = "func", value_name = "NAME=BODY", global = true)]
    pub funcs: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an expression at a value of the free variable x
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Value of x
        #[arg(short = 'x', long = "at", allow_hyphen_values = true)]
        at: f64,
    },
    /// Evaluate a constant expression with no free variable
    Value {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Show the valid input domain of an expression over x
    Domain {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Viewport minimum for the sample preview
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        min: f64,
        /// Viewport maximum for the sample preview
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        max: f64,
    },
    /// List the intersection points of two expressions
    Intersect {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
        /// Scan range minimum
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        min: f64,
        /// Scan range maximum
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        max: f64,
        /// Viewport pixel width driving the sample count
        #[arg(long, default_value_t = 800)]
        width: usize,
    },
}

fn parse_binding(binding: &str) -> Result<(&str, &str)> {
    match binding.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => Ok((name, value)),
        _ => bail!("binding '{}' is not of the form name=value", binding),
    }
}

/// Build an evaluator from the command-line bindings.
pub fn build_evaluator(params: &[String], funcs: &[String]) -> Result<Evaluator> {
    let mut evaluator = Evaluator::new();
    for binding in params {
        let (name, value) = parse_binding(binding)?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("parameter '{}' has a non-numeric value", binding))?;
        evaluator.set_parameter(name, value);
    }
    for binding in funcs {
        let (name, body) = parse_binding(binding)?;
        evaluator.set_function(name, body);
    }
    Ok(evaluator)
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let evaluator = build_evaluator(&args.params, &args.funcs)?;

    match args.command {
        Command::Eval { expression, at } => {
            let value = evaluator
                .evaluate(&expression, at)
                .with_context(|| format!("could not evaluate '{}'", expression))?;
            println!("{}", value);
        }
        Command::Value { expression } => {
            let value = evaluator
                .evaluate_constant(&expression)
                .with_context(|| format!("could not evaluate '{}'", expression))?;
            println!("{}", value);
        }
        Command::Domain {
            expression,
            min,
            max,
        } => {
            let domain = evaluator.domain_of(&expression);
            println!("bounds: [{}, {}]", domain.min_bound(), domain.max_bound());
            let preview = domain.sample_points(min, max, 11);
            if preview.is_empty() {
                println!("no valid inputs in [{}, {}]", min, max);
            } else {
                let rendered: Vec<String> = preview.iter().map(f64::to_string).collect();
                println!("samples in [{}, {}]: {}", min, max, rendered.join(", "));
            }
        }
        Command::Intersect {
            left,
            right,
            min,
            max,
            width,
        } => {
            info!(
                "Scanning '{}' against '{}' over [{}, {}]",
                left, right, min, max
            );
            let points = find_intersections(&evaluator, &left, &right, min, max, width);
            if points.is_empty() {
                println!("no intersections");
            } else {
                for point in points {
                    println!("({}, {})", point.x, point.y);
                }
            }
        }
    }

    Ok(())
}
