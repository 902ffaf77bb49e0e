use clap::{Parser, ValueEnum};

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// gcalc - Parse, evaluate, and differentiate single-variable expressions
#[derive(Parser, Debug)]
#[command(name = "gcalc")]
#[command(about = "Parse, evaluate, and differentiate expressions in the variable x")]
#[command(version)]
pub struct Args {
    /// Expression to process. If omitted, expressions are read from stdin, one per line
    pub expr: Option<String>,

    /// Value of x at which to evaluate; may be given more than once
    #[arg(short = 'x', long = "at", value_name = "X", default_value = "0", allow_negative_numbers = true)]
    pub at: Vec<f64>,

    /// Also differentiate the expression and evaluate the derivative
    #[arg(short, long)]
    pub derivative: bool,

    /// Print the tree structure of each expression
    #[arg(short, long)]
    pub tree: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging from the environment, filtered by the provided log level.
pub fn init_logging(log_level: LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_level_filter())
        .init();
}
