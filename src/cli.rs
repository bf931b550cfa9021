use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use opguess::{
    ExpressionSolver, SearchResult, SolverConfig, Strategy, parse_number_sequence, parse_target,
};

const BANNER: &str = "========== MATH OPERATION GUESSER ========";

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

/// Which operator assignments to try
#[derive(Debug, Clone, ValueEnum)]
pub enum StrategyArg {
    /// Every operator in every position
    Exhaustive,
    /// Only non-decreasing operator runs, as older versions did
    Multiset,
}

impl StrategyArg {
    pub fn to_strategy(&self) -> Strategy {
        match self {
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::Multiset => Strategy::Multiset,
        }
    }
}

/// Opguess - Find the operators that turn a sequence of numbers into a result
#[derive(Parser, Debug)]
#[command(name = "opguess")]
#[command(about = "Find +, -, / and * operators between numbers so the expression equals a result")]
#[command(version)]
pub struct CliArgs {
    /// Comma separated numbers, e.g. "3,4,5" (prompted for when omitted)
    #[arg(allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Result the expression must equal (prompted for when omitted)
    #[arg(allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Operator enumeration strategy
    #[arg(short, long, value_enum, default_value = "exhaustive")]
    pub strategy: StrategyArg,

    /// Print every matching expression instead of the first
    #[arg(short, long)]
    pub all: bool,

    /// Evaluate candidates on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Refuse searches with more candidates than this
    #[arg(short, long)]
    pub max_candidates: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Option<Vec<i64>>,
    pub target: Option<i64>,
    pub all: bool,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let numbers = args
            .numbers
            .as_deref()
            .map(parse_number_sequence)
            .transpose()
            .context("Invalid number sequence")?;
        let target = args
            .target
            .as_deref()
            .map(parse_target)
            .transpose()
            .context("Invalid target")?;

        let solver = SolverConfig::default()
            .with_strategy(args.strategy.to_strategy())
            .with_parallel(args.parallel)
            .with_max_candidates(args.max_candidates);
        solver.validate()?;

        Ok(Self {
            numbers,
            target,
            all: args.all,
            solver,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read input")? == 0 {
        bail!("Input ended before a sequence and result were entered");
    }
    Ok(line.trim().to_string())
}

/// Ask for the numbers and the result until both parse
pub fn prompt_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(Vec<i64>, i64)> {
    writeln!(output, "{}", BANNER)?;

    loop {
        let sequence = read_line(input, output, "Enter sequence of numbers: ")?;
        let result = read_line(input, output, "Enter the result: ")?;
        writeln!(output, "Sequence: {}, Result: {}", sequence, result)?;

        match (parse_number_sequence(&sequence), parse_target(&result)) {
            (Ok(numbers), Ok(target)) => return Ok((numbers, target)),
            (Err(err), _) | (_, Err(err)) => {
                warn!("Re-prompting after invalid input: {}", err);
                writeln!(output, "{}", err)?;
            }
        }
    }
}

fn report<W: Write>(
    output: &mut W,
    solver: &ExpressionSolver,
    numbers: &[i64],
    target: i64,
    all: bool,
) -> Result<()> {
    if all {
        let matches = solver
            .find_all(numbers, target)
            .context("Search failed")?;
        if matches.is_empty() {
            writeln!(output, "{}", SearchResult::NotFound)?;
        }
        for expr in matches {
            writeln!(output, "{}", expr)?;
        }
        return Ok(());
    }

    let result = solver.solve(numbers, target).context("Search failed")?;
    if !result.is_found() {
        warn!("No matching expression found");
    }
    writeln!(output, "{}", result)?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let (numbers, target) = match (config.numbers, config.target) {
        (Some(numbers), Some(target)) => (numbers, target),
        _ => {
            let stdin = io::stdin();
            prompt_input(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    info!(
        "Searching for operators between {:?} that give {}",
        numbers, target
    );

    let solver = ExpressionSolver::new(config.solver);
    report(&mut io::stdout(), &solver, &numbers, target, config.all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_text(buffer: Vec<u8>) -> String {
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["opguess", "3,4,5", "23", "--strategy", "multiset"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.numbers.as_deref(), Some("3,4,5"));
            assert_eq!(args.target.as_deref(), Some("23"));
            assert!(matches!(args.strategy, StrategyArg::Multiset));
            assert!(matches!(args.log_level, LogLevel::Warn));
            assert!(!args.all);
        }
    }

    #[test]
    fn test_negative_positionals() {
        let args = CliArgs::try_parse_from(["opguess", "-3,-4", "-7"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from_args(args);
            assert!(config.is_ok());
            if let Ok(config) = config {
                assert_eq!(config.numbers, Some(vec![-3, -4]));
                assert_eq!(config.target, Some(-7));
            }
        }
    }

    #[test]
    fn test_invalid_positionals_are_rejected() {
        let args = CliArgs::try_parse_from(["opguess", "3,x", "7"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(CliConfig::from_args(args).is_err());
        }
    }

    #[test]
    fn test_missing_positionals_leave_prompting_to_run() {
        let args = CliArgs::try_parse_from(["opguess", "--parallel"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from_args(args);
            assert!(config.is_ok());
            if let Ok(config) = config {
                assert!(config.numbers.is_none());
                assert!(config.target.is_none());
                assert!(config.solver.parallel);
            }
        }
    }

    #[test]
    fn test_prompt_reprompts_on_invalid_input() {
        let mut input = Cursor::new("1,two,3\n6\n1,2,3\n6\n");
        let mut output = Vec::new();
        let parsed = prompt_input(&mut input, &mut output);
        assert_eq!(parsed.ok(), Some((vec![1, 2, 3], 6)));

        let text = output_text(output);
        assert!(text.starts_with(BANNER));
        assert_eq!(text.matches("Enter sequence of numbers: ").count(), 2);
        assert!(text.contains("Sequence: 1,two,3, Result: 6"));
    }

    #[test]
    fn test_prompt_fails_at_end_of_input() {
        let mut input = Cursor::new("1,2\n");
        let mut output = Vec::new();
        assert!(prompt_input(&mut input, &mut output).is_err());
    }

    #[test]
    fn test_report_first_and_all() {
        let solver = ExpressionSolver::default();

        let mut output = Vec::new();
        assert!(report(&mut output, &solver, &[2, 2], 4, false).is_ok());
        assert_eq!(output_text(output), "2+2\n");

        let mut output = Vec::new();
        assert!(report(&mut output, &solver, &[2, 2], 4, true).is_ok());
        assert_eq!(output_text(output), "2+2\n2*2\n");

        let mut output = Vec::new();
        assert!(report(&mut output, &solver, &[5], 6, false).is_ok());
        assert_eq!(output_text(output), "[No answer found!]\n");
    }

    #[test]
    fn test_strategy_conversion() {
        assert_eq!(StrategyArg::Exhaustive.to_strategy(), Strategy::Exhaustive);
        assert_eq!(StrategyArg::Multiset.to_strategy(), Strategy::Multiset);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
