use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use integrix::QuadratureEngine;
use integrix::quadrature::constants::{
    DEFAULT_LOWER_BOUND, DEFAULT_SAMPLE_POINTS, DEFAULT_SUBDIVISIONS, DEFAULT_UPPER_BOUND,
};
use integrix::quadrature::reference::run_reference_cases;
use log::{info, warn};

/// Largest deviation from a closed form that `--self-test` accepts
const SELF_TEST_TOLERANCE: f64 = 1e-3;

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

/// Integrix - Integrate a function of x numerically
#[derive(Parser, Debug)]
#[command(name = "integrix")]
#[command(
    about = "Integrate a function of x with the trapezoidal, Simpson's and midpoint rules"
)]
#[command(version)]
pub struct CliArgs {
    /// Function of x, e.g. "x^2 + sin(x)". Use * for multiplication.
    #[arg(required_unless_present = "self_test")]
    pub expression: Option<String>,

    /// Lower integration bound
    #[arg(short = 'a', long, default_value_t = DEFAULT_LOWER_BOUND, allow_negative_numbers = true)]
    pub lower: f64,

    /// Upper integration bound
    #[arg(short = 'b', long, default_value_t = DEFAULT_UPPER_BOUND, allow_negative_numbers = true)]
    pub upper: f64,

    /// Number of subdivisions (values below 1 are raised to 1)
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_SUBDIVISIONS as i64,
        allow_negative_numbers = true
    )]
    pub subdivisions: i64,

    /// Also evaluate the function at a fixed set of sample points
    #[arg(long)]
    pub sample: bool,

    /// Run the built-in reference integrals instead of an expression
    #[arg(long, conflicts_with = "expression")]
    pub self_test: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the CLI was asked to do
pub enum Mode {
    Integrate {
        expression: String,
        lower: f64,
        upper: f64,
        subdivisions: i64,
        sample: bool,
    },
    SelfTest,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub log_level: LogLevel,
}

/// Validate parsed arguments and turn them into a configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let mode = if args.self_test {
        Mode::SelfTest
    } else {
        let expression = args
            .expression
            .context("An expression is required unless --self-test is given")?;
        if expression.trim().is_empty() {
            bail!("Expression cannot be empty");
        }
        if !args.lower.is_finite() || !args.upper.is_finite() {
            bail!(
                "Bounds must be finite numbers, got [{}, {}]",
                args.lower,
                args.upper
            );
        }
        Mode::Integrate {
            expression,
            lower: args.lower,
            upper: args.upper,
            subdivisions: args.subdivisions,
            sample: args.sample,
        }
    };

    Ok(CliConfig {
        mode,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn run_integration(
    expression: &str,
    lower: f64,
    upper: f64,
    subdivisions: i64,
    sample: bool,
) -> Result<()> {
    let mut engine = QuadratureEngine::new();
    engine
        .set_expression(expression)
        .with_context(|| format!("Invalid expression '{}'", expression))?;

    let advisories = [
        engine.set_bounds(lower, upper),
        engine.set_subdivisions(subdivisions),
    ];
    for advisory in advisories.into_iter().flatten() {
        println!("Note: {}", advisory);
    }

    println!("{}", engine);

    if sample {
        println!();
        println!("--- Function Test Points ---");
        for point in engine.sample(&DEFAULT_SAMPLE_POINTS) {
            println!("{}", point);
        }
    }

    println!();
    println!("========== Integration Results ==========");
    print!("{}", engine.compute_all());
    Ok(())
}

fn run_self_test() -> Result<()> {
    let mut failures = Vec::new();

    for outcome in run_reference_cases() {
        let case = &outcome.case;
        println!(
            "{}: integral of {} over [{}, {}] (exact: {})",
            case.label, case.expression, case.lower, case.upper, case.exact
        );

        match &outcome.report {
            Ok(report) => print!("{}", report),
            Err(e) => println!("Error: {}", e),
        }

        match outcome.max_error() {
            Some(error) if error < SELF_TEST_TOLERANCE => {
                info!("{} within tolerance (error {})", case.label, error);
            }
            _ => {
                warn!("{} failed its reference check", case.label);
                failures.push(case.label);
            }
        }
        println!();
    }

    if !failures.is_empty() {
        bail!("Reference cases failed: {}", failures.join(", "));
    }
    println!("All reference cases passed.");
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match config.mode {
        Mode::SelfTest => run_self_test(),
        Mode::Integrate {
            expression,
            lower,
            upper,
            subdivisions,
            sample,
        } => {
            info!(
                "Integrating '{}' over [{}, {}] with {} subdivisions",
                expression, lower, upper, subdivisions
            );
            run_integration(&expression, lower, upper, subdivisions, sample)
        }
    }
}
