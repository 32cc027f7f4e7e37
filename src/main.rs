use clap::Parser;
use lineqgen::{EquationGenerator, GeneratorConfig, pretty_equations};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Print linear equations with nice solutions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of equations to print
    #[arg(short, long, default_value_t = 5)]
    amount: usize,

    /// Smallest coefficient or constant
    #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
    min: i64,

    /// Largest coefficient or constant
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    max: i64,

    /// Values never used as a coefficient or constant
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [0, 1],
        allow_hyphen_values = true
    )]
    exclude: Vec<i64>,

    /// Allow every value in the range, including 0 and 1
    #[arg(long, conflicts_with = "exclude")]
    no_exclude: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long, default_value_t = lineqgen::config::DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn config_from(args: &Args) -> GeneratorConfig {
    let exclude = if args.no_exclude {
        Vec::new()
    } else {
        args.exclude.clone()
    };
    let config = GeneratorConfig::default()
        .with_amount(args.amount)
        .with_range(args.min..=args.max)
        .with_exclude(exclude)
        .with_max_rounds(args.max_rounds);
    match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
        std::process::exit(1);
    }

    let result = EquationGenerator::new(config_from(&args))
        .and_then(|mut generator| generator.generate_easy_linear_equations());
    match result {
        Ok(equations) => {
            for line in pretty_equations(&equations) {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
