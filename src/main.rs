use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use relprops::{
    closure::ClosureMode,
    error::ParseError,
    formats::{self, Ingest},
    generators,
    properties::{Analysis, Property},
    report::{Language, Report},
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "relprops")]
#[command(about = "Check which properties a binary relation has")]
struct Arguments {
    #[command(subcommand)]
    command: Command,

    /// Language of the report labels
    #[arg(long, value_enum, global = true, default_value_t = Lang::English)]
    lang: Lang,

    /// Which transitive closure to print
    #[arg(long, value_enum, global = true, default_value_t = Closure::OnePass)]
    closure: Closure,

    /// Also print the relation matrix
    #[arg(long, global = true)]
    matrix: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Read a relation from a file, `-` for stdin
    Check {
        #[arg(default_value = "./entrada.txt")]
        input: PathBuf,
    },
    /// Sample a random relation over the elements 1..=N
    Random {
        #[arg(long)]
        elements: usize,

        /// Chance that any ordered pair is related
        #[arg(long, default_value_t = 0.3)]
        density: f64,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    English,
    Portuguese,
}

#[derive(Clone, Copy, ValueEnum)]
enum Closure {
    OnePass,
    Fixpoint,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RELPROPS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("relprops=warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();
}

fn read<R: BufRead>(input: &Path, mut stdin: R) -> Result<Ingest, ParseError> {
    if input.as_os_str() == "-" {
        return formats::parse(&mut stdin);
    }
    let file = File::open(input)?;
    formats::parse(&mut BufReader::new(file))
}

/// Run the command, writing the report to `out` and diagnostics to `err`.
/// Returns the exit code.
fn run<R, W, E>(args: Arguments, stdin: R, out: &mut W, err: &mut E) -> io::Result<u8>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let language = match args.lang {
        Lang::English => Language::English,
        Lang::Portuguese => Language::Portuguese,
    };
    let mode = match args.closure {
        Closure::OnePass => ClosureMode::OnePass,
        Closure::Fixpoint => ClosureMode::Fixpoint,
    };

    let relation = match args.command {
        Command::Check { ref input } => match read(input, stdin) {
            Ok(Ingest { relation, stopped }) => {
                if let Some(t) = stopped {
                    warn!(input = %input.display(), "relation truncated");
                    writeln!(err, "{}", language.truncation(t))?;
                }
                relation
            }
            Err(e) => {
                error!(input = %input.display(), "{}", e);
                writeln!(err, "Failed to read {}: {}", input.display(), e)?;
                return Ok(1);
            }
        },
        Command::Random { elements, density, seed } => {
            let mut rng = match seed {
                Some(s) => ChaCha8Rng::seed_from_u64(s),
                None => ChaCha8Rng::from_entropy(),
            };
            match generators::bernoulli_numbered(&mut rng, elements, density) {
                Ok(r) => r,
                Err(e) => {
                    error!(elements, density, "{}", e);
                    writeln!(err, "{}", e)?;
                    return Ok(1);
                }
            }
        }
    };
    info!(elements = relation.len(), "relation ready");

    if args.matrix {
        writeln!(out, "{}", relation)?;
    }

    let analysis = Analysis::run(&relation);
    let closure = mode.compute(&relation, analysis.result(Property::Transitive));
    let report = Report { closure: &closure, ..Report::new(&relation, &analysis, language) };
    write!(out, "{}", report)?;
    Ok(0)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Arguments::parse();
    match run(args, io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
