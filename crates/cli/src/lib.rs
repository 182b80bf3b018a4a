use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use korean_name_core::{default_lexicon, Interpreter, NameConfig, NameRequest, Synthesizer};
use korean_name_protocol::{ErrorEnvelope, GenerateNamesResult, KeywordSuggestions};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "korean-name")]
#[command(about = "Generate Korean names from keywords and explain their meaning", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Config file (JSON or TOML); overrides KOREAN_NAME_CONFIG, KOREAN_NAME_SEED still applies
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate names from keywords
    Generate(GenerateArgs),

    /// Explain a name character by character
    Meaning(MeaningArgs),

    /// List keyword categories, styles and genders
    Keywords,
}

#[derive(Args)]
struct GenerateArgs {
    /// Keywords (e.g. 봄 바다 용감한); unknown keywords fall back to the style pool
    keywords: Vec<String>,

    /// cute | cool | elegant | funny | traditional
    #[arg(short, long)]
    style: Option<String>,

    /// male | female | any
    #[arg(short, long)]
    gender: Option<String>,

    /// Number of names (clamped to the configured bounds)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct MeaningArgs {
    /// Full name, family name first
    name: String,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => run_generate(args, config, cli.pretty),
        Commands::Meaning(args) => {
            let interpretation = Interpreter::new(default_lexicon()).interpret(&args.name);
            emit(&interpretation, cli.pretty)
        }
        Commands::Keywords => {
            let suggestions = KeywordSuggestions::from_lexicon(default_lexicon());
            emit(&suggestions, cli.pretty)
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<NameConfig> {
    let config = NameConfig::load(path);
    match path {
        Some(path) => config.with_context(|| format!("Failed to load config {}", path.display())),
        None => config.context("Failed to load config from environment"),
    }
}

fn run_generate(args: GenerateArgs, mut config: NameConfig, pretty: bool) -> Result<()> {
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let request = match NameRequest::parse(
        args.keywords,
        args.style.as_deref(),
        args.gender.as_deref(),
        args.count,
        &config,
    ) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("Rejecting request: {err}");
            eprintln!("error: {err}");
            emit(
                &serde_json::json!({ "error": ErrorEnvelope::from(&err) }),
                pretty,
            )?;
            std::process::exit(1);
        }
    };

    let lexicon = default_lexicon();
    let mut rng = config.rng();
    let names = Synthesizer::with_config(lexicon, config).synthesize(&request, &mut rng);
    emit(&GenerateNamesResult::new(&request, names, lexicon), pretty)
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    print_stdout(&output)
}
