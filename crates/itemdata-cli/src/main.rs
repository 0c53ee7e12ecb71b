//! itemdata CLI
//!
//! Command-line tool for turning item data tables into the generated
//! equipment and rune word sources.

use clap::{Args, Parser, Subcommand};
use itemdata_core::grouping::{render_object, render_value};
use itemdata_core::{
    audit_table, parse_tsv, run_export, write_atomic, Diagnostics, Error, ExportConfig, Lookups,
    PropertySlot, Resolver, RuneWordBook,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "itemdata")]
#[command(about = "Item data table exporter", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the equipment object from the item tables
    Export(ExportArgs),

    /// Resolve a single property tuple
    Resolve {
        /// Property code
        #[arg(short, long)]
        code: String,

        #[arg(short, long, default_value = "")]
        param: String,

        #[arg(long, default_value = "")]
        min: String,

        #[arg(long, default_value = "")]
        max: String,

        /// Equipment group context (sword, shield, armor, ...)
        #[arg(short, long)]
        group: Option<String>,

        /// Rune word table, needed for `runeword` codes
        #[arg(long)]
        runes: Option<PathBuf>,

        #[arg(long)]
        gems: Option<PathBuf>,
    },

    /// Show the resolved stats of a rune word
    Runeword {
        /// Rune word name
        name: String,

        /// Equipment group to socket the runes into
        #[arg(short, long)]
        group: Option<String>,

        #[arg(long)]
        runes: PathBuf,

        #[arg(long)]
        gems: Option<PathBuf>,
    },

    /// Write the rune sequence of every rune word as JS
    RunewordsJs {
        #[arg(long)]
        runes: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the socket bonuses of every rune
    RuneStats {
        #[arg(long)]
        runes: PathBuf,

        #[arg(long)]
        gems: PathBuf,
    },

    /// List the property codes and base types a table uses
    Audit {
        /// Path to the table
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create an export config template
    InitConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,

        /// Fill the paths from table files found under these directories
        #[arg(short, long)]
        data: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct ExportArgs {
    /// Export config (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directories to look for the standard table files in
    #[arg(short, long)]
    data: Vec<PathBuf>,

    #[arg(long)]
    unique: Option<PathBuf>,

    #[arg(long)]
    set: Option<PathBuf>,

    #[arg(long)]
    misc: Option<PathBuf>,

    #[arg(long)]
    runes: Option<PathBuf>,

    #[arg(long)]
    gems: Option<PathBuf>,

    /// JS fragment appended inside the equipment object
    #[arg(long)]
    footer: Option<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Add a timestamp to the output file name
    #[arg(long)]
    timestamp: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> itemdata_core::Result<()> {
    match command {
        Commands::Export(args) => cmd_export(args),
        Commands::Resolve {
            code,
            param,
            min,
            max,
            group,
            runes,
            gems,
        } => cmd_resolve(
            PropertySlot::new(&code, &param, &min, &max),
            group.as_deref(),
            runes.as_deref(),
            gems.as_deref(),
        ),
        Commands::Runeword {
            name,
            group,
            runes,
            gems,
        } => cmd_runeword(&name, group.as_deref(), &runes, gems.as_deref()),
        Commands::RunewordsJs { runes, output } => cmd_runewords_js(&runes, &output),
        Commands::RuneStats { runes, gems } => cmd_rune_stats(&runes, &gems),
        Commands::Audit { file, json } => cmd_audit(&file, json),
        Commands::InitConfig { output, data } => cmd_init_config(&output, &data),
    }
}

/// Config file first, then data directory discovery, then explicit flags
fn build_config(args: ExportArgs) -> itemdata_core::Result<ExportConfig> {
    let output = args.output.clone().unwrap_or_else(|| PathBuf::from("equipment.js"));
    let mut config = match (&args.config, args.data.is_empty()) {
        (Some(path), _) => ExportConfig::load(path)?,
        (None, false) => ExportConfig::from_data_dir(args.data.as_slice(), output)?,
        (None, true) => {
            let require = |path: &Option<PathBuf>, flag: &str| {
                path.clone().ok_or_else(|| {
                    Error::InvalidArgument(format!("--{} is required without --config or --data", flag))
                })
            };
            ExportConfig {
                unique_items: require(&args.unique, "unique")?,
                set_items: require(&args.set, "set")?,
                misc_items: None,
                rune_words: require(&args.runes, "runes")?,
                gems: None,
                footer: None,
                output,
                report: None,
                timestamped_output: false,
            }
        }
    };

    if let Some(path) = args.unique {
        config.unique_items = path;
    }
    if let Some(path) = args.set {
        config.set_items = path;
    }
    if let Some(path) = args.runes {
        config.rune_words = path;
    }
    if let Some(path) = args.output {
        config.output = path;
    }
    config.misc_items = args.misc.or(config.misc_items);
    config.gems = args.gems.or(config.gems);
    config.footer = args.footer.or(config.footer);
    config.report = args.report.or(config.report);
    config.timestamped_output |= args.timestamp;
    Ok(config)
}

fn cmd_export(args: ExportArgs) -> itemdata_core::Result<()> {
    let config = build_config(args)?;
    tracing::debug!("export config: {:?}", config);
    let report = run_export(&config)?;

    println!("{}", report.summary());
    if !report.diagnostics.is_empty() {
        println!();
        println!("Diagnostics ({}):", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}

fn load_book(
    runes: &Path,
    gems: Option<&Path>,
    lookups: &Lookups,
    diags: &mut Diagnostics,
) -> itemdata_core::Result<RuneWordBook> {
    let rune_words = parse_tsv(runes)?;
    let gems = gems.map(parse_tsv).transpose()?;
    RuneWordBook::from_tables(&rune_words, gems.as_ref(), lookups, diags)
}

fn print_diagnostics(diags: &Diagnostics) {
    for diagnostic in diags.iter() {
        eprintln!("  {}", diagnostic);
    }
}

fn cmd_resolve(
    slot: PropertySlot<'_>,
    group: Option<&str>,
    runes: Option<&Path>,
    gems: Option<&Path>,
) -> itemdata_core::Result<()> {
    let lookups = Lookups::new();
    let mut diags = Diagnostics::new();
    let book = runes
        .map(|path| load_book(path, gems, &lookups, &mut diags))
        .transpose()?;

    let mut resolver = Resolver::new(&lookups);
    if let Some(book) = &book {
        resolver = resolver.with_runewords(book);
    }
    let props = resolver.resolve("cli", &slot, group, &mut diags);

    if props.is_empty() {
        println!("(no properties)");
    }
    for (key, value) in &props {
        println!("{}: {}", key, render_value(value));
    }
    print_diagnostics(&diags);

    Ok(())
}

fn cmd_runeword(name: &str, group: Option<&str>, runes: &Path, gems: Option<&Path>) -> itemdata_core::Result<()> {
    let lookups = Lookups::new();
    let mut diags = Diagnostics::new();
    let book = load_book(runes, gems, &lookups, &mut diags)?;

    let runeword = book
        .get_runeword(name, group, &lookups, &mut diags, name)
        .ok_or_else(|| Error::InvalidArgument(format!("rune word '{}' not found", name)))?;

    println!("Name: {}", runeword.name);
    println!("Runes: {}", runeword.runes.join(" "));
    println!("Item types: {}", runeword.item_types.join(", "));
    println!("Stats: {}", render_object(&runeword.rwstats));
    print_diagnostics(&diags);

    Ok(())
}

fn cmd_runewords_js(runes: &Path, output: &Path) -> itemdata_core::Result<()> {
    let lookups = Lookups::new();
    let mut diags = Diagnostics::new();
    let book = load_book(runes, None, &lookups, &mut diags)?;

    write_atomic(output, &book.render_runewords_js())?;
    println!("Wrote {} rune words to {}", book.len(), output.display());

    Ok(())
}

fn cmd_rune_stats(runes: &Path, gems: &Path) -> itemdata_core::Result<()> {
    let lookups = Lookups::new();
    let mut diags = Diagnostics::new();
    let book = load_book(runes, Some(gems), &lookups, &mut diags)?;

    println!("{}", book.describe_rune_stats());

    Ok(())
}

fn cmd_audit(file: &Path, json: bool) -> itemdata_core::Result<()> {
    let table = parse_tsv(file)?;
    let audit = audit_table(&table, &Lookups::new());

    if json {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    } else {
        println!("{}", audit.render_text());
        let unknown_codes = audit.unknown_codes().count();
        let unknown_bases = audit.unknown_bases().count();
        if unknown_codes + unknown_bases > 0 {
            println!();
            println!("{} unknown codes, {} unknown bases", unknown_codes, unknown_bases);
        }
    }

    Ok(())
}

fn cmd_init_config(output: &Path, data: &[PathBuf]) -> itemdata_core::Result<()> {
    let config = if data.is_empty() {
        ExportConfig::template()
    } else {
        ExportConfig::from_data_dir(data, "equipment.js")?
    };

    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to point at your tables, then run:");
    println!("  itemdata export --config {}", output.display());

    Ok(())
}
