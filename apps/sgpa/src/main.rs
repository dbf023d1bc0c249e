//! # SGPA
//!
//! Command-line SGPA calculator.

use clap::{Parser, Subcommand};
use sgpa::cli::{
    AppContext, CalculateArgs, cmd_calculate, cmd_catalog, cmd_departments, cmd_grades,
    cmd_interactive, cmd_lookup, cmd_subjects,
};
use sgpa::config::AppConfig;
use sgpa::logging::setup_logging;
use sgpa_core::{ArrearPolicy, Department, Semester};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

#[derive(Debug, Parser)]
#[command(name = "sgpa", version, about = "Semester grade-point average calculator")]
struct Cli {
    /// Config file (default: ./sgpa.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog replacing the bundled curriculum
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level for sgpa crates (RUST_LOG overrides)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Reject arrear codes already in the arrear list
    #[arg(long, global = true)]
    reject_duplicate_arrears: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List departments in the catalog
    Departments {
        #[arg(long)]
        json: bool,
    },

    /// List the subjects of a semester
    Subjects {
        #[arg(short, long)]
        department: Department,
        #[arg(short, long)]
        semester: Semester,
        #[arg(long)]
        json: bool,
    },

    /// Resolve a subject code within a department
    Lookup {
        #[arg(short, long)]
        department: Department,
        code: String,
        #[arg(long)]
        json: bool,
    },

    /// Show the grade table
    Grades {
        #[arg(long)]
        json: bool,
    },

    /// Export the active catalog as JSON
    Catalog {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Calculate SGPA for one semester plus arrears
    Calculate {
        #[arg(short, long)]
        department: Department,
        #[arg(short, long)]
        semester: Semester,
        /// KEY=GRADE where KEY is a subject code or name (repeatable)
        #[arg(short, long = "grade")]
        grades: Vec<String>,
        /// JSON object mapping subject code or name to grade
        #[arg(long)]
        grades_file: Option<PathBuf>,
        /// Arrear subject code (repeatable)
        #[arg(short, long = "arrear")]
        arrears: Vec<String>,
        #[arg(long)]
        json: bool,
        /// Write the circular gauge as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Run an interactive session on stdin
    Interactive,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(path) = cli.catalog {
        config.catalog = Some(path);
    }
    if cli.reject_duplicate_arrears {
        config.arrear_policy = ArrearPolicy::RejectDuplicates;
    }

    setup_logging(&config.log_level);
    info!(version = env!("CARGO_PKG_VERSION"), "starting sgpa");
    debug!(?config, "configuration loaded");

    let ctx = AppContext::from_config(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Departments { json } => cmd_departments(&ctx, &mut out, json),
        Commands::Subjects {
            department,
            semester,
            json,
        } => cmd_subjects(&ctx, &mut out, department, semester, json),
        Commands::Lookup {
            department,
            code,
            json,
        } => cmd_lookup(&ctx, &mut out, department, &code, json),
        Commands::Grades { json } => cmd_grades(&ctx, &mut out, json),
        Commands::Catalog { output } => cmd_catalog(&ctx, &mut out, output.as_deref()),
        Commands::Calculate {
            department,
            semester,
            grades,
            grades_file,
            arrears,
            json,
            svg,
        } => {
            let args = CalculateArgs {
                department,
                semester,
                grades,
                grades_file,
                arrears,
                json,
                svg,
            };
            cmd_calculate(&ctx, &mut out, &args)
        }
        Commands::Interactive => cmd_interactive(&ctx, io::stdin().lock(), &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
