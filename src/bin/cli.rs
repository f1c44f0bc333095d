use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use jetlag_planner::{
    AdjustmentStrategy, BatchOutcome, BatchSummary, PlanSnapshot, PlannerConfig, PlannerError,
    PlannerResult, RawDays, TripRequest, Wizard, WizardStep, compute, compute_batch,
    load_trip_from_json, load_trips_from_csv, logging, render_plan, save_plan_to_csv,
    save_plan_to_json, write_plan_csv,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Plan your sleep to beat jet lag.
#[derive(Parser)]
#[command(name = "jetlag-planner", version, about = "Five-day sleep plan for crossing time zones")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a JSON planner config.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Defaults to the interactive wizard.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a plan from flags or a trip file.
    Plan(PlanArgs),
    /// Answer one question at a time on stdin.
    Wizard,
    /// Plan every trip in a CSV file.
    Batch(BatchArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(clap::Args)]
struct PlanArgs {
    /// JSON trip file; flags below override its fields.
    #[arg(long)]
    trip: Option<PathBuf>,

    /// Departure date & time on the origin clock (YYYY-MM-DDTHH:MM).
    #[arg(long)]
    departure: Option<String>,

    /// Arrival date & time on the destination clock (YYYY-MM-DDTHH:MM).
    #[arg(long)]
    arrival: Option<String>,

    /// after-arrival, on-plane or before-departure.
    #[arg(long)]
    strategy: Option<String>,

    /// Days before departure to start (before-departure only).
    #[arg(long = "days-before")]
    days_before: Option<String>,

    /// Usual bedtime (HH:MM).
    #[arg(long)]
    bedtime: Option<String>,

    /// Usual wake-up time (HH:MM).
    #[arg(long = "wake-time")]
    wake_time: Option<String>,

    /// Departure city label.
    #[arg(long = "from")]
    departure_city: Option<String>,

    /// Arrival city label.
    #[arg(long = "to")]
    arrival_city: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// CSV with a header row: departure,arrival,strategy,days_before,bedtime,wake_time,departure_city,arrival_city
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> PlannerResult<()> {
    let config = PlannerConfig::load_or_default(cli.config.as_ref())?;
    match cli.command.unwrap_or(Command::Wizard) {
        Command::Plan(args) => run_plan(args, &config),
        Command::Wizard => run_wizard(config),
        Command::Batch(args) => run_batch(args, &config),
    }
}

fn merge_request(args: &PlanArgs) -> PlannerResult<TripRequest> {
    let mut request = match &args.trip {
        Some(path) => load_trip_from_json(path)?,
        None => TripRequest::default(),
    };
    if let Some(v) = &args.departure {
        request.departure = v.clone();
    }
    if let Some(v) = &args.arrival {
        request.arrival = v.clone();
    }
    if args.strategy.is_some() {
        request.strategy = args.strategy.clone();
    }
    if let Some(v) = &args.days_before {
        request.days_before = Some(RawDays::Text(v.clone()));
    }
    if args.bedtime.is_some() {
        request.bedtime = args.bedtime.clone();
    }
    if args.wake_time.is_some() {
        request.wake_time = args.wake_time.clone();
    }
    if args.departure_city.is_some() {
        request.departure_city = args.departure_city.clone();
    }
    if args.arrival_city.is_some() {
        request.arrival_city = args.arrival_city.clone();
    }
    Ok(request)
}

fn run_plan(args: PlanArgs, config: &PlannerConfig) -> PlannerResult<()> {
    let request = merge_request(&args)?;
    let (input, labels) = request.parse_with_defaults(config)?;
    let result = compute(&input);
    info!(summary = %result.to_cli_summary(), "plan computed");

    match (args.format, &args.output) {
        (OutputFormat::Table, None) => print!("{}", render_plan(&result, &labels)?),
        (OutputFormat::Table, Some(path)) => fs::write(path, render_plan(&result, &labels)?)?,
        (OutputFormat::Json, None) => {
            let snapshot = PlanSnapshot::new(labels, result);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        (OutputFormat::Json, Some(path)) => save_plan_to_json(&result, &labels, path)?,
        (OutputFormat::Csv, None) => write_plan_csv(&result, io::stdout().lock())?,
        (OutputFormat::Csv, Some(path)) => save_plan_to_csv(&result, path)?,
    }
    Ok(())
}

fn run_batch(args: BatchArgs, config: &PlannerConfig) -> PlannerResult<()> {
    let trips = load_trips_from_csv(&args.input)?;
    let outcomes = compute_batch(&trips, config);
    let summary = BatchSummary::from_outcomes(&outcomes);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Csv => {
            return Err(PlannerError::InvalidData(
                "batch output supports table or json".to_string(),
            ));
        }
        OutputFormat::Table => {
            for outcome in &outcomes {
                match outcome {
                    BatchOutcome::Planned {
                        index,
                        labels,
                        result,
                    } => {
                        println!("Trip #{}", index + 1);
                        print!("{}", render_plan(result, labels)?);
                    }
                    BatchOutcome::Rejected { index, message } => {
                        println!("Trip #{} rejected: {}", index + 1, message);
                    }
                }
            }
            println!("Batch ({})", summary.to_cli_summary());
        }
    }
    Ok(())
}

fn print_wizard_help() {
    println!(
        "Answer each question and press enter.\n  back     Return to the previous question\n  restart  Start over\n  help     Show this help\n  quit     Exit"
    );
    println!("Adjustment strategies:");
    for (key, description) in AdjustmentStrategy::variants() {
        println!("  {:<18} {}", key, description);
    }
}

fn run_wizard(config: PlannerConfig) -> PlannerResult<()> {
    let mut wizard = Wizard::new(config);
    println!("JetLagLess planner (wizard) - type 'help' for commands\n");
    println!("{}", wizard.step().prompt());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "help" => {
                print_wizard_help();
                continue;
            }
            "back" => {
                wizard.back();
            }
            "restart" => {
                wizard.restart();
            }
            answer => {
                if let Err(err) = wizard.advance(answer) {
                    println!("{err}");
                    continue;
                }
            }
        }

        if wizard.step() == WizardStep::Results {
            if let Some(result) = wizard.result() {
                println!("{}", WizardStep::Results.prompt());
                print!("{}", render_plan(result, &wizard.labels())?);
                println!("Computed ({})", result.to_cli_summary());
                println!("Type 'restart' to plan another trip or 'quit' to exit.");
            }
        } else {
            println!("{}", wizard.step().prompt());
        }
    }
    Ok(())
}
