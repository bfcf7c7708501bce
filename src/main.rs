use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use lumenator::logging::init_tracing;
use lumenator::report::REPORT_FILE_NAME;
use lumenator::{FormInput, InputGuard, Lighting, LumenConfig, LumenError, Session, UnitSystem};

const USAGE: &str = "lumenator

USAGE:
  lumenator --room <type> --length <n> --width <n> [options]
  lumenator rooms
  lumenator fixtures

OPTIONS:
  --unit <feet|meters>   Unit of length and width (default: feet)
  --lux <n>              Brightness for --room Custom, 50-1000
  --config <file>        TOML file with rooms, fixtures and currency
  --json                 Print the calculation as JSON
  --report <path>        Write the text report (directory -> lumenator-report.txt)
  --verbose              Debug logging on stderr
";

#[derive(Debug, PartialEq)]
enum Command {
    Calculate,
    Rooms,
    Fixtures,
    Help,
}

#[derive(Debug)]
struct Args {
    command: Command,
    form: FormInput,
    config: Option<PathBuf>,
    json: bool,
    report: Option<PathBuf>,
    verbose: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut argv: I) -> Result<Args, String> {
    let mut args = Args {
        command: Command::Calculate,
        form: FormInput::default(),
        config: None,
        json: false,
        report: None,
        verbose: false,
    };

    while let Some(arg) = argv.next() {
        let mut value = |name: &str| argv.next().ok_or_else(|| format!("{name} needs a value"));
        match arg.as_str() {
            "rooms" => args.command = Command::Rooms,
            "fixtures" => args.command = Command::Fixtures,
            "-h" | "--help" | "help" => args.command = Command::Help,
            "--room" => args.form.room_type = value("--room")?,
            "--length" => args.form.length = value("--length")?,
            "--width" => args.form.width = value("--width")?,
            "--lux" => args.form.custom_lux = value("--lux")?,
            "--unit" => args.form.unit = value("--unit")?.parse::<UnitSystem>()?,
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--report" => args.report = Some(PathBuf::from(value("--report")?)),
            "--json" => args.json = true,
            "-v" | "--verbose" => args.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn load_lighting(path: Option<&PathBuf>) -> Result<Lighting, LumenError> {
    match path {
        Some(p) => LumenConfig::load(p)?.build(),
        None => LumenConfig::default().build(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    init_tracing(args.verbose)?;

    if args.command == Command::Help {
        print!("{USAGE}");
        return Ok(());
    }

    let lighting = load_lighting(args.config.as_ref())?;

    match args.command {
        Command::Rooms => {
            println!("room_type,lux");
            for room in lighting.rooms.rooms() {
                if room.is_custom() {
                    println!("{},custom", room.name);
                } else {
                    println!("{},{}", room.name, room.lux);
                }
            }
            return Ok(());
        }
        Command::Fixtures => {
            println!("id,name,lumens,price");
            for f in lighting.catalog.fixtures() {
                println!("{},{},{},{:.2}", f.id, f.name, f.lumens, f.price);
            }
            return Ok(());
        }
        Command::Calculate | Command::Help => {}
    }

    let input =
        InputGuard::validate(&args.form, &lighting.rooms).map_err(LumenError::InvalidInput)?;
    let mut session = Session::new(&lighting);
    let calc = session.calculate(&input)?;

    if args.json {
        println!("{}", calc.to_json()?);
    } else {
        let r = &calc.result;
        println!(
            "{},{:.2} sq ft,{:.2} sq m,{} lux,{} lm",
            input.room_type, r.area_sq_ft, r.area_sq_m, r.required_lux, r.total_lumens
        );
        println!("rank,name,quantity,total_lumens,total_cost,efficiency,best_value");
        for (i, s) in calc.suggestions.iter().enumerate() {
            let efficiency = s
                .efficiency
                .map(|e| format!("{e:.1}"))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "{},{},{},{},{:.2},{},{}",
                i + 1,
                s.fixture.name,
                s.quantity,
                s.total_lumens,
                s.total_cost,
                efficiency,
                i == 0
            );
        }
    }

    if let Some(mut path) = args.report {
        if path.is_dir() {
            path.push(REPORT_FILE_NAME);
        }
        let generated_at = chrono::Local::now().naive_local();
        if let Some(text) = session.report(generated_at) {
            fs::write(&path, text)?;
            info!("report written to {}", path.display());
        }
    }

    Ok(())
}
