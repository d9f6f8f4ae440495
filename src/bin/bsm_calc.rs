// src/bin/bsm_calc.rs
use bsm_calc::analytics::bs_analytic::OptionKind;
use bsm_calc::error::{BsmError, BsmResult};
use bsm_calc::output;
use bsm_calc::report::{render_text, ReportSections};
use bsm_calc::valuation::{evaluate, CalculatorConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: bsm-calc [OPTIONS]

Options:
  --spot <S>        Spot price (default 100)
  --strike <K>      Strike price (default 100)
  --expiry <T>      Time to expiry in years (default 1)
  --rate <r>        Risk-free rate as a decimal (default 0.05)
  --sigma <σ>       Volatility as a decimal (default 0.2)
  --premium <P>     Premium paid; defaults to the call price
  --points <N>      P&L grid points (default 10)
  --lower <x>       Grid lower bound as a multiple of spot (default 0.5)
  --upper <x>       Grid upper bound as a multiple of spot (default 1.5)
  --kind <call|put> Show the price of one leg only
  --only <list>     Sections to print: prices,greeks,pnl (default all)
  --json            Print the valuation as JSON instead of text
  --csv <dir>       Also write pnl.csv and summary.csv into <dir>
  -h, --help        Print this help";

struct CliArgs {
    config: CalculatorConfig,
    kind: Option<OptionKind>,
    sections: ReportSections,
    json: bool,
    csv_dir: Option<PathBuf>,
}

fn parse_number(flag: &str, raw: Option<&String>) -> BsmResult<f64> {
    let raw = raw.ok_or_else(|| BsmError::InvalidConfiguration {
        field: flag.to_string(),
        reason: "missing value".to_string(),
    })?;
    raw.parse::<f64>().map_err(|_| BsmError::InvalidConfiguration {
        field: flag.to_string(),
        reason: format!("'{}' is not a number", raw),
    })
}

fn parse_args(args: &[String]) -> BsmResult<Option<CliArgs>> {
    let mut cli = CliArgs {
        config: CalculatorConfig::default(),
        kind: None,
        sections: ReportSections::default(),
        json: false,
        csv_dir: None,
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "-h" | "--help" => return Ok(None),
            "--spot" => cli.config.params.spot = parse_number(flag, iter.next())?,
            "--strike" => cli.config.params.strike = parse_number(flag, iter.next())?,
            "--expiry" => cli.config.params.expiry = parse_number(flag, iter.next())?,
            "--rate" => cli.config.params.rate = parse_number(flag, iter.next())?,
            "--sigma" => cli.config.params.sigma = parse_number(flag, iter.next())?,
            "--premium" => cli.config.premium = Some(parse_number(flag, iter.next())?),
            "--lower" => cli.config.grid.lower_ratio = parse_number(flag, iter.next())?,
            "--upper" => cli.config.grid.upper_ratio = parse_number(flag, iter.next())?,
            "--points" => {
                let raw = iter.next().map(String::as_str).unwrap_or("");
                cli.config.grid.points =
                    raw.parse::<usize>().map_err(|_| BsmError::InvalidConfiguration {
                        field: flag.to_string(),
                        reason: format!("'{}' is not a positive integer", raw),
                    })?;
            }
            "--kind" => {
                let raw = iter.next().map(String::as_str).unwrap_or("");
                cli.kind = Some(raw.parse::<OptionKind>()?);
            }
            "--only" => {
                let raw = iter.next().map(String::as_str).unwrap_or("");
                cli.sections = ReportSections::parse_list(raw)?;
            }
            "--json" => cli.json = true,
            "--csv" => {
                let dir = iter.next().ok_or_else(|| BsmError::InvalidConfiguration {
                    field: flag.to_string(),
                    reason: "missing directory".to_string(),
                })?;
                cli.csv_dir = Some(PathBuf::from(dir));
            }
            other => {
                return Err(BsmError::InvalidConfiguration {
                    field: other.to_string(),
                    reason: "unrecognised argument".to_string(),
                })
            }
        }
    }
    Ok(Some(cli))
}

fn run(args: &[String]) -> BsmResult<()> {
    let Some(cli) = parse_args(args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let valuation = evaluate(&cli.config)?;

    if cli.json {
        println!("{}", output::valuation_to_json(&valuation)?);
    } else {
        print!("{}", render_text(&valuation, cli.sections, cli.kind));
    }

    if let Some(dir) = cli.csv_dir {
        output::write_pnl_to_csv(dir.join("pnl.csv"), &valuation.pnl)?;
        output::write_summary_to_csv(
            dir.join("summary.csv"),
            &output::valuation_summary(&valuation),
        )?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
