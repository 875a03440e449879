// src/cli.rs
//
// Headless mode: fetch (cache-first), normalize, select, dump the table.
// Arg parsing is by hand; the surface is four selection flags plus output
// options.

use std::{env, path::PathBuf};

use crate::config::consts::YEAR_MAX;
use crate::config::options::ExportFormat;
use crate::csv;
use crate::select::{select_labeled, SelectionView};
use crate::store;

pub struct Params {
    pub year: u16,
    pub level: String,
    pub sex: String,
    pub unit: String,
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub refresh: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            year: YEAR_MAX,
            level: s!("nuts1"),
            sex: s!("total"),
            unit: s!("rel"),
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
            refresh: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    let observations = store::load_observations(params.refresh)?;

    // InvalidSelection from bad labels surfaces here, before filtering.
    let row_ix = select_labeled(
        &observations,
        params.year,
        &params.level,
        &params.sex,
        &params.unit,
    )?;

    let mut view = SelectionView::from_indices(&observations, row_ix);
    view.sort_by_value_desc();

    let headers = params.include_headers.then(SelectionView::headers);
    let text = csv::rows_to_string(&view.to_owned_rows(), &headers, params.format.delim());

    match &params.out {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("Wrote {} row(s) to {}", view.len(), path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-y" | "--year" => {
                params.year = args.next().ok_or("Missing value for --year")?.parse()?;
            }
            "-l" | "--level" => {
                params.level = args.next().ok_or("Missing value for --level")?;
            }
            "-s" | "--sex" => {
                params.sex = args.next().ok_or("Missing value for --sex")?;
            }
            "-u" | "--unit" => {
                params.unit = args.next().ok_or("Missing value for --unit")?;
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "--refresh" => params.refresh = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
