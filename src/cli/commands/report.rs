//! `pccat report` command - Build a report from PCs given as arguments

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{parse_pc_spec, resolve_format, write_output};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config, PcFactory};
use crate::report;

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// A PC as MODEL|YEAR|MANUFACTURER|COMP1,COMP2 (repeatable)
    #[arg(long = "pc", value_name = "SPEC")]
    pub pcs: Vec<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ReportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let format = resolve_format(global, &config)?;

    let mut catalog = Catalog::new(*PcFactory::shared());
    for spec in &args.pcs {
        let raw = parse_pc_spec(spec)
            .map_err(|e| miette::miette!("Invalid --pc '{}': {}", spec, e))?;
        catalog
            .add(raw.model, raw.year, raw.manufacturer, raw.components)
            .map_err(|e| miette::Report::new(e).wrap_err(format!("Invalid --pc '{}'", spec)))?;
    }

    let content = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&catalog.records().snapshot())
                .into_diagnostic()?;
            json.push('\n');
            json
        }
        _ if catalog.is_empty() => {
            if !global.quiet {
                eprintln!("No PCs recorded; nothing to report");
            }
            return Ok(());
        }
        OutputFormat::Report => report::render(&catalog.records().snapshot()),
        OutputFormat::Md => report::render_markdown(&catalog.records().snapshot()),
    };

    write_output(&content, args.output.as_deref())
}
