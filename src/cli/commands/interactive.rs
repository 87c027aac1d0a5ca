//! `pccat interactive` command - Prompt for PCs, then report on them

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::write_file;
use crate::cli::GlobalOpts;
use crate::core::{Catalog, Config, PcFactory, UniqueCollection};

#[derive(clap::Args, Debug)]
pub struct InteractiveArgs {
    /// Where to save the report (default: config `report_file`, else pcs.txt)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: InteractiveArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let theme = ColorfulTheme::default();
    let mut catalog = Catalog::new(*PcFactory::shared());

    loop {
        println!("{}", style("Create object").bold());

        let model: String = Input::with_theme(&theme)
            .with_prompt("PC model")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        // Non-integer input is re-prompted by dialoguer
        let year: i32 = Input::with_theme(&theme)
            .with_prompt("PC year")
            .interact_text()
            .into_diagnostic()?;

        let manufacturer: String = Input::with_theme(&theme)
            .with_prompt("Manufacturer")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;

        let components = prompt_components(&theme)?;

        match catalog.add(model, year, manufacturer, components) {
            Ok(true) => {
                if !global.quiet {
                    println!("{} Recorded PC #{}", style("✓").green(), catalog.size());
                }
            }
            Ok(false) => {
                println!(
                    "{} An identical PC is already recorded",
                    style("!").yellow()
                );
            }
            Err(e) => {
                // The record is dropped; the session continues
                eprintln!("{:?}", miette::Report::new(e));
            }
        }

        let more = Confirm::with_theme(&theme)
            .with_prompt("Continue to add PC?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !more {
            break;
        }
    }

    if let Some(report) = catalog.report() {
        print!("{}", report);

        let save = Confirm::with_theme(&theme)
            .with_prompt("Save report to file?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if save {
            let path = args.output.unwrap_or_else(|| config.report_file());
            write_file(&report, &path)?;
            println!("Report saved to {}", style(path.display()).cyan());
        }
    }

    println!("~END~");
    Ok(())
}

/// Read component names until the user declines to add another
fn prompt_components(theme: &ColorfulTheme) -> Result<UniqueCollection<String>> {
    let mut components = UniqueCollection::new();
    loop {
        let component: String = Input::with_theme(theme)
            .with_prompt("Component")
            .interact_text()
            .into_diagnostic()?;
        components.insert(component);

        let more = Confirm::with_theme(theme)
            .with_prompt("Continue to add comp?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !more {
            return Ok(components);
        }
    }
}
