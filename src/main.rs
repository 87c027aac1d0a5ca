use clap::Parser;
use miette::Result;
use pccat::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head` causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    pccat::logging::init_logging(global.verbose, global.quiet)?;

    match cli.command {
        Commands::Interactive(args) => pccat::cli::commands::interactive::run(args, &global),
        Commands::Report(args) => pccat::cli::commands::report::run(args, &global),
        Commands::Completions(args) => pccat::cli::commands::completions::run(args),
    }
}
