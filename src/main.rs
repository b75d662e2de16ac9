use clap::Parser;
use icondoc::cli::{Cli, Commands};
use icondoc::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None | Some(Commands::Generate) => {
            icondoc::cli::generate::run(&cli.config.resolve()?, &printer)?
        }
        Some(Commands::Check) => icondoc::cli::check::run(&cli.config.resolve()?, &printer)?,
        Some(Commands::Completions(args)) => icondoc::cli::completions::run(args)?,
    }

    Ok(())
}
