use clap::Parser;
use model_lab::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let context = cli::bootstrap();

    match cli.command {
        Command::New(args) => cli::new::run(&context, args),
        Command::Validate(args) => cli::validate::run(&context, args),
        Command::Update(args) => cli::update::run(&context, args),
        Command::Models => cli::catalog::models(&context),
        Command::Limits => cli::catalog::limits(&context),
    }
}
