use clap::{Parser, Subcommand};
use pksav::inspect;

#[derive(Parser)]
#[command(about = "Inspect Pokemon save images")]
struct Opts {
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    Inspect(inspect::Opts),
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().filter("RUST_LOG"));

    let opts = Opts::parse();
    let mut stdout = std::io::stdout().lock();
    match opts.tool {
        ToolOpts::Inspect(opts) => inspect::run(opts, &mut stdout),
    }
    .map_err(|err| {
        eprintln!("Failed to execute command: {err:#}");
        err
    })
}
