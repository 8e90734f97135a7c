use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = direx::cli::parse();
    app::run(args)
}
