use anyhow::Result;
use templatemap::cli::{App, Args};

fn main() -> Result<()> {
    let app = App::new();
    let args = Args::parse_args();

    app.run(args)
}
