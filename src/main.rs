use clap::Parser;
use anyhow::Result;
use yb_xcluster_check::{run, Opts};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let options = Opts::parse();
    run(options)
}
