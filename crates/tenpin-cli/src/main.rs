mod bowler;
mod command;
mod logging;
mod report;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
