use anyhow::Result;

fn main() -> Result<()> {
    verso_player::cli::run()
}
