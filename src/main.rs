use ship_note_client::{cli, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install the logger before anything can emit; whether it actually
    // writes is decided by the CLI flags.
    let _ = logger::init();

    cli::main().await
}
