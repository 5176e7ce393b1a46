#[tokio::main]
async fn main() {
    crewledger::init();
    if let Err(err) = crewledger::report::run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
