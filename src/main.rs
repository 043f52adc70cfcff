#[tokio::main]
async fn main() {
    if let Err(err) = xproof::mcp::server::run_stdio().await {
        eprintln!("xproof: {}", err);
        std::process::exit(1);
    }
}
