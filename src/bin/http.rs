#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use jetlag_planner::{PlannerConfig, http_api, logging};

    logging::init(1);

    let config_path = std::env::args().nth(1);
    let mut config = PlannerConfig::load_or_default(config_path.as_deref())?;
    config.apply_env_overrides();

    println!("jetlag-planner HTTP API listening on http://{}", config.http_addr);
    let addr = config.http_addr;
    http_api::serve(addr, config).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
