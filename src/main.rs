use clap::Parser as _;

mod app;
mod browse;
mod cli;
mod config;
mod gateways;
mod render;
mod sample;


#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    cli::run(args).await
}
