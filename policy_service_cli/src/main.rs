use clap::Parser;
use dotenv::dotenv;
use policy_service_cli::ai::{OpenRouterClient, DEFAULT_MODEL};
use policy_service_cli::{pipeline, utils};
use std::env;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Privacy policy URL or the policy text itself
    input: String,

    /// Model identifier to send to the completion endpoint
    #[arg(short, long)]
    model: Option<String>,

    /// Also write the report to this file
    #[arg(short, long)]
    out: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key =
        env::var("OPENROUTER_API_KEY").expect("OPENROUTER_API_KEY environment variable not set");

    let args = Args::parse();
    let model_id = args
        .model
        .or_else(|| env::var("POLICY_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let model = OpenRouterClient::new(api_key, model_id)?;
    let report = pipeline::analyze_policy_input(&args.input, &model).await;

    let value = serde_json::to_value(&report)?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    if let Some(path) = args.out {
        utils::save_json(&value, &path)?;
    }

    Ok(())
}
