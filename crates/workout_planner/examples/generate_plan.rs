//! Print a weekly plan as JSON.
//!
//! Usage: `generate_plan <days> <full_body|muscle|body_part> [preference...]`
//! with `EXERCISEDB_API_KEY` set in the environment.

use anyhow::Context;
use exercisedb_client::{config::Config, http_client::ReqwestExerciseDbClient};
use workout_planner::{generate_plan, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let days: u32 = args
        .next()
        .unwrap_or_else(|| "3".to_string())
        .parse()
        .context("days must be a positive integer")?;
    let mode = args.next().unwrap_or_else(|| "full_body".to_string());
    let preferences: Vec<String> = args.collect();

    let cfg = Config::from_env()?;
    let client = ReqwestExerciseDbClient::new(&cfg)?;
    let plan = generate_plan(&client, days, &mode, &preferences).await?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
