use exercisedb_client::{ExerciseProvider, config::Config, http_client::ReqwestExerciseDbClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects EXERCISEDB_API_KEY in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {e}");
            return Ok(());
        }
    };
    let part = std::env::args().nth(1).unwrap_or_else(|| "chest".to_string());
    let client = ReqwestExerciseDbClient::new(&cfg)?;
    let exercises = client.fetch_by_body_part(&part, 3).await?;
    for ex in exercises {
        println!("{} ({} / {}, {})", ex.name, ex.body_part, ex.target, ex.equipment);
    }
    Ok(())
}
