use crate::config::AppConfig;
use paperrag_api::Client;
use paperrag_api::models::StartIndexRequest;

pub async fn run_check(config: AppConfig) -> Result<(), String> {
    let client = Client::new(&config.into())?;
    let response = client.check_index().await?;
    println!("{}", response.message);
    Ok(())
}

pub async fn run_start(config: AppConfig) -> Result<(), String> {
    let client = Client::new(&config.into())?;
    let response = client.start_index(&StartIndexRequest::default()).await?;
    println!(
        "{}",
        if response.status.is_empty() {
            "Indexing started".to_string()
        } else {
            response.status
        }
    );
    Ok(())
}
