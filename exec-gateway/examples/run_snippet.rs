use exec_gateway::{ExecutionRequest, Gateway, GatewayConfig, Provider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Pick the binding: direct API by default, RapidAPI when requested
    let provider = match std::env::var("ONECOMPILER_PROVIDER") {
        Ok(value) => value.parse::<Provider>()?,
        Err(_) => Provider::Direct,
    };

    let config = GatewayConfig::new(provider, std::env::var("ONECOMPILER_API_KEY").ok());
    let gateway = Gateway::new(config)?;

    let request = ExecutionRequest {
        code: "print('Hello from the execution gateway!')".to_string(),
        language: "python".to_string(),
        stdin: String::new(),
    };

    let result = gateway.execute(&request).await?;

    println!("Execution completed!");
    println!("Stdout: {}", result.stdout);
    println!("Stderr: {}", result.stderr);
    if let Some(exception) = result.exception {
        println!("Exception: {}", exception);
    }
    println!("Execution time: {} ms", result.execution_time);

    Ok(())
}
