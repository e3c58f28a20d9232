use llm_fallback::config::load_manager_config;
use llm_fallback::gemini::{self, GeminiBackend};
use llm_fallback::manager::FallbackManager;
use llm_fallback::TextBackend;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Initialize logger - must be done before any logging calls
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: llm_fallback <prompt>");
        eprintln!("       llm_fallback --check    (list models reachable with the configured key)");
        eprintln!("       llm_fallback --status   (print the backend health snapshot)");
        return;
    }

    // Load configuration from modelconf.txt file
    let config = match load_manager_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load modelconf.txt: {}", e);
            eprintln!("Failed to load modelconf.txt: {}", e);
            eprintln!("Create a modelconf.txt in the project root; see example_modelconf.txt for reference.");
            return;
        }
    };

    // Connectivity check mode: verify the key and endpoint before
    // anything else, the same way a fresh deployment is smoke-tested
    if args[0] == "--check" {
        match gemini::list_models(&config.base_url, &config.api_key).await {
            Ok(models) => {
                println!("Reachable models ({}):", models.len());
                for model in models {
                    println!("  {}", model);
                }
            }
            Err(e) => {
                eprintln!("Connectivity check failed: {}", e);
            }
        }
        return;
    }

    // Build one Gemini backend per configured model
    let request_timeout = Duration::from_secs(config.request_timeout);
    let backends = config
        .backends
        .iter()
        .map(|spec| {
            let backend = GeminiBackend::new(
                &spec.name,
                &config.api_key,
                &config.base_url,
                request_timeout,
            );
            (spec.clone(), Arc::new(backend) as Arc<dyn TextBackend>)
        })
        .collect();

    let manager = FallbackManager::new(backends, config.settings.clone());

    if args[0] == "--status" {
        print_status(&manager);
        return;
    }

    let prompt = args.join(" ");
    log::info!("Generating with up to {} attempts", config.max_attempts);

    match manager.generate(&prompt, config.max_attempts).await {
        Ok(text) => {
            println!("{}", text);
            if let Some(current) = manager.current_backend() {
                log::info!("Response produced by '{}'", current);
            }
        }
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            eprintln!("Backend status:");
            print_status(&manager);
        }
    }
}

fn print_status(manager: &FallbackManager) {
    match serde_json::to_string_pretty(&manager.status()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to render status: {}", e),
    }
}
