use pet_nlp::{
    analyzer::TextAnalyzer,
    api::start_server,
    classifier::{load_classifier, ClassifierKind},
    config::Config,
    lexicon::KeywordLexicon,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    let config = Config::from_env()?;

    info!("🐱 Pet NLP Server");
    info!("📍 Address: {}", config.bind_address());

    let lexicon = match &config.lexicon_path {
        Some(path) => KeywordLexicon::from_json_file(path)?,
        None => KeywordLexicon::builtin(),
    };
    info!(intents = lexicon.len(), "Keyword lexicon ready");

    // Classifiers are required; refuse to serve without them
    let sentiment = load_classifier(ClassifierKind::Sentiment, &config.sentiment_model_path)?;
    let intent = load_classifier(ClassifierKind::Intent, &config.intent_model_path)?;

    let analyzer = Arc::new(TextAnalyzer::from_parts(Arc::new(lexicon), sentiment, intent));

    info!("✅ Analyzer initialized");
    info!("📡 Starting API server...");

    start_server(analyzer, &config.bind_address()).await?;

    Ok(())
}
