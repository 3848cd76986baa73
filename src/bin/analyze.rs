use pet_nlp::{
    analyzer::TextAnalyzer,
    classifier::{load_classifier, ClassifierKind},
    config::Config,
    error::NlpError,
    lexicon::KeywordLexicon,
};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        eprintln!("usage: analyze <text>");
        return Err(NlpError::EmptyInput.into());
    }

    let config = Config::from_env()?;

    let lexicon = match &config.lexicon_path {
        Some(path) => KeywordLexicon::from_json_file(path)?,
        None => KeywordLexicon::builtin(),
    };
    let sentiment = load_classifier(ClassifierKind::Sentiment, &config.sentiment_model_path)?;
    let intent = load_classifier(ClassifierKind::Intent, &config.intent_model_path)?;

    let analyzer = TextAnalyzer::from_parts(Arc::new(lexicon), sentiment, intent);

    info!(text = %text, "Analyzing text");

    let analysis = analyzer.analyze(&text)?;

    println!("\n=== ANALYSIS RESULT ===");
    println!("Text: {}", analysis.text);
    println!("Sentiment: {}", analysis.sentiment);
    println!("Intent: {}", analysis.resolution.intent);
    println!("Method: {}", analysis.resolution.method);
    if let Some(keyword) = &analysis.resolution.matched_keyword {
        println!("Keyword: {}", keyword);
    }
    println!("Action: {}", analysis.action());
    println!("\nDecision Trace:");
    for (i, step) in analysis.resolution.trace.iter().enumerate() {
        println!("  {}: {}", i + 1, step);
    }

    Ok(())
}
