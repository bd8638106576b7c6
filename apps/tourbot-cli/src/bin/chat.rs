use std::io::{self, Write};

use tourbot_core::config::{expand_path, Config};
use tourbot_core::session::ConversationLog;
use tourbot_embed::{get_default_embedder, EMBED_DIM, MODEL_NAME};
use tourbot_retrieval::{normalize_query, render_answer, QueryResolver};

const PREVIEW_CHARS: usize = 30;

/// Load config and bring up the resolver (embedding model, index table,
/// answer store). Everything here is loaded once and read-only afterwards.
async fn setup_resolver() -> anyhow::Result<QueryResolver> {
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    let index_dir: String = config.get("data.index_dir").unwrap_or_else(|_| "data/index".to_string());
    let answers_path: String = config.get("data.answers_path").unwrap_or_else(|_| "data/answers.json".to_string());
    let table: String = config.get("data.table").unwrap_or_else(|_| "answers".to_string());

    let index_dir = expand_path(&index_dir);
    let answers_path = expand_path(&answers_path);
    if !index_dir.exists() {
        println!("❌ Index not found at {}. Point data.index_dir in config.toml at the prebuilt index.", index_dir.display());
        std::process::exit(1);
    }

    let embedder = get_default_embedder()?;
    QueryResolver::open(&index_dir, &table, &answers_path, embedder).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional banner art; absence is non-fatal
    if let Ok(banner) = std::fs::read_to_string("data/banner.txt") {
        println!("{}", banner);
    }
    println!("🌄 Tamil Nadu Tourism Chatbot");
    println!("=============================");

    let resolver = setup_resolver().await?;

    println!("✅ Knowledge base loaded ({} answers)", resolver.answers().len());
    println!();
    println!("🤖 Hi there! 👋 Ask me about temples, places, or festivals in Tamil Nadu.");
    println!("   Try: \"Tell me about Meenakshi Temple\"");
    println!("        \"பொங்கல் என்பது என்ன?\"");
    println!("        \"What's special in Mahabalipuram?\"");
    println!();
    println!("Type /help for commands.");
    println!();

    chat_loop(&resolver).await
}

/// One session: one log, one query in flight at a time, turns appended in
/// submission order.
async fn chat_loop(resolver: &QueryResolver) -> anyhow::Result<()> {
    let mut log = ConversationLog::new();

    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim_end_matches(['\r', '\n']);

        match input {
            "/help" | "/h" => show_help(),
            "/history" => show_history(&log),
            "/clear" => {
                log.clear();
                println!("🗑  Chat history cleared.");
            }
            "/stats" => show_stats(resolver),
            "/quit" | "/q" | "quit" | "exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {
                // Empty submissions never reach the resolver
                let Some(query) = normalize_query(input) else {
                    println!("⚠️  Please enter a valid message.");
                    println!();
                    continue;
                };
                let answer = render_answer(resolver.resolve(query).await);
                println!("🤖 {}", answer);
                log.append(query, &answer);
            }
        }
        println!();
    }

    Ok(())
}

/// Character-safe preview of a question for the history panel. Display
/// only; the stored turn is untouched.
fn preview(question: &str) -> String {
    let mut p: String = question.chars().take(PREVIEW_CHARS).collect();
    if question.chars().count() > PREVIEW_CHARS {
        p.push_str("...");
    }
    p
}

fn show_history(log: &ConversationLog) {
    println!("🕘 Chat History");
    println!("===============");
    if log.is_empty() {
        println!("  (no questions yet)");
        return;
    }
    for turn in log.recent() {
        println!("  🗨  [{}] {}", turn.asked_at.format("%H:%M:%S"), preview(&turn.question));
    }
}

fn show_stats(resolver: &QueryResolver) {
    println!("📈 Knowledge Base Statistics");
    println!("============================");
    println!("  Answers: {}", resolver.answers().len());
    println!("  Embedding dim: {}", EMBED_DIM);
    println!("  Model: {}", MODEL_NAME);
}

fn show_help() {
    println!("🎯 Chat Commands:");
    println!("  /help      - Show this help message");
    println!("  /history   - List your questions, most recent first");
    println!("  /clear     - Clear the chat history");
    println!("  /stats     - Show knowledge base statistics");
    println!("  /quit      - Exit the chat");
    println!("  <question> - Ask about Tamil Nadu tourism");
    println!();
    println!("📋 Examples:");
    println!("  Tell me about Meenakshi Temple");
    println!("  பொங்கல் என்பது என்ன?");
    println!("  What's special in Mahabalipuram?");
}
