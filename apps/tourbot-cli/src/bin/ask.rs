use std::env;
use std::path::PathBuf;

use tourbot_core::lang::detect_language;
use tourbot_embed::get_default_embedder;
use tourbot_retrieval::{normalize_query, render_answer, QueryResolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--db PATH] [--answers PATH] [--table NAME]", args[0]);
        eprintln!("Example: {} 'Tell me about Meenakshi Temple'", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let mut db_path = PathBuf::from("data/index");
    let mut answers_path = PathBuf::from("data/answers.json");
    let mut table_name = "answers".to_string();
    let mut i = 2; while i < args.len() { match args[i].as_str() {
        "--db" => { if i + 1 < args.len() { db_path = PathBuf::from(&args[i + 1]); i += 1; } else { eprintln!("Error: --db requires a path"); std::process::exit(1); } }
        "--answers" => { if i + 1 < args.len() { answers_path = PathBuf::from(&args[i + 1]); i += 1; } else { eprintln!("Error: --answers requires a path"); std::process::exit(1); } }
        "--table" => { if i + 1 < args.len() { table_name = args[i + 1].clone(); i += 1; } else { eprintln!("Error: --table requires a name"); std::process::exit(1); } }
        _ => {} } i += 1; }

    let Some(query) = normalize_query(query_text) else {
        eprintln!("⚠️  Please enter a valid message.");
        std::process::exit(1);
    };

    println!("🔍 tourbot-ask\n==============");
    println!("Query: {}", query);
    // Informational only; selection is purely vector-based
    println!("Language: {}", detect_language(query).as_str());
    println!("Index: {}  (table: {})", db_path.display(), table_name);

    let embedder = get_default_embedder()?;
    let resolver = QueryResolver::open(&db_path, &table_name, &answers_path, embedder).await?;

    match resolver.resolve(query).await {
        Ok(res) => {
            println!("\n  id={}  score={:.4}", res.id, res.score);
            println!("  🤖 {}", res.answer);
        }
        err => println!("\n  🤖 {}", render_answer(err)),
    }
    Ok(())
}
