use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tutorlink_sdk::{Conversation, RelayClient};

#[derive(Parser, Debug)]
#[command(name = "tutorlink-cli")]
#[command(about = "Terminal client for the Tutorlink study-help relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the relay (ex: http://localhost:3002)
    #[arg(long)]
    relay_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// The question to send
        question: String,
    },
    /// Interactive conversation (keeps history across turns)
    Chat,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let relay_url = cli
        .relay_url
        .or_else(|| std::env::var("RELAY_URL").ok())
        .unwrap_or_else(|| "http://localhost:3002".to_string());

    let client = RelayClient::new(&relay_url);
    let mut conversation = Conversation::new();

    match cli.command {
        Commands::Ask { question } => match client.send_turn(&mut conversation, &question).await {
            Ok(reply) => println!("{}", reply.content),
            Err(e) => println!("⚠ {e}"),
        },
        Commands::Chat => {
            println!("Connected to relay at {relay_url}");
            println!("Type a question and press Enter (empty line to quit).");

            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;

                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    break; // EOF
                }
                let question = line.trim();
                if question.is_empty() {
                    break;
                }

                // A failed turn is rolled back by the SDK, so the next
                // question starts from the last good history.
                match client.send_turn(&mut conversation, question).await {
                    Ok(reply) => println!("{}", reply.content),
                    Err(e) => println!("⚠ {e}"),
                }
            }
        }
    }

    Ok(())
}
