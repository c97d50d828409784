use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use mindscore::config::logging;
use mindscore::dashboard::client::ApiClient;
use mindscore::dashboard::command::{self, Command, HELP};
use mindscore::dashboard::session::{ChatState, DashboardSession, PredictionState};
use mindscore::services::prompt::render_value;

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(version, about = "Mind Score dashboard: predict your score and chat about it")]
struct Args {
    /// Base URL of the prediction/chat API
    #[arg(long, env = "MINDSCORE_API_URL", default_value = "http://127.0.0.1:8000")]
    api_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_stderr();

    let args = Args::parse();
    let api = ApiClient::new(args.api_url.clone());
    let mut session = DashboardSession::default();

    tracing::debug!(api_url = %args.api_url, "dashboard started");
    println!("Mind Score Prediction Dashboard ({})", args.api_url);
    println!("{}", HELP);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let cmd = match command::parse(&line) {
            Ok(cmd) => cmd,
            Err(e) if e.is_empty() => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::Set { field, value } => {
                if let Err(e) = session.set_field(&field, &value) {
                    println!("{}", e);
                }
            }
            Command::Predict => match session.predict(&api).await {
                PredictionState::Shown(label) => {
                    println!("Predicted Mind Score Category: {}", render_value(label))
                }
                PredictionState::Failed(e) => println!("{}", e),
                _ => {}
            },
            Command::Chat(message) => {
                if message.trim().is_empty() {
                    continue;
                }
                let state = session.send_chat(&api, &message).await.clone();
                match state {
                    ChatState::Shown => {
                        if let Some(reply) = session.transcript().last() {
                            println!("Bot: {}", reply.text);
                        }
                    }
                    ChatState::Failed(e) => println!("{}", e),
                    _ => {}
                }
            }
            Command::Show => {
                println!("{}", serde_json::to_string_pretty(&session.form)?);
                match session.last_prediction() {
                    Some(label) => println!("Last prediction: {}", render_value(label)),
                    None => println!("Last prediction: none"),
                }
            }
            Command::History => {
                for entry in session.transcript() {
                    println!(
                        "[{}] {}: {}",
                        entry.at.format("%H:%M:%S"),
                        entry.sender.as_str(),
                        entry.text
                    );
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
