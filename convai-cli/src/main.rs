use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use convai_core::{Config, ConvaiClient, DEFAULT_ENV_FILE};

#[derive(Debug, Parser)]
#[command(
    name = "convai",
    version,
    about = "Fetch and inspect ElevenLabs agent conversations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one conversation and print it as JSON
    Get {
        conversation_id: String,

        /// Save the JSON to a file instead of printing it
        #[arg(long)]
        save: bool,

        /// Output file path (implies --save)
        #[arg(long)]
        output: Option<PathBuf>,

        /// API key, overriding the environment and .env file
        #[arg(long)]
        api_key: Option<String>,
    },
    /// List recent conversations
    List {
        /// Number of conversations to show
        #[arg(long, default_value_t = 10)]
        recent: u32,

        /// API key, overriding the environment and .env file
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Fetch one conversation and print a Markdown report
    Analyze {
        conversation_id: String,

        /// API key, overriding the environment and .env file
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Download the conversation audio
    Audio {
        conversation_id: String,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,

        /// API key, overriding the environment and .env file
        #[arg(long)]
        api_key: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> convai_core::Result<()> {
    match cli.command {
        Command::Get {
            conversation_id,
            save,
            output,
            api_key,
        } => {
            let client = client(api_key.as_deref())?;
            let conversation = client.fetch_conversation(&conversation_id)?;
            let json = convai_core::conversation_to_json(&conversation)?;

            if save || output.is_some() {
                let path = output
                    .unwrap_or_else(|| convai_core::default_conversation_path(&conversation_id));
                convai_core::write_output(&path, json.as_bytes())?;
                println!("Saved conversation to {}", path.display());
            } else {
                println!("{json}");
            }
            Ok(())
        }
        Command::List { recent, api_key } => {
            let client = client(api_key.as_deref())?;
            let conversations = client.list_conversations(recent, 0)?;
            print!("{}", convai_core::render_list_markdown(&conversations));
            Ok(())
        }
        Command::Analyze {
            conversation_id,
            api_key,
        } => {
            let client = client(api_key.as_deref())?;
            let conversation = client.fetch_conversation(&conversation_id)?;
            print!("{}", convai_core::render_report(&conversation));
            Ok(())
        }
        Command::Audio {
            conversation_id,
            output,
            api_key,
        } => {
            let client = client(api_key.as_deref())?;
            let audio = client.fetch_audio(&conversation_id)?;
            let path =
                output.unwrap_or_else(|| convai_core::default_audio_path(&conversation_id));
            convai_core::write_output(&path, &audio)?;
            println!("Saved audio to {}", path.display());
            Ok(())
        }
    }
}

fn client(api_key: Option<&str>) -> convai_core::Result<ConvaiClient> {
    let config = Config::resolve(api_key, Path::new(DEFAULT_ENV_FILE))?;
    Ok(ConvaiClient::new(&config))
}
