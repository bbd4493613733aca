use anyhow::Result;
use clap::{Parser, Subcommand};
use sensei_core::{AskService, Config, OpenAiChat, PersonaTable};
use tracing::info;

#[derive(Parser)]
#[command(name = "sensei")]
#[command(about = "Ask an expert persona from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one question to the selected expert persona
    Ask {
        /// Question text
        question: String,

        /// Persona selector (see `sensei personas`)
        #[arg(short, long, default_value = "it-consultant")]
        persona: String,
    },

    /// List available personas
    Personas,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question, persona } => {
            ask_command(question, persona).await?;
        }
        Commands::Personas => {
            personas_command();
        }
    }

    Ok(())
}

async fn ask_command(question: String, persona: String) -> Result<()> {
    // Loads .env as a side effect
    let config = Config::from_env()?;

    let service = AskService::new(
        OpenAiChat,
        config.openai_api_key.clone(),
        PersonaTable::builtin(),
    )
    .with_model(config.model)
    .with_temperature(config.temperature);

    let label = service
        .personas()
        .get(&persona)
        .map(|p| p.label.clone())
        .unwrap_or_else(|| persona.clone());

    info!("Asking the {}", label);

    // Validation and remote failures share the answer display path
    match service.submit(&persona, &question).await {
        Ok(answer) => {
            println!("\n=== Answer from the {} ===\n", answer.persona_label);
            println!("{}", answer.text);
            println!();
        }
        Err(e) => {
            println!("{}", e.display_text());
        }
    }

    Ok(())
}

fn personas_command() {
    let table = PersonaTable::builtin();

    println!("\nAvailable personas:");
    for persona in table.personas() {
        println!("  {:<14} {}", persona.id, persona.label);
    }
    println!();
}
