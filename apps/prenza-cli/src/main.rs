//! # Prenza
//!
//! The main entry point for the terminal authoring interface.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use prenza_core::board::{BlogBoard, Rendering};
use prenza_core::domain::{NewPost, PostPatch};
use prenza_core::error::SubmitError;

mod cli;
mod notify;
mod render;
mod state;

use cli::{Cli, Command};
use notify::TermNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let store = state::build_store();
    let mut board = BlogBoard::new(store, Arc::new(TermNotifier));

    match cli.command {
        Command::List => run_list(&mut board).await,
        Command::Create {
            title,
            content,
            author,
        } => {
            run_create(
                &mut board,
                NewPost {
                    title,
                    content,
                    author,
                },
            )
            .await
        }
        Command::Update {
            id,
            title,
            content,
            author,
        } => {
            run_update(
                &mut board,
                &id,
                PostPatch {
                    title,
                    content,
                    author,
                },
            )
            .await
        }
    }
}

/// Fetch and render the listing; on a failed fetch, offer a manual retry.
async fn run_list(board: &mut BlogBoard) -> anyhow::Result<()> {
    render::header();
    // Placeholder cards while the first fetch is outstanding.
    render::listing(&board.rendering());

    loop {
        board.refresh().await;
        let rendering = board.rendering();
        render::listing(&rendering);

        if !matches!(rendering, Rendering::Failed { .. }) || !prompt_retry()? {
            return Ok(());
        }
    }
}

async fn run_create(board: &mut BlogBoard, draft: NewPost) -> anyhow::Result<()> {
    board.refresh().await;

    match board.create(draft).await {
        Ok(_) => {
            // Re-render with the new entry appended at the bottom.
            render::header();
            render::listing(&board.rendering());
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            render::field_errors(&errors);
            anyhow::bail!("submission blocked by validation")
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_update(board: &mut BlogBoard, id: &str, patch: PostPatch) -> anyhow::Result<()> {
    board.refresh().await;

    match board.update(id, patch).await {
        Ok(()) => {
            render::header();
            render::listing(&board.rendering());
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            render::field_errors(&errors);
            anyhow::bail!("submission blocked by validation")
        }
        Err(err) => Err(err.into()),
    }
}

fn prompt_retry() -> anyhow::Result<bool> {
    print!("Retry? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,prenza_cli=info,prenza_nobox=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
