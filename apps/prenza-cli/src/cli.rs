//! Command-line surface of the authoring interface.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "prenza", about = "Blog listing and authoring over a hosted record store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all blog posts
    List,

    /// Create a new blog post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        author: String,
    },

    /// Update fields of an existing post; omitted fields are left alone
    Update {
        /// Record id assigned by the store
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_accepts_a_sparse_field_set() {
        let cli = Cli::parse_from(["prenza", "update", "42", "--title", "New"]);

        match cli.command {
            Command::Update {
                id,
                title,
                content,
                author,
            } => {
                assert_eq!(id, "42");
                assert_eq!(title.as_deref(), Some("New"));
                assert!(content.is_none());
                assert!(author.is_none());
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn create_requires_all_three_fields() {
        assert!(Cli::try_parse_from(["prenza", "create", "--title", "T"]).is_err());
    }
}
