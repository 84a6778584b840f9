use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::auth::AuthContext;
use crate::client::{ApiClient, RemoveOutcome};
use crate::config::FileConfig;
use crate::migrate;

#[derive(Parser)]
#[command(name = "gogs")]
#[command(about = "A CLI client for the Gogs repository API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Username for basic authentication (overrides config)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication (overrides config)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// API token (overrides config)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print full error chains on failure
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Repository operations
    #[command(subcommand)]
    Repo(RepoCommands),
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// Create a new repository
    Add {
        /// Repository name
        name: String,
    },

    /// List repositories owned by the authenticated user
    List,

    /// Delete a repository owned by the authenticated user
    Remove {
        /// Repository name
        name: String,
    },

    /// Import a repository from a remote host
    Migrate {
        /// Clone URL of the source repository
        source_url: String,

        /// Name for the imported repository (defaults to the last path
        /// segment of the source URL)
        #[arg(long)]
        name: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = FileConfig::load()?;
        let base_url = config.resolve_base_url(self.url.as_deref());
        let auth = AuthContext::resolve(
            &config,
            self.api.as_deref(),
            self.username.as_deref(),
            self.password.as_deref(),
        );
        let client = ApiClient::new(&base_url, auth).context("Failed to create HTTP client")?;

        match self.command {
            Commands::Repo(cmd) => match cmd {
                RepoCommands::Add { name } => {
                    let repo = client
                        .create_repo(&name)
                        .await
                        .with_context(|| format!("Failed to create repository '{name}'"))?;
                    println!("{}", "✓ Repository created successfully!".green());
                    println!("  Name: {}", repo.full_name.as_deref().unwrap_or(&repo.name));
                }
                RepoCommands::List => {
                    let repos = client
                        .list_repos()
                        .await
                        .context("Failed to list repositories")?;
                    if repos.is_empty() {
                        println!("{}", "No repositories found.".yellow());
                    } else {
                        println!("Found {} repository(ies):\n", repos.len());
                        for repo in &repos {
                            println!("  {}", repo.full_name.as_deref().unwrap_or(&repo.name));
                        }
                    }
                }
                RepoCommands::Remove { name } => {
                    let user = client
                        .current_user()
                        .await
                        .context("Failed to resolve repository owner")?;
                    let outcome = client
                        .remove_repo(&user.login, &name)
                        .await
                        .with_context(|| format!("Failed to remove repository '{name}'"))?;
                    match outcome {
                        RemoveOutcome::Removed => {
                            println!(
                                "{}",
                                format!("✓ Repository '{}/{}' removed.", user.login, name).green()
                            );
                        }
                        RemoveOutcome::NotFound => {
                            println!(
                                "{}",
                                format!(
                                    "Repository '{}/{}' not found. Nothing to remove.",
                                    user.login, name
                                )
                                .yellow()
                            );
                        }
                    }
                }
                RepoCommands::Migrate { source_url, name } => {
                    let repo = migrate::migrate_repo(&client, &source_url, name.as_deref())
                        .await
                        .with_context(|| format!("Failed to migrate '{source_url}'"))?;
                    println!("{}", "✓ Migration completed!".green());
                    println!("  Name: {}", repo.full_name.as_deref().unwrap_or(&repo.name));
                    println!("  Source: {}", source_url);
                }
            },
        }

        Ok(())
    }
}
