use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand};

use grantdb_core::{entities::*, gateways::GrantGateway};
use grantdb_frontend_api::PublicApi;

use crate::{
    app::Session,
    browse,
    config::Config,
    gateways::HttpGateway,
    render,
    sample::SAMPLE_GRANTS,
};

#[derive(Parser)]
#[command(name = "grantdb", version, about = "Browse, filter and extend a tagged grant catalog")]
pub struct Args {
    /// Configuration file (default: grantdb.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the grant API, e.g. http://127.0.0.1:5000/api
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List grants together with the most used tags
    List {
        /// Only show grants with at least one of these tags
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Only show grants whose name or description contains this text
        #[arg(long)]
        text: Option<String>,
        /// name | tag-count
        #[arg(long)]
        sort: Option<SortKey>,
        /// Let the server select the grants by tag
        #[arg(long)]
        remote: bool,
    },
    /// Show the available tags
    Tags,
    /// Add a single grant
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long = "website-url", value_name = "URL")]
        website_urls: Vec<String>,
        #[arg(long = "document-url", value_name = "URL")]
        document_urls: Vec<String>,
    },
    /// Add grants from a JSON file ('-' reads from stdin)
    Import { file: PathBuf },
    /// Browse the catalog interactively
    Browse,
    /// Check if the grant API is available
    Health,
    /// Print an example JSON batch for 'import'
    Sample,
}

fn non_empty(urls: Vec<String>) -> Option<Vec<String>> {
    (!urls.is_empty()).then_some(urls)
}

fn read_batch(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        return Ok(json);
    }
    std::fs::read_to_string(file).with_context(|| format!("Unable to read {}", file.display()))
}

fn print_view<G: GrantGateway>(session: &Session<G>) {
    let view = session.view();
    print!("{}", render::catalog_view(&view, session.filter(), session.catalog().origin()));
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config,
        api_url,
        command,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(api_url) = api_url {
        cfg.api.base_url = api_url;
    }
    log::info!("Using grant API at {}", cfg.api.base_url);
    let api = PublicApi::with_timeout(cfg.api.base_url.clone(), cfg.api.timeout)?;

    let new_session = |api| {
        let mut session = Session::new(
            HttpGateway::new(api),
            cfg.view.options(),
            cfg.view.tag_preview_len,
        );
        session.set_sort_key(cfg.view.default_sort);
        session
    };

    match command {
        Command::Sample => {
            println!("{SAMPLE_GRANTS}");
        }
        Command::Health => {
            let health = api.health().await?;
            if !health.success {
                return Err(anyhow!("The grant API is not healthy"));
            }
            println!(
                "{} (version {})",
                health.message.as_deref().unwrap_or("OK"),
                health.version.as_deref().unwrap_or("unknown")
            );
        }
        Command::List {
            tags,
            text,
            sort,
            remote,
        } => {
            let mut session = new_session(api);
            session.refresh_tags().await?;
            for tag in &tags {
                session.toggle_tag(tag);
            }
            if remote && !tags.is_empty() {
                session.search_selected().await?;
            } else {
                session.load().await?;
            }
            if let Some(text) = text {
                session.set_search_term(&text);
            }
            if let Some(sort) = sort {
                session.set_sort_key(sort);
            }
            print_view(&session);
        }
        Command::Tags => {
            let mut session = new_session(api);
            session.start().await?;
            println!("{}", render::tag_preview(&session.tag_preview()));
            let view = session.view();
            for frequency in &view.ranked_tags.shown {
                println!("{:>5}  {}", frequency.count(), frequency.tag());
            }
            if view.ranked_tags.remaining_count > 0 {
                println!("+{} more tags available", view.ranked_tags.remaining_count);
            }
        }
        Command::Add {
            name,
            description,
            website_urls,
            document_urls,
        } => {
            let grant = NewGrant {
                website_urls: non_empty(website_urls),
                document_urls: non_empty(document_urls),
                ..NewGrant::new(name, description)
            };
            let mut session = new_session(api);
            session.add(grant).await?;
            if let Some(notice) = session.notice() {
                println!("{}", notice.text());
            }
            // Only the added grants are in the catalog.
            for grant in session.catalog().grants() {
                let mut out = String::new();
                render::write_grant(&mut out, grant)?;
                print!("{out}");
            }
        }
        Command::Import { file } => {
            let json = read_batch(&file)?;
            let mut session = new_session(api);
            session.import(&json).await?;
            if let Some(notice) = session.notice() {
                println!("{}", notice.text());
            }
            for grant in session.catalog().grants() {
                let mut out = String::new();
                render::write_grant(&mut out, grant)?;
                print!("{out}");
            }
        }
        Command::Browse => {
            let mut session = new_session(api);
            // The session starts even if the API is unreachable.
            if let Err(err) = session.start().await {
                log::warn!("{err}");
            }
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::run(&mut session, stdin, &mut io::stdout()).await?;
        }
    }
    Ok(())
}
