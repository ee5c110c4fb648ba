// src/cli.rs
//
// `mercado-cli`: the dashboard's operations without the window. Each
// subcommand dispatches the same actions the GUI would, through the
// synchronous `Controller`, then prints the status slot and whatever
// collection the command touched.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};

use crate::{
    api::{ApiClient, Backend, Query},
    config::{
        consts::DEFAULT_PAGES_TO_SCRAPE,
        options::{ConnectionArgs, normalize_base_url},
    },
    log, present,
    runner::Controller,
    state::{AppState, ClientField, QueryField, ViewMode, status::Status},
    update::Action,
};

#[derive(Parser, Debug)]
#[command(name = "mercado-cli", version, about = "Command-line companion to the Mercado Scrape dashboard")]
pub struct Cli {
    #[command(flatten)]
    pub conn: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List or create clients.
    Clients {
        #[command(subcommand)]
        cmd: ClientsCmd,
    },
    /// List or create product queries.
    Queries {
        #[command(subcommand)]
        cmd: QueriesCmd,
    },
    /// Show the products scraped for a query.
    Results {
        #[arg(long)]
        query_id: String,
    },
    /// Ask the backend to run a scrape now.
    Scrape,
    /// Backend health check.
    Health,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ClientsCmd {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueriesCmd {
    List {
        #[arg(long, required_unless_present = "client_email", conflicts_with = "client_email")]
        client_id: Option<String>,
        #[arg(long)]
        client_email: Option<String>,
    },
    Create {
        #[arg(long)]
        text: String,
        #[arg(long)]
        client_id: String,
        #[arg(long)]
        frequency: String,
        #[arg(long, default_value = DEFAULT_PAGES_TO_SCRAPE)]
        pages: String,
    },
}

/// Parse args, run one command. Returns the process exit code.
pub fn run() -> eyre::Result<i32> {
    let cli = Cli::parse();
    // File logging is best-effort here; stdout is the real output.
    let _ = log::init();

    let api = ApiClient::new(&normalize_base_url(&cli.conn.api_url))
        .wrap_err("could not build HTTP client")?;
    logf!("CLI: {:?} against {}", cli.command, api.base_url());

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Health => health(&api, &mut out),
        Command::Queries { cmd: QueriesCmd::List { client_email: Some(email), .. } } => {
            queries_by_email(&api, &email, &mut out)
        }
        command => {
            let mut ctl = Controller::new(api);
            drive(&mut ctl, &command);
            report(&ctl.state, &command, &mut out)?;
            Ok(exit_code(ctl.state.status.as_ref()))
        }
    }
}

/// Dispatch the actions a command stands for.
pub fn drive<B: Backend>(ctl: &mut Controller<B>, command: &Command) {
    match command {
        Command::Clients { cmd: ClientsCmd::List } => {
            ctl.dispatch(Action::Mounted);
        }
        Command::Clients { cmd: ClientsCmd::Create { name, email } } => {
            ctl.dispatch(Action::EditClient(ClientField::Name, name.clone()));
            ctl.dispatch(Action::EditClient(ClientField::Email, email.clone()));
            ctl.dispatch(Action::SubmitClient);
        }
        Command::Queries { cmd: QueriesCmd::List { client_id, .. } } => {
            let id = client_id.clone().unwrap_or_default();
            ctl.dispatch(Action::EditQuery(QueryField::ClientId, id));
            ctl.dispatch(Action::Navigate(ViewMode::View));
        }
        Command::Queries { cmd: QueriesCmd::Create { text, client_id, frequency, pages } } => {
            ctl.dispatch(Action::EditQuery(QueryField::QueryText, text.clone()));
            ctl.dispatch(Action::EditQuery(QueryField::ClientId, client_id.clone()));
            ctl.dispatch(Action::EditQuery(QueryField::Frequency, frequency.clone()));
            ctl.dispatch(Action::EditQuery(QueryField::PagesToScrape, pages.clone()));
            ctl.dispatch(Action::SubmitQuery);
        }
        Command::Results { query_id } => {
            ctl.dispatch(Action::EditResultsQueryId(query_id.clone()));
            ctl.dispatch(Action::LoadResults);
        }
        Command::Scrape => {
            ctl.dispatch(Action::TriggerScrape);
        }
        Command::Health => {}
    }
}

/// Status line first, then the collection the command is about.
pub fn report(state: &AppState, command: &Command, out: &mut dyn Write) -> io::Result<()> {
    if let Some(status) = &state.status {
        writeln!(out, "{status}")?;
    }

    match command {
        Command::Clients { .. } => {
            for c in state.clients.items().unwrap_or_default() {
                writeln!(out, "{}", present::client_option(c))?;
            }
        }
        Command::Queries { cmd: QueriesCmd::List { .. } } => {
            write_queries(out, state.queries.items().unwrap_or_default(), state.queries_client_id)?;
        }
        Command::Results { .. } => {
            for p in state.results.items().unwrap_or_default() {
                let card = present::product_card(p);
                writeln!(out, "🛍️ {}", card.title)?;
                if card.listings.is_empty() {
                    writeln!(out, "    No price information")?;
                }
                for line in &card.listings {
                    writeln!(out, "    ${:<14} {}", line.price, line.url)?;
                }
            }
        }
        Command::Queries { cmd: QueriesCmd::Create { .. } } | Command::Scrape | Command::Health => {}
    }
    Ok(())
}

pub fn exit_code(status: Option<&Status>) -> i32 {
    match status {
        Some(s) if s.is_problem() => 1,
        _ => 0,
    }
}

fn write_queries(out: &mut dyn Write, rows: &[Query], requested_for: Option<i64>) -> io::Result<()> {
    for q in rows {
        writeln!(
            out,
            "[{}] {}  client={} frequency={} pages={}",
            q.query_id,
            q.query_text,
            present::query_owner(q, requested_for),
            q.frequency,
            q.pages_to_scrape,
        )?;
    }
    Ok(())
}

fn health(api: &ApiClient, out: &mut dyn Write) -> eyre::Result<i32> {
    match api.health() {
        Ok(h) => {
            writeln!(out, "{}: {}", h.status, h.message.unwrap_or_default())?;
            Ok(0)
        }
        Err(e) => {
            loge!("CLI: health failed: {}", e);
            writeln!(out, "{}", status!(Failure, "Health check failed: {}", e.user_text()))?;
            Ok(1)
        }
    }
}

fn queries_by_email(api: &ApiClient, email: &str, out: &mut dyn Write) -> eyre::Result<i32> {
    match api.list_queries_by_email(email) {
        Ok(rows) => {
            write_queries(out, &rows, None)?;
            Ok(0)
        }
        Err(e) => {
            loge!("CLI: queries by email failed: {}", e);
            writeln!(out, "{}", status!(Failure, "Error fetching queries: {}", e.user_text()))?;
            Ok(1)
        }
    }
}
