//! Terminal client for the print-shop inventory API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the same `inventory` workflow as the browser UI, over `reqwest`
//! instead of `fetch`. Sessions are not persisted, so every invocation signs
//! in with `--token` or `--email`/`--password` before running its command.
//!
//! ERROR HANDLING
//! ==============
//! Workflow failures surface as the same display strings the UI shows and
//! end the process with a non-zero exit code.


mod output;
mod transport;

use clap::{Args, Parser, Subcommand};
use inventory::config::DEFAULT_API_BASE_URL;
use inventory::forms::{LoanForm, NewItemForm, ReturnForm};
use inventory::state::Session;
use inventory::summary::InventorySummary;
use inventory::{ApiConfig, Gateway, LocalStore, Store, actions};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --token, or --email and --password")]
    MissingCredentials,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Action(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "inventory-cli", about = "Minuteman Press inventory terminal client")]
struct Cli {
    #[arg(long, global = true, env = "INVENTORY_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    #[command(flatten)]
    credentials: Credentials,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long, global = true, env = "INVENTORY_EMAIL")]
    email: Option<String>,

    #[arg(long, global = true, env = "INVENTORY_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Reuse a token printed by `login` instead of signing in again.
    #[arg(long, global = true, env = "INVENTORY_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the session token.
    Login,
    /// List current stock.
    Inventory,
    /// List recorded loans and returns.
    AuditLog,
    /// Loan stock to another location.
    Loan {
        #[arg(long)]
        item_id: i64,
        #[arg(long)]
        quantity: i64,
        #[arg(long = "to")]
        to_location: String,
    },
    /// Take back stock loaned to another location.
    Return {
        #[arg(long)]
        item_id: i64,
        #[arg(long)]
        quantity: i64,
        #[arg(long = "from")]
        from_location: String,
    },
    /// Add a new inventory item.
    AddItem(AddItemArgs),
    /// Print headline totals.
    Summary,
}

#[derive(Args, Debug)]
struct AddItemArgs {
    #[arg(long)]
    item: String,
    #[arg(long)]
    quantity: i64,
    #[arg(long, default_value_t = 0)]
    reserved: i64,
    #[arg(long)]
    sku: Option<String>,
    #[arg(long)]
    vendor: Option<String>,
    #[arg(long)]
    paper_finish: Option<String>,
    #[arg(long)]
    paper_weight: Option<String>,
    #[arg(long)]
    size: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

impl AddItemArgs {
    fn into_form(self) -> NewItemForm {
        NewItemForm {
            item: self.item,
            quantity: self.quantity.to_string(),
            reserved: self.reserved.to_string(),
            sku: self.sku.unwrap_or_default(),
            vendor: self.vendor.unwrap_or_default(),
            paper_finish: self.paper_finish.unwrap_or_default(),
            paper_weight: self.paper_weight.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        }
    }
}

struct CliContext {
    gateway: Gateway<ReqwestTransport>,
    store: LocalStore,
    json: bool,
}

impl CliContext {
    fn new(config: ApiConfig, json: bool) -> Result<Self, CliError> {
        Ok(Self { gateway: Gateway::new(ReqwestTransport::new(config)?), store: LocalStore::default(), json })
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.api_url);
    tracing::debug!(base_url = %config.base_url, "using api");
    let ctx = CliContext::new(config, cli.json)?;

    sign_in(&ctx, cli.credentials).await?;
    run(&ctx, cli.command).await
}

/// Establish a session from a token, or by signing in with email and password.
/// Lists are not fetched here; each command loads what it prints.
async fn sign_in(ctx: &CliContext, credentials: Credentials) -> Result<(), CliError> {
    let Credentials { email, password, token } = credentials;
    if let Some(token) = token {
        let session = Session { email: email.unwrap_or_default(), token, location: None };
        ctx.store.update(|s| s.session = Some(session));
        return Ok(());
    }
    match (email, password) {
        (Some(email), Some(password)) => actions::authenticate(&ctx.gateway, &ctx.store, &email, &password)
            .await
            .map_err(CliError::Action),
        _ => Err(CliError::MissingCredentials),
    }
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login => run_login(ctx),
        Command::Inventory => run_inventory(ctx).await,
        Command::AuditLog => run_audit_log(ctx).await,
        Command::Loan { item_id, quantity, to_location } => {
            ctx.store.update(|s| {
                s.loan.fields = LoanForm { item_id: item_id.to_string(), quantity: quantity.to_string(), to_location };
            });
            let result = actions::submit_loan(&ctx.gateway, &ctx.store).await;
            finish_mutation(ctx, result)
        }
        Command::Return { item_id, quantity, from_location } => {
            ctx.store.update(|s| {
                s.return_form.fields =
                    ReturnForm { item_id: item_id.to_string(), quantity: quantity.to_string(), from_location };
            });
            let result = actions::submit_return(&ctx.gateway, &ctx.store).await;
            finish_mutation(ctx, result)
        }
        Command::AddItem(args) => {
            let form = args.into_form();
            ctx.store.update(|s| s.new_item.fields = form);
            let result = actions::submit_new_item(&ctx.gateway, &ctx.store).await;
            finish_mutation(ctx, result)
        }
        Command::Summary => run_summary(ctx).await,
    }
}

fn run_login(ctx: &CliContext) -> Result<(), CliError> {
    let Some(session) = ctx.store.read(|s| s.session.clone()) else {
        return Err(CliError::MissingCredentials);
    };
    if ctx.json {
        return print_json(&json!({
            "email": session.email,
            "location": session.location,
            "token": session.token,
        }));
    }
    println!("Signed in as {}", session.email);
    if let Some(location) = &session.location {
        println!("Location: {location}");
    }
    println!("Token: {}", session.token);
    Ok(())
}

async fn run_inventory(ctx: &CliContext) -> Result<(), CliError> {
    actions::refresh_inventory(&ctx.gateway, &ctx.store).await.map_err(CliError::Action)?;
    print_inventory(ctx)
}

async fn run_audit_log(ctx: &CliContext) -> Result<(), CliError> {
    actions::refresh_audit_log(&ctx.gateway, &ctx.store).await.map_err(CliError::Action)?;
    print_audit_log(ctx)
}

async fn run_summary(ctx: &CliContext) -> Result<(), CliError> {
    actions::refresh_all(&ctx.gateway, &ctx.store).await.map_err(CliError::Action)?;
    let summary = ctx
        .store
        .read(|s| InventorySummary::compute(&s.inventory.items, &s.audit_log.items));
    if ctx.json {
        return print_json(&json!({
            "item_count": summary.item_count,
            "on_hand": summary.on_hand,
            "reserved": summary.reserved,
            "available": summary.available,
            "loans": summary.loans,
            "returns": summary.returns,
            "depleted": summary.depleted,
        }));
    }
    println!("{}", output::summary_table(&summary));
    Ok(())
}

/// Print the server notice and the refreshed tables. Fails with the form
/// error, or with a list error when the follow-up refresh did not succeed.
fn finish_mutation(ctx: &CliContext, result: Result<(), String>) -> Result<(), CliError> {
    result.map_err(CliError::Action)?;
    let (notice, refresh_error) = ctx
        .store
        .read(|s| (s.notice.clone(), s.inventory.error.clone().or_else(|| s.audit_log.error.clone())));
    if ctx.json {
        let snapshot = ctx.store.snapshot();
        print_json(&json!({
            "message": notice,
            "inventory": serde_json::to_value(&snapshot.inventory.items)?,
            "audit_log": serde_json::to_value(&snapshot.audit_log.items)?,
            "error": refresh_error,
        }))?;
    } else {
        if let Some(notice) = notice {
            println!("{notice}");
            println!();
        }
        if refresh_error.is_none() {
            print_inventory(ctx)?;
            println!();
            print_audit_log(ctx)?;
        }
    }
    refresh_error.map_or(Ok(()), |message| Err(CliError::Action(message)))
}

fn print_inventory(ctx: &CliContext) -> Result<(), CliError> {
    let items = ctx.store.read(|s| s.inventory.items.clone());
    if ctx.json {
        return print_json(&serde_json::to_value(&items)?);
    }
    println!("{}", output::inventory_table(&items));
    Ok(())
}

fn print_audit_log(ctx: &CliContext) -> Result<(), CliError> {
    let entries = ctx.store.read(|s| s.audit_log.items.clone());
    if ctx.json {
        return print_json(&serde_json::to_value(&entries)?);
    }
    println!("{}", output::audit_log_table(&entries));
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
