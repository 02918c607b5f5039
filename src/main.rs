use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use saltedge::types::{
    ConnectionIdOptions, ConnectionListOptions, ConnectionScoped, CountryListOptions,
    CustomerCreateOptions, CustomerIdOptions, CustomerListOptions, OwnerScoped, PageOptions,
    ProviderListOptions, ProviderShowOptions, TransactionListOptions,
};
use saltedge::{ClientOptions, Credentials, Paginator, ServiceClient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Command-line access to the Salt Edge service API
#[derive(Parser, Debug)]
#[command(name = "saltedge", version, about, long_about = None)]
struct Args {
    /// Application id (falls back to SALTEDGE_APP_ID)
    #[arg(long)]
    app_id: Option<String>,

    /// Application secret (falls back to SALTEDGE_SECRET)
    #[arg(long)]
    secret: Option<String>,

    /// Override the API endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported countries
    Countries {
        #[arg(long)]
        include_fake: bool,
    },
    /// Browse providers
    Providers {
        #[command(subcommand)]
        action: ProviderCommand,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerCommand,
    },
    /// Inspect connections
    Connections {
        #[command(subcommand)]
        action: ConnectionCommand,
    },
    /// List accounts of a connection or a customer
    Accounts {
        #[arg(long, required_unless_present = "customer_id", conflicts_with = "customer_id")]
        connection_id: Option<String>,
        #[arg(long)]
        customer_id: Option<String>,
        /// Follow every page
        #[arg(long)]
        all: bool,
    },
    /// List transactions of a connection
    Transactions {
        connection_id: String,
        #[arg(long)]
        account_id: Option<String>,
        #[arg(long)]
        pending: bool,
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ProviderCommand {
    List {
        #[arg(long)]
        country_code: Option<String>,
        #[arg(long)]
        include_fake: bool,
        #[arg(long)]
        all: bool,
    },
    Show {
        code: String,
    },
}

#[derive(Subcommand, Debug)]
enum CustomerCommand {
    List {
        #[arg(long)]
        identifier: Option<String>,
        #[arg(long)]
        all: bool,
    },
    Show {
        id: String,
    },
    Create {
        identifier: String,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ConnectionCommand {
    List {
        customer_id: String,
        #[arg(long)]
        all: bool,
    },
    Show {
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Cannot open log file {:?}: {}", log_path, err);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // RUST_LOG still wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("saltedge started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("saltedge").join("saltedge.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".saltedge").join("saltedge.log");
    }
    PathBuf::from("saltedge.log")
}

/// Render a value in the requested format
fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).context("Failed to render JSON"),
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML"),
    }
}

/// First page only, unless `all` asks to follow the cursor to the end
async fn fetch_pages<T: DeserializeOwned>(mut pager: Paginator<'_, T>, all: bool) -> Result<Vec<T>> {
    if all {
        return Ok(pager.collect_all().await?);
    }
    match pager.next_page().await? {
        Some(page) => {
            if let Some(next_id) = page.next_id() {
                eprintln!("More results available (next id: {}), use --all to fetch them", next_id);
            }
            Ok(page.items)
        }
        None => Ok(Vec::new()),
    }
}

/// Short, user-facing description of a failure
fn describe_error(error: &anyhow::Error) -> String {
    if let Some(remote) = error
        .downcast_ref::<saltedge::Error>()
        .and_then(saltedge::Error::remote)
    {
        let mut out = remote.to_string();
        if !remote.documentation_url.is_empty() {
            out.push_str(&format!("\n  see {}", remote.documentation_url));
        }
        if !remote.request_id.is_empty() {
            out.push_str(&format!("\n  request id: {}", remote.request_id));
        }
        return out;
    }
    format!("{:#}", error)
}

async fn run(args: &Args) -> Result<()> {
    let options = ClientOptions {
        app_id: args.app_id.clone(),
        secret: args.secret.clone(),
        base_url: args.base_url.clone(),
        ..ClientOptions::default()
    };
    let credentials = Credentials::from_env(&options)?;
    let client = ServiceClient::with_credentials(credentials, &options)?;
    tracing::info!("Using endpoint {}", client.requester().base_url());

    let output = match &args.command {
        Command::Countries { include_fake } => {
            let options = CountryListOptions {
                include_fake_providers: include_fake.then_some(true),
            };
            render(&client.countries().list(Some(&options)).await?, args.output)?
        }
        Command::Providers { action } => match action {
            ProviderCommand::List {
                country_code,
                include_fake,
                all,
            } => {
                let options = ProviderListOptions {
                    country_code: country_code.clone(),
                    include_fake_providers: include_fake.then_some(true),
                    ..ProviderListOptions::default()
                };
                let pager = client.providers().list(Some(&options))?;
                render(&fetch_pages(pager, *all).await?, args.output)?
            }
            ProviderCommand::Show { code } => {
                let provider = client.providers().show(&ProviderShowOptions::new(code)).await?;
                render(&provider, args.output)?
            }
        },
        Command::Customers { action } => match action {
            CustomerCommand::List { identifier, all } => {
                let options = CustomerListOptions {
                    identifier: identifier.clone(),
                    ..CustomerListOptions::default()
                };
                let pager = client.customers().list(Some(&options))?;
                render(&fetch_pages(pager, *all).await?, args.output)?
            }
            CustomerCommand::Show { id } => {
                let customer = client.customers().show(&CustomerIdOptions::new(id)).await?;
                render(&customer, args.output)?
            }
            CustomerCommand::Create { identifier } => {
                let options = CustomerCreateOptions {
                    identifier: identifier.clone(),
                };
                render(&client.customers().create(&options).await?, args.output)?
            }
            CustomerCommand::Remove { id } => {
                let removed = client.customers().remove(&CustomerIdOptions::new(id)).await?;
                render(&removed, args.output)?
            }
        },
        Command::Connections { action } => match action {
            ConnectionCommand::List { customer_id, all } => {
                let options = ConnectionListOptions {
                    customer_id: customer_id.clone(),
                    ..ConnectionListOptions::default()
                };
                let pager = client.connections().list(&options)?;
                render(&fetch_pages(pager, *all).await?, args.output)?
            }
            ConnectionCommand::Show { id } => {
                let connection = client.connections().show(&ConnectionIdOptions::new(id)).await?;
                render(&connection, args.output)?
            }
        },
        Command::Accounts {
            connection_id,
            customer_id,
            all,
        } => {
            let options = match (connection_id, customer_id) {
                (Some(id), _) => OwnerScoped::connection(id, PageOptions::default()),
                (None, Some(id)) => OwnerScoped::customer(id, PageOptions::default()),
                (None, None) => anyhow::bail!("either --connection-id or --customer-id is required"),
            };
            let pager = client.accounts().list(&options)?;
            render(&fetch_pages(pager, *all).await?, args.output)?
        }
        Command::Transactions {
            connection_id,
            account_id,
            pending,
            all,
        } => {
            let options = ConnectionScoped::new(
                connection_id,
                TransactionListOptions {
                    account_id: account_id.clone(),
                    ..TransactionListOptions::default()
                },
            );
            let transactions = client.transactions();
            let pager = if *pending {
                transactions.pending(&options)?
            } else {
                transactions.list(&options)?
            };
            render(&fetch_pages(pager, *all).await?, args.output)?
        }
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    if let Err(err) = run(&args).await {
        tracing::error!("Command failed: {:#}", err);
        eprintln!("Error: {}", describe_error(&err));
        std::process::exit(1);
    }

    Ok(())
}
