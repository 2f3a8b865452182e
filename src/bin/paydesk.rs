use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use time::{OffsetDateTime, macros::format_description};

use paydesk::{
    App, Config, Error,
    models::{
        Contractor, ContractorCreate, ContractorId, Credentials, StatusId, TransactionCreateRequest,
        TransactionDetail, TransactionId, TransactionListItem, TransactionTypeId,
        TransactionUpdateRequest,
    },
    router::Route,
    services::DEFAULT_LANGUAGE,
    setup_logging,
};

/// A command line client for the paydesk payments backend.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The backend's base URL, e.g. `http://localhost:8000`. Overrides
    /// `PAYDESK_API_BASE_URL`.
    #[arg(long)]
    api_base_url: Option<String>,

    /// File path to the SQLite database the session is kept in. Overrides
    /// `PAYDESK_STORAGE_PATH`.
    #[arg(long)]
    storage_path: Option<PathBuf>,

    /// File path to append debug logs to. Overrides `PAYDESK_LOG_FILE`.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the session.
    Login {
        #[arg(short, long)]
        username: String,

        /// Prompted for if not given.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the session.
    Logout,
    /// Show the logged in user.
    Whoami,
    /// Open a view by its path, e.g. `/transactions/3`.
    Open { path: String },
    /// Browse and edit transactions.
    #[command(subcommand)]
    Transactions(TransactionCommand),
    /// Browse and create contractors.
    #[command(subcommand)]
    Contractors(ContractorCommand),
    /// List the transaction statuses.
    Statuses {
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },
    /// List the transaction types.
    TransactionTypes,
    /// Check whether the backend is up.
    Health,
}

#[derive(Subcommand, Debug)]
enum TransactionCommand {
    /// List the most recent transactions.
    Recent {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show a single transaction.
    Show { id: TransactionId },
    /// Create a transaction.
    Create {
        /// The contractor the money comes from.
        #[arg(long)]
        from: ContractorId,
        /// The contractor the money goes to.
        #[arg(long)]
        to: ContractorId,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        status: StatusId,
        #[arg(long = "type")]
        transaction_type: TransactionTypeId,
    },
    /// Change a transaction.
    Update {
        id: TransactionId,
        #[arg(long)]
        status: Option<StatusId>,
    },
}

#[derive(Subcommand, Debug)]
enum ContractorCommand {
    /// List your contractors.
    List,
    /// Show a single contractor.
    Show { id: ContractorId },
    /// Create a contractor.
    Create { name: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error);

            if matches!(error, Error::SessionExpired | Error::NotLoggedIn) {
                eprintln!("Log in again with `paydesk login --username <USERNAME>`.");
            }

            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let mut config = Config::from_env(args.api_base_url, args.storage_path)?;
    if args.log_file.is_some() {
        config.log_file = args.log_file;
    }

    setup_logging(config.log_file.as_deref())?;

    let mut app = App::new(&config)?;

    match args.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => rpassword::prompt_password("Password: ")
                    .map_err(|error| read_password_error(&error))?,
            };
            let credentials = Credentials::new(username, password);

            app.login(&credentials).await?;
            println!("Logged in as {}.", credentials.username);
        }
        Command::Logout => {
            app.logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            let user = app.me().await?;
            println!("{} (user {})", user.username, user.user_id);
        }
        Command::Open { path } => {
            let route = app.open(&path).await?;
            print_view(&app, &route);
        }
        Command::Transactions(command) => run_transaction_command(&mut app, command).await?,
        Command::Contractors(command) => run_contractor_command(&mut app, command).await?,
        Command::Statuses { lang } => {
            for status in app.statuses(&lang).await? {
                let id = status
                    .status_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_owned());
                println!("{id:>4}  {:<12} {} ({})", status.code, status.display_name, status.color);
            }
        }
        Command::TransactionTypes => {
            for transaction_type in app.transaction_types().await? {
                println!(
                    "{:>4}  {:<12} {}",
                    transaction_type.transaction_type_id,
                    transaction_type.code,
                    transaction_type.display_name
                );
            }
        }
        Command::Health => {
            let health = app.health().await?;
            println!("{}", health.status);
        }
    }

    Ok(())
}

async fn run_transaction_command(app: &mut App, command: TransactionCommand) -> Result<(), Error> {
    match command {
        TransactionCommand::Recent { limit } => {
            enter_view(app, &Route::Transactions)?;
            app.fetch_recent_transactions(limit).await?;
            print_transaction_list(app.transactions().recent());
        }
        TransactionCommand::Show { id } => {
            let route = app.open(&Route::TransactionDetail(id).path()).await?;
            print_view(app, &route);
        }
        TransactionCommand::Create {
            from,
            to,
            amount,
            status,
            transaction_type,
        } => {
            let request = TransactionCreateRequest {
                contractor_from_id: from,
                contractor_to_id: to,
                amount,
                status_id: status,
                transaction_type_id: transaction_type,
            };

            let transaction = app.create_transaction(&request).await?;
            println!("Created transaction {}.", transaction.transaction_id);
            print_transaction(&transaction);
        }
        TransactionCommand::Update { id, status } => {
            let request = TransactionUpdateRequest { status_id: status };

            let transaction = app.update_transaction(id, &request).await?;
            println!("Updated transaction {id}.");
            print_transaction(&transaction);
        }
    }

    Ok(())
}

async fn run_contractor_command(app: &mut App, command: ContractorCommand) -> Result<(), Error> {
    match command {
        ContractorCommand::List => {
            let route = app.open(&Route::Contractors.path()).await?;
            print_view(app, &route);
        }
        ContractorCommand::Show { id } => {
            let route = app.open(&Route::ContractorDetail(id).path()).await?;
            print_view(app, &route);
        }
        ContractorCommand::Create { name } => {
            let contractor = app.create_contractor(&ContractorCreate { name }).await?;
            println!("Created contractor {}.", contractor.contractor_id);
        }
    }

    Ok(())
}

/// Navigate to `target`, failing if the guard sends the user to log in instead.
fn enter_view(app: &App, target: &Route) -> Result<(), Error> {
    match app.navigate(&target.path())? {
        Route::Login => Err(Error::NotLoggedIn),
        _ => Ok(()),
    }
}

fn print_view(app: &App, route: &Route) {
    match route {
        Route::Root | Route::Login => {
            println!("You are not logged in. Log in with `paydesk login --username <USERNAME>`.")
        }
        Route::Transactions => print_transaction_list(app.transactions().recent()),
        Route::TransactionDetail(_) => {
            if let Some(transaction) = app.transactions().current() {
                print_transaction(transaction);
            }
        }
        Route::Contractors => print_contractor_list(app.contractors().contractors()),
        Route::ContractorDetail(_) => {
            if let Some(contractor) = app.contractors().current() {
                print_contractor(contractor);
            }
        }
        Route::NotFound(path) => print_error(format!("there is no view at {path}")),
    }
}

fn print_transaction_list(transactions: &[TransactionListItem]) {
    if transactions.is_empty() {
        println!("No transactions yet.");
        return;
    }

    for transaction in transactions {
        println!(
            "{:>6}  {}  {:<20} -> {:<20} {:>12.2}  {:<16} {}",
            transaction.transaction_id,
            format_timestamp(transaction.created_at),
            transaction.contractor_from,
            transaction.contractor_to,
            transaction.amount,
            transaction.transaction_type,
            transaction.status.display_name,
        );
    }
}

fn print_transaction(transaction: &TransactionDetail) {
    println!("Transaction {}", transaction.transaction_id);
    println!("  From:    {}", transaction.contractor_from);
    println!("  To:      {}", transaction.contractor_to);
    println!("  Amount:  {:.2}", transaction.amount);
    println!("  Type:    {}", transaction.transaction_type.display_name);
    println!("  Status:  {}", transaction.status.display_name);
    println!("  Created: {}", format_timestamp(transaction.created_at));
    println!("  Updated: {}", format_timestamp(transaction.updated_at));
}

fn print_contractor_list(contractors: &[Contractor]) {
    if contractors.is_empty() {
        println!("No contractors yet.");
        return;
    }

    for contractor in contractors {
        println!("{:>6}  {}", contractor.contractor_id, contractor.name);
    }
}

fn print_contractor(contractor: &Contractor) {
    println!("Contractor {}", contractor.contractor_id);
    println!("  Name: {}", contractor.name);
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| timestamp.to_string())
}

fn read_password_error(error: &io::Error) -> Error {
    Error::InvalidConfig(format!("could not read password from stdin: {error}"))
}

fn print_error(error: impl ToString) {
    eprintln!(
        "\x1b[31;1m{}\x1b[0m",
        capitalise_first_char(&error.to_string())
    )
}

fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first.to_uppercase().chain(chars).collect()
}
