use std::io::{self, Write};

use clap::{Parser, Subcommand};

use dt::api::ApiClient;
use dt::config::Settings;
use dt::logic;
use dt::session::SessionStore;
use libs::payload::{TaskCreate, TaskUpdate};
use libs::task::TaskStatus;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and keep the session token for later commands.
    Login { email: String, password: String },
    /// Create an account, then sign in with the same credentials.
    Signup { email: String, password: String },
    /// Forget the stored session token.
    Logout,
    /// Show your tasks.
    List,
    /// Add a task, then show the refreshed list.
    Add {
        title: String,
        /// todo, in_progress or done
        #[arg(long, default_value = "todo")]
        status: String,
        /// Hours already logged
        #[arg(long)]
        time: Option<f64>,
    },
    /// Change a task's title, status or logged hours.
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        /// todo, in_progress or done
        #[arg(long)]
        status: Option<String>,
        /// Hours logged
        #[arg(long)]
        time: Option<f64>,
    },
    /// Show a single task.
    Show { id: i64 },
    /// Delete a task.
    Rm {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Check that the service is up.
    Ping,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::from_env();
    let session = SessionStore::new(settings.session_path.clone());
    let api = ApiClient::new(settings.service_url.clone(), session);

    if let Err(err) = run(cli.command, &api) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands, api: &ApiClient) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => {
            logic::sign_in(api, &email, &password)?;
            println!("Signed in as {email}.");
        }
        Commands::Signup { email, password } => {
            logic::sign_up(api, &email, &password)?;
            println!("Account created. Signed in as {email}.");
        }
        Commands::Logout => {
            logic::sign_out(api)?;
            println!("Signed out.");
        }
        Commands::List => {
            println!("{}", logic::load_list(api)?);
        }
        Commands::Add { title, status, time } => {
            let task = TaskCreate {
                title,
                status: parse_status(&status)?,
                time_logged: time.unwrap_or(0.0),
            };
            println!("{}", logic::add_task(api, task)?);
        }
        Commands::Edit { id, title, status, time } => {
            let update = TaskUpdate {
                title,
                status: status.as_deref().map(parse_status).transpose()?,
                time_logged: time,
            };
            println!("{}", logic::edit_task(api, id, update)?);
        }
        Commands::Show { id } => {
            println!("{}", logic::show_task(api, id)?);
        }
        Commands::Rm { id, yes } => {
            let confirmed = yes || confirm(&format!("Delete task {id}? [y/N] "))?;
            if let Some(list) = logic::remove_task(api, id, confirmed)? {
                println!("{list}");
            }
        }
        Commands::Ping => {
            println!("{}", logic::ping(api)?);
        }
    }
    Ok(())
}

fn parse_status(value: &str) -> anyhow::Result<TaskStatus> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown status `{value}` (expected todo, in_progress or done)"))
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
