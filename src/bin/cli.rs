use clap::{Parser, Subcommand};
use salesboard::{
    db,
    services::user_service::{CreateUserRequest, UserService},
    AppState,
};

#[derive(Parser)]
#[command(name = "salesboard-cli")]
#[command(about = "CLI tool for managing salesboard users and demo data", long_about = None)]
struct Cli {
    /// Database URL (defaults to DATABASE_URL or sqlite://charts.db)
    #[arg(long, env = "DATABASE_URL", default_value = db::DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Demo data commands
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },
}

#[derive(Subcommand)]
enum DataCommands {
    /// Insert demo sales and visitor rows into empty tables
    Seed,
}

fn get_password(prompt: &str) -> anyhow::Result<String> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

async fn create_user(
    user_service: &UserService,
    username: String,
    email: String,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = match password {
        Some(pw) => pw,
        None => {
            let password = get_password("Password")?;
            if password != get_password("Confirm password")? {
                anyhow::bail!("Passwords do not match");
            }
            password
        }
    };

    let user = user_service
        .create_user(CreateUserRequest {
            username,
            email,
            password,
        })
        .await?;

    println!("✅ User created successfully!");
    println!("  ID: {}", user.id);
    println!("  Username: {}", user.username);
    println!("  Email: {}", user.email);
    Ok(())
}

async fn list_users(user_service: &UserService, limit: i64, offset: i64) -> anyhow::Result<()> {
    let users = user_service.list_users(Some(limit), Some(offset)).await?;
    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!(
        "{:<5} {:<24} {:<40} {:<20}",
        "ID", "Username", "Email", "Created"
    );
    println!("{}", "-".repeat(90));
    for user in users {
        println!(
            "{:<5} {:<24} {:<40} {:<20}",
            user.id, user.username, user.email, user.created_at
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let pool = db::create_pool(&cli.database_url).await?;
    db::run_migrations(&pool).await?;
    let state = AppState::from_pool(pool);

    let result = match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                username,
                email,
                password,
            } => create_user(&state.user_service, username, email, password).await,
            UserCommands::List { limit, offset } => {
                list_users(&state.user_service, limit, offset).await
            }
        },
        Commands::Data {
            command: DataCommands::Seed,
        } => state.seed_service.seed_if_empty().await.map(|report| {
            println!(
                "✅ Seeded {} sales rows and {} visitor rows",
                report.sales_inserted, report.visitors_inserted
            );
        }),
    };

    if let Err(err) = result {
        eprintln!("❌ {}", err);
        std::process::exit(1);
    }

    Ok(())
}
