use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;

use tutorhub_cli::{logging, seeder};
use tutorhub_db::PgPool;
use tutorhub_rbac::ResolutionPolicy;

#[derive(Parser)]
#[command(name = "tutorhub-cli")]
#[command(about = "Tutorhub CLI - Role and permission administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pending database migrations
    Migrate,
    /// Reconcile roles and permissions with the declared catalog
    SeedRoles {
        /// Fail on catalog names with no stored row instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Report the admin role's permissions, and optionally a user's
    Verify {
        /// Email of a user whose roles and permissions should be reported
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Reconcile, then verify (one-shot repair)
    Repair {
        /// Email of a user whose roles and permissions should be reported
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Fail on catalog names with no stored row instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_console_logging();

    let cli = Cli::parse();
    let pool = tutorhub_db::init_db_pool().await;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::SeedRoles { strict } => handle_seed_roles(&pool, strict).await,
        Commands::Verify { email } => handle_verify(&pool, email.as_deref()).await,
        Commands::Repair { email, yes, strict } => {
            handle_repair(&pool, email.as_deref(), yes, strict).await
        }
    }
}

fn policy(strict: bool) -> ResolutionPolicy {
    if strict {
        ResolutionPolicy::Strict
    } else {
        ResolutionPolicy::Lenient
    }
}

async fn handle_migrate(pool: &PgPool) {
    match tutorhub_db::run_migrations(pool).await {
        Ok(_) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_seed_roles(pool: &PgPool, strict: bool) {
    match seeder::seed_roles(pool, policy(strict)).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error reconciling roles: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_verify(pool: &PgPool, email: Option<&str>) {
    match seeder::verify(pool, email).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error verifying assignments: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_repair(pool: &PgPool, email: Option<&str>, yes: bool, strict: bool) {
    if !yes {
        let proceed = Confirm::new()
            .with_prompt("Replace every role's permission set with the declared catalog?")
            .default(true)
            .interact()
            .expect("Failed to read confirmation");
        if !proceed {
            println!("Aborted.");
            return;
        }
    }

    handle_seed_roles(pool, strict).await;
    println!();
    handle_verify(pool, email).await;
    println!("\n✨ Repair complete.");
}
