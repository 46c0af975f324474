//! Stayboard CLI - A front-desk board for moving reservations through their stay

use clap::Parser;
use stayboard::cli::{commands, Cli, Commands};
use stayboard::domain::{ReservationDraft, ReservationEdit};
use stayboard::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the flags. The interactive
    // board owns the terminal, so it logs nothing unless asked to.
    let default_level = if matches!(cli.command, Some(Commands::Tui)) {
        "off"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> stayboard::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => commands::init::run(cwd, force, cli.dry_run).await,
        Some(Commands::Board { json }) => commands::board::run(cwd, json).await,
        Some(Commands::List { json, status }) => commands::list::run(cwd, json, status).await,
        Some(Commands::Show { id, json }) => commands::show::run(cwd, &id, json).await,
        Some(Commands::Add {
            guest,
            check_in,
            check_out,
            room,
            notes,
            email,
        }) => {
            let mut draft = ReservationDraft::new(guest, check_in, check_out);
            draft.room_number = room;
            draft.notes = notes;
            draft.email = email;
            commands::add::run(cwd, draft, cli.dry_run).await
        }
        Some(Commands::Edit {
            id,
            guest,
            check_in,
            check_out,
            room,
            notes,
            email,
            status,
        }) => {
            let edit = ReservationEdit {
                guest_name: guest,
                check_in_date: check_in,
                check_out_date: check_out,
                status,
                room_number: room,
                notes,
                email,
            };
            commands::edit::run(cwd, &id, edit, cli.dry_run).await
        }
        Some(Commands::Delete { id }) => commands::delete::run(cwd, &id, cli.dry_run).await,
        Some(Commands::Move { id, target }) => {
            commands::move_to::run(cwd, &id, &target, cli.dry_run).await
        }
        Some(Commands::Tui) => commands::tui::run(cwd, cli.dry_run).await,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
