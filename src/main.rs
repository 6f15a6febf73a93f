use clap::Parser;
use laamsa_admin::config::cli::{Command, OutputFormat};
use laamsa_admin::config::toml_config::TomlConfig;
use laamsa_admin::core::ConfigProvider;
use laamsa_admin::render::{html, text};
use laamsa_admin::utils::error::ErrorSeverity;
use laamsa_admin::utils::validation::{validate_non_empty_string, Validate};
use laamsa_admin::utils::{logger, prompt};
use laamsa_admin::{
    AdminError, ApiClient, CliConfig, Dashboard, FileSessionStore, Result, Settings,
};
use std::io;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };
    let settings = Settings::resolve(file_config.as_ref(), cli.overrides());

    if settings.log_json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &settings).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, settings: &Settings) -> Result<()> {
    let api = ApiClient::from_config(settings)?;
    let store = match settings.session_file() {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::default_location()?,
    };
    tracing::debug!("Session file: {}", store.path().display());

    let mut dashboard = Dashboard::new(api, store);
    dashboard.resume()?;

    match command {
        Command::Login { username, password } => {
            let username = match username {
                Some(username) => username,
                None => prompt::username("Nom d'utilisateur")?,
            };
            validate_non_empty_string("username", &username)?;
            let password = match password {
                Some(password) => password,
                None => prompt::password("Mot de passe")?,
            };
            let session = dashboard.login(&username, &password).await?;
            println!("✅ Connexion réussie! ({})", session.username);
        }
        Command::Logout => {
            dashboard.logout()?;
            println!("✅ Déconnexion réussie");
        }
        Command::Whoami => {
            let session = dashboard.session().ok_or(AdminError::NotAuthenticated)?;
            println!("{}", session.username);
        }
        Command::List {
            status,
            search,
            format,
        } => {
            let mut book = dashboard.load_orders().await?;
            book.set_filter(status);
            let orders = book.search(search.as_deref().unwrap_or(""));
            match format {
                OutputFormat::Table => print!("{}", text::orders_table(&orders)),
                OutputFormat::Csv => text::write_csv(&orders, io::stdout().lock())?,
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&orders)?),
            }
        }
        Command::Stats => {
            let book = dashboard.load_orders().await?;
            print!("{}", text::stats_text(&book.stats()));
        }
        Command::Show { id, html: as_html } => {
            let order = dashboard.order(id).await?;
            if as_html {
                println!("{}", html::order_detail_html(&order));
            } else {
                print!("{}", text::order_detail_text(&order));
            }
        }
        Command::SetStatus { id, status } => {
            dashboard.update_status(id, &status).await?;
            println!("✅ Statut mis à jour avec succès!");
        }
        Command::Delete { id, yes } => {
            if !yes && !prompt::confirm(&format!("Supprimer la commande #{} ?", id))? {
                println!("Suppression annulée");
                return Ok(());
            }
            dashboard.delete_order(id).await?;
            println!("✅ Commande supprimée avec succès!");
        }
    }

    Ok(())
}
