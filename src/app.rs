use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use blogdash::api::{ApiClient, ArticleUpdate, Credentials, NewArticle};
use blogdash::session::Session;
use blogdash::ui::{AppState, Screen};
use blogdash::{config, logging, ui};
use std::process;
use tracing::{info, warn};

pub fn run(cli: Cli) {
    // Reports on the config file itself, so it runs before loading it
    if matches!(cli.command, Some(Commands::InitConfig)) {
        handle_init_config(&cli);
        return;
    }

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }

    // Logging failures shouldn't keep the app from starting
    match logging::init(&config.logging) {
        Ok(path) => info!(log = %path.display(), "blogdash starting"),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    // Handle subcommands first
    if let Some(command) = cli.command {
        let result = match command {
            Commands::Login { username, password } => {
                handle_login(&config, Credentials::new(username, password))
            }
            Commands::Register { username, password } => {
                handle_register(&config, Credentials::new(username, password))
            }
            Commands::List => handle_list(&config),
            Commands::Create {
                title,
                author,
                content,
            } => handle_create(
                &config,
                NewArticle {
                    title,
                    content,
                    author,
                },
            ),
            Commands::Edit { id, title, content } => {
                handle_edit(&config, &id, ArticleUpdate { title, content })
            }
            Commands::Delete { id } => handle_delete(&config, &id),
            Commands::Logout => handle_logout(&config),
            Commands::InitConfig => Ok(()),
        };

        if let Err(e) = result {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
        return;
    }

    // Launch TUI (default behavior)
    if let Err(e) = launch_tui(&cli, &config) {
        eprintln!("Error running UI: {:#}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<config::Config> {
    match cli.config {
        Some(ref path) => config::Config::load_from(path),
        None => config::Config::load(),
    }
}

fn client(config: &config::Config) -> Result<ApiClient> {
    ApiClient::from_config(&config.api).context("Failed to build HTTP client")
}

fn session(config: &config::Config) -> Result<Session> {
    Ok(Session::from_file(config.token_path()?))
}

fn launch_tui(cli: &Cli, config: &config::Config) -> Result<()> {
    let route = cli.route.as_deref().unwrap_or(&config.ui.start_route);
    let Some(start) = Screen::from_route(route) else {
        bail!("Unknown route '{}' (expected /, /register or /list)", route);
    };

    let state =
        AppState::new(session(config)?).with_notification_ttl(config.ui.notification_ttl());
    ui::run_ui(client(config)?, state, start).context("Terminal UI failed")
}

fn handle_login(config: &config::Config, credentials: Credentials) -> Result<()> {
    let token = client(config)?.login(&credentials)?;

    let mut session = session(config)?;
    session
        .set_token(&token)
        .context("Logged in, but the session token could not be saved")?;

    println!("Login successful");
    Ok(())
}

fn handle_register(config: &config::Config, credentials: Credentials) -> Result<()> {
    client(config)?.register(&credentials)?;
    println!("Registration successful!");
    Ok(())
}

fn handle_list(config: &config::Config) -> Result<()> {
    let articles = client(config)?.list_articles()?;

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    for article in &articles {
        println!("{}  {}  (by {})", article.id, article.title, article.author);
    }
    println!("\nTotal: {} article(s)", articles.len());
    Ok(())
}

fn handle_create(config: &config::Config, article: NewArticle) -> Result<()> {
    let session = session(config)?;
    if !session.is_authenticated() {
        warn!("creating article without a session token");
    }

    let created = client(config)?.create_article(session.token(), &article)?;
    println!("Submission successful: {}", created.id);
    Ok(())
}

fn handle_edit(config: &config::Config, id: &str, update: ArticleUpdate) -> Result<()> {
    let session = session(config)?;
    client(config)?.update_article(session.token(), id, &update)?;
    println!("Update successful");
    Ok(())
}

fn handle_delete(config: &config::Config, id: &str) -> Result<()> {
    let session = session(config)?;
    client(config)?.delete_article(session.token(), id)?;
    println!("Deletion successful");
    Ok(())
}

fn handle_logout(config: &config::Config) -> Result<()> {
    let mut session = session(config)?;
    session.clear().context("Failed to clear session token")?;
    println!("Logged out");
    Ok(())
}

fn handle_init_config(cli: &Cli) {
    let path = match cli.config {
        Some(ref path) => Ok(path.clone()),
        None => config::Config::config_path(),
    };
    let path = match path {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Config path unknown: {:#}", e);
            process::exit(1);
        }
    };

    if path.exists() {
        match config::Config::load_from(&path) {
            Ok(cfg) => {
                println!("Config loaded successfully from {}", path.display());
                println!("{:#?}", cfg);
            }
            Err(e) => {
                println!("Config invalid: {:#}", e);
                process::exit(1);
            }
        }
    } else {
        println!("Config missing, creating default config...");
        let cfg = config::Config::default();
        if let Err(err) = cfg.save_to(&path) {
            eprintln!("Failed to save default config: {:#}", err);
            process::exit(1);
        }
        println!("Default config saved to {}", path.display());
    }
}
