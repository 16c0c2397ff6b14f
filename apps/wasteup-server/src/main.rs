use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm_migration::MigratorTrait;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use db::{ConnectOpts, DbHandle};
use runtime::{config::CliArgs, logging, AppConfig};

use activity_log::contract::client::ActivityLogApi;
use activity_log::contract::model::NewActivityEntry;
use activity_log::domain::service::{
    Service as ActivityService, ServiceConfig as ActivityServiceConfig,
};
use activity_log::gateways::local::ActivityLogLocalClient;
use activity_log::infra::storage::SeaOrmActivityLogRepository;

use users_directory::config::UsersDirectoryConfig;
use users_directory::contract::client::UsersDirectoryApi;
use users_directory::contract::model::{NewUser, UserRole};
use users_directory::domain::service::{
    Service as UsersService, ServiceConfig as UsersServiceConfig,
};
use users_directory::gateways::local::UsersDirectoryLocalClient;
use users_directory::infra::storage::SeaOrmUsersRepository;

use notifications::broadcast::NotificationBroadcaster;
use notifications::config::NotificationsConfig;
use notifications::contract::client::NotificationsApi;
use notifications::domain::ports::TextGenerator;
use notifications::domain::service::Service as NotificationsService;
use notifications::gateways::local::NotificationsLocalClient;
use notifications::infra::storage::SeaOrmNotificationsRepository;
use notifications::infra::textgen::{DisabledTextGenerator, HttpTextGenerator};

use pickups::config::PickupsConfig;
use pickups::domain::service::{Service as PickupsService, ServiceConfig as PickupsServiceConfig};
use pickups::infra::storage::SeaOrmPickupsRepository;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Waste Up Server - municipal waste-pickup coordination backend
#[derive(Parser)]
#[command(name = "wasteup-server")]
#[command(about = "Waste Up Server - municipal waste-pickup coordination backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
    /// Populate the Ibadan pilot records
    Seed,
}

/// Everything the HTTP layer and the seeder need, wired once at startup.
struct AppState {
    users: Arc<UsersService>,
    users_api: Arc<dyn UsersDirectoryApi>,
    activity: Arc<ActivityService>,
    activity_api: Arc<dyn ActivityLogApi>,
    notifications: Arc<NotificationsService>,
    broadcaster: NotificationBroadcaster,
    pickups: Arc<PickupsService>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_ref())
        .context("Failed to load configuration")?;
    config.apply_cli_overrides(&CliArgs {
        config: cli.config.as_ref().map(|p| p.display().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging_from_config(config.logging.as_ref());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config).await,
        Commands::Check => check(config),
        Commands::Seed => seed(config).await,
    }
}

fn check(config: AppConfig) -> Result<()> {
    let db_url = config
        .database
        .as_ref()
        .map(|d| d.url.as_str())
        .unwrap_or("<none>");
    println!("configuration OK (server {}:{}, database {})", config.server.host, config.server.port, db_url);
    Ok(())
}

async fn run(config: AppConfig) -> Result<()> {
    let db = connect_database(&config).await?;
    migrate(&db).await?;
    let state = wire_modules(&config, &db)?;

    let router = build_router(&config, &state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Waste Up server listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                warn!("shutdown waiter failed: {e}");
            }
            info!("shutdown: signal received");
        })
        .await
        .context("server error")?;

    db.close().await?;
    Ok(())
}

async fn seed(config: AppConfig) -> Result<()> {
    let db = connect_database(&config).await?;
    migrate(&db).await?;
    let state = wire_modules(&config, &db)?;

    seed_pilot_records(&state).await?;

    db.close().await?;
    Ok(())
}

async fn connect_database(config: &AppConfig) -> Result<DbHandle> {
    let database = config
        .database
        .clone()
        .context("database configuration is required")?;

    let base_dir = std::env::current_dir().context("cannot resolve working directory")?;
    let dsn = db::absolutize_sqlite_dsn(&database.url, &base_dir)?;

    let opts = ConnectOpts {
        max_conns: database.max_conns.unwrap_or(10),
        ..Default::default()
    };
    Ok(DbHandle::connect(&dsn, opts).await?)
}

async fn migrate(db: &DbHandle) -> Result<()> {
    info!("Running database migrations");
    users_directory::infra::storage::migrations::Migrator::up(db.sea(), None).await?;
    activity_log::infra::storage::migrations::Migrator::up(db.sea(), None).await?;
    notifications::infra::storage::migrations::Migrator::up(db.sea(), None).await?;
    pickups::infra::storage::migrations::Migrator::up(db.sea(), None).await?;
    info!("Database migrations completed");
    Ok(())
}

fn wire_modules(config: &AppConfig, db: &DbHandle) -> Result<AppState> {
    let conn = db.sea().clone();

    // Activity log
    let activity = Arc::new(ActivityService::new(
        Arc::new(SeaOrmActivityLogRepository::new(conn.clone())),
        ActivityServiceConfig::default(),
    ));
    let activity_api: Arc<dyn ActivityLogApi> =
        Arc::new(ActivityLogLocalClient::new(activity.clone()));

    // Users directory
    let users_cfg: UsersDirectoryConfig = config.module_config("users_directory")?;
    let users = Arc::new(UsersService::new(
        Arc::new(SeaOrmUsersRepository::new(conn.clone())),
        activity_api.clone(),
        UsersServiceConfig {
            max_name_length: users_cfg.max_name_length,
            default_page_size: users_cfg.default_page_size,
            max_page_size: users_cfg.max_page_size,
        },
    ));
    let users_api: Arc<dyn UsersDirectoryApi> =
        Arc::new(UsersDirectoryLocalClient::new(users.clone()));

    // Notifications
    let notif_cfg: NotificationsConfig = config.module_config("notifications")?;
    let broadcaster = NotificationBroadcaster::new(notif_cfg.broadcast_capacity);
    let textgen: Arc<dyn TextGenerator> = match &notif_cfg.textgen_base_url {
        Some(base) => {
            let base = url::Url::parse(base)
                .with_context(|| format!("invalid textgen_base_url '{base}'"))?;
            Arc::new(HttpTextGenerator::new(reqwest::Client::new(), base))
        }
        None => Arc::new(DisabledTextGenerator),
    };
    let notifications = Arc::new(NotificationsService::new(
        Arc::new(SeaOrmNotificationsRepository::new(conn.clone())),
        textgen,
        broadcaster.clone(),
        Duration::from_millis(notif_cfg.textgen_timeout_ms),
    ));
    let notifications_api: Arc<dyn NotificationsApi> =
        Arc::new(NotificationsLocalClient::new(notifications.clone()));

    // Pickups (the lifecycle engine)
    let pickups_cfg: PickupsConfig = config.module_config("pickups")?;
    let pickups = Arc::new(PickupsService::new(
        Arc::new(SeaOrmPickupsRepository::new(conn)),
        users_api.clone(),
        notifications_api,
        PickupsServiceConfig {
            default_page_size: pickups_cfg.default_page_size,
            max_page_size: pickups_cfg.max_page_size,
        },
    ));

    Ok(AppState {
        users,
        users_api,
        activity,
        activity_api,
        notifications,
        broadcaster,
        pickups,
    })
}

fn build_router(config: &AppConfig, state: &AppState) -> axum::Router {
    let mut router = axum::Router::new();
    router = users_directory::api::rest::routes::register_routes(router, state.users.clone());
    router = activity_log::api::rest::routes::register_routes(router, state.activity.clone());
    router = notifications::api::rest::routes::register_routes(
        router,
        state.notifications.clone(),
        state.broadcaster.clone(),
    );
    router = pickups::api::rest::routes::register_routes(router, state.pickups.clone());
    router = router.route("/healthz", axum::routing::get(|| async { "ok" }));

    if config.server.timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(
            config.server.timeout_sec,
        )));
    }
    router.layer(TraceLayer::new_for_http())
}

/// The Ibadan pilot records: one admin, one PSP operator, one resident.
/// Idempotent - does nothing when the admin account already exists.
async fn seed_pilot_records(state: &AppState) -> Result<()> {
    if state.users_api.find_by_email("admin@wasteup.ng").await?.is_some() {
        info!("Seed data already present, nothing to do");
        return Ok(());
    }

    let admin = state
        .users_api
        .create_user(NewUser {
            name: "Admin User".to_string(),
            email: "admin@wasteup.ng".to_string(),
            phone: "08000000001".to_string(),
            role: UserRole::Admin,
            zone: "Dugbe".to_string(),
            availability: None,
            preferred_operator_id: None,
        })
        .await?;

    let clean_oyo = state
        .users_api
        .create_user(NewUser {
            name: "CleanOyo Ltd".to_string(),
            email: "ops@cleanoyo.ng".to_string(),
            phone: "08023456789".to_string(),
            role: UserRole::PspOperator,
            zone: "Bodija".to_string(),
            availability: Some(true),
            preferred_operator_id: None,
        })
        .await?;

    state
        .users_api
        .create_user(NewUser {
            name: "Ayo Balogun".to_string(),
            email: "ayo@mail.ng".to_string(),
            phone: "08012345678".to_string(),
            role: UserRole::Resident,
            zone: "Bodija".to_string(),
            availability: None,
            preferred_operator_id: Some(clean_oyo.id),
        })
        .await?;

    state
        .activity_api
        .record(NewActivityEntry {
            user_id: admin.id,
            action: "DATABASE_SEED".to_string(),
            details: "System initial records successfully populated for Ibadan Pilot.".to_string(),
        })
        .await?;

    info!("Seeded pilot records (admin, CleanOyo Ltd, Ayo Balogun)");
    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = tokio::signal::ctrl_c() => {},
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(())
    }
}
