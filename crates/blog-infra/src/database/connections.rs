use std::fmt;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Connection settings for the PostgreSQL database.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// libpq `sslmode` (`disable`, `require`, ...).
    pub ssl_mode: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Connection URL with user and password percent-encoded.
    pub fn url(&self) -> String {
        let credentials = if self.password.is_empty() {
            urlencoding::encode(&self.user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password)
            )
        };

        let mut url = format!(
            "postgres://{}@{}:{}/{}",
            credentials,
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        );
        if !self.ssl_mode.is_empty() {
            url.push_str("?sslmode=");
            url.push_str(&urlencoding::encode(&self.ssl_mode));
        }
        url
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// Open the connection pool and ping the database once.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to database..."
    );

    let opts = ConnectOptions::new(config.url())
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    db.ping().await?;

    tracing::info!(
        "Database connected (pool: {}..{}, backend: {:?})",
        config.min_connections,
        config.max_connections,
        db.get_database_backend()
    );

    Ok(db)
}
