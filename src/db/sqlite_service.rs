use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct SqliteService {
    pub(crate) db: DatabaseConnection,
}

impl SqliteService {
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        log::info!("Opening store at {}", url);
        // one connection: sqlite has a single writer, and an in-memory
        // store exists per connection
        let mut opts = ConnectOptions::new(url.to_owned());
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await?;
        Migrator::up(&db, None).await?;
        log::info!("Store ready, migrations applied");
        Ok(Self { db })
    }
}
