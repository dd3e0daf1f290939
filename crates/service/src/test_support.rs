#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// `None` means no database is configured and the test should skip.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db tests");
        return Ok(None);
    }

    MIGRATED
        .get_or_init(|| async {
            let db = connect().await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    Ok(Some(connect().await?))
}
