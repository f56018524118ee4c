use crate::error::{AdapterError, DbError};
use sqlx::{MySql, Pool, Postgres, mysql::MySqlPool, postgres::PgPool};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    Postgres,
}

impl FromStr for DatabaseKind {
    type Err = AdapterError;

    fn from_str(dialect: &str) -> Result<Self, Self::Err> {
        match dialect {
            "mysql" | "mariadb" => Ok(DatabaseKind::MySql),
            "postgres" | "postgresql" | "pg" => Ok(DatabaseKind::Postgres),
            other => Err(AdapterError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// An open database handle, borrowed by adapters for metadata queries.
///
/// The handle owns a connection pool but is never closed by the metadata
/// layer; dropping the last clone releases the pool.
#[derive(Clone)]
pub enum DbHandle {
    MySql(Pool<MySql>),
    Postgres(Pool<Postgres>),
}

impl DbHandle {
    pub async fn connect(dialect: &str, url: &str) -> Result<Self, AdapterError> {
        let kind = dialect.parse::<DatabaseKind>()?;
        debug!("connecting {kind:?} pool");
        match kind {
            DatabaseKind::MySql => Ok(DbHandle::MySql(MySqlPool::connect(url).await?)),
            DatabaseKind::Postgres => Ok(DbHandle::Postgres(PgPool::connect(url).await?)),
        }
    }

    /// Builds a pool without establishing a connection. Connections are
    /// opened on first use.
    pub fn connect_lazy(dialect: &str, url: &str) -> Result<Self, AdapterError> {
        let kind = dialect.parse::<DatabaseKind>()?;
        match kind {
            DatabaseKind::MySql => Ok(DbHandle::MySql(MySqlPool::connect_lazy(url)?)),
            DatabaseKind::Postgres => Ok(DbHandle::Postgres(PgPool::connect_lazy(url)?)),
        }
    }

    pub fn kind(&self) -> DatabaseKind {
        match self {
            DbHandle::MySql(_) => DatabaseKind::MySql,
            DbHandle::Postgres(_) => DatabaseKind::Postgres,
        }
    }

    /// Round-trips a trivial query to verify the connection works.
    pub async fn ping(&self) -> Result<(), DbError> {
        match self {
            DbHandle::MySql(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            DbHandle::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_aliases() {
        assert_eq!("mysql".parse::<DatabaseKind>().unwrap(), DatabaseKind::MySql);
        assert_eq!(
            "mariadb".parse::<DatabaseKind>().unwrap(),
            DatabaseKind::MySql
        );
        assert_eq!(
            "postgres".parse::<DatabaseKind>().unwrap(),
            DatabaseKind::Postgres
        );
        assert_eq!("pg".parse::<DatabaseKind>().unwrap(), DatabaseKind::Postgres);
        assert!(matches!(
            "oracle".parse::<DatabaseKind>(),
            Err(AdapterError::UnsupportedDialect(d)) if d == "oracle"
        ));
    }

    #[tokio::test]
    async fn test_lazy_handle_reports_kind() {
        let handle = DbHandle::connect_lazy("mysql", "mysql://localhost/db").unwrap();
        assert_eq!(handle.kind(), DatabaseKind::MySql);
        let handle = DbHandle::connect_lazy("pg", "postgres://localhost/db").unwrap();
        assert_eq!(handle.kind(), DatabaseKind::Postgres);
    }
}
