//! PostgreSQL data source implementation
//!
//! This module provides the pooled client for the relational store the
//! reports are extracted from. The pool is owned here and reused across
//! dates; the orchestrator never opens or closes connections itself.

use crate::adapters::traits::DataSource;
use crate::config::schema::{DatabaseConfig, ReportConfig};
use crate::domain::date::ReportDate;
use crate::domain::errors::DataSourceError;
use crate::domain::result::Result;
use crate::domain::row::{CellValue, ReportRow};
use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::{ToSql, Type};
use tokio_postgres::{NoTls, Row};

/// Pooled PostgreSQL data source
///
/// Runs the configured existence-check and extraction queries with the
/// report date bound as `$1`. NUMERIC columns should be cast to `float8`
/// in the extraction query; the row decoder maps integer, float, text,
/// date, timestamp, and boolean columns.
pub struct ReportDataSource {
    /// Connection pool
    pool: Pool,

    /// Existence-check SQL (`SELECT COUNT(*) ... WHERE ... = $1`)
    count_query: String,

    /// Extraction SQL (`SELECT ... WHERE ... = $1`)
    data_query: String,
}

impl ReportDataSource {
    /// Create a new data source from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be built.
    pub fn new(database: &DatabaseConfig, report: &ReportConfig) -> Result<Self> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&database.host)
            .port(database.port)
            .dbname(&database.dbname)
            .user(&database.user)
            .password(database.password.expose_secret().as_ref());

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Duration::from_secs(database.connection_timeout_seconds);
        let pool = Pool::builder(manager)
            .max_size(database.max_connections)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| {
                DataSourceError::InvalidConfiguration(format!(
                    "Failed to create connection pool: {e}"
                ))
            })?;

        Ok(Self {
            pool,
            count_query: report.count_query.clone(),
            data_query: report.data_query.clone(),
        })
    }

    /// Test the connection by running a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained or the query
    /// fails.
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.pool.get().await.map_err(|e| {
            DataSourceError::ConnectionFailed(format!("Failed to get connection from pool: {e}"))
        })?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| DataSourceError::QueryFailed(format!("Connection test failed: {e}")))?;

        tracing::debug!("Database connection test successful");
        Ok(())
    }

    /// Execute a parameterized SELECT and return the raw rows
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained or the query
    /// fails.
    pub async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        let client = self.pool.get().await.map_err(|e| {
            DataSourceError::ConnectionFailed(format!("Failed to get connection from pool: {e}"))
        })?;

        let rows = client
            .query(sql, params)
            .await
            .map_err(|e| DataSourceError::QueryFailed(e.to_string()))?;

        Ok(rows)
    }

    /// Decode one database row into report cells
    fn decode_row(row: &Row) -> std::result::Result<ReportRow, DataSourceError> {
        let mut cells = Vec::with_capacity(row.len());

        for (index, column) in row.columns().iter().enumerate() {
            let ty = column.type_();
            let cell = if *ty == Type::INT2 {
                row.try_get::<_, Option<i16>>(index)
                    .map(|v| v.map_or(CellValue::Null, |v| CellValue::Integer(i64::from(v))))
            } else if *ty == Type::INT4 {
                row.try_get::<_, Option<i32>>(index)
                    .map(|v| v.map_or(CellValue::Null, |v| CellValue::Integer(i64::from(v))))
            } else if *ty == Type::INT8 {
                row.try_get::<_, Option<i64>>(index)
                    .map(|v| v.map_or(CellValue::Null, CellValue::Integer))
            } else if *ty == Type::FLOAT4 {
                row.try_get::<_, Option<f32>>(index)
                    .map(|v| v.map_or(CellValue::Null, |v| CellValue::Number(f64::from(v))))
            } else if *ty == Type::FLOAT8 {
                row.try_get::<_, Option<f64>>(index)
                    .map(|v| v.map_or(CellValue::Null, CellValue::Number))
            } else if *ty == Type::DATE {
                row.try_get::<_, Option<chrono::NaiveDate>>(index)
                    .map(|v| v.map_or(CellValue::Null, CellValue::Date))
            } else if *ty == Type::TIMESTAMP {
                row.try_get::<_, Option<chrono::NaiveDateTime>>(index).map(|v| {
                    v.map_or(CellValue::Null, |v| {
                        CellValue::Text(v.format("%Y-%m-%d %H:%M:%S").to_string())
                    })
                })
            } else if *ty == Type::BOOL {
                row.try_get::<_, Option<bool>>(index)
                    .map(|v| v.map_or(CellValue::Null, |v| CellValue::Text(v.to_string())))
            } else {
                row.try_get::<_, Option<String>>(index)
                    .map(|v| v.map_or(CellValue::Null, CellValue::Text))
            }
            .map_err(|e| {
                DataSourceError::RowDecode(format!(
                    "column '{}' ({}): {e}",
                    column.name(),
                    column.type_()
                ))
            })?;

            cells.push(cell);
        }

        Ok(ReportRow::new(cells))
    }
}

#[async_trait]
impl DataSource for ReportDataSource {
    async fn exists_for_date(&self, date: ReportDate) -> Result<(bool, i64)> {
        let day = date.as_naive();
        let rows = self.query(&self.count_query, &[&day]).await?;

        let count: i64 = rows
            .first()
            .ok_or_else(|| {
                DataSourceError::QueryFailed("Existence check returned no rows".to_string())
            })?
            .try_get(0)
            .map_err(|e| {
                DataSourceError::RowDecode(format!("Existence check count column: {e}"))
            })?;

        tracing::debug!(date = %date, count, "Existence check completed");
        Ok((count > 0, count))
    }

    async fn fetch_report_rows(&self, date: ReportDate) -> Result<Vec<ReportRow>> {
        let day = date.as_naive();
        let rows = self.query(&self.data_query, &[&day]).await?;

        let decoded = rows
            .iter()
            .map(Self::decode_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(date = %date, rows = decoded.len(), "Fetched report rows");
        Ok(decoded)
    }
}
