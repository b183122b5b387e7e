//! Database Connection Pool Module
//!
//! PostgreSQL connection pooling via deadpool-postgres, plus the
//! parameterized statements for the `students` table. Each operation takes
//! one connection from the pool for its duration; the pool object's `Drop`
//! guarantees release on every exit path, success or failure.
//!
//! Write operations return the affected-row count so callers can
//! distinguish "matched nothing" from "succeeded".

use crate::error::{ApiError, ApiResult};
use crate::types::Student;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use std::time::Duration;
use tokio_postgres::{NoTls, Row};

// ============================================================================
// CONNECTION POOL CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub max_size: usize,
    /// Connection timeout
    pub timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "roster".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            max_size: 16,
            timeout: Duration::from_secs(30),
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    ///
    /// Read once at process start and passed in by dependency injection;
    /// nothing below this layer touches the environment.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("ROSTER_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("ROSTER_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("ROSTER_DB_NAME").unwrap_or_else(|_| "roster".to_string()),
            user: std::env::var("ROSTER_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("ROSTER_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("ROSTER_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
            timeout: Duration::from_secs(
                std::env::var("ROSTER_DB_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Create a connection pool from this configuration.
    ///
    /// Pool creation is lazy; no connection is opened until an operation
    /// asks for one.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let mut pool_cfg = PoolConfig::new(self.max_size);
        pool_cfg.timeouts.wait = Some(self.timeout);
        cfg.pool = Some(pool_cfg);

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

const INSERT_STUDENT: &str = "INSERT INTO students \
    (student_name, student_age, student_addr, student_percent, student_qual, student_year_passed) \
    VALUES ($1, $2, $3, $4, $5, $6)";

const SELECT_STUDENTS: &str = "SELECT student_id, student_name, student_age, student_addr, \
    student_percent, student_qual, student_year_passed FROM students";

const UPDATE_STUDENT: &str = "UPDATE students SET student_name = $1, student_age = $2, \
    student_addr = $3, student_percent = $4, student_qual = $5, student_year_passed = $6 \
    WHERE student_id = $7";

const DELETE_STUDENT: &str = "DELETE FROM students WHERE student_id = $1";

// ============================================================================
// DATABASE CLIENT
// ============================================================================

/// Database client wrapping a connection pool.
///
/// All statements are parameterized; no value is ever interpolated into
/// SQL text.
#[derive(Clone)]
pub struct DbClient {
    pool: Pool,
}

impl DbClient {
    /// Create a new database client with the given pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a new database client from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get the current pool size for observability.
    pub fn pool_size(&self) -> usize {
        self.pool.status().size
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ApiResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    /// Insert a new student row. The id column is omitted; the store
    /// assigns it.
    pub async fn student_create(&self, student: &Student) -> ApiResult<()> {
        let conn = self.get_conn().await?;

        conn.execute(
            INSERT_STUDENT,
            &[
                &student.student_name,
                &student.student_age,
                &student.student_addr,
                &student.student_percent,
                &student.student_qual,
                &student.student_year_passed,
            ],
        )
        .await?;

        Ok(())
    }

    /// Fetch every student row in the store's natural return order.
    ///
    /// The result set is fully drained before the connection goes back to
    /// the pool; an empty table yields an empty vector.
    pub async fn student_list(&self) -> ApiResult<Vec<Student>> {
        let conn = self.get_conn().await?;

        let rows = conn.query(SELECT_STUDENTS, &[]).await?;

        let mut students = Vec::with_capacity(rows.len());
        for row in &rows {
            students.push(row_to_student(row)?);
        }

        Ok(students)
    }

    /// Update every non-id field of the row matching `student_id`, returning
    /// the affected-row count.
    pub async fn student_update(&self, student: &Student) -> ApiResult<u64> {
        let conn = self.get_conn().await?;

        let affected = conn
            .execute(
                UPDATE_STUDENT,
                &[
                    &student.student_name,
                    &student.student_age,
                    &student.student_addr,
                    &student.student_percent,
                    &student.student_qual,
                    &student.student_year_passed,
                    &student.student_id,
                ],
            )
            .await?;

        Ok(affected)
    }

    /// Delete the row matching `id`, returning the affected-row count.
    pub async fn student_delete(&self, id: i32) -> ApiResult<u64> {
        let conn = self.get_conn().await?;

        let affected = conn.execute(DELETE_STUDENT, &[&id]).await?;

        Ok(affected)
    }

    /// Store connectivity check for the readiness endpoint.
    pub async fn ping(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}

/// Map a result row into a Student, columns in table order.
fn row_to_student(row: &Row) -> ApiResult<Student> {
    Ok(Student {
        student_id: row.try_get("student_id")?,
        student_name: row.try_get("student_name")?,
        student_age: row.try_get("student_age")?,
        student_addr: row.try_get("student_addr")?,
        student_percent: row.try_get("student_percent")?,
        student_qual: row.try_get("student_qual")?,
        student_year_passed: row.try_get("student_year_passed")?,
    })
}
