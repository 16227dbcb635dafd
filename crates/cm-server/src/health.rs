//! Health Check System
//!
//! `/health` and `/health/ready` report the backing store; `/health/live`
//! only says the process is up.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cm_db::Database;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        if self.status.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Timeout for the database ping
    pub check_timeout: Duration,
    /// How long a report is served from cache
    pub cache_duration: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_timeout: Duration::from_secs(5),
            cache_duration: Duration::from_secs(10),
        }
    }
}

struct CachedHealth {
    report: HealthReport,
    cached_at: Instant,
}

pub struct HealthChecker {
    config: HealthConfig,
    start_time: Instant,
    cache: RwLock<Option<CachedHealth>>,
    database: Option<Database>,
}

impl HealthChecker {
    pub fn new(config: HealthConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            cache: RwLock::new(None),
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Get cached health or perform checks
    pub async fn check(&self) -> HealthReport {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.cached_at.elapsed() < self.config.cache_duration {
                    debug!("Returning cached health report");
                    return cached.report.clone();
                }
            }
        }

        let report = self.perform_checks().await;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedHealth {
            report: report.clone(),
            cached_at: Instant::now(),
        });

        report
    }

    async fn perform_checks(&self) -> HealthReport {
        let store = match self.database {
            Some(ref database) => self.check_database(database).await,
            None => ComponentHealth {
                name: "store".to_string(),
                status: HealthStatus::Healthy,
                message: Some("In-memory store".to_string()),
                response_time_ms: 0,
                details: None,
            },
        };

        HealthReport {
            status: store.status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![store],
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_database(&self, database: &Database) -> ComponentHealth {
        let start = Instant::now();

        let (status, message) = match tokio::time::timeout(self.config.check_timeout, database.ping()).await {
            Ok(Ok(())) => (HealthStatus::Healthy, "Connected".to_string()),
            Ok(Err(e)) => {
                warn!(error = %e, "Database health check failed");
                (HealthStatus::Unhealthy, "Database unreachable".to_string())
            }
            Err(_) => {
                warn!("Database health check timed out");
                (HealthStatus::Unhealthy, "Database ping timed out".to_string())
            }
        };

        let stats = database.stats();
        ComponentHealth {
            name: "database".to_string(),
            status,
            message: Some(message),
            response_time_ms: start.elapsed().as_millis() as u64,
            details: Some(serde_json::json!({
                "type": "postgresql",
                "pool_size": stats.size,
                "idle_connections": stats.idle,
            })),
        }
    }
}

/// Liveness: the process answers
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness: the store answers
pub async fn readiness(State(health): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = health.check().await;
    (report.http_status(), Json(report))
}

/// Full health report
pub async fn health(State(health): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = health.check().await;
    (report.http_status(), Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: HealthStatus) -> HealthReport {
        HealthReport {
            status,
            version: "1.0".to_string(),
            uptime_seconds: 100,
            components: vec![],
            timestamp: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_health_check_without_database() {
        let checker = HealthChecker::new(HealthConfig::default());
        let report = checker.check().await;

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.components.len(), 1);
        assert_eq!(report.components[0].name, "store");
    }

    #[tokio::test]
    async fn test_health_cache() {
        let checker = HealthChecker::new(HealthConfig {
            cache_duration: Duration::from_secs(60),
            ..Default::default()
        });

        let report1 = checker.check().await;
        let report2 = checker.check().await;

        assert_eq!(report1.timestamp, report2.timestamp);
    }

    #[test]
    fn test_health_status_http() {
        assert_eq!(report(HealthStatus::Healthy).http_status(), StatusCode::OK);
        assert_eq!(
            report(HealthStatus::Unhealthy).http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
