//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::inbound::http::health::StoreMode;
use backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration that serves fixtures until a pool is
    /// attached.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapters.
    ///
    /// When provided, every port is backed by its Diesel repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Report which store the ports will use.
    #[must_use]
    pub fn store_mode(&self) -> StoreMode {
        if self.db_pool.is_some() {
            StoreMode::Database
        } else {
            StoreMode::Fixture
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_mode_without_pool() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        assert_eq!(config.store_mode(), StoreMode::Fixture);
    }
}
