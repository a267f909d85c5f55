//! Database Connection Management Module
//!
//! MongoDB 클라이언트의 생명주기를 관리하는 모듈입니다.
//! 프로세스 전체에서 하나의 클라이언트를 공유하며, 첫 접근 시점에 지연 생성하고,
//! 요청별 [`EnvironmentRouter`]에 따라 운영/테스트 데이터베이스 핸들을 돌려줍니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::{CredentialResolver, DatabaseConfig};
//! use crate::db::{ConnectionManager, EnvironmentRouter};
//!
//! let manager = ConnectionManager::new(CredentialResolver::from_env(), DatabaseConfig::from_env());
//!
//! // 요청 처리 중
//! let database = manager.get_database(&router).await?;
//!
//! // 종료 시 (여러 번 호출해도 안전)
//! manager.close().await;
//! ```

pub mod environment;

pub use environment::{EnvironmentRouter, TEST_DATABASE_HEADER};

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use log::{debug, info};
use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use tokio::sync::RwLock;
use crate::config::{CredentialResolver, DatabaseConfig};
use crate::core::errors::{AppError, AppResult};

/// MongoDB 클라이언트 관리자
///
/// 클라이언트는 첫 `database` 호출에서 한 번만 생성됩니다.
/// 동시에 여러 요청이 처음 접근하더라도 쓰기 잠금 안에서 다시 확인하므로
/// 클라이언트가 두 개 생기지 않습니다. 생성 이후에는 읽기 잠금만 사용합니다.
pub struct ConnectionManager {
    resolver: CredentialResolver,
    config: DatabaseConfig,
    client: RwLock<Option<Client>>,
    #[cfg(test)]
    clients_created: AtomicUsize,
}

impl ConnectionManager {
    pub fn new(resolver: CredentialResolver, config: DatabaseConfig) -> Self {
        Self {
            resolver,
            config,
            client: RwLock::new(None),
            #[cfg(test)]
            clients_created: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// 이름으로 데이터베이스 핸들을 반환합니다.
    ///
    /// 클라이언트가 없으면 이 시점에 생성합니다.
    pub async fn database(&self, name: &str) -> AppResult<Database> {
        Ok(self.client().await?.database(name))
    }

    /// 요청의 환경 선택에 따라 운영 또는 테스트 데이터베이스를 반환합니다.
    pub async fn get_database(&self, router: &EnvironmentRouter) -> AppResult<Database> {
        let name = router.database_name(&self.config);
        debug!("데이터베이스 선택: {} (test_mode={})", name, router.is_test_mode());
        self.database(name).await
    }

    /// 선택된 데이터베이스에 `ping` 명령을 보냅니다.
    pub async fn ping(&self, router: &EnvironmentRouter) -> AppResult<()> {
        self.get_database(router)
            .await?
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(AppError::database)?;
        Ok(())
    }

    /// 현재 클라이언트가 살아 있는지 여부
    pub async fn is_connected(&self) -> bool {
        self.client.read().await.is_some()
    }

    /// 클라이언트를 종료합니다.
    ///
    /// 클라이언트가 없으면 아무 일도 하지 않습니다. 종료 후 다음 `database`
    /// 호출은 새 클라이언트를 생성합니다.
    pub async fn close(&self) {
        let client = self.client.write().await.take();

        match client {
            Some(client) => {
                client.shutdown().await;
                info!("🔌 MongoDB 연결 종료");
            }
            None => debug!("종료할 MongoDB 연결이 없습니다"),
        }
    }

    async fn client(&self) -> AppResult<Client> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = self.connect().await?;
        *slot = Some(client.clone());
        Ok(client)
    }

    async fn connect(&self) -> AppResult<Client> {
        let params = self.resolver.resolve();
        info!("📡 MongoDB 클라이언트 생성 중: {}", params);

        let mut client_options = ClientOptions::parse(params.connection_string())
            .await
            .map_err(AppError::database)?;
        client_options.app_name = Some(self.config.app_name.clone());

        let client = Client::with_options(client_options).map_err(AppError::database)?;
        #[cfg(test)]
        self.clients_created.fetch_add(1, Ordering::SeqCst);

        info!("✅ MongoDB 클라이언트 준비 완료");
        Ok(client)
    }

    #[cfg(test)]
    pub(crate) fn clients_created(&self) -> usize {
        self.clients_created.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;
    use crate::config::credentials::{StaticNamingContext, URL_KEY};

    // 클라이언트 생성은 서버 접속 없이 이루어지므로 실행 중인 MongoDB가 필요하지 않습니다.
    fn manager() -> ConnectionManager {
        let context = StaticNamingContext::new().with(URL_KEY, "mongodb://localhost:27017");
        ConnectionManager::new(
            CredentialResolver::new(Arc::new(context)),
            DatabaseConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_client_is_created_lazily() {
        let manager = manager();
        assert!(!manager.is_connected().await);
        assert_eq!(manager.clients_created(), 0);

        let database = manager.database("filmotheque").await.unwrap();
        assert_eq!(database.name(), "filmotheque");
        assert!(manager.is_connected().await);
        assert_eq!(manager.clients_created(), 1);

        manager.database("other").await.unwrap();
        assert_eq!(manager.clients_created(), 1);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_concurrent_first_access_creates_one_client() {
        let manager = Arc::new(manager());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let manager = Arc::clone(&manager);
                tokio::spawn(async move { manager.database("filmotheque").await.map(|_| ()) })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(manager.clients_created(), 1);
        manager.close().await;
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_reconnects_lazily() {
        let manager = manager();

        manager.close().await;
        manager.database("filmotheque").await.unwrap();

        manager.close().await;
        manager.close().await;
        assert!(!manager.is_connected().await);

        manager.database("filmotheque").await.unwrap();
        assert!(manager.is_connected().await);
        assert_eq!(manager.clients_created(), 2);

        manager.close().await;
    }

    #[tokio::test]
    async fn test_router_selects_database_name() {
        let manager = manager();

        let production = manager.get_database(&EnvironmentRouter::new()).await.unwrap();
        let test = manager.get_database(&EnvironmentRouter::test()).await.unwrap();

        assert_eq!(production.name(), "filmotheque");
        assert_eq!(test.name(), "filmotheque_test");

        manager.close().await;
    }
}
