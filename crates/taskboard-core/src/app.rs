//! Application facade
//!
//! Wires storage, authentication, and transport together and exposes the
//! data fetchers the pages consume. Every fetcher is role-gated: it asks
//! the session manager for the current identity before deciding which
//! query to issue, and refuses outright when Anonymous.

use std::sync::Arc;
use url::Url;

use taskboard_api::{
    projects_query, DashboardStats, MyProjectsData, Project, ProjectScope, ProjectsData,
    SignupAccount, SignupRequest, Task, TasksData, TASKS_QUERY,
};
use taskboard_auth::{AuthGateway, GraphqlAuthGateway, Route, Session, SessionManager};
use taskboard_storage::Database;
use taskboard_transport::ClientFactory;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct App {
    config: Config,
    session_manager: SessionManager,
    factory: ClientFactory,
}

impl App {
    /// Build the app from configuration: open the local database and point
    /// the transport at the configured endpoint.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let endpoint = Url::parse(&config.graphql_endpoint).map_err(|e| {
            CoreError::Config(format!(
                "invalid GraphQL endpoint {:?}: {}",
                config.graphql_endpoint, e
            ))
        })?;
        let factory = ClientFactory::new(endpoint);
        let gateway = Arc::new(GraphqlAuthGateway::new(factory.clone()));

        Self::assemble(config, db, factory, gateway)
    }

    fn assemble(
        config: Config,
        db: Database,
        factory: ClientFactory,
        gateway: Arc<dyn AuthGateway>,
    ) -> Result<Self> {
        let session_manager = SessionManager::new(db, gateway);

        Ok(Self {
            config,
            session_manager,
            factory,
        })
    }

    /// Restore persisted state. Call once after construction.
    pub fn initialize(&self) -> Result<()> {
        self.session_manager.restore()?;
        tracing::info!(
            authenticated = self.session_manager.is_authenticated(),
            "App initialized"
        );
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.session_manager
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Route> {
        Ok(self.session_manager.login(username, password).await?)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupAccount> {
        Ok(self.session_manager.signup(request).await?)
    }

    pub fn logout(&self) -> Result<Route> {
        Ok(self.session_manager.logout()?)
    }

    /// The projects listing, scoped by the caller's role: admins fetch the
    /// organization-wide set, students fetch their own.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        let session = self.current_session()?;
        let query = projects_query(session.role);
        let client = self.factory.client(Some(&session.token));

        match query.scope {
            ProjectScope::Organization => {
                let data: ProjectsData = client.request(query.document, &()).await?;
                Ok(data.projects)
            }
            ProjectScope::Mine => {
                let data: MyProjectsData = client.request(query.document, &()).await?;
                Ok(data.my_projects)
            }
        }
    }

    /// The tasks listing. One document for both roles; the backend scopes
    /// the result by the bearer identity.
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        let session = self.current_session()?;
        let client = self.factory.client(Some(&session.token));
        let data: TasksData = client.request(TASKS_QUERY, &()).await?;
        Ok(data.tasks)
    }

    /// The dashboard's stat tiles, derived from the listings.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let projects = self.projects().await?;
        let tasks = self.tasks().await?;
        Ok(DashboardStats::derive(&projects, &tasks))
    }

    fn current_session(&self) -> Result<Session> {
        self.session_manager
            .session()
            .ok_or(CoreError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskboard_api::LoginPayload;
    use taskboard_auth::Credentials;
    use taskboard_transport::TransportError;

    struct RejectingGateway;

    #[async_trait]
    impl AuthGateway for RejectingGateway {
        async fn login(
            &self,
            _credentials: &Credentials,
        ) -> taskboard_transport::Result<LoginPayload> {
            Err(TransportError::Graphql("invalid credentials".to_string()))
        }

        async fn signup(
            &self,
            _request: &SignupRequest,
        ) -> taskboard_transport::Result<SignupAccount> {
            Err(TransportError::Graphql("duplicate username".to_string()))
        }
    }

    fn anonymous_app() -> App {
        let config = Config::new(std::path::PathBuf::from("/tmp/taskboard-test"));
        let db = Database::open_in_memory().unwrap();
        let factory =
            ClientFactory::new(Url::parse("http://localhost:4000/graphql").unwrap());
        App::assemble(config, db, factory, Arc::new(RejectingGateway)).unwrap()
    }

    #[tokio::test]
    async fn test_fetchers_refuse_without_a_session() {
        let app = anonymous_app();
        app.initialize().unwrap();

        assert!(matches!(
            app.projects().await.unwrap_err(),
            CoreError::NotAuthenticated
        ));
        assert!(matches!(
            app.tasks().await.unwrap_err(),
            CoreError::NotAuthenticated
        ));
        assert!(matches!(
            app.stats().await.unwrap_err(),
            CoreError::NotAuthenticated
        ));
    }

    #[tokio::test]
    async fn test_rejected_login_surfaces_as_auth_error() {
        let app = anonymous_app();

        let err = app.login("alice", "wrong").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Auth(taskboard_auth::AuthError::InvalidCredentials)
        ));
        assert!(!app.session_manager().is_authenticated());
    }

    #[test]
    fn test_invalid_endpoint_is_a_config_error() {
        let mut config = Config::new(std::path::PathBuf::from("/tmp/taskboard-test"));
        config.graphql_endpoint = "not a url".to_string();
        config.database_path = std::path::PathBuf::from(":memory:");

        match App::new(config) {
            Err(CoreError::Config(message)) => assert!(message.contains("endpoint")),
            other => panic!("expected Config error, got {:?}", other.map(|_| ())),
        }
    }
}
