//! Authentication gateway
//!
//! The session manager talks to the authentication service through this
//! trait so tests can substitute a stub. The real implementation sends the
//! login/signup mutations over an unauthenticated transport client.

use async_trait::async_trait;
use serde::Serialize;

use taskboard_api::{
    LoginData, LoginPayload, Role, SignupAccount, SignupData, SignupRequest, LOGIN_MUTATION,
    SIGNUP_MUTATION,
};
use taskboard_transport::ClientFactory;

use crate::session::Credentials;

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> taskboard_transport::Result<LoginPayload>;

    async fn signup(&self, request: &SignupRequest)
        -> taskboard_transport::Result<SignupAccount>;
}

pub struct GraphqlAuthGateway {
    factory: ClientFactory,
}

impl GraphqlAuthGateway {
    pub fn new(factory: ClientFactory) -> Self {
        Self { factory }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupVariables<'a> {
    username: &'a str,
    password: &'a str,
    role: Role,
    name: &'a str,
    university_id: &'a str,
}

#[async_trait]
impl AuthGateway for GraphqlAuthGateway {
    async fn login(&self, credentials: &Credentials) -> taskboard_transport::Result<LoginPayload> {
        let client = self.factory.client(None);
        let data: LoginData = client.request(LOGIN_MUTATION, credentials).await?;
        Ok(data.login)
    }

    async fn signup(
        &self,
        request: &SignupRequest,
    ) -> taskboard_transport::Result<SignupAccount> {
        // Self-service accounts are always students
        let variables = SignupVariables {
            username: &request.username,
            password: &request.password,
            role: Role::Student,
            name: &request.name,
            university_id: &request.university_id,
        };

        let client = self.factory.client(None);
        let data: SignupData = client.request(SIGNUP_MUTATION, &variables).await?;
        Ok(data.signup)
    }
}
