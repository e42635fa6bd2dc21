//! Typed wrappers for the provider endpoints.

use super::{ApiClient, Error, RequestDescriptor};
use crate::http::HttpClient;
use crate::models::{
    Account, AccountTypesResponse, AccountsResponse, ApiCredentials, AskForToken,
    AskForTokenRenew, ConnectionsResponse, InvestmentsResponse, TemporaryCode, Token,
    UpdateAccount, User, UserRef,
};
use crate::time::Clock;

/// Route paths relative to the versioned base URL.
pub mod route {
    pub const ACCESS_TOKEN: &str = "/auth/token/access";
    pub const RENEW_TOKEN: &str = "/auth/renew";
    pub const TEMPORARY_CODE: &str = "/auth/token/code";
    pub const USERS: &str = "/users";
    pub const ACCOUNTS: &str = "/accounts";
    pub const CONNECTIONS: &str = "/connections";
    pub const INVESTMENTS: &str = "/investments";
    pub const ACCOUNT_TYPES: &str = "/account_types";
}

fn user_route(user: UserRef, tail: &str) -> String {
    format!("{}/{user}{tail}", route::USERS)
}

impl<H: HttpClient, C: Clock> ApiClient<H, C> {
    fn api_credentials(&self) -> ApiCredentials {
        ApiCredentials {
            client_id: self.credentials().client_id().to_string(),
            client_secret: self.credentials().api_secret().to_string(),
        }
    }

    /// Exchanges the code returned by the connect flow for a permanent token.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] with `InvalidGrant` when the code is expired or unknown.
    pub async fn access_token(&self, code: &str) -> Result<Token, Error> {
        let body = AskForToken {
            credentials: self.api_credentials(),
            code: code.to_string(),
        };
        self.execute(RequestDescriptor::post(route::ACCESS_TOKEN).with_body(&body))
            .await
    }

    /// Issues a new token for `user_id`, optionally revoking the old ones.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn renew_token(&self, user_id: i64, revoke_previous: bool) -> Result<Token, Error> {
        let body = AskForTokenRenew {
            credentials: self.api_credentials(),
            user_id,
            revoke_previous,
        };
        self.execute(RequestDescriptor::post(route::RENEW_TOKEN).with_body(&body))
            .await
    }

    /// Requests a short-lived code for the connect webview.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn temporary_code(&self, token: &str) -> Result<TemporaryCode, Error> {
        self.execute(RequestDescriptor::get(route::TEMPORARY_CODE).with_token(token))
            .await
    }

    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn user(&self, token: &str, user: UserRef) -> Result<User, Error> {
        self.execute(RequestDescriptor::get(user_route(user, "")).with_token(token))
            .await
    }

    /// Lists the user's bank accounts with their aggregated balances.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn accounts(&self, token: &str, user: UserRef) -> Result<AccountsResponse, Error> {
        self.execute(RequestDescriptor::get(user_route(user, route::ACCOUNTS)).with_token(token))
            .await
    }

    /// Shows, hides, enables or disables one account.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn update_account(
        &self,
        token: &str,
        user: UserRef,
        account_id: i64,
        update: &UpdateAccount,
    ) -> Result<Account, Error> {
        let route = user_route(user, &format!("{}/{account_id}", route::ACCOUNTS));
        self.execute(
            RequestDescriptor::put(route)
                .with_token(token)
                .with_body(update),
        )
        .await
    }

    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn investments(
        &self,
        token: &str,
        user: UserRef,
        account_id: i64,
    ) -> Result<InvestmentsResponse, Error> {
        let route = user_route(
            user,
            &format!("{}/{account_id}{}", route::ACCOUNTS, route::INVESTMENTS),
        );
        self.execute(RequestDescriptor::get(route).with_token(token))
            .await
    }

    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn connections(
        &self,
        token: &str,
        user: UserRef,
    ) -> Result<ConnectionsResponse, Error> {
        self.execute(
            RequestDescriptor::get(user_route(user, route::CONNECTIONS)).with_token(token),
        )
        .await
    }

    /// Deletes a connection and every account under it.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn delete_connection(
        &self,
        token: &str,
        user: UserRef,
        connection_id: i64,
    ) -> Result<(), Error> {
        let route = user_route(user, &format!("{}/{connection_id}", route::CONNECTIONS));
        self.execute_unit(RequestDescriptor::delete(route).with_token(token))
            .await
    }

    /// Lists the account types known to the provider. Needs no user token.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from the executor.
    pub async fn account_types(&self) -> Result<AccountTypesResponse, Error> {
        self.execute(RequestDescriptor::get(route::ACCOUNT_TYPES))
            .await
    }
}
