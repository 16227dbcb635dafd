//! User service: registration, login, profile and logout

use std::sync::Arc;

use cm_auth::{
    generate_token, hash_password, verify_password, verify_unknown_user, CurrentUser, UNAUTHORIZED,
};
use cm_contracts::users::{
    CreateUserContract, LoginContract, LoginUser, RegisterUser, UpdateUser, UpdateUserContract,
};
use cm_core::{CoreError, CoreResult};
use cm_db::{CreateUserDto, UpdateUserDto, UserStore};
use cm_models::User;

use crate::base::validate_with;

/// Same message for unknown usernames and wrong passwords
pub const BAD_CREDENTIALS: &str = "Username or password is wrong";

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    token_length: usize,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, token_length: usize) -> Self {
        Self { users, token_length }
    }

    pub async fn register(&self, input: RegisterUser) -> CoreResult<User> {
        let input = input.normalized();
        validate_with(&CreateUserContract, &input)?;

        let (Some(username), Some(password), Some(name)) = (input.username, input.password, input.name)
        else {
            return Err(CoreError::Internal("validated registration is incomplete".into()));
        };

        let user = self
            .users
            .create(CreateUserDto {
                username,
                password: hash_password(&password)?,
                name,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verify credentials and rotate the session token.
    ///
    /// The returned user carries the new token.
    pub async fn login(&self, input: LoginUser) -> CoreResult<User> {
        let input = input.normalized();
        validate_with(&LoginContract, &input)?;

        let username = input.username.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        let verified = match self.users.find_by_username(&username).await? {
            Some(user) => verify_password(&password, &user.password).then_some(user),
            None => {
                verify_unknown_user(&password);
                None
            }
        };
        let Some(user) = verified else {
            tracing::warn!(username = %username, "Login failed");
            return Err(CoreError::unauthorized(BAD_CREDENTIALS));
        };

        let token = generate_token(self.token_length);
        self.users.set_token(user.id, Some(&token)).await?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(User {
            token: Some(token),
            ..user
        })
    }

    pub async fn current(&self, actor: &CurrentUser) -> CoreResult<User> {
        self.users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| CoreError::unauthorized(UNAUTHORIZED))
    }

    /// Update name and/or password. An empty update returns the profile unchanged.
    /// The session token is kept.
    pub async fn update(&self, actor: &CurrentUser, input: UpdateUser) -> CoreResult<User> {
        let input = input.normalized();
        validate_with(&UpdateUserContract, &input)?;

        if input.is_empty() {
            return self.current(actor).await;
        }

        let password = match input.password {
            Some(plain) => Some(hash_password(&plain)?),
            None => None,
        };

        let user = self
            .users
            .update(
                actor.id,
                UpdateUserDto {
                    name: input.name,
                    password,
                },
            )
            .await?;

        tracing::debug!(user_id = user.id, "User profile updated");
        Ok(user)
    }

    pub async fn logout(&self, actor: &CurrentUser) -> CoreResult<bool> {
        self.users.set_token(actor.id, None).await?;
        tracing::debug!(user_id = actor.id, "User logged out");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_db::MemoryStore;

    fn service() -> (UserService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (UserService::new(store.clone(), 64), store)
    }

    fn registration(username: &str) -> RegisterUser {
        RegisterUser {
            username: Some(username.to_string()),
            password: Some("rahasia".to_string()),
            name: Some("Sagara".to_string()),
        }
    }

    fn login(username: &str, password: &str) -> LoginUser {
        LoginUser {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let (service, _) = service();
        let user = service.register(registration("SagAsh")).await.unwrap();
        assert_eq!(user.username, "SagAsh");
        assert_ne!(user.password, "rahasia");
        assert!(verify_password("rahasia", &user.password));
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let (service, _) = service();
        service.register(registration("SagAsh")).await.unwrap();

        let err = service.register(registration("SagAsh")).await.unwrap_err();
        let errors = err.client_errors();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            errors.get("username"),
            Some(&vec!["Username already registered".to_string()])
        );
    }

    #[tokio::test]
    async fn test_register_validation() {
        let (service, _) = service();
        let err = service.register(RegisterUser::default()).await.unwrap_err();
        match err {
            CoreError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let (service, store) = service();
        service.register(registration("SagAsh")).await.unwrap();

        let user = service.login(login("SagAsh", "rahasia")).await.unwrap();
        let token = user.token.clone().unwrap();
        assert_eq!(token.len(), 64);

        let stored = store.find_by_token(&token).await.unwrap();
        assert_eq!(stored.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (service, store) = service();
        let registered = service.register(registration("SagAsh")).await.unwrap();

        let wrong_user = service.login(login("nobody", "rahasia")).await.unwrap_err();
        let wrong_pass = service.login(login("SagAsh", "salah")).await.unwrap_err();

        assert_eq!(wrong_user.status_code(), 401);
        assert_eq!(wrong_user.client_errors(), wrong_pass.client_errors());

        let stored = store.find_by_id(registered.id).await.unwrap().unwrap();
        assert!(stored.token.is_none());
    }

    #[tokio::test]
    async fn test_update_profile() {
        let (service, _) = service();
        let user = service.register(registration("SagAsh")).await.unwrap();
        let actor = CurrentUser::from(&user);

        let updated = service
            .update(
                &actor,
                UpdateUser {
                    name: Some("Renamed".to_string()),
                    password: Some("baru".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Renamed");

        assert!(service.login(login("SagAsh", "baru")).await.is_ok());
        assert!(service.login(login("SagAsh", "rahasia")).await.is_err());
    }

    #[tokio::test]
    async fn test_password_update_keeps_session() {
        let (service, store) = service();
        service.register(registration("SagAsh")).await.unwrap();
        let user = service.login(login("SagAsh", "rahasia")).await.unwrap();
        let token = user.token.clone().unwrap();

        service
            .update(
                &CurrentUser::from(&user),
                UpdateUser {
                    name: None,
                    password: Some("baru".to_string()),
                },
            )
            .await
            .unwrap();

        let still_signed_in = store.find_by_token(&token).await.unwrap();
        assert_eq!(still_signed_in.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_password_whitespace_is_significant() {
        let (service, _) = service();
        service
            .register(RegisterUser {
                password: Some("  rahasia  ".to_string()),
                ..registration("SagAsh")
            })
            .await
            .unwrap();

        assert!(service.login(login("SagAsh", "rahasia")).await.is_err());
        assert!(service.login(login("SagAsh", "  rahasia  ")).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_update_is_noop() {
        let (service, _) = service();
        let user = service.register(registration("SagAsh")).await.unwrap();
        let actor = CurrentUser::from(&user);

        let same = service.update(&actor, UpdateUser::default()).await.unwrap();
        assert_eq!(same.name, user.name);
        assert_eq!(same.password, user.password);
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let (service, store) = service();
        service.register(registration("SagAsh")).await.unwrap();
        let user = service.login(login("SagAsh", "rahasia")).await.unwrap();
        let token = user.token.clone().unwrap();

        assert!(service.logout(&CurrentUser::from(&user)).await.unwrap());
        assert!(store.find_by_token(&token).await.unwrap().is_none());
    }
}
