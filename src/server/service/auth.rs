//! Authentication service layer.
//!
//! This module contains business logic for account registration and credential
//! login. Passwords are hashed with argon2id and only the PHC hash string ever
//! reaches the database; session handling stays in the controllers.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
    },
};

/// Service for account registration and credential verification.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Account created
    /// - `Err(Error::ValidationError)` - Email, password, or display name out of bounds
    /// - `Err(Error::AuthError(EmailTaken))` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, registration: RegisterDto) -> Result<UserDto, Error> {
        validate_registration(&registration)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&registration.email).await?.is_some() {
            return Err(Error::AuthError(AuthError::EmailTaken(registration.email)));
        }

        let password_hash = hash_password(&registration.password)?;
        let user = user_repo
            .create(registration.email, password_hash, registration.display_name)
            .await?;

        Ok(user.into())
    }

    /// Verifies a credential pair against the stored hash.
    ///
    /// An unknown email and a wrong password produce the same error, so the
    /// response never reveals whether an account exists.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials valid
    /// - `Err(Error::AuthError(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, login: LoginDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.get_by_email(&login.email).await? {
            Some(user) => user,
            None => return Err(Error::AuthError(AuthError::InvalidCredentials)),
        };

        verify_password(&login.password, &user.password_hash)?;

        Ok(user.into())
    }
}

fn validate_registration(registration: &RegisterDto) -> Result<(), Error> {
    let email_length = registration.email.chars().count();
    if !(3..=254).contains(&email_length) || !registration.email.contains('@') {
        return Err(Error::ValidationError(
            "A valid email address is required".to_string(),
        ));
    }

    let password_length = registration.password.chars().count();
    if !(8..=128).contains(&password_length) {
        return Err(Error::ValidationError(
            "Password must be between 8 and 128 characters".to_string(),
        ));
    }

    let display_name_length = registration.display_name.chars().count();
    if !(2..=64).contains(&display_name_length) {
        return Err(Error::ValidationError(
            "Display name must be between 2 and 64 characters".to_string(),
        ));
    }

    Ok(())
}

fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::AuthError(AuthError::PasswordHash(e.to_string())))?
        .to_string();

    Ok(password_hash)
}

fn verify_password(password: &str, password_hash: &str) -> Result<(), Error> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| Error::AuthError(AuthError::PasswordHash(e.to_string())))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(()),
        Err(argon2::password_hash::Error::Password) => {
            Err(Error::AuthError(AuthError::InvalidCredentials))
        }
        Err(e) => Err(Error::AuthError(AuthError::PasswordHash(e.to_string()))),
    }
}
