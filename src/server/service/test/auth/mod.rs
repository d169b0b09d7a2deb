use chrono::{Duration, Utc};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    mail::MailService,
    model::user::{unique_user_error, RegisterUserParam, User, EMAIL_TAKEN, USERNAME_TAKEN},
    service::{auth::AuthService, test::RecordingTransport},
    util::token::encode_reset_token,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod token;

fn register_param(username: &str, email: &str) -> RegisterUserParam {
    RegisterUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
    }
}
