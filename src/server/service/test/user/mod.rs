use serde_json::json;

use crate::server::{
    error::AppError,
    model::{pagination::PageRequest, user::User},
    service::{test::body, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
