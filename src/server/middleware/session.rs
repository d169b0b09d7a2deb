//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys of
//! its own concern, so key names and value types live in one place:
//! - `AuthSession` - Id of the signed-in user
//! - `DashboardSession` - One-time dashboard welcome flag

use tower_sessions::Session;

use crate::server::error::AppError;

pub(crate) const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_DASHBOARD_VISITED: &str = "dashboard:visited";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the signed-in user's id in the session.
    ///
    /// The session id is cycled first so an id issued before login cannot be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the signed-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is signed in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session, including dashboard flags.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Dashboard session state.
pub struct DashboardSession<'a> {
    session: &'a Session,
}

impl<'a> DashboardSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the dashboard as visited and reports whether this is the first visit.
    ///
    /// # Returns
    /// - `Ok(true)` - First visit in this session; the welcome message should be shown
    /// - `Ok(false)` - The dashboard was already visited
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session
    pub async fn take_first_visit(&self) -> Result<bool, AppError> {
        let visited = self
            .session
            .get::<bool>(SESSION_DASHBOARD_VISITED)
            .await?
            .unwrap_or(false);

        if !visited {
            self.session.insert(SESSION_DASHBOARD_VISITED, true).await?;
        }

        Ok(!visited)
    }
}
