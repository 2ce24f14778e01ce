use actix_session::Session;

pub const USER_ID_KEY: &str = "user_id";

/// The id stored at login, if this request carries a live session.
pub fn current_user_id(session: &Session) -> Option<i32> {
    session.get::<i32>(USER_ID_KEY).ok().flatten()
}
