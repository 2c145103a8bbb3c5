use serde::{Deserialize, Serialize};
use services::Actor;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub admin: bool,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The lecturer this request acts for.
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.0.sub,
            admin: self.0.admin,
        }
    }
}
