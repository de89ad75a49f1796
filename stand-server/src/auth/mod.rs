//! Authentication Module
//!
//! Nickname accounts with JWT session tokens. There are no passwords;
//! the stand is a trusted-team tool and the token only carries
//! identity so comments and orders are attributed correctly.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
