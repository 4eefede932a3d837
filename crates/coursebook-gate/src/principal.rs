use async_trait::async_trait;
use coursebook_models::{User, UserId};

/// An authenticated identity, valid for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// A principal together with its stored bcrypt hash.
#[derive(Clone)]
pub struct StoredPrincipal {
    pub principal: Principal,
    pub password_hash: String,
}

/// Read-only principal lookup the gate authenticates against.
#[async_trait]
pub trait PrincipalSource: Send + Sync {
    /// Exact, case-sensitive match on email. At most one principal matches.
    async fn principal_by_email(&self, email: &str) -> anyhow::Result<Option<StoredPrincipal>>;
}
