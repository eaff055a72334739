//! In-memory fixture store.
//!
//! Stands in for a user database. Built once at startup and shared read-only
//! by every request.

use std::sync::Arc;

use jobboard_domain::id::UserId;
use jobboard_domain::provider::LoginProvider;
use jobboard_domain::role::AuthRole;
use jobboard_domain::user::{Membership, User};

use crate::domain::repository::UserRepository;
use crate::error::ApiError;

pub static LOGIN_PROVIDERS: [LoginProvider; 2] = [
    LoginProvider {
        id: "google",
        name: "Google",
        hint: "Use your Google Workspace account",
    },
    LoginProvider {
        id: "linkedin",
        name: "LinkedIn",
        hint: "Great for company admins",
    },
];

fn avatar(seed: &str) -> Option<String> {
    Some(format!(
        "https://api.dicebear.com/9.x/notionists/svg?seed={seed}"
    ))
}

fn membership(company_id: &str, company_name: &str, org_role: &str) -> Membership {
    Membership {
        company_id: company_id.to_owned(),
        company_name: company_name.to_owned(),
        org_role: org_role.to_owned(),
    }
}

/// The demo accounts, one per role. The first entry is the default identity.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId::from("user-basic"),
            email: "tyler@demo.dev".to_owned(),
            first_name: "Tyler".to_owned(),
            last_name: "Applicant".to_owned(),
            avatar_url: avatar("tyler"),
            role: AuthRole::User,
            memberships: vec![],
        },
        User {
            id: UserId::from("user-org"),
            email: "mia@cobalt.ai".to_owned(),
            first_name: "Mia".to_owned(),
            last_name: "Operator".to_owned(),
            avatar_url: avatar("mia"),
            role: AuthRole::OrgUser,
            memberships: vec![
                membership("cobalt", "Cobalt Robotics", "OWNER"),
                membership("acme", "Acme Corp", "EDITOR"),
            ],
        },
        User {
            id: UserId::from("user-admin"),
            email: "kim@jobboard.io".to_owned(),
            first_name: "Kim".to_owned(),
            last_name: "Root".to_owned(),
            avatar_url: avatar("kim"),
            role: AuthRole::Admin,
            memberships: vec![membership("job-board", "Job Board HQ", "ADMIN")],
        },
    ]
}

/// Fixture-backed [`UserRepository`]. Cloning shares the same records.
#[derive(Debug, Clone)]
pub struct FixtureUserRepository {
    users: Arc<[User]>,
}

impl FixtureUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// Repository over [`seed_users`].
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn find(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users.iter().find(|u| pred(u)).cloned()
    }
}

impl UserRepository for FixtureUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        Ok(self.find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.find(|u| u.has_email(email)))
    }

    async fn find_by_role(&self, role: AuthRole) -> Result<Option<User>, ApiError> {
        Ok(self.find(|u| u.role == role))
    }

    async fn first(&self) -> Result<Option<User>, ApiError> {
        Ok(self.users.first().cloned())
    }
}
