//! Social login providers shown on the sign-in screen.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoginProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub hint: &'static str,
}
