pub mod admin;
pub mod lookup;
pub mod magic_link;
pub mod orgs;
pub mod session;
