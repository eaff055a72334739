mod helpers;

mod me_test;
mod orgs_test;
mod session_test;
