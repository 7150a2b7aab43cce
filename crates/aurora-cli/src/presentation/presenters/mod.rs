//! Pure functions that turn domain records into view models.

pub mod profile;
pub mod users;

pub use profile::build_profile_header;
pub use users::build_users_list;
