pub mod common;
pub mod form;
pub mod profile;
pub mod users;

pub use common::{NotificationViewModel, Severity};
pub use form::{FieldDisplay, FieldViewModel, FormViewModel};
pub use profile::{ProfileHeaderViewModel, Tab};
pub use users::{UserRowViewModel, UsersListViewModel};
