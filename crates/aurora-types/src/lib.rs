pub mod error;
mod id;
mod lenient;
pub mod profile;
pub mod user;
pub mod validation;

pub use error::{Error, Result};
pub use id::{UserId, generate_user_id, generate_user_id_at};
pub use profile::{BasicInfo, Education, Experience, ExperienceBracket, Gender, Profile};
pub use user::{User, users_from_json, users_to_json};
pub use validation::{MIN_NAME_LEN, NewUser, ValidationError, is_valid_email};
