use aurora_types::User;

use super::users::non_empty;
use crate::presentation::view_models::ProfileHeaderViewModel;

pub fn build_profile_header(user: &User) -> ProfileHeaderViewModel {
    ProfileHeaderViewModel {
        name: user.name.clone(),
        email: non_empty(&user.email),
        phone: non_empty(&user.phone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_contact_fields_are_none() {
        let header = build_profile_header(&User::new("u2", "Abhishek Hari", "hari@mail.com", ""));
        assert_eq!(header.name, "Abhishek Hari");
        assert_eq!(header.email.as_deref(), Some("hari@mail.com"));
        assert_eq!(header.phone, None);
    }
}
