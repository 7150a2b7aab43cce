use aurora_types::User;

use crate::presentation::view_models::{UserRowViewModel, UsersListViewModel};

pub fn build_users_list(users: &[User]) -> UsersListViewModel {
    let rows = users
        .iter()
        .enumerate()
        .map(|(i, user)| UserRowViewModel {
            position: i + 1,
            id: user.id.clone(),
            name: user.name.clone(),
            email: non_empty(&user.email),
        })
        .collect();

    UsersListViewModel { rows }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_collection_order() {
        let users = vec![
            User::new("u9", "Grace Hopper", "grace@navy.mil", ""),
            User::new("u1", "Dave Richards", "", ""),
        ];
        let vm = build_users_list(&users);

        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].position, 1);
        assert_eq!(vm.rows[0].id, "u9");
        assert_eq!(vm.rows[0].email.as_deref(), Some("grace@navy.mil"));
        assert_eq!(vm.rows[1].position, 2);
        assert_eq!(vm.rows[1].email, None);
    }
}
