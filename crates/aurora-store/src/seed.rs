use aurora_types::User;

/// Records written on first run.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("u1", "Dave Richards", "dave@mail.com", "+91 8332883854"),
        User::new("u2", "Abhishek Hari", "hari@mail.com", ""),
        User::new("u3", "Nishta Gupta", "nishta@mail.com", ""),
    ]
}
