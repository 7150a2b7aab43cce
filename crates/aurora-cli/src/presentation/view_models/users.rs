use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsersListViewModel {
    pub rows: Vec<UserRowViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRowViewModel {
    /// 1-based position in the collection.
    pub position: usize,
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}
