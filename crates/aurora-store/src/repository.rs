use aurora_types::{NewUser, User, generate_user_id};
use tracing::info;

use crate::Result;
use crate::seed::demo_users;
use crate::user_store::UserStore;

/// CRUD over the user collection.
///
/// Every call goes through the store: reads re-load the blob, writes
/// re-serialize the whole collection. Nothing is atomic across calls.
pub struct UserRepository {
    store: UserStore,
}

impl UserRepository {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut UserStore {
        &mut self.store
    }

    /// The stored collection, seeding the demo records on first use.
    pub fn list(&mut self) -> Result<Vec<User>> {
        if let Some(users) = self.store.load()? {
            return Ok(users);
        }

        let demo = demo_users();
        self.store.save(&demo)?;
        info!(count = demo.len(), "seeded demo users");
        Ok(demo)
    }

    pub fn get_by_id(&mut self, id: &str) -> Result<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.id == id))
    }

    /// Replace in place on a matching id, otherwise insert as the newest record.
    pub fn upsert(&mut self, user: User) -> Result<()> {
        let mut users = self.list()?;
        match users.iter().position(|u| u.id == user.id) {
            Some(index) => {
                info!(id = %user.id, "updated user");
                users[index] = user;
            }
            None => {
                info!(id = %user.id, "inserted user");
                users.insert(0, user);
            }
        }
        self.store.save(&users)
    }

    /// Removing an unknown id still rewrites the (unchanged) collection.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let mut users = self.list()?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() != before {
            info!(id, "deleted user");
        }
        self.store.save(&users)
    }

    /// Validate a draft, give it a fresh id, and store it as the newest record.
    pub fn add(&mut self, draft: NewUser) -> Result<User> {
        draft.validate()?;
        let existing = self.list()?;
        let id = generate_user_id(existing.iter().map(|u| u.id.as_str()));
        let user = draft.into_user(id)?;
        self.upsert(user.clone())?;
        Ok(user)
    }
}
