use crate::domain::transaction::User;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn get_by_id(&self, user_id: i64) -> anyhow::Result<Option<Arc<User>>>;
}

#[derive(Clone, Default)]
pub struct InMemoryUsersRepo {
    users: Arc<RwLock<HashMap<i64, Arc<User>>>>,
}

impl InMemoryUsersRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two demo accounts, 1002 and 1032.
    pub fn seeded() -> Self {
        let users = [
            User {
                id: 1002,
                first_name: "Jon".to_string(),
                last_name: "Do".to_string(),
                email: "jon.do@example.com".to_string(),
            },
            User {
                id: 1032,
                first_name: "Mary".to_string(),
                last_name: "Josef".to_string(),
                email: "mary.josef@example.com".to_string(),
            },
        ];

        Self {
            users: Arc::new(RwLock::new(
                users.into_iter().map(|u| (u.id, Arc::new(u))).collect(),
            )),
        }
    }

    pub async fn insert(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.users.write().await.insert(user.id, user.clone());
        user
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUsersRepo {
    async fn get_by_id(&self, user_id: i64) -> anyhow::Result<Option<Arc<User>>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}
