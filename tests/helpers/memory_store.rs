// In-memory store doubles.
//
// They follow the MySQL stores' contract: sequential ids from 1, UNIQUE
// mobile numbers, upsert on save with an id, silent delete of missing ids.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Barrier;
use storefront::auth::{NewUser, User, UserStore};
use storefront::core::{AppError, Repository, Result};
use storefront::products::Product;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a user directly, as the out-of-band admin tooling would
    pub fn seed(&self, user: NewUser) -> User {
        let mut users = self.users.lock().unwrap();
        let user = user.with_id(users.len() as i64 + 1);
        users.push(user.clone());
        user
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.mobile.as_deref() == Some(mobile))
            .cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(mobile) = user.mobile.as_deref() {
            if users.iter().any(|u| u.mobile.as_deref() == Some(mobile)) {
                return Err(AppError::conflict("User with this mobile already exists"));
            }
        }

        let user = user.with_id(users.len() as i64 + 1);
        users.push(user.clone());
        Ok(user)
    }
}

/// Simulates the losing side of a concurrent first login: the first
/// `stale_reads` mobile lookups miss even when the row exists.
pub struct StaleReadUserStore {
    inner: InMemoryUserStore,
    stale_reads: AtomicUsize,
}

impl StaleReadUserStore {
    pub fn new(inner: InMemoryUserStore, stale_reads: usize) -> Self {
        Self {
            inner,
            stale_reads: AtomicUsize::new(stale_reads),
        }
    }

    pub fn inner(&self) -> &InMemoryUserStore {
        &self.inner
    }
}

#[async_trait]
impl UserStore for StaleReadUserStore {
    async fn find_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.inner
            .find_by_username_and_password(username, password)
            .await
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>> {
        let stale = self
            .stale_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(None);
        }
        self.inner.find_by_mobile(mobile).await
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        self.inner.save(user).await
    }
}

/// Holds the first `racers` mobile lookups at a barrier after they have
/// read, so every racer sees the number as unregistered and all of them
/// attempt the insert.
pub struct RacingUserStore {
    inner: InMemoryUserStore,
    gate: Barrier,
    gated: AtomicUsize,
}

impl RacingUserStore {
    pub fn new(racers: usize) -> Self {
        Self {
            inner: InMemoryUserStore::new(),
            gate: Barrier::new(racers),
            gated: AtomicUsize::new(racers),
        }
    }

    pub fn inner(&self) -> &InMemoryUserStore {
        &self.inner
    }
}

#[async_trait]
impl UserStore for RacingUserStore {
    async fn find_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.inner
            .find_by_username_and_password(username, password)
            .await
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>> {
        let found = self.inner.find_by_mobile(mobile).await?;
        let first_round = self
            .gated
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if first_round {
            self.gate.wait().await;
        }
        Ok(found)
    }

    async fn save(&self, user: NewUser) -> Result<User> {
        tokio::task::yield_now().await;
        self.inner.save(user).await
    }
}

#[derive(Default)]
pub struct InMemoryProductStore {
    state: Mutex<ProductTable>,
}

#[derive(Default)]
struct ProductTable {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<Product> {
        self.state.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl Repository<Product, i64> for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let mut table = self.state.lock().unwrap();
        let id = match product.id {
            Some(id) => id,
            None => table.next_id.max(table.rows.keys().last().copied().unwrap_or(0)) + 1,
        };
        table.next_id = table.next_id.max(id);

        let product = product.with_id(id);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.state.lock().unwrap().rows.remove(&id);
        Ok(())
    }
}

/// Product store whose every call fails like a lost database connection
pub struct UnavailableProductStore;

#[async_trait]
impl Repository<Product, i64> for UnavailableProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn save(&self, _product: Product) -> Result<Product> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
