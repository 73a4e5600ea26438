use crate::domain::transaction::{PaymentTransaction, TransactionStatus, User};
use crate::service::reference::{random_string, TRANSACTION_REF_LEN};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered transaction collection, most recent first.
///
/// `slice(start, end)` and `count()` see the logical order: index 0 is the
/// last appended transaction.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    async fn append(&self, transaction: PaymentTransaction) -> anyhow::Result<()>;

    async fn slice(&self, start: usize, end: usize) -> anyhow::Result<Vec<PaymentTransaction>>;

    async fn count(&self) -> anyhow::Result<usize>;
}

/// Append-only log; newest entries live at the back of the vector and are
/// read in reverse.
#[derive(Clone, Default)]
pub struct InMemoryTransactionsRepo {
    log: Arc<RwLock<Vec<PaymentTransaction>>>,
}

impl InMemoryTransactionsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two settled historical transactions owned by the given users; the
    /// first one is listed first.
    pub fn seeded(first: Arc<User>, second: Arc<User>) -> Self {
        let now = Utc::now();
        let log = vec![
            PaymentTransaction {
                transaction_id: random_string(TRANSACTION_REF_LEN),
                user: second,
                amount: Decimal::new(12000, 2),
                currency: "USD".to_string(),
                merchant_fee: Decimal::new(135, 2),
                status: TransactionStatus::Success,
                txn_date: now,
            },
            PaymentTransaction {
                transaction_id: random_string(TRANSACTION_REF_LEN),
                user: first,
                amount: Decimal::new(1000, 2),
                currency: "ETB".to_string(),
                merchant_fee: Decimal::new(35, 2),
                status: TransactionStatus::Success,
                txn_date: now,
            },
        ];

        Self {
            log: Arc::new(RwLock::new(log)),
        }
    }
}

#[async_trait::async_trait]
impl TransactionStore for InMemoryTransactionsRepo {
    async fn append(&self, transaction: PaymentTransaction) -> anyhow::Result<()> {
        self.log.write().await.push(transaction);
        Ok(())
    }

    async fn slice(&self, start: usize, end: usize) -> anyhow::Result<Vec<PaymentTransaction>> {
        let log = self.log.read().await;
        let end = end.min(log.len());
        if start >= end {
            return Ok(Vec::new());
        }

        Ok(log.iter().rev().skip(start).take(end - start).cloned().collect())
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.log.read().await.len())
    }
}
