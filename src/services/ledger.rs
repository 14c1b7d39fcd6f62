//! Ledger service
//!
//! Holds the incomes and expenses of one session together with running
//! totals. The totals are adjusted on every add, edit and delete rather than
//! recomputed, and always equal the sum over the surviving records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TallyError, TallyResult};
use crate::models::{ExpenseCategory, Money, Transaction, TransactionId, TransactionKind};

/// Aggregate totals over the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
}

impl Totals {
    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income - self.expenses
    }

    /// Compute totals from scratch
    ///
    /// # Errors
    ///
    /// Returns a validation error if a total no longer fits in [`Money`].
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a Transaction>,
    ) -> TallyResult<Self> {
        records
            .into_iter()
            .try_fold(Self::default(), |totals, txn| totals.with(txn))
    }

    /// Totals with `txn` added
    fn with(self, txn: &Transaction) -> TallyResult<Self> {
        let mut next = self;
        let total = match txn.kind {
            TransactionKind::Income => &mut next.income,
            TransactionKind::Expense => &mut next.expenses,
        };
        *total = total
            .checked_add(txn.amount)
            .ok_or_else(|| overflow(txn))?;
        Ok(next)
    }

    /// Totals with `txn` taken away
    fn without(self, txn: &Transaction) -> TallyResult<Self> {
        let mut next = self;
        let total = match txn.kind {
            TransactionKind::Income => &mut next.income,
            TransactionKind::Expense => &mut next.expenses,
        };
        *total = total
            .checked_sub(txn.amount)
            .ok_or_else(|| overflow(txn))?;
        Ok(next)
    }
}

fn overflow(txn: &Transaction) -> TallyError {
    TallyError::Validation(format!(
        "Record of {} takes the ledger's {} total out of range",
        txn.amount,
        txn.kind.to_string().to_lowercase()
    ))
}

/// Changes to apply to an existing record
///
/// Fields left as `None` keep their current value. The timestamp cannot be
/// changed.
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<ExpenseCategory>,
}

/// Serializable ledger contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    pub transactions: Vec<Transaction>,
}

/// The income/expense ledger
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<Transaction>,
    totals: Totals,
    audit: Option<AuditLogger>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from stored records
    pub fn from_data(data: LedgerData) -> TallyResult<Self> {
        let mut ledger = Self::new();
        ledger.replace_all(data.transactions)?;
        Ok(ledger)
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Snapshot of the records for persistence
    pub fn to_data(&self) -> LedgerData {
        LedgerData {
            transactions: self.records.clone(),
        }
    }

    /// Record a new income
    pub fn add_income(
        &mut self,
        amount: Money,
        description: &str,
        timestamp: NaiveDateTime,
    ) -> TallyResult<Transaction> {
        self.insert(Transaction::income(amount, description.trim(), timestamp))
    }

    /// Record a new expense
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: &str,
        category: ExpenseCategory,
        timestamp: NaiveDateTime,
    ) -> TallyResult<Transaction> {
        self.insert(Transaction::expense(
            amount,
            description.trim(),
            category,
            timestamp,
        ))
    }

    fn insert(&mut self, txn: Transaction) -> TallyResult<Transaction> {
        txn.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.totals = self.totals.with(&txn)?;
        self.records.push(txn.clone());

        self.log(|| {
            AuditEntry::create(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &txn,
            )
        })?;

        Ok(txn)
    }

    /// Edit a record in place, keeping its timestamp
    pub fn update(
        &mut self,
        id: TransactionId,
        update: TransactionUpdate,
    ) -> TallyResult<Transaction> {
        let index = self.index_of(id)?;
        let before = self.records[index].clone();

        let mut txn = before.clone();
        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(description) = update.description {
            txn.description = description.trim().to_string();
        }
        if let Some(category) = update.category {
            txn.category = Some(category);
        }

        txn.validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        self.totals = self.totals.without(&before)?.with(&txn)?;
        self.records[index] = txn.clone();

        self.log(|| {
            AuditEntry::update(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &before,
                &txn,
            )
        })?;

        Ok(txn)
    }

    /// Remove a record
    pub fn delete(&mut self, id: TransactionId) -> TallyResult<Transaction> {
        let index = self.index_of(id)?;
        self.totals = self.totals.without(&self.records[index])?;
        let txn = self.records.remove(index);

        self.log(|| {
            AuditEntry::delete(
                EntityType::Transaction,
                txn.id.to_string(),
                Some(txn.description.clone()),
                &txn,
            )
        })?;

        Ok(txn)
    }

    /// Replace the whole ledger, recomputing the totals
    ///
    /// Every record is validated first; on error the ledger is unchanged.
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> TallyResult<()> {
        for txn in &records {
            txn.validate().map_err(|e| {
                TallyError::Validation(format!("{} ({}): {}", txn.id, txn.description, e))
            })?;
        }

        self.totals = Totals::from_records(&records)?;
        self.records = records;
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Find a record by full UUID, `txn-` short form or hex prefix
    pub fn find(&self, identifier: &str) -> TallyResult<&Transaction> {
        let mut matches = self.records.iter().filter(|t| t.id.matches(identifier));
        let first = matches
            .next()
            .ok_or_else(|| TallyError::transaction_not_found(identifier))?;

        if matches.next().is_some() {
            return Err(TallyError::Validation(format!(
                "'{}' matches more than one record; use a longer id",
                identifier
            )));
        }

        Ok(first)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.records
    }

    pub fn incomes(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().filter(|t| t.is_income())
    }

    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter().filter(|t| t.is_expense())
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    fn index_of(&self, id: TransactionId) -> TallyResult<usize> {
        self.records
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TallyError::transaction_not_found(id.to_string()))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> TallyResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}
