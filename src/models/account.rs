use serde::Serialize;
use std::fmt;

use crate::error::PurchaseError;

/// Идентификатор аккаунта покупателя. Любое неотрицательное целое число.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u64::try_from(id)
            .map(AccountId)
            .map_err(|_| PurchaseError::InvalidAccount)
    }
}

// Принимаем только целые JSON-числа >= 0: null, строки, объекты, массивы и дроби отклоняются
impl TryFrom<&serde_json::Value> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        value
            .as_u64()
            .map(AccountId)
            .ok_or(PurchaseError::InvalidAccount)
    }
}
