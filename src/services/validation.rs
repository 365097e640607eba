//! Проверка аккаунта и правил покупки.
//!
//! Правила применяются в фиксированном порядке, побеждает первое нарушенное:
//! 1. ни одного билета;
//! 2. больше `MAX_TICKETS_PER_PURCHASE` билетов;
//! 3. младенцев больше, чем взрослых;
//! 4. дети или младенцы без взрослого.
//!
//! Из-за порядка запрос только с младенцами получает `UnsupervisedInfant`,
//! а не `NoAdultPresent`.

use serde_json::Value;

use crate::error::{PurchaseError, Result};
use crate::models::{AccountId, AggregatedCounts, TicketTypeRequest};

pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

pub fn validate_account(account_id: i64) -> Result<AccountId> {
    AccountId::try_from(account_id)
}

pub fn validate_raw_account(account_id: &Value) -> Result<AccountId> {
    AccountId::try_from(account_id)
}

pub fn aggregate(requests: &[TicketTypeRequest]) -> AggregatedCounts {
    AggregatedCounts::from_requests(requests)
}

/// Разбирает каждый элемент как `TicketTypeRequest` и суммирует их.
/// Первый некорректный элемент прерывает агрегацию.
pub fn aggregate_raw(requests: &[Value]) -> Result<AggregatedCounts> {
    let parsed = requests
        .iter()
        .map(TicketTypeRequest::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(AggregatedCounts::from_requests(&parsed))
}

pub fn validate_counts(counts: &AggregatedCounts) -> Result<()> {
    let total = counts.total();

    if total == 0 {
        return Err(PurchaseError::NoTickets);
    }

    if total > MAX_TICKETS_PER_PURCHASE {
        return Err(PurchaseError::TooManyTickets);
    }

    if counts.infant > counts.adult {
        return Err(PurchaseError::UnsupervisedInfant);
    }

    if counts.adult == 0 {
        return Err(PurchaseError::NoAdultPresent);
    }

    Ok(())
}
