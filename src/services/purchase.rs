//! purchase.rs
//!
//! Оркестратор покупки билетов.
//!
//! Порядок обработки всегда одинаковый:
//! 1.  Проверка идентификатора аккаунта.
//! 2.  Суммирование запросов по категориям.
//! 3.  Проверка правил покупки (лимит, сопровождение взрослым).
//! 4.  Расчёт стоимости и количества мест.
//! 5.  Бронирование мест, затем оплата.
//!
//! Любая ошибка проверки возвращается до обращения к внешним сервисам.
//! Ошибки внешних сервисов пробрасываются без изменений: повторов и
//! компенсации нет, уже забронированные места при сбое оплаты не освобождаются.

use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, error, info, warn};

use crate::error::{PurchaseError, Result};
use crate::models::{AccountId, AggregatedCounts, TicketTypeRequest};
use crate::services::payment::TicketPaymentService;
use crate::services::pricing::PurchaseOutcome;
use crate::services::seats::SeatReservationService;
use crate::services::validation::{
    aggregate, aggregate_raw, validate_account, validate_counts, validate_raw_account,
};

/// Сервис покупки билетов. Состояния между вызовами не хранит.
#[derive(Debug, Clone)]
pub struct TicketService<P, S> {
    payment: P,
    seat_reservation: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment: P, seat_reservation: S) -> Self {
        Self { payment, seat_reservation }
    }

    /// Покупка по уже сконструированным запросам.
    pub fn purchase_tickets(&self, account_id: i64, requests: &[TicketTypeRequest]) -> Result<()> {
        let account = validate_account(account_id).map_err(|e| rejected(account_id, e))?;
        self.complete(account, aggregate(requests))
    }

    /// Покупка по непроверенным данным (например, из JSON): аккаунт может оказаться
    /// чем угодно, элементы запроса разбираются как `{"type": ..., "noOfTickets": ...}`.
    pub fn purchase_tickets_raw(&self, account_id: &Value, requests: &[Value]) -> Result<()> {
        let account = validate_raw_account(account_id).map_err(|e| rejected(account_id, e))?;
        let counts = aggregate_raw(requests).map_err(|e| rejected(account, e))?;
        self.complete(account, counts)
    }

    fn complete(&self, account: AccountId, counts: AggregatedCounts) -> Result<()> {
        debug!(?counts, "Aggregated ticket requests for account {}", account);

        validate_counts(&counts).map_err(|e| rejected(account, e))?;

        let outcome = PurchaseOutcome::from_counts(&counts);
        info!(
            "Purchase accepted: account={}, seats={}, amount={}",
            account, outcome.seats_to_reserve, outcome.total_price
        );

        self.seat_reservation
            .reserve_seat(account, outcome.seats_to_reserve)
            .map_err(|e| {
                error!("Seat reservation failed for account {}: {:?}", account, e);
                PurchaseError::Collaborator(e)
            })?;
        info!("Reserved {} seats for account {}", outcome.seats_to_reserve, account);

        self.payment
            .make_payment(account, outcome.total_price)
            .map_err(|e| {
                error!("Payment failed for account {}: {:?}", account, e);
                PurchaseError::Collaborator(e)
            })?;
        info!("Collected payment of {} for account {}", outcome.total_price, account);

        Ok(())
    }
}

fn rejected(account_id: impl Display, err: PurchaseError) -> PurchaseError {
    warn!("Purchase rejected for account {}: {:?}", account_id, err);
    err
}
