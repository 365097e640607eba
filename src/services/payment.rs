//! payment.rs
//!
//! Интерфейс внешнего платёжного шлюза.
//!
//! Сам шлюз находится вне этого крейта: `TicketService` только передаёт ему
//! аккаунт и итоговую сумму. Любая ошибка шлюза возвращается вызывающему коду
//! без повторов и без отката уже выполненного бронирования мест.

use std::sync::Arc;

use crate::models::AccountId;

/// Списание оплаты за билеты.
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}
