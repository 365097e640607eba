//! Интерфейс внешней системы бронирования мест.

use std::sync::Arc;

use crate::models::AccountId;

/// Бронирование мест под аккаунт. Вызывается раньше оплаты.
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> anyhow::Result<()>;
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
