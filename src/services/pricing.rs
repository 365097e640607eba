//! Расчёт стоимости покупки и количества мест.

use serde::Serialize;

use crate::models::{AggregatedCounts, TicketCategory};

pub const ADULT_TICKET_PRICE: u64 = 20;
pub const CHILD_TICKET_PRICE: u64 = 10;
pub const INFANT_TICKET_PRICE: u64 = 0;

/// Цена одного билета категории.
pub fn ticket_price(category: TicketCategory) -> u64 {
    match category {
        TicketCategory::Adult => ADULT_TICKET_PRICE,
        TicketCategory::Child => CHILD_TICKET_PRICE,
        TicketCategory::Infant => INFANT_TICKET_PRICE,
    }
}

/// Младенцы бесплатны.
pub fn calculate_purchase_amount(adult: u32, child: u32) -> u64 {
    ADULT_TICKET_PRICE * u64::from(adult) + CHILD_TICKET_PRICE * u64::from(child)
}

/// Младенцы сидят на коленях у взрослых и места не занимают.
pub fn calculate_seat_reservation(adult: u32, child: u32) -> u32 {
    adult.saturating_add(child)
}

/// Итог проверенной покупки: сумма к оплате и число мест для бронирования.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub total_price: u64,
    pub seats_to_reserve: u32,
}

impl PurchaseOutcome {
    pub fn from_counts(counts: &AggregatedCounts) -> Self {
        Self {
            total_price: calculate_purchase_amount(counts.adult, counts.child),
            seats_to_reserve: calculate_seat_reservation(counts.adult, counts.child),
        }
    }
}
