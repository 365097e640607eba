pub mod payment;
pub mod pricing;
pub mod purchase;
pub mod seats;
pub mod validation;

pub use payment::TicketPaymentService;
pub use pricing::PurchaseOutcome;
pub use purchase::TicketService;
pub use seats::SeatReservationService;
