pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{PurchaseError, Result};
pub use models::{AccountId, AggregatedCounts, TicketCategory, TicketTypeRequest};
pub use services::{PurchaseOutcome, SeatReservationService, TicketPaymentService, TicketService};
