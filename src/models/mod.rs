pub mod account;
pub mod counts;
pub mod ticket;

pub use account::AccountId;
pub use counts::AggregatedCounts;
pub use ticket::{TicketCategory, TicketTypeRequest};
