//! Ошибки покупки билетов.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Причины, по которым покупка билетов может быть отклонена.
///
/// Все варианты, кроме `Collaborator`, возникают до обращения к внешним
/// сервисам, поэтому при них ни бронирование мест, ни оплата не выполняются.
#[derive(Error, Debug)]
pub enum PurchaseError {
    #[error("Your account details are invalid.")]
    InvalidAccount,

    /// Элемент запроса не является корректным `TicketTypeRequest`.
    #[error("Please request valid ticket types.")]
    InvalidTicketType { reason: String },

    #[error("You have not purchased any tickets.")]
    NoTickets,

    #[error("You are not permitted to request more than 20 tickets.")]
    TooManyTickets,

    #[error("Every infant must be supervised by an adult.")]
    UnsupervisedInfant,

    #[error("Children/infants cannot book without an adult.")]
    NoAdultPresent,

    /// Сбой внешнего сервиса (бронирование мест или оплата), передаётся как есть.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl PurchaseError {
    pub(crate) fn invalid_ticket_type(reason: impl Into<String>) -> Self {
        PurchaseError::InvalidTicketType { reason: reason.into() }
    }

    /// `true`, если покупка отклонена проверкой, а не внешним сервисом.
    pub fn is_validation(&self) -> bool {
        !matches!(self, PurchaseError::Collaborator(_))
    }
}
