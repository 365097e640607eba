use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::PurchaseError;

/// Категория билета.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Infant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Регистр не важен: "adult", "ADULT", "Adult"
impl FromStr for TicketCategory {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PurchaseError::invalid_ticket_type(format!("unknown ticket type '{}'", s)))
    }
}

/// Одна строка запроса на покупку: категория и количество билетов.
///
/// Значение неизменяемо. Проверка выполняется при создании, поэтому
/// некорректный запрос не может дойти до валидатора.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    category: TicketCategory,
    #[serde(rename = "noOfTickets")]
    count: u32,
}

impl TicketTypeRequest {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    /// Создаёт запрос из непроверенных данных (строковая категория, знаковое количество).
    pub fn parse(category: &str, count: i64) -> Result<Self, PurchaseError> {
        let category = category.parse::<TicketCategory>()?;
        let count = u32::try_from(count).map_err(|_| {
            PurchaseError::invalid_ticket_type(format!("invalid number of tickets {}", count))
        })?;
        Ok(Self::new(category, count))
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

// Форма запроса "на проводе": {"type": "ADULT", "noOfTickets": 2}
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
struct RawTicketTypeRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    ticket_type: String,
    #[serde(rename = "noOfTickets")]
    #[validate(range(min = 0))]
    no_of_tickets: i64,
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = PurchaseError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        raw.validate()
            .map_err(|e| PurchaseError::invalid_ticket_type(e.to_string()))?;
        TicketTypeRequest::parse(&raw.ticket_type, raw.no_of_tickets)
    }
}

impl TryFrom<&serde_json::Value> for TicketTypeRequest {
    type Error = PurchaseError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        TicketTypeRequest::deserialize(value)
            .map_err(|e| PurchaseError::invalid_ticket_type(e.to_string()))
    }
}
