use serde::Serialize;

use super::{TicketCategory, TicketTypeRequest};

/// Суммарное количество билетов по категориям в рамках одной покупки.
///
/// Строится за один проход и после этого не меняется.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregatedCounts {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl AggregatedCounts {
    pub fn new(adult: u32, child: u32, infant: u32) -> Self {
        Self { adult, child, infant }
    }

    // При переполнении значение упирается в u32::MAX, дальше сработает лимит билетов
    pub fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a TicketTypeRequest>,
    {
        requests
            .into_iter()
            .fold(Self::default(), |counts, request| counts.with(request))
    }

    fn with(self, request: &TicketTypeRequest) -> Self {
        let n = request.count();
        match request.category() {
            TicketCategory::Adult => Self { adult: self.adult.saturating_add(n), ..self },
            TicketCategory::Child => Self { child: self.child.saturating_add(n), ..self },
            TicketCategory::Infant => Self { infant: self.infant.saturating_add(n), ..self },
        }
    }

    pub fn get(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.adult) + u64::from(self.child) + u64::from(self.infant)
    }
}
