#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ticket_service::config::Config;
use ticket_service::{AccountId, SeatReservationService, TicketPaymentService, TicketService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ReserveSeat { account: u64, seats: u32 },
    MakePayment { account: u64, amount: u64 },
}

/// Общий журнал вызовов: оба двойника пишут в него, чтобы проверять порядок.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }
}

#[derive(Debug)]
pub struct GatewayDown;

impl std::fmt::Display for GatewayDown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment gateway unavailable")
    }
}

impl std::error::Error for GatewayDown {}

pub struct RecordingPayments {
    log: CallLog,
    fail: bool,
}

impl TicketPaymentService for RecordingPayments {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> anyhow::Result<()> {
        self.log.push(Call::MakePayment { account: account_id.get(), amount: total_amount_to_pay });
        if self.fail {
            return Err(GatewayDown.into());
        }
        Ok(())
    }
}

pub struct RecordingSeats {
    log: CallLog,
    fail: bool,
}

impl SeatReservationService for RecordingSeats {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) -> anyhow::Result<()> {
        self.log.push(Call::ReserveSeat { account: account_id.get(), seats: total_seats_to_allocate });
        if self.fail {
            anyhow::bail!("no seats left");
        }
        Ok(())
    }
}

pub type RecordingService = TicketService<RecordingPayments, RecordingSeats>;

pub fn service() -> (RecordingService, CallLog) {
    service_with(false, false)
}

pub fn service_with(fail_seats: bool, fail_payment: bool) -> (RecordingService, CallLog) {
    init_logging();
    let log = CallLog::default();
    let (payments, seats) = recorders(&log, fail_seats, fail_payment);
    (TicketService::new(payments, seats), log)
}

pub fn recorders(log: &CallLog, fail_seats: bool, fail_payment: bool) -> (RecordingPayments, RecordingSeats) {
    (
        RecordingPayments { log: log.clone(), fail: fail_payment },
        RecordingSeats { log: log.clone(), fail: fail_seats },
    )
}

pub fn init_logging() {
    if let Ok(config) = Config::from_lookup(|key| match key {
        "RUST_LOG" => Some("ticket_service=debug".to_string()),
        _ => None,
    }) {
        ticket_service::logging::init_tracing(&config.app);
    }
}
