//! # Menu Commands
//!
//! One function per menu action. Commands take the session and already
//! parsed arguments, and return data or an [`AppError`](crate::error::AppError).
//! They never touch the terminal; [`crate::menu`] prompts and renders.
//!
//! ```rust,ignore
//! // Read-only
//! fn check_seat_availability(session: &Session, train_id: u32) -> AppResult<SeatAvailability>
//!
//! // Mutating
//! fn book_ticket(session: &mut Session, train_id: u32, passenger_name: &str) -> AppResult<Ticket>
//! ```

pub mod booking;
pub mod train;
