//! # Terminal Views
//!
//! Text rendering for trains, availability, and tickets.

use std::io::{self, Write};

use rail_core::{SeatAvailability, Ticket, TrainSummary};

/// Prints the main menu and the choice prompt (no trailing newline).
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "====== RAILWAY RESERVATION SYSTEM ======")?;
    writeln!(out, "1. Display All Trains")?;
    writeln!(out, "2. Check Seat Availability")?;
    writeln!(out, "3. Book a Ticket")?;
    writeln!(out, "4. Cancel a Ticket")?;
    writeln!(out, "5. Check Ticket Status")?;
    writeln!(out, "0. Exit")?;
    writeln!(out, "========================================")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

/// Fixed-width train table.
///
/// ```text
/// Train ID  Train Name          Total Seats    Available Seats
/// ------------------------------------------------------------
/// 1001      Express Delhi       100            99
/// ```
pub fn render_trains<W: Write>(out: &mut W, trains: &[TrainSummary]) -> io::Result<()> {
    if trains.is_empty() {
        return writeln!(out, "No trains available in the system.");
    }

    writeln!(out)?;
    writeln!(out, "========== AVAILABLE TRAINS ==========")?;
    writeln!(
        out,
        "{:<10}{:<20}{:<15}{:<15}",
        "Train ID", "Train Name", "Total Seats", "Available Seats"
    )?;
    writeln!(out, "{}", "-".repeat(60))?;
    for train in trains {
        writeln!(
            out,
            "{:<10}{:<20}{:<15}{:<15}",
            train.id, train.name, train.total_seats, train.available_seats
        )?;
    }
    writeln!(out, "=====================================")
}

pub fn render_availability<W: Write>(out: &mut W, availability: &SeatAvailability) -> io::Result<()> {
    writeln!(
        out,
        "Train {} ({}) has {} seat(s) available out of {}",
        availability.train_id, availability.train_name, availability.available, availability.total
    )?;
    if availability.is_fully_booked() {
        writeln!(out, "Sorry, the train is fully booked.")?;
    }
    Ok(())
}

pub fn render_ticket<W: Write>(out: &mut W, ticket: &Ticket) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "========== TICKET DETAILS ==========")?;
    writeln!(out, "Booking ID: {}", ticket.booking_id())?;
    writeln!(out, "Train ID: {}", ticket.train_id())?;
    writeln!(out, "Seat Number: {}", ticket.seat_number())?;
    writeln!(out, "Passenger Name: {}", ticket.passenger_name())?;
    writeln!(out, "Booking Time: {}", ticket.booking_time())?;
    writeln!(out, "===================================")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_train_table() {
        let trains = vec![TrainSummary {
            id: 1001,
            name: "Express Delhi".to_string(),
            total_seats: 100,
            available_seats: 99,
        }];
        let text = render(|out| render_trains(out, &trains));
        assert!(text.contains("Train ID  Train Name          Total Seats    Available Seats"));
        assert!(text.contains("\n1001      Express Delhi       100            99             \n"));
    }

    #[test]
    fn test_empty_train_table() {
        let text = render(|out| render_trains(out, &[]));
        assert_eq!(text, "No trains available in the system.\n");
    }

    #[test]
    fn test_fully_booked_line() {
        let availability = SeatAvailability {
            train_id: 5,
            train_name: "Solo".to_string(),
            available: 0,
            total: 1,
        };
        let text = render(|out| render_availability(out, &availability));
        assert_eq!(
            text,
            "Train 5 (Solo) has 0 seat(s) available out of 1\nSorry, the train is fully booked.\n"
        );
    }

    #[test]
    fn test_ticket_block() {
        let ticket = Ticket::restore("BKAAAA0001", 1001, 3, "Asha", "03/14/2025 09:26:53").unwrap();
        let text = render(|out| render_ticket(out, &ticket));
        assert!(text.contains("Booking ID: BKAAAA0001\n"));
        assert!(text.contains("Seat Number: 3\n"));
        assert!(text.contains("Booking Time: 03/14/2025 09:26:53\n"));
    }
}
