//! Property tests for seat/ticket consistency under arbitrary
//! booking and cancellation sequences.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rail_core::{BookingEngine, CoreError, TicketLedger, Train, TrainRegistry};

#[derive(Debug, Clone)]
enum Op {
    Book { train: usize, name: String },
    Cancel { pick: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..3, "[A-Za-z]{1,12}").prop_map(|(train, name)| Op::Book { train, name }),
        1 => any::<usize>().prop_map(|pick| Op::Cancel { pick }),
    ]
}

fn small_engine(seed: u64, sizes: [u32; 3]) -> BookingEngine {
    let mut registry = TrainRegistry::new();
    for (i, seats) in sizes.iter().enumerate() {
        registry.add(Train::new(100 + i as u32, format!("T{i}"), *seats).unwrap());
    }
    BookingEngine::with_rng(registry, TicketLedger::new(), StdRng::seed_from_u64(seed))
}

fn assert_consistent(engine: &BookingEngine) {
    for train in engine.registry().iter() {
        assert_eq!(
            train.available_count() + train.booked_count(),
            train.total_seats()
        );
        let held = engine
            .ledger()
            .iter()
            .filter(|t| t.train_id() == train.id())
            .count() as u32;
        assert_eq!(held, train.booked_count(), "train {}", train.id());
    }
    for ticket in engine.ledger().iter() {
        let train = engine.registry().find_by_id(ticket.train_id()).unwrap();
        assert!(!train.is_seat_available(ticket.seat_number()).unwrap());
    }
}

proptest! {
    #[test]
    fn seats_and_tickets_stay_in_step(
        seed in any::<u64>(),
        sizes in prop::array::uniform3(1u32..6),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        let mut engine = small_engine(seed, sizes);
        let mut held: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Book { train, name } => {
                    let train_id = 100 + train as u32;
                    let before = engine.check_seat_availability(train_id).unwrap().available;
                    match engine.book_ticket(train_id, &name) {
                        Ok(id) => {
                            prop_assert!(!held.contains(&id));
                            prop_assert!(engine.check_ticket_status(&id).is_ok());
                            held.push(id);
                        }
                        Err(CoreError::NoSeatsAvailable(id)) => {
                            prop_assert_eq!(id, train_id);
                            prop_assert_eq!(before, 0);
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {other}"),
                    }
                }
                Op::Cancel { pick } => {
                    if held.is_empty() {
                        continue;
                    }
                    let id = held.remove(pick % held.len());
                    prop_assert!(engine.cancel_ticket(&id).is_ok());
                    prop_assert!(engine.check_ticket_status(&id).is_err());
                }
            }
            assert_consistent(&engine);
        }

        prop_assert_eq!(engine.ledger().len(), held.len());
    }

    #[test]
    fn cancel_undoes_book(
        seed in any::<u64>(),
        prebooked in 0u32..10,
        name in "[A-Za-z ]{0,4}[A-Za-z]{1,8}",
    ) {
        let mut engine = small_engine(seed, [10, 10, 10]);
        for i in 0..prebooked {
            engine.book_ticket(100, &format!("P{i}")).unwrap();
        }
        let before = engine.check_seat_availability(100).unwrap().available;
        let tickets_before = engine.ledger().len();

        let id = engine.book_ticket(100, &name);
        if before == 0 {
            prop_assert!(matches!(id, Err(CoreError::NoSeatsAvailable(100))));
        } else {
            let id = id.unwrap();
            engine.cancel_ticket(&id).unwrap();
            prop_assert!(matches!(
                engine.check_ticket_status(&id),
                Err(CoreError::TicketNotFound(_))
            ));
        }

        prop_assert_eq!(engine.check_seat_availability(100).unwrap().available, before);
        prop_assert_eq!(engine.ledger().len(), tickets_before);
    }
}
