/*
 * Unit tests for passenger module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_passenger_created_spawned
 * - test_spawned_passenger_calls_elevator
 * - test_passenger_boards_in_same_tick_when_doors_open_here
 * - test_waiting_passenger_ignores_elevator_on_other_floor
 * - test_failed_boarding_reverts_to_spawned_and_calls_again
 * - test_traveling_passenger_leaves_on_destination
 * - test_traveling_passenger_waits_for_open_doors
 * - test_arrived_passenger_does_nothing
 * - test_full_trip
 * - test_display_lists_trip
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod passenger_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::Elevator;
    use crate::passenger::Passenger;
    use crate::shared::PassengerId;
    use crate::shared::ElevatorStatus::Idle;
    use crate::shared::PassengerStatus::{OnDestination, Spawned, Traveling, Waiting};

    fn setup_elevator(capacity: usize, initial_floor: u8) -> Elevator {
        let config = ElevatorConfig {
            capacity,
            n_floors: 10,
            initial_floor,
        };
        Elevator::new(&config).unwrap()
    }

    fn setup_passenger(id: u64, spawn_floor: u8, destination: u8) -> Passenger {
        Passenger::new(PassengerId(id), spawn_floor, destination)
    }

    #[test]
    fn test_passenger_created_spawned() {
        let passenger = setup_passenger(1, 1, 10);

        assert_eq!(passenger.status(), Spawned);
        assert!(!passenger.has_arrived());
    }

    #[test]
    fn test_spawned_passenger_calls_elevator() {
        // Arrange
        let mut elevator = setup_elevator(1, 1);
        let mut passenger = setup_passenger(1, 2, 10);

        // Act
        passenger.act_on_status(&mut elevator);

        // Assert
        assert_eq!(passenger.status(), Waiting);
        assert!(elevator.calls().contains(&2));
        assert_eq!(elevator.calls().len(), 1);
    }

    #[test]
    fn test_passenger_boards_in_same_tick_when_doors_open_here() {
        // Arrange
        let mut elevator = setup_elevator(2, 1);
        elevator.call(1);
        elevator.step();
        let mut passenger = setup_passenger(1, 1, 6);

        // Act
        passenger.act_on_status(&mut elevator);

        // Assert
        assert_eq!(passenger.status(), Traveling);
        assert!(elevator.passengers().contains(&PassengerId(1)));
        assert!(elevator.stops().contains(&6));
    }

    #[test]
    fn test_waiting_passenger_ignores_elevator_on_other_floor() {
        let mut elevator = setup_elevator(2, 1);
        elevator.call(1);
        elevator.step();
        let mut passenger = setup_passenger(1, 4, 6);

        passenger.act_on_status(&mut elevator);
        passenger.act_on_status(&mut elevator);

        assert_eq!(passenger.status(), Waiting);
        assert!(elevator.passengers().is_empty());
    }

    #[test]
    fn test_failed_boarding_reverts_to_spawned_and_calls_again() {
        // Arrange: two passengers waiting on floor 1 for a single-seat elevator
        let mut elevator = setup_elevator(1, 1);
        let mut first = setup_passenger(1, 1, 5);
        let mut second = setup_passenger(2, 1, 3);
        first.act_on_status(&mut elevator);
        second.act_on_status(&mut elevator);
        elevator.step();
        assert!(elevator.doors_open());
        assert!(elevator.calls().is_empty());

        // Act: the first one takes the only seat
        first.act_on_status(&mut elevator);
        second.act_on_status(&mut elevator);

        // Assert
        assert_eq!(first.status(), Traveling);
        assert_eq!(second.status(), Spawned);
        assert!(!elevator.passengers().contains(&PassengerId(2)));

        // The call consumed on arrival is issued again on the next tick
        elevator.step();
        second.act_on_status(&mut elevator);
        assert_eq!(second.status(), Waiting);
        assert!(elevator.calls().contains(&1));
    }

    #[test]
    fn test_traveling_passenger_leaves_on_destination() {
        // Arrange
        let mut elevator = setup_elevator(2, 1);
        let mut passenger = setup_passenger(1, 1, 2);
        passenger.act_on_status(&mut elevator);
        elevator.step();
        passenger.act_on_status(&mut elevator);
        assert_eq!(passenger.status(), Traveling);

        // Act
        elevator.step();
        passenger.act_on_status(&mut elevator);

        // Assert
        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(passenger.status(), OnDestination);
        assert!(passenger.has_arrived());
        assert!(elevator.passengers().is_empty());
    }

    #[test]
    fn test_traveling_passenger_waits_for_open_doors() {
        let mut elevator = setup_elevator(2, 1);
        let mut passenger = setup_passenger(1, 1, 3);
        passenger.act_on_status(&mut elevator);
        elevator.step();
        passenger.act_on_status(&mut elevator);

        // Passing floor 2 with closed doors
        elevator.step();
        passenger.act_on_status(&mut elevator);

        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(passenger.status(), Traveling);
    }

    #[test]
    fn test_arrived_passenger_does_nothing() {
        let mut elevator = setup_elevator(2, 1);
        let mut passenger = setup_passenger(1, 1, 2);
        for _ in 0..3 {
            passenger.act_on_status(&mut elevator);
            elevator.step();
        }
        assert_eq!(passenger.status(), OnDestination);

        passenger.act_on_status(&mut elevator);

        assert_eq!(passenger.status(), OnDestination);
        assert!(elevator.calls().is_empty());
        assert!(elevator.stops().is_empty());
    }

    #[test]
    fn test_full_trip() {
        // Arrange
        let mut elevator = setup_elevator(5, 1);
        let mut passenger = setup_passenger(1, 1, 5);
        let mut statuses = vec![passenger.status()];

        // Act
        for _ in 0..50 {
            passenger.act_on_status(&mut elevator);
            statuses.push(passenger.status());
            elevator.step();
            if passenger.has_arrived() {
                break;
            }
        }

        // Assert
        statuses.dedup();
        assert_eq!(statuses, vec![Spawned, Waiting, Traveling, OnDestination]);
        assert_eq!(elevator.current_floor(), 5);
        assert_eq!(elevator.status(), Idle);
        assert!(elevator.stops().is_empty());
        assert!(elevator.calls().is_empty());
        assert!(elevator.passengers().is_empty());
    }

    #[test]
    fn test_display_lists_trip() {
        let passenger = setup_passenger(7, 2, 9);

        assert_eq!(
            passenger.to_string(),
            "Passenger. Id: #7, Status: SPAWNED, Spawn floor: 2, Dest: 9"
        );
    }
}
