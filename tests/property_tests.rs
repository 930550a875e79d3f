//! Property-based tests for the tape and the execution engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use proptest::sample::Index;
use turing_fib::core::{Direction, Tape};
use turing_fib::fibonacci::{self, FIBONACCI_DESCRIPTION};
use turing_fib::machine::{MachineStatus, Outcome, StepResult, DEFAULT_MAX_STEPS};
use turing_fib::MachineConfig;

fn ones(len: usize) -> String {
    "1".repeat(len)
}

proptest! {
    #[test]
    fn tape_excursion_returns_to_same_cell(len in 1..20usize, k in 0..20usize) {
        let k = k % len;
        let input = ones(len);
        let mut tape = Tape::new(&input, '_');
        for _ in 0..k {
            tape.move_head(Direction::Right);
        }

        for _ in 0..1000 {
            tape.move_head(Direction::Left);
            let symbol = tape.read();
            prop_assert_eq!(symbol, tape.peek());
        }
        prop_assert_eq!(tape.head_position(), k as isize - 1000);
        for _ in 0..1000 {
            tape.move_head(Direction::Right);
            tape.read();
        }

        prop_assert_eq!(tape.head_position(), k as isize);
        prop_assert_eq!(tape.read(), '1');
        prop_assert_eq!(tape.content(), input);
    }

    #[test]
    fn writes_survive_growth(positions in prop::collection::vec(-60..60isize, 1..30)) {
        let mut tape = Tape::new("1", '_');
        for &position in &positions {
            tape.seek(position);
            tape.write('x');
        }

        for &position in &positions {
            prop_assert_eq!(tape.symbol_at(position), 'x');
        }
        let (lower, upper) = tape.bounds();
        prop_assert!(positions.iter().all(|p| (lower..upper).contains(p)));
        prop_assert_eq!(tape.allocated() as isize, upper - lower);
    }

    #[test]
    fn unary_roundtrip(n in 0..500usize) {
        prop_assert_eq!(fibonacci::from_unary(&fibonacci::to_unary(n)), n as u64);
    }

    #[test]
    fn machine_matches_reference(n in 0..=8usize) {
        let computation = fibonacci::compute(n, DEFAULT_MAX_STEPS).unwrap();

        prop_assert!(computation.outcome.is_accepted());
        prop_assert_eq!(computation.value, Some(fibonacci::fibonacci(n)));
    }

    #[test]
    fn history_has_one_entry_per_step(n in 0..6usize) {
        let mut machine = fibonacci::machine().unwrap();
        machine.initialize(&ones(n)).unwrap();
        let outcome = machine.run(DEFAULT_MAX_STEPS);

        let history = machine.history();
        prop_assert_eq!(history.len(), outcome.steps() + 1);
        for (i, entry) in history.iter().enumerate() {
            prop_assert_eq!(entry.step, i);
        }
        prop_assert_eq!(history.last().map(|e| e.tape.clone()), Some(machine.content()));
    }

    #[test]
    fn runs_do_not_share_history(first in 0..6usize, second in 0..6usize) {
        let mut reused = fibonacci::machine().unwrap();
        reused.initialize(&ones(first)).unwrap();
        reused.run(DEFAULT_MAX_STEPS);
        reused.initialize(&ones(second)).unwrap();
        let outcome = reused.run(DEFAULT_MAX_STEPS);

        let mut fresh = fibonacci::machine().unwrap();
        fresh.initialize(&ones(second)).unwrap();

        prop_assert_eq!(fresh.run(DEFAULT_MAX_STEPS), outcome);
        prop_assert_eq!(fresh.history(), reused.history());
        prop_assert_eq!(fresh.content(), reused.content());
    }

    #[test]
    fn stepping_an_accepted_machine_changes_nothing(n in 0..5usize, extra in 1..10usize) {
        let mut machine = fibonacci::machine().unwrap();
        machine.initialize(&ones(n)).unwrap();
        let outcome = machine.run(DEFAULT_MAX_STEPS);
        let tape = machine.tape().clone();
        let history_len = machine.history().len();

        for _ in 0..extra {
            prop_assert_eq!(machine.step(), StepResult::Halted(outcome.clone()));
        }
        prop_assert_eq!(machine.steps(), outcome.steps());
        prop_assert_eq!(machine.tape(), &tape);
        prop_assert_eq!(machine.history().len(), history_len);
        prop_assert_eq!(machine.status(), MachineStatus::Accepted);
    }

    #[test]
    fn budget_below_run_length_exhausts(n in 1..5usize, budget in 0..28usize) {
        let mut machine = fibonacci::machine().unwrap();
        machine.initialize(&ones(n)).unwrap();

        prop_assert_eq!(machine.run(budget), Outcome::Exhausted { steps: budget });
        prop_assert_eq!(machine.history().len(), budget + 1);
        prop_assert_eq!(machine.status(), MachineStatus::Exhausted);
        prop_assert_eq!(machine.step(), StepResult::Halted(Outcome::Exhausted { steps: budget }));
        prop_assert_eq!(machine.run(DEFAULT_MAX_STEPS), Outcome::Exhausted { steps: budget });
    }

    #[test]
    fn missing_rule_gets_stuck_where_it_is_first_needed(n in 0..5usize, pick in any::<Index>()) {
        let input = ones(n);
        let mut complete = fibonacci::machine().unwrap();
        complete.initialize(&input).unwrap();
        let total = complete.run(DEFAULT_MAX_STEPS).steps();

        // Entry i holds the configuration the rule for step i + 1 is read from.
        let entries = complete.history().entries();
        let removed = &entries[pick.index(total)];
        let first_use = entries
            .iter()
            .position(|e| e.state == removed.state && e.symbol == removed.symbol)
            .unwrap();

        let mut config = MachineConfig::from_json(FIBONACCI_DESCRIPTION).unwrap();
        config
            .transitions
            .retain(|t| !(t.state == removed.state && t.read == removed.symbol));
        let mut truncated = config.into_machine().unwrap();
        truncated.initialize(&input).unwrap();

        let expected = Outcome::Stuck {
            steps: first_use,
            state: removed.state.clone(),
            symbol: removed.symbol,
        };
        prop_assert_eq!(truncated.run(DEFAULT_MAX_STEPS), expected.clone());
        prop_assert_eq!(truncated.status(), MachineStatus::Stuck);
        prop_assert_eq!(truncated.content(), entries[first_use].tape.clone());
        prop_assert_eq!(truncated.run(DEFAULT_MAX_STEPS), expected);
        prop_assert_eq!(&truncated.history().entries()[..=first_use], &entries[..=first_use]);
    }
}
