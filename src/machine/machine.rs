//! Deterministic fetch-decode-execute loop.

use crate::core::{History, HistoryEntry, StateId, Tape};
use crate::machine::definition::MachineDefinition;
use crate::machine::error::InputError;
use crate::machine::outcome::{MachineStatus, Outcome, StepResult};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Step budget used when the caller has no better bound.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Single-tape deterministic Turing machine.
///
/// A new machine is Ready on an empty input. Each call to `initialize`
/// discards the previous run's tape and history and starts over.
#[derive(Clone, Debug)]
pub struct TuringMachine {
    pub(crate) definition: Arc<MachineDefinition>,
    pub(crate) tape: Tape,
    pub(crate) state: StateId,
    pub(crate) steps: usize,
    pub(crate) status: MachineStatus,
    pub(crate) history: History,
}

impl TuringMachine {
    /// Create a machine for a validated definition.
    pub fn new(definition: Arc<MachineDefinition>) -> Self {
        let tape = Tape::new("", definition.blank());
        let state = definition.initial_state().clone();
        let mut machine = Self {
            definition,
            tape,
            state,
            steps: 0,
            status: MachineStatus::Ready,
            history: History::new(),
        };
        let entry = machine.snapshot();
        machine.history.record(entry);
        machine
    }

    /// Start a fresh run on `input`.
    ///
    /// The input may only contain non-blank symbols of the declared
    /// alphabet. On error the current run is left untouched.
    pub fn initialize(&mut self, input: &str) -> Result<(), InputError> {
        let blank = self.definition.blank();
        for (index, symbol) in input.chars().enumerate() {
            if symbol == blank {
                return Err(InputError::BlankSymbol { symbol, index });
            }
            if !self.definition.has_symbol(symbol) {
                return Err(InputError::UnknownSymbol { symbol, index });
            }
        }

        self.tape = Tape::new(input, blank);
        self.state = self.definition.initial_state().clone();
        self.steps = 0;
        self.status = MachineStatus::Ready;
        self.history = History::new();
        let entry = self.snapshot();
        self.history.record(entry);

        debug!(
            machine = self.definition.name(),
            input_len = input.chars().count(),
            "machine initialized"
        );
        Ok(())
    }

    /// Execute one step.
    ///
    /// Returns `Halted` without touching the tape, the counter or the
    /// history when the control state is final, when no transition
    /// matches, or when a previous `run` exhausted its budget.
    pub fn step(&mut self) -> StepResult {
        if self.status == MachineStatus::Exhausted {
            return StepResult::Halted(Outcome::Exhausted { steps: self.steps });
        }
        if self.definition.is_final(self.state.name()) {
            self.status = MachineStatus::Accepted;
            return StepResult::Halted(Outcome::Accepted { steps: self.steps });
        }

        let symbol = self.tape.read();
        let Some(rule) = self.definition.table().lookup(self.state.name(), symbol) else {
            self.status = MachineStatus::Stuck;
            return StepResult::Halted(Outcome::Stuck {
                steps: self.steps,
                state: self.state.clone(),
                symbol,
            });
        };
        let (next, write, direction) = (rule.next.clone(), rule.write, rule.direction);

        trace!(
            step = self.steps + 1,
            state = %self.state,
            read = %symbol,
            next = %next,
            write = %write,
            direction = %direction,
            "applying transition"
        );

        self.tape.write(write);
        self.tape.move_head(direction);
        self.state = next;
        self.steps += 1;
        self.status = MachineStatus::Running;

        let entry = self.snapshot();
        self.history.record(entry);
        StepResult::Continued
    }

    /// Step until the machine accepts, gets stuck, or has taken
    /// `max_steps` steps in total.
    ///
    /// A final control state wins over an exhausted budget, so
    /// `run(0)` accepts when the initial state is final.
    pub fn run(&mut self, max_steps: usize) -> Outcome {
        let outcome = loop {
            if self.steps >= max_steps
                && !self.status.is_terminal()
                && !self.definition.is_final(self.state.name())
            {
                self.status = MachineStatus::Exhausted;
            }
            match self.step() {
                StepResult::Continued => {}
                StepResult::Halted(outcome) => break outcome,
            }
        };

        match &outcome {
            Outcome::Accepted { steps } => {
                debug!(machine = self.definition.name(), steps, "run accepted");
            }
            Outcome::Stuck {
                steps,
                state,
                symbol,
            } => {
                warn!(
                    machine = self.definition.name(),
                    steps,
                    state = %state,
                    symbol = %symbol,
                    "run stuck: no transition defined"
                );
            }
            Outcome::Exhausted { steps } => {
                warn!(
                    machine = self.definition.name(),
                    steps, max_steps, "run exhausted its step budget"
                );
            }
        }
        outcome
    }

    pub fn definition(&self) -> &MachineDefinition {
        &self.definition
    }

    /// The definition, for building further machines that share it.
    pub fn shared_definition(&self) -> Arc<MachineDefinition> {
        Arc::clone(&self.definition)
    }

    /// Trimmed tape content of the current run.
    pub fn content(&self) -> String {
        self.tape.content()
    }

    pub fn current_state(&self) -> &StateId {
        &self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    pub fn is_final(&self) -> bool {
        self.definition.is_final(self.state.name())
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            step: self.steps,
            state: self.state.clone(),
            head_position: self.tape.head_position(),
            tape: self.tape.content(),
            symbol: self.tape.peek(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turing_machine;

    /// Replaces every `1` with `x`, then accepts on the first blank.
    fn overwrite_machine() -> TuringMachine {
        turing_machine! {
            name: "overwrite",
            initial: scan,
            final: [done],
            blank: '_',
            rules: [
                (scan, '1') => (scan, 'x', Right),
                (scan, '_') => (done, '_', Stay),
            ]
        }
        .unwrap()
    }

    /// Walks left forever over blanks.
    fn left_walker() -> TuringMachine {
        turing_machine! {
            initial: walk,
            final: [],
            blank: '_',
            rules: [
                (walk, '_') => (walk, '_', Left),
                (walk, '1') => (walk, '1', Left),
            ]
        }
        .unwrap()
    }

    #[test]
    fn new_machine_is_ready_with_initial_snapshot() {
        let machine = overwrite_machine();

        assert_eq!(machine.status(), MachineStatus::Ready);
        assert_eq!(machine.steps(), 0);
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.content(), "_");
    }

    #[test]
    fn initialize_records_step_zero() {
        let mut machine = overwrite_machine();
        machine.initialize("11").unwrap();

        let first = machine.history().first().unwrap();
        assert_eq!(first.step, 0);
        assert_eq!(first.state.name(), "scan");
        assert_eq!(first.head_position, 0);
        assert_eq!(first.tape, "11");
        assert_eq!(first.symbol, '1');
    }

    #[test]
    fn step_applies_write_move_and_state() {
        let mut machine = overwrite_machine();
        machine.initialize("11").unwrap();

        assert_eq!(machine.step(), StepResult::Continued);
        assert_eq!(machine.status(), MachineStatus::Running);
        assert_eq!(machine.steps(), 1);
        assert_eq!(machine.content(), "x1");
        assert_eq!(machine.tape().head_position(), 1);

        let last = machine.history().last().unwrap();
        assert_eq!(last.step, 1);
        assert_eq!(last.symbol, '1');
        assert_eq!(last.tape, "x1");
    }

    #[test]
    fn run_accepts_and_history_covers_every_step() {
        let mut machine = overwrite_machine();
        machine.initialize("111").unwrap();

        let outcome = machine.run(DEFAULT_MAX_STEPS);

        assert_eq!(outcome, Outcome::Accepted { steps: 4 });
        assert_eq!(machine.status(), MachineStatus::Accepted);
        assert_eq!(machine.content(), "xxx");
        assert_eq!(machine.history().len(), 5);
        let steps: Vec<usize> = machine.history().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn step_in_final_state_is_a_no_op() {
        let mut machine = overwrite_machine();
        machine.initialize("1").unwrap();
        machine.run(DEFAULT_MAX_STEPS);
        let tape = machine.tape().clone();
        let history_len = machine.history().len();

        let result = machine.step();

        assert_eq!(result, StepResult::Halted(Outcome::Accepted { steps: 2 }));
        assert_eq!(machine.steps(), 2);
        assert_eq!(machine.tape(), &tape);
        assert_eq!(machine.history().len(), history_len);
    }

    #[test]
    fn missing_transition_reports_stuck_without_mutation() {
        let mut machine = turing_machine! {
            initial: scan,
            final: [done],
            blank: '_',
            rules: [
                (scan, '1') => (scan, 'x', Right),
            ]
        }
        .unwrap();
        machine.initialize("11").unwrap();

        let outcome = machine.run(DEFAULT_MAX_STEPS);

        assert_eq!(
            outcome,
            Outcome::Stuck {
                steps: 2,
                state: StateId::new("scan"),
                symbol: '_',
            }
        );
        assert_eq!(machine.status(), MachineStatus::Stuck);
        assert_eq!(machine.content(), "xx");
        assert_eq!(machine.history().len(), 3);

        assert!(matches!(
            machine.step(),
            StepResult::Halted(Outcome::Stuck { steps: 2, .. })
        ));
        assert_eq!(machine.run(1), outcome);
        assert_eq!(machine.status(), MachineStatus::Stuck);
    }

    #[test]
    fn run_with_zero_budget_is_exhausted() {
        let mut machine = overwrite_machine();
        machine.initialize("1").unwrap();

        assert_eq!(machine.run(0), Outcome::Exhausted { steps: 0 });
        assert_eq!(machine.status(), MachineStatus::Exhausted);
        assert_eq!(machine.content(), "1");
    }

    #[test]
    fn zero_budget_accepts_when_initial_state_is_final() {
        let mut machine = turing_machine! {
            initial: done,
            final: [done],
            blank: '_',
            rules: []
        }
        .unwrap();

        assert_eq!(machine.run(0), Outcome::Accepted { steps: 0 });
        assert_eq!(machine.status(), MachineStatus::Accepted);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn exhausted_machine_stays_exhausted_until_initialized() {
        let mut machine = left_walker();
        machine.initialize("1").unwrap();

        assert_eq!(machine.run(25), Outcome::Exhausted { steps: 25 });
        assert_eq!(
            machine.step(),
            StepResult::Halted(Outcome::Exhausted { steps: 25 })
        );
        assert_eq!(machine.run(100), Outcome::Exhausted { steps: 25 });

        machine.initialize("1").unwrap();
        assert_eq!(machine.status(), MachineStatus::Ready);
        assert_eq!(machine.run(5), Outcome::Exhausted { steps: 5 });
    }

    #[test]
    fn history_positions_survive_left_growth() {
        let mut machine = left_walker();
        machine.initialize("1").unwrap();
        machine.run(40);

        let positions: Vec<isize> = machine.history().iter().map(|e| e.head_position).collect();
        let expected: Vec<isize> = (0..=40).map(|i| -i).collect();
        assert_eq!(positions, expected);
        assert!(machine.tape().allocated() > 1 + 2 * crate::core::MARGIN);
        assert_eq!(machine.tape().symbol_at(0), '1');
    }

    #[test]
    fn initialize_rejects_blank_and_unknown_symbols() {
        let mut machine = overwrite_machine();
        machine.initialize("11").unwrap();
        machine.step();

        assert_eq!(
            machine.initialize("1_1"),
            Err(InputError::BlankSymbol {
                symbol: '_',
                index: 1
            })
        );
        assert_eq!(
            machine.initialize("12"),
            Err(InputError::UnknownSymbol {
                symbol: '2',
                index: 1
            })
        );
        assert_eq!(machine.steps(), 1);
        assert_eq!(machine.content(), "x1");
    }

    #[test]
    fn reinitialize_discards_previous_run() {
        let mut machine = overwrite_machine();
        machine.initialize("111").unwrap();
        machine.run(DEFAULT_MAX_STEPS);
        let first_run = machine.history().clone();

        machine.initialize("1").unwrap();
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.content(), "1");

        machine.run(DEFAULT_MAX_STEPS);
        assert_eq!(first_run.len(), 5);
        assert_eq!(first_run.last().unwrap().tape, "xxx");
    }

    #[test]
    fn machines_can_share_a_definition() {
        let first = overwrite_machine();
        let mut second = TuringMachine::new(first.shared_definition());

        second.initialize("1").unwrap();
        assert!(second.run(DEFAULT_MAX_STEPS).is_accepted());
        assert_eq!(first.status(), MachineStatus::Ready);
    }
}
