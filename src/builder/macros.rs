//! Macros for ergonomic machine construction.

/// Build a machine from an inline transition table.
///
/// States and symbols are declared from their use in the rules, so the
/// table is the whole description. Expands to
/// `Result<TuringMachine, ConfigError>`.
///
/// # Example
///
/// ```
/// use turing_fib::turing_machine;
/// use turing_fib::machine::Outcome;
///
/// let mut machine = turing_machine! {
///     name: "append one",
///     initial: scan,
///     final: [done],
///     blank: '_',
///     rules: [
///         (scan, '1') => (scan, '1', Right),
///         (scan, '_') => (done, '1', Stay),
///     ]
/// }
/// .unwrap();
///
/// machine.initialize("11").unwrap();
/// assert_eq!(machine.run(100), Outcome::Accepted { steps: 3 });
/// assert_eq!(machine.content(), "111");
/// ```
#[macro_export]
macro_rules! turing_machine {
    (
        $(name: $name:expr,)?
        initial: $initial:ident,
        final: [$($final:ident),* $(,)?],
        blank: $blank:literal,
        rules: [
            $(
                ($from:ident, $read:literal) => ($to:ident, $write:literal, $dir:ident)
            ),* $(,)?
        ] $(,)?
    ) => {
        $crate::builder::MachineBuilder::new()
            $(.name($name))?
            .blank($blank)
            .symbol($blank)
            .state(stringify!($initial))
            .initial(stringify!($initial))
            $(
                .state(stringify!($final))
                .final_state(stringify!($final))
            )*
            $(
                .state(stringify!($from))
                .state(stringify!($to))
                .symbol($read)
                .symbol($write)
                .add_transition($crate::core::Transition::new(
                    stringify!($from),
                    $read,
                    stringify!($to),
                    $write,
                    $crate::core::Direction::$dir,
                ))
            )*
            .build()
    };
}
