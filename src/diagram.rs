//! Text renderings of a machine definition.
//!
//! `Dot` emits a Graphviz digraph of the state graph; `RuleTable`
//! emits an aligned plain-text table of the rules. Both are `Display`
//! wrappers so they can be printed or collected into a `String`.

use crate::core::StateId;
use crate::machine::MachineDefinition;
use std::fmt;

const DOT_START_NODE: &str = "__start";

/// Graphviz rendering of the state graph.
///
/// The initial state gets an entry arrow, final states are drawn as
/// double circles, and parallel rules between the same pair of states
/// share one edge with one `read→write,move` line per rule.
pub struct Dot<'a>(pub &'a MachineDefinition);

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let definition = self.0;
        writeln!(f, "digraph \"{}\" {{", escape(definition.name()))?;
        writeln!(f, "  rankdir=LR;")?;
        writeln!(f, "  node [shape=circle];")?;
        writeln!(f, "  \"{DOT_START_NODE}\" [shape=point];")?;
        writeln!(
            f,
            "  \"{DOT_START_NODE}\" -> \"{}\";",
            escape(definition.initial_state().name())
        )?;
        for state in definition.final_states() {
            writeln!(f, "  \"{}\" [shape=doublecircle];", escape(state.name()))?;
        }

        for ((from, to), labels) in grouped_edges(definition) {
            writeln!(
                f,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(from.name()),
                escape(to.name()),
                labels.join("\\n")
            )?;
        }
        writeln!(f, "}}")
    }
}

/// Aligned plain-text table of every rule, in declaration order.
pub struct RuleTable<'a>(pub &'a MachineDefinition);

impl fmt::Display for RuleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules = self.0.table().rules();
        let state_width = rules
            .iter()
            .flat_map(|t| [t.state.name().len(), t.next.name().len()])
            .chain(["State".len()])
            .max()
            .unwrap_or(0);
        let index_width = rules.len().to_string().len().max(1);

        writeln!(
            f,
            "{:>iw$}  {:<sw$}  Read  {:<sw$}  Write  Move",
            "#",
            "State",
            "Next",
            iw = index_width,
            sw = state_width
        )?;
        for (i, t) in rules.iter().enumerate() {
            writeln!(
                f,
                "{:>iw$}  {:<sw$}  {:<4}  {:<sw$}  {:<5}  {}",
                i + 1,
                t.state.name(),
                t.read,
                t.next.name(),
                t.write,
                t.direction,
                iw = index_width,
                sw = state_width
            )?;
        }
        Ok(())
    }
}

pub fn to_dot(definition: &MachineDefinition) -> String {
    Dot(definition).to_string()
}

pub fn transition_table(definition: &MachineDefinition) -> String {
    RuleTable(definition).to_string()
}

/// Edge labels grouped by `(from, to)`, in order of first appearance.
fn grouped_edges(definition: &MachineDefinition) -> Vec<((&StateId, &StateId), Vec<String>)> {
    let mut edges: Vec<((&StateId, &StateId), Vec<String>)> = Vec::new();
    for t in definition.table().rules() {
        let label = format!("{}→{},{}", t.read, t.write, t.direction);
        let key = (&t.state, &t.next);
        match edges.iter_mut().find(|(k, _)| *k == key) {
            Some((_, labels)) => labels.push(label),
            None => edges.push((key, vec![label])),
        }
    }
    edges
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionTable;
    use crate::turing_machine;

    fn definition() -> MachineDefinition {
        let machine = turing_machine! {
            name: "demo",
            initial: scan,
            final: [done],
            blank: '_',
            rules: [
                (scan, '1') => (scan, '1', Right),
                (scan, 'x') => (scan, '1', Right),
                (scan, '_') => (done, '_', Stay),
            ]
        }
        .unwrap();
        machine.definition().clone()
    }

    #[test]
    fn dot_marks_initial_and_final_states() {
        let dot = to_dot(&definition());

        assert!(dot.starts_with("digraph \"demo\" {"));
        assert!(dot.contains("\"__start\" -> \"scan\";"));
        assert!(dot.contains("\"done\" [shape=doublecircle];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn dot_groups_parallel_rules_into_one_edge() {
        let dot = to_dot(&definition());

        assert!(dot.contains("\"scan\" -> \"scan\" [label=\"1→1,R\\nx→1,R\"];"));
        assert!(dot.contains("\"scan\" -> \"done\" [label=\"_→_,S\"];"));
        assert_eq!(dot.matches(" -> ").count(), 3);
    }

    #[test]
    fn escape_quotes_labels() {
        assert_eq!(escape("a\"b"), "a\\\"b");
    }

    #[test]
    fn rule_table_renders_the_definitions_transition_table() {
        let definition = definition();
        let rules: &TransitionTable = definition.table();

        let rendered = RuleTable(&definition).to_string();

        assert_eq!(rendered, transition_table(&definition));
        assert_eq!(rendered.lines().count(), rules.len() + 1);
    }

    #[test]
    fn table_lists_every_rule() {
        let table = transition_table(&definition());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "#  State  Read  Next   Write  Move");
        assert_eq!(lines[1], "1  scan   1     scan   1      R");
        assert_eq!(lines[3], "3  scan   _     done   _      S");
    }
}
