//! State root and reducer traits for command-driven domain state.

/// Root of a replace-on-write domain state.
///
/// Every accepted change produces a new value; the revision lets consumers
/// detect changes without comparing contents.
pub trait StateRoot {
    /// Monotonically increasing count of content-changing transitions.
    fn revision(&self) -> u64;
}

/// Reducer execution semantics (pure, deterministic).
///
/// `reduce(&self, cmd)` returns the next state and never mutates `self`, so a
/// rejected command leaves the caller holding the exact state it started with.
/// Reducers must not perform IO or read clocks.
pub trait Reducer: StateRoot + Sized {
    type Command: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Compute the state that results from applying `command` to `self`.
    fn reduce(&self, command: &Self::Command) -> Result<Self, Self::Error>;

    /// Fold a sequence of commands, stopping at the first rejection.
    fn reduce_all<'a, I>(&self, commands: I) -> Result<Self, Self::Error>
    where
        I: IntoIterator<Item = &'a Self::Command>,
        Self: Clone,
        Self::Command: 'a,
    {
        commands
            .into_iter()
            .try_fold(self.clone(), |state, command| state.reduce(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Counter {
        value: i64,
        revision: u64,
    }

    #[derive(Debug, Clone)]
    enum CounterCommand {
        Add(i64),
        Fail,
    }

    impl StateRoot for Counter {
        fn revision(&self) -> u64 {
            self.revision
        }
    }

    impl Reducer for Counter {
        type Command = CounterCommand;
        type Error = &'static str;

        fn reduce(&self, command: &CounterCommand) -> Result<Self, Self::Error> {
            match command {
                CounterCommand::Add(n) => Ok(Counter {
                    value: self.value + n,
                    revision: self.revision + 1,
                }),
                CounterCommand::Fail => Err("rejected"),
            }
        }
    }

    #[test]
    fn reduce_all_folds_in_order() {
        let start = Counter { value: 0, revision: 0 };
        let cmds = [CounterCommand::Add(2), CounterCommand::Add(3)];
        let end = start.reduce_all(&cmds).unwrap();
        assert_eq!(end, Counter { value: 5, revision: 2 });
        assert_eq!(start.revision(), 0);
    }

    #[test]
    fn reduce_all_stops_at_first_rejection() {
        let start = Counter { value: 0, revision: 0 };
        let cmds = [CounterCommand::Add(1), CounterCommand::Fail, CounterCommand::Add(1)];
        assert_eq!(start.reduce_all(&cmds), Err("rejected"));
    }
}
