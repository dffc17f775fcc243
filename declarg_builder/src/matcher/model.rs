use std::collections::VecDeque;

use crate::spec::{ArgumentSpec, OptionSpec};

/// The positional arguments still waiting on values.
///
/// Arguments are popped from the front once satisfied, except a variadic argument which stays at the front to absorb all further values.
#[derive(Debug)]
pub(super) struct PositionalQueue<'r> {
    pending: VecDeque<&'r ArgumentSpec>,
    // Values absorbed by the front (variadic) argument.
    received: usize,
}

impl<'r> PositionalQueue<'r> {
    pub(super) fn new(arguments: &'r [ArgumentSpec]) -> Self {
        Self {
            pending: arguments.iter().collect(),
            received: 0,
        }
    }

    pub(super) fn front(&self) -> Option<&'r ArgumentSpec> {
        self.pending.front().copied()
    }

    pub(super) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(super) fn satisfy(&mut self) {
        match self.front() {
            Some(argument) if argument.variadic() => self.received += 1,
            Some(_) => {
                self.pending.pop_front();
                self.received = 0;
            }
            None => {}
        }
    }

    /// A trailing variadic argument is satisfied by at least one value.
    pub(super) fn finish(&mut self) {
        if let Some(argument) = self.front() {
            if argument.variadic() && self.received > 0 {
                self.pending.pop_front();
                self.received = 0;
            }
        }
    }

    pub(super) fn first_unsatisfied_required(&self) -> Option<&'r ArgumentSpec> {
        self.pending
            .iter()
            .enumerate()
            .find(|(i, argument)| {
                argument.required() && !(*i == 0 && argument.variadic() && self.received > 0)
            })
            .map(|(_, argument)| *argument)
    }
}

/// An option awaiting values for its sub-arguments.
#[derive(Debug)]
pub(super) struct OpenOption<'r> {
    spec: &'r OptionSpec,
    remaining: VecDeque<&'r ArgumentSpec>,
    // Values absorbed by the front (variadic) sub-argument.
    received: usize,
}

impl<'r> OpenOption<'r> {
    pub(super) fn new(spec: &'r OptionSpec) -> Self {
        Self {
            spec,
            remaining: spec.arguments().iter().collect(),
            received: 0,
        }
    }

    pub(super) fn spec(&self) -> &'r OptionSpec {
        self.spec
    }

    pub(super) fn front(&self) -> Option<&'r ArgumentSpec> {
        self.remaining.front().copied()
    }

    /// Record a value against the front sub-argument.
    /// Returns whether the option remains open.
    pub(super) fn satisfy(&mut self) -> bool {
        match self.front() {
            Some(argument) if argument.variadic() => self.received += 1,
            Some(_) => {
                self.remaining.pop_front();
                self.received = 0;
            }
            None => {}
        }

        !self.remaining.is_empty()
    }

    /// Whether a required sub-argument has not yet received a value.
    pub(super) fn missing_required(&self) -> bool {
        self.remaining
            .iter()
            .any(|argument| argument.required() && !(argument.variadic() && self.received > 0))
    }
}
