use crate::{Result, SortinatorError, Strategy};

/// Phase of a sortinator's state machine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Elements may be added; extraction is rejected.
	#[default]
	Accepting,
	/// Elements may be removed smallest-first; insertion is rejected.
	Extracting,
}

impl Mode {
	/// Returns `true` during the accepting phase.
	#[inline]
	pub const fn is_accepting(self) -> bool {
		matches!(self, Self::Accepting)
	}

	/// Returns the other phase.
	#[inline]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Accepting => Self::Extracting,
			Self::Extracting => Self::Accepting,
		}
	}

	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Accepting => "accepting",
			Self::Extracting => "extracting",
		}
	}

	/// Gate for `add`.
	pub(crate) fn admit_add(self, strategy: Strategy) -> Result<()> {
		if self.is_accepting() {
			Ok(())
		} else {
			Err(reject(strategy, SortinatorError::NotAccepting))
		}
	}

	/// Gate for `remove_smallest`. Emptiness is checked before the phase.
	pub(crate) fn admit_remove(self, strategy: Strategy, len: usize) -> Result<()> {
		if len == 0 {
			Err(reject(strategy, SortinatorError::Empty))
		} else if self.is_accepting() {
			Err(reject(strategy, SortinatorError::StillAccepting))
		} else {
			Ok(())
		}
	}
}

fn reject(strategy: Strategy, err: SortinatorError) -> SortinatorError {
	tracing::debug!(strategy = %strategy, error = %err, "sortinator.rejected");
	err
}

/// Logs a phase transition.
pub(crate) fn trace_switch(strategy: Strategy, mode: Mode, count: usize) {
	tracing::trace!(strategy = %strategy, mode = mode.as_str(), count, "sortinator.switch_state");
}

/// Logs a reset.
pub(crate) fn trace_clear(strategy: Strategy, dropped: usize) {
	tracing::trace!(strategy = %strategy, dropped, "sortinator.clear");
}
