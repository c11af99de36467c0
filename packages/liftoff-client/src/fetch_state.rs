#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
	Idle,
	LoadingInitial,
	LoadingMore,
	/// Terminal until the filters change.
	Error,
	/// Every matching record has been loaded.
	Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchEvent {
	FilterChanged,
	NearBottom { has_more: bool },
	Succeeded { has_more: bool },
	Failed,
}

impl FetchStatus {
	/// Next state for `event`, or `None` when the event is not accepted in this state.
	pub fn on(self, event: FetchEvent) -> Option<Self> {
		use FetchEvent::*;

		match (self, event) {
			(_, FilterChanged) => Some(Self::LoadingInitial),
			(Self::Idle, NearBottom { has_more: true }) => Some(Self::LoadingMore),
			(Self::LoadingInitial | Self::LoadingMore, Succeeded { has_more }) =>
				Some(if has_more { Self::Idle } else { Self::Exhausted }),
			(Self::LoadingInitial | Self::LoadingMore, Failed) => Some(Self::Error),
			_ => None,
		}
	}

	pub fn is_loading(self) -> bool {
		matches!(self, Self::LoadingInitial | Self::LoadingMore)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loading_blocks_scroll_triggers() {
		for status in [FetchStatus::LoadingInitial, FetchStatus::LoadingMore] {
			assert_eq!(status.on(FetchEvent::NearBottom { has_more: true }), None);
		}
	}

	#[test]
	fn scroll_requires_more_pages() {
		assert_eq!(FetchStatus::Idle.on(FetchEvent::NearBottom { has_more: false }), None);
		assert_eq!(
			FetchStatus::Idle.on(FetchEvent::NearBottom { has_more: true }),
			Some(FetchStatus::LoadingMore)
		);
	}

	#[test]
	fn completion_follows_has_more() {
		assert_eq!(
			FetchStatus::LoadingInitial.on(FetchEvent::Succeeded { has_more: true }),
			Some(FetchStatus::Idle)
		);
		assert_eq!(
			FetchStatus::LoadingMore.on(FetchEvent::Succeeded { has_more: false }),
			Some(FetchStatus::Exhausted)
		);
		assert_eq!(FetchStatus::LoadingMore.on(FetchEvent::Failed), Some(FetchStatus::Error));
	}

	#[test]
	fn error_only_recovers_through_filter_change() {
		assert_eq!(FetchStatus::Error.on(FetchEvent::NearBottom { has_more: true }), None);
		assert_eq!(FetchStatus::Error.on(FetchEvent::Succeeded { has_more: true }), None);
		assert_eq!(
			FetchStatus::Error.on(FetchEvent::FilterChanged),
			Some(FetchStatus::LoadingInitial)
		);
		assert_eq!(
			FetchStatus::Exhausted.on(FetchEvent::FilterChanged),
			Some(FetchStatus::LoadingInitial)
		);
	}

	#[test]
	fn idle_ignores_completions() {
		assert_eq!(FetchStatus::Idle.on(FetchEvent::Succeeded { has_more: true }), None);
		assert_eq!(FetchStatus::Exhausted.on(FetchEvent::Failed), None);
	}
}
