//! Filter criteria and label set construction.
//!
//! Turns the release, ready-for-test and blocker options into the
//! include/exclude label sets sent with the issue list request.

mod error;

pub use error::FilterError;

/// Label marking an issue whose change is ready for verification.
pub const READY_FOR_TEST_LABEL: &str = "READY-FOR-TEST";

/// Validated filter options for a report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    release: Option<String>,
    ready_for_test: bool,
    blocker: Option<String>,
}

impl FilterCriteria {
    /// Creates filter criteria from raw option values.
    ///
    /// Empty strings are treated as "not set".
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ReleaseRequired`] when `ready_for_test` is set
    /// without a release label.
    pub fn new(
        release: impl Into<String>,
        ready_for_test: bool,
        blocker: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let release = non_empty(release.into());
        let blocker = non_empty(blocker.into());

        if ready_for_test && release.is_none() {
            return Err(FilterError::ReleaseRequired);
        }

        Ok(Self {
            release,
            ready_for_test,
            blocker,
        })
    }

    /// Returns the release label, if set.
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    /// Returns whether only ready-for-test issues are wanted.
    pub fn ready_for_test(&self) -> bool {
        self.ready_for_test
    }

    /// Returns the blocker label, if set.
    pub fn blocker(&self) -> Option<&str> {
        self.blocker.as_deref()
    }

    /// Builds the label sets for these criteria.
    pub fn label_sets(&self) -> LabelSets {
        LabelSets::from_criteria(self)
    }
}

/// Labels an issue must carry and labels it must not carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSets {
    /// Labels every returned issue must have, in request order.
    pub include: Vec<String>,
    /// Labels no returned issue may have.
    pub exclude: Vec<String>,
}

impl LabelSets {
    /// Builds the include/exclude sets.
    ///
    /// Include order is release, ready-for-test, blocker. Without the
    /// ready-for-test flag the ready-for-test label is excluded instead.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut sets = Self::default();

        if let Some(release) = criteria.release() {
            sets.include.push(release.to_string());
        }

        if criteria.ready_for_test() {
            sets.include.push(READY_FOR_TEST_LABEL.to_string());
        } else {
            sets.exclude.push(READY_FOR_TEST_LABEL.to_string());
        }

        if let Some(blocker) = criteria.blocker() {
            sets.include.push(blocker.to_string());
        }

        sets
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
