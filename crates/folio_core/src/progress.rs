//! Typed progress events for book generation.
//!
//! A unit is one chapter introduction or one subchapter body, the atomic
//! granularity of progress. Events carry completed/total counts instead of a
//! bare scalar; [`ProgressEvent::fraction`] recovers the scalar view for
//! callers that render a single number.

/// Progress event emitted synchronously during a generation run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Generation run started.
    Started {
        /// Number of chapters to generate
        chapters: usize,
        /// Total units (one intro per chapter plus one per subchapter)
        units: usize,
    },
    /// One unit (intro or subchapter body) was generated and written.
    UnitCompleted {
        /// Units completed so far, this one included
        completed: usize,
        /// Total units in the run
        total: usize,
        /// Human-readable description of the unit
        label: String,
    },
    /// A chapter and all of its subchapters were completed.
    SectionCompleted {
        /// 1-based chapter number
        chapter: u32,
        /// Chapter title
        title: String,
        /// Units completed so far
        completed: usize,
        /// Total units in the run
        total: usize,
    },
    /// The whole book was generated and written.
    Finished,
    /// The run aborted; no further events follow.
    Failed {
        /// Display form of the failure
        message: String,
    },
}

impl ProgressEvent {
    /// Scalar progress view: completed/total for in-flight events, exactly
    /// 1.0 on success, negative on failure.
    pub fn fraction(&self) -> f64 {
        match self {
            ProgressEvent::Started { .. } => 0.0,
            ProgressEvent::UnitCompleted { completed, total, .. }
            | ProgressEvent::SectionCompleted {
                completed, total, ..
            } => {
                if *total == 0 {
                    0.0
                } else {
                    *completed as f64 / *total as f64
                }
            }
            ProgressEvent::Finished => 1.0,
            ProgressEvent::Failed { .. } => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressEvent;

    #[test]
    fn fraction_spans_the_run() {
        let started = ProgressEvent::Started {
            chapters: 2,
            units: 5,
        };
        assert_eq!(started.fraction(), 0.0);

        let unit = ProgressEvent::UnitCompleted {
            completed: 2,
            total: 5,
            label: "intro".to_string(),
        };
        assert_eq!(unit.fraction(), 2.0 / 5.0);

        assert_eq!(ProgressEvent::Finished.fraction(), 1.0);
        let failed = ProgressEvent::Failed {
            message: "upstream".to_string(),
        };
        assert!(failed.fraction() < 0.0);
    }

    #[test]
    fn zero_total_does_not_divide() {
        let unit = ProgressEvent::UnitCompleted {
            completed: 0,
            total: 0,
            label: String::new(),
        };
        assert_eq!(unit.fraction(), 0.0);
    }
}
