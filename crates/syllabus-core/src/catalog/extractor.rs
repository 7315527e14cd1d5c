//! Line-oriented record extraction.
//!
//! The scan is a fold of [`ScanState::step`] over the input lines. Each step
//! consumes the state and hands back the next one together with whatever the
//! line produced, so no state outlives the scan.

use tracing::{debug, trace};

use crate::models::course::CourseRecord;

use super::labels::{match_label, Field};

/// What a single line did to the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Whitespace only. Never changes state.
    Blank,
    /// Matched a label while a record was open, or opened one.
    Label(Field),
    /// Appended to the open record's content.
    Continuation,
    /// Dropped: textbook lines, stray headings, labels before the first code.
    Discarded,
}

/// Outcome of feeding one line to the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Record closed by this line, if it opened a new one.
    pub completed: Option<CourseRecord>,
    pub disposition: Disposition,
    /// Set when the label was already seen in the current block.
    pub repeated: Option<Field>,
}

impl Step {
    fn of(disposition: Disposition) -> Self {
        Self {
            completed: None,
            disposition,
            repeated: None,
        }
    }
}

/// Scan state threaded through the fold.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    current: Option<CourseRecord>,
    in_content: bool,
    seen: Vec<Field>,
}

impl ScanState {
    /// Fresh state with no open record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next plain line extends the content field.
    pub fn in_content(&self) -> bool {
        self.in_content
    }

    /// Feed one raw line.
    pub fn step(mut self, line: &str) -> (Self, Step) {
        let line = line.trim();

        if line.is_empty() {
            return (self, Step::of(Disposition::Blank));
        }

        let Some(label) = match_label(line) else {
            let step = match self.current.as_mut() {
                Some(record) if self.in_content => {
                    record.content.push(' ');
                    record.content.push_str(line);
                    Step::of(Disposition::Continuation)
                }
                _ => {
                    trace!("Discarding line: {}", line);
                    Step::of(Disposition::Discarded)
                }
            };
            return (self, step);
        };

        if label.field == Field::Code {
            let completed = self.current.replace(CourseRecord::with_code(label.value));
            if let Some(record) = &completed {
                debug!("Closed course block {}", record.code);
            }
            self.in_content = false;
            self.seen.clear();
            self.seen.push(Field::Code);

            let step = Step {
                completed,
                disposition: Disposition::Label(Field::Code),
                repeated: None,
            };
            return (self, step);
        }

        let Some(record) = self.current.as_mut() else {
            trace!("Discarding {} label before first course code", label.field);
            return (self, Step::of(Disposition::Discarded));
        };

        match label.field {
            Field::Title => record.title = label.value.to_string(),
            Field::CreditHour => record.credit_hour = label.value.to_string(),
            Field::Prerequisite => record.prerequisite = label.value.to_string(),
            Field::Content => record.content = label.value.to_string(),
            Field::Textbook | Field::Code => {}
        }
        self.in_content = label.field.opens_content();

        // Textbook values are never stored, so repeats overwrite nothing.
        let repeated = if label.field == Field::Textbook {
            None
        } else if self.seen.contains(&label.field) {
            debug!("Repeated {} label in block {}", label.field, record.code);
            Some(label.field)
        } else {
            self.seen.push(label.field);
            None
        };

        let step = Step {
            completed: None,
            disposition: Disposition::Label(label.field),
            repeated,
        };
        (self, step)
    }

    /// End of input: hand back the record still open, if any.
    pub fn finish(self) -> Option<CourseRecord> {
        self.current
    }
}

/// Per-disposition line counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub blank: usize,
    pub labels: usize,
    pub continuations: usize,
    pub discarded: usize,
}

/// Everything a completed scan produced.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Records in encounter order.
    pub records: Vec<CourseRecord>,
    pub stats: ScanStats,
    /// Labels repeated inside a block, keyed by record index.
    pub repeated: Vec<(usize, Field)>,
}

impl Scan {
    fn absorb(&mut self, step: Step) {
        self.stats.lines += 1;
        match step.disposition {
            Disposition::Blank => self.stats.blank += 1,
            Disposition::Label(_) => self.stats.labels += 1,
            Disposition::Continuation => self.stats.continuations += 1,
            Disposition::Discarded => self.stats.discarded += 1,
        }

        if let Some(record) = step.completed {
            self.records.push(record);
        }
        // The open block becomes the next record index once it closes.
        if let Some(field) = step.repeated {
            self.repeated.push((self.records.len(), field));
        }
    }
}

/// Run the full scan over ordered lines.
pub fn scan<'a, I>(lines: I) -> Scan
where
    I: IntoIterator<Item = &'a str>,
{
    let (state, mut scan) = lines
        .into_iter()
        .fold((ScanState::new(), Scan::default()), |(state, mut scan), line| {
            let (state, step) = state.step(line);
            scan.absorb(step);
            (state, scan)
        });

    if let Some(record) = state.finish() {
        debug!("Closed final course block {}", record.code);
        scan.records.push(record);
    }

    scan
}
