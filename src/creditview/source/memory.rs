use super::RecordSource;
use crate::error::Result;
use crate::model::Record;

/// Records held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Status;

    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::default(),
            }
        }

        /// `count` records named `Project N`, alternating active/retired,
        /// vintages counting up from 2010.
        pub fn with_records(mut self, count: usize) -> Self {
            let start = self.source.records.len();
            for i in start..start + count {
                let status = if i % 2 == 0 {
                    Status::Active
                } else {
                    Status::Retired
                };
                self.source.records.push(Record::new(
                    format!("UC-{:03}", i + 1),
                    format!("Project {}", i + 1),
                    2010 + (i % 15) as i32,
                    status,
                ));
            }
            self
        }

        pub fn with_record(mut self, id: &str, name: &str, year: i32, status: Status) -> Self {
            self.source.records.push(Record::new(id, name, year, status));
            self
        }

        pub fn records(&self) -> Vec<Record> {
            self.source.records.clone()
        }
    }
}
