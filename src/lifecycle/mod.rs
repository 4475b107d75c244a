//! View Lifecycles
//!
//! State machines behind the list and detail views. Each view state is
//! advanced only by a pure reducer; the async flows here turn API calls
//! into reducer events, and `FetchScope` ties those calls to view lifetime.

mod detail;
mod list;
mod scope;

pub use detail::{delete_flow, load_detail, Confirmation, DeleteOutcome, DetailEvent, DetailState};
pub use list::{load_list, CardModel, ListDisplay, ListEvent, ListState};
pub use scope::{spawn_in, FetchScope};

/// In-memory backend for driving the flows in tests
#[cfg(test)]
pub(crate) mod fixture {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use crate::api::{AmiiboApi, FetchError};
    use crate::models::Amiibo;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        ListAll,
        GetById(i64),
        DeleteById(i64),
    }

    #[derive(Default)]
    pub struct FixtureApi {
        pub records: Vec<Amiibo>,
        /// When set, every call fails with this message
        pub failure: Option<String>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FixtureApi {
        pub fn with_records(records: Vec<Amiibo>) -> Self {
            Self { records, ..Default::default() }
        }

        pub fn failing(message: &str) -> Self {
            Self { failure: Some(message.to_string()), ..Default::default() }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<(), FetchError> {
            self.calls.borrow_mut().push(call);
            match &self.failure {
                Some(message) => Err(FetchError::new(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AmiiboApi for FixtureApi {
        async fn list_all(&self) -> Result<Vec<Amiibo>, FetchError> {
            self.record(Call::ListAll)?;
            Ok(self.records.clone())
        }

        async fn get_by_id(&self, id: i64) -> Result<Amiibo, FetchError> {
            self.record(Call::GetById(id))?;
            self.records
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or_else(|| FetchError::new("Failed to fetch amiibo"))
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), FetchError> {
            self.record(Call::DeleteById(id))
        }
    }
}
