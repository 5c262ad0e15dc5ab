//! External people source and its adapters.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use people_api::{PeopleApiClient, Person};

use crate::error::SourceError;

/// One listing entry as the directory page sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl PersonRecord {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `"first last"`, trimmed when one part is missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name.unwrap_or_default(),
            last_name: person.last_name.unwrap_or_default(),
        }
    }
}

/// Read-only listing of people records.
pub trait PeopleSource: Send + Sync {
    fn fetch_people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SourceError>> + Send;
}

impl PeopleSource for PeopleApiClient {
    fn fetch_people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SourceError>> + Send {
        async move {
            let people = self.list_people().await?;
            Ok(people.into_iter().map(PersonRecord::from).collect())
        }
    }
}

impl<S: PeopleSource> PeopleSource for Arc<S> {
    fn fetch_people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SourceError>> + Send {
        (**self).fetch_people()
    }
}

/// Fixed in-memory listing.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    people: Vec<PersonRecord>,
}

impl StaticSource {
    pub fn new(people: Vec<PersonRecord>) -> Self {
        Self { people }
    }
}

impl PeopleSource for StaticSource {
    fn fetch_people(&self) -> impl Future<Output = Result<Vec<PersonRecord>, SourceError>> + Send {
        let people = self.people.clone();
        async move { Ok(people) }
    }
}

/// Fetch from `source`, turning an overrun of `deadline` into
/// [`SourceError::Timeout`].
pub async fn fetch_with_deadline<S: PeopleSource>(
    source: &S,
    deadline: Duration,
) -> Result<Vec<PersonRecord>, SourceError> {
    match tokio::time::timeout(deadline, source.fetch_people()).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::time::Duration;

    use people_api::Person;

    use super::{fetch_with_deadline, PeopleSource, PersonRecord, StaticSource};
    use crate::error::SourceError;

    struct SlowSource;

    impl PeopleSource for SlowSource {
        fn fetch_people(
            &self,
        ) -> impl Future<Output = Result<Vec<PersonRecord>, SourceError>> + Send {
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(Vec::new())
            }
        }
    }

    #[test]
    fn display_name_trims_missing_parts() {
        assert_eq!(PersonRecord::new("1", "Harry", "Potter").display_name(), "Harry Potter");
        assert_eq!(PersonRecord::new("2", "", "Marcus").display_name(), "Marcus");
        assert_eq!(PersonRecord::new("3", "", "").display_name(), "");
    }

    #[test]
    fn api_person_maps_null_names_to_empty() {
        let person = Person {
            id: "x".to_string(),
            first_name: None,
            last_name: Some("Belby".to_string()),
            elixirs: Vec::new(),
        };
        assert_eq!(PersonRecord::from(person), PersonRecord::new("x", "", "Belby"));
    }

    #[tokio::test]
    async fn static_source_returns_its_records() {
        let source = StaticSource::new(vec![PersonRecord::new("1", "Luna", "Lovegood")]);
        let people = fetch_with_deadline(&source, Duration::from_secs(1))
            .await
            .expect("static fetch");
        assert_eq!(people.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_source_hits_the_deadline() {
        let error = fetch_with_deadline(&SlowSource, Duration::from_millis(50))
            .await
            .expect_err("deadline should expire");
        assert!(matches!(error, SourceError::Timeout(deadline) if deadline == Duration::from_millis(50)));
    }
}
