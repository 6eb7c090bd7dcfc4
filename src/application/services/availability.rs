//! Availability cascade over registration windows

use std::sync::Arc;

use chrono::NaiveDate;
use log::error;

use crate::domain::{EventCategory, EventRef, RepositoryProvider};

/// Derives the user-visible category → date → event cascade for a given
/// reference date.
///
/// Availability is evaluated against the registration window at query time;
/// an event drops out the day after its window ends and appears the day the
/// window starts, with no state transition anywhere. `today` is always
/// supplied by the caller so the cascade stays a pure function of the store
/// and the reference date.
pub struct AvailabilityResolver {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityResolver {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Categories with at least one event open on `today`.
    ///
    /// Canonical categories come first in their presentation order, values
    /// outside the canonical set follow in first-seen order.
    pub async fn available_categories(&self, today: NaiveDate) -> Vec<EventCategory> {
        let events = match self.repos.events().find_open(today).await {
            Ok(events) => events,
            Err(e) => {
                error!("Open event listing failed: {}", e);
                return Vec::new();
            }
        };

        let mut seen: Vec<EventCategory> = Vec::new();
        for event in events {
            if !seen.contains(&event.category) {
                seen.push(event.category);
            }
        }

        let mut ordered: Vec<EventCategory> = EventCategory::CANONICAL
            .iter()
            .filter(|c| seen.contains(c))
            .cloned()
            .collect();
        for category in seen {
            if !ordered.contains(&category) {
                ordered.push(category);
            }
        }
        ordered
    }

    /// Distinct event dates of open events in `category`, ascending.
    pub async fn available_dates(
        &self,
        category: &EventCategory,
        today: NaiveDate,
    ) -> Vec<NaiveDate> {
        match self.repos.events().find_open_dates(category, today).await {
            Ok(dates) => dates,
            Err(e) => {
                error!("Open date listing failed for category={}: {}", category, e);
                Vec::new()
            }
        }
    }

    /// Open events matching `category` and exact `date`, name ascending.
    pub async fn available_event_names(
        &self,
        category: &EventCategory,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Vec<EventRef> {
        match self
            .repos
            .events()
            .find_open_on_date(category, date, today)
            .await
        {
            Ok(refs) => refs,
            Err(e) => {
                error!(
                    "Open event listing failed for category={} date={}: {}",
                    category, date, e
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventRepository;
    use crate::domain::NewEvent;
    use crate::infrastructure::storage::failing::FailingRepositoryProvider;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(
        name: &str,
        category: EventCategory,
        event_date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            category,
            event_date,
            registration_start: start,
            registration_end: end,
            created_at: date(2024, 5, 1).and_hms_opt(9, 0, 0).unwrap(),
        }
    }

    async fn seed(store: &dyn EventRepository, events: Vec<NewEvent>) {
        for e in events {
            store.save(e).await.unwrap();
        }
    }

    fn hack_day() -> NewEvent {
        event(
            "Rust Hack Day",
            EventCategory::Hackathon,
            date(2024, 7, 10),
            date(2024, 6, 1),
            date(2024, 7, 5),
        )
    }

    #[tokio::test]
    async fn category_available_inside_window_bounds() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(store.events(), vec![hack_day()]).await;
        let resolver = AvailabilityResolver::new(store);

        // Inclusive on both ends
        for today in [date(2024, 6, 1), date(2024, 6, 15), date(2024, 7, 5)] {
            let categories = resolver.available_categories(today).await;
            assert_eq!(categories, vec![EventCategory::Hackathon], "today={today}");
        }

        // One day outside on either end
        for today in [date(2024, 5, 31), date(2024, 7, 6)] {
            assert!(
                resolver.available_categories(today).await.is_empty(),
                "today={today}"
            );
        }
    }

    #[tokio::test]
    async fn categories_come_in_presentation_order() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(
            store.events(),
            vec![
                event(
                    "Hack Night",
                    EventCategory::Hackathon,
                    date(2024, 7, 20),
                    date(2024, 6, 1),
                    date(2024, 7, 10),
                ),
                event(
                    "Intro to Rust",
                    EventCategory::OnlineWorkshop,
                    date(2024, 7, 10),
                    date(2024, 6, 1),
                    date(2024, 7, 5),
                ),
                event(
                    "Legacy Bootcamp",
                    EventCategory::Other("bootcamp".into()),
                    date(2024, 7, 15),
                    date(2024, 6, 1),
                    date(2024, 7, 10),
                ),
            ],
        )
        .await;
        let resolver = AvailabilityResolver::new(store);

        let categories = resolver.available_categories(date(2024, 6, 15)).await;
        assert_eq!(
            categories,
            vec![
                EventCategory::OnlineWorkshop,
                EventCategory::Hackathon,
                EventCategory::Other("bootcamp".into()),
            ]
        );
    }

    #[tokio::test]
    async fn dates_are_distinct_and_ascending() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(
            store.events(),
            vec![
                event(
                    "B",
                    EventCategory::Hackathon,
                    date(2024, 7, 20),
                    date(2024, 6, 1),
                    date(2024, 7, 15),
                ),
                event(
                    "A",
                    EventCategory::Hackathon,
                    date(2024, 7, 10),
                    date(2024, 6, 1),
                    date(2024, 7, 5),
                ),
                event(
                    "C",
                    EventCategory::Hackathon,
                    date(2024, 7, 10),
                    date(2024, 6, 1),
                    date(2024, 7, 8),
                ),
                // Different category, must not leak in
                event(
                    "D",
                    EventCategory::Conference,
                    date(2024, 7, 11),
                    date(2024, 6, 1),
                    date(2024, 7, 8),
                ),
            ],
        )
        .await;
        let resolver = AvailabilityResolver::new(store);

        let dates = resolver
            .available_dates(&EventCategory::Hackathon, date(2024, 6, 15))
            .await;
        assert_eq!(dates, vec![date(2024, 7, 10), date(2024, 7, 20)]);
    }

    #[tokio::test]
    async fn event_names_filter_on_category_date_and_window() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(
            store.events(),
            vec![
                hack_day(),
                // Same date, window already over
                event(
                    "Closed Hack",
                    EventCategory::Hackathon,
                    date(2024, 7, 10),
                    date(2024, 5, 1),
                    date(2024, 5, 31),
                ),
                // Same category, other date
                event(
                    "Other Day",
                    EventCategory::Hackathon,
                    date(2024, 7, 11),
                    date(2024, 6, 1),
                    date(2024, 7, 5),
                ),
                // Same date, other category
                event(
                    "Conf Day",
                    EventCategory::Conference,
                    date(2024, 7, 10),
                    date(2024, 6, 1),
                    date(2024, 7, 5),
                ),
            ],
        )
        .await;
        let resolver = AvailabilityResolver::new(store);

        let refs = resolver
            .available_event_names(&EventCategory::Hackathon, date(2024, 7, 10), date(2024, 6, 15))
            .await;
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rust Hack Day"]);
    }

    #[tokio::test]
    async fn event_disappears_day_after_window_ends() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(store.events(), vec![hack_day()]).await;
        let resolver = AvailabilityResolver::new(store);

        let on_last_day = resolver
            .available_event_names(&EventCategory::Hackathon, date(2024, 7, 10), date(2024, 7, 5))
            .await;
        assert_eq!(on_last_day.len(), 1);

        let day_after = resolver
            .available_event_names(&EventCategory::Hackathon, date(2024, 7, 10), date(2024, 7, 6))
            .await;
        assert!(day_after.is_empty());
    }

    #[tokio::test]
    async fn idempotent_with_no_intervening_writes() {
        let store = Arc::new(InMemoryRepositoryProvider::new());
        seed(store.events(), vec![hack_day()]).await;
        let resolver = AvailabilityResolver::new(store);

        let first = resolver.available_categories(date(2024, 6, 15)).await;
        let second = resolver.available_categories(date(2024, 6, 15)).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn storage_failure_degrades_to_empty() {
        let resolver = AvailabilityResolver::new(Arc::new(FailingRepositoryProvider));
        assert!(resolver.available_categories(date(2024, 6, 15)).await.is_empty());
        assert!(resolver
            .available_dates(&EventCategory::Hackathon, date(2024, 6, 15))
            .await
            .is_empty());
        assert!(resolver
            .available_event_names(&EventCategory::Hackathon, date(2024, 7, 10), date(2024, 6, 15))
            .await
            .is_empty());
    }
}
