//! Sample resources for a fresh store.

use crate::resource::{ResourceCategory, UploadedResource, now_millis};

const THEOREMS_NOTE: &str = "## Fundamental Theorem of Arithmetic\n\n\
Every composite number can be expressed (factorised) as a product of primes, \
and this factorisation is unique, apart from the order in which the prime factors occur.\n\n\
## Euclid’s Division Lemma\n\n\
Given positive integers **a** and **b**, there exist unique integers **q** and **r** \
satisfying `a = bq + r`, where `0 <= r < b`.";

/// Resources a new or unreadable store starts with.
///
/// Both belong to Class 10 / math / real-numbers and carry the current time.
#[must_use]
pub fn seed_resources() -> Vec<UploadedResource> {
    let timestamp = now_millis();
    let sample = |id: &str, title: &str, category, content: &str| UploadedResource {
        id: id.to_owned(),
        class_level: "Class 10".to_owned(),
        subject_id: "math".to_owned(),
        topic_id: "real-numbers".to_owned(),
        title: title.to_owned(),
        category,
        content: content.to_owned(),
        timestamp,
    };

    vec![
        sample(
            "mock-1",
            "Important Theorems List",
            ResourceCategory::Notes,
            THEOREMS_NOTE,
        ),
        sample(
            "mock-2",
            "NCERT Official PDF",
            ResourceCategory::Link,
            "https://ncert.nic.in/textbook.php?jemh1=1-15",
        ),
    ]
}
