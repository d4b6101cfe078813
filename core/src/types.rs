//! Record type definitions.
//!
//! Two tables back every store: `zodiacs` holds category labels and
//! `people` holds one row per person with a foreign key into `zodiacs`.
//! The types here are the application-side view of those rows.

/// A person row joined with its zodiac label.
///
/// Returned by the read operations of a [`PeopleStore`](crate::PeopleStore).
/// The stored numeric identities are not carried; the zodiac is the
/// resolved `zodiac_title`.
///
/// # Examples
///
/// ```
/// use people_core::Person;
///
/// let person = Person::new("Ivanov", "Ivan", "Aries", "2000-01-01");
/// assert_eq!(person.zodiac, "Aries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub surname: String,
    pub name: String,
    /// Zodiac label (`zodiacs.zodiac_title`).
    pub zodiac: String,
    /// Birthday exactly as it was stored.
    pub birthday: String,
}

impl Person {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        zodiac: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            zodiac: zodiac.into(),
            birthday: birthday.into(),
        }
    }
}

/// Input of an `add` operation.
///
/// The zodiac is optional on the command line and passed through to
/// storage as-is. A missing zodiac becomes SQL `NULL`, which the
/// `NOT NULL` constraint on `zodiacs.zodiac_title` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub surname: String,
    pub name: String,
    pub zodiac: Option<String>,
    pub birthday: String,
}

impl NewPerson {
    /// Creates a new person with a zodiac label.
    ///
    /// # Examples
    ///
    /// ```
    /// use people_core::NewPerson;
    ///
    /// let person = NewPerson::new("Ivanov", "Ivan", "Aries", "2000-01-01");
    /// assert_eq!(person.zodiac.as_deref(), Some("Aries"));
    ///
    /// let unsigned = person.clone().without_zodiac();
    /// assert!(unsigned.zodiac.is_none());
    /// ```
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        zodiac: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            zodiac: Some(zodiac.into()),
            birthday: birthday.into(),
        }
    }

    /// Drops the zodiac label.
    pub fn without_zodiac(mut self) -> Self {
        self.zodiac = None;
        self
    }
}

/// Identities assigned while adding a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Identity of the new `people` row.
    pub person_id: i64,
    /// Identity of the zodiac row the person references.
    pub zodiac_id: i64,
    /// Whether the zodiac row was created by this operation.
    pub zodiac_created: bool,
}
