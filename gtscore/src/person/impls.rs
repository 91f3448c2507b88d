use std::ops::{
    Deref,
    DerefMut,
};
use crate::person::*;

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.second_name)
    }

    /// Case-insensitive substring match on either name; `needle` must
    /// already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle)
            || self.second_name.to_lowercase().contains(needle)
    }
}

impl From<&Person> for PersonInput {
    fn from(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            second_name: person.second_name.clone(),
            phone_number: person.phone_number.clone().unwrap_or_default(),
        }
    }
}

impl From<Vec<Person>> for Persons {
    fn from(args: Vec<Person>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Person; N]> for Persons {
    fn from(args: [Person; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Persons {
    type Target = Vec<Person>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Persons {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Persons {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_null_phone() -> anyhow::Result<()> {
        let persons: Vec<Person> = serde_json::from_str(r#"[{
            "id": 1,
            "firstName": "Ada",
            "secondName": "Lovelace",
            "phoneNumber": null
        }, {
            "id": 2,
            "firstName": "Alan",
            "secondName": "Turing",
            "phoneNumber": "+44-555-0100"
        }]"#)?;
        let persons = Persons::from(persons);
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].phone_number, None);
        assert_eq!(persons[1].full_name(), "Alan Turing");
        assert_eq!(PersonInput::from(&persons[0]).phone_number, "");
        Ok(())
    }

    #[test]
    fn matches() {
        let person = Person {
            id: 3,
            first_name: "Grace".to_string(),
            second_name: "Hopper".to_string(),
            phone_number: None,
        };
        assert!(person.matches("grace"));
        assert!(person.matches("opp"));
        assert!(!person.matches("turing"));
    }
}
